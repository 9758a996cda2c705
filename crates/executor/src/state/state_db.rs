use super::DbResult;
use helios_types::{Address, Bytes};
use parking_lot::RwLock;
use primitives::{Account, ContractMeta};
use std::collections::HashMap;

/// The durable store beneath overlays. Many overlays may read from one
/// `StateDb`; only `State::commit` writes to it.
#[derive(Default)]
pub struct StateDb {
    accounts: RwLock<HashMap<Address, Account>>,
    codes: RwLock<HashMap<Address, Bytes>>,
    contracts: RwLock<HashMap<Address, ContractMeta>>,
}

impl StateDb {
    pub fn new() -> StateDb {
        Default::default()
    }

    pub fn account(&self, address: &Address) -> DbResult<Option<Account>> {
        Ok(self.accounts.read().get(address).cloned())
    }

    pub fn code(&self, address: &Address) -> DbResult<Option<Bytes>> {
        Ok(self.codes.read().get(address).cloned())
    }

    pub fn contract(
        &self, address: &Address,
    ) -> DbResult<Option<ContractMeta>> {
        Ok(self.contracts.read().get(address).cloned())
    }

    pub(super) fn write_account(&self, account: Account) -> DbResult<()> {
        self.accounts.write().insert(account.address, account);
        Ok(())
    }

    pub(super) fn write_code(
        &self, address: Address, code: Bytes,
    ) -> DbResult<()> {
        self.codes.write().insert(address, code);
        Ok(())
    }

    pub(super) fn write_contract(
        &self, address: Address, meta: ContractMeta,
    ) -> DbResult<()> {
        self.contracts.write().insert(address, meta);
        Ok(())
    }
}
