use super::{DbResult, StateDb};
use helios_types::{Address, Bytes, U256};
use parking_lot::RwLock;
use primitives::{Account, AccountKind, ContractMeta};
use std::{collections::HashMap, sync::Arc};

#[derive(Clone, Debug)]
struct AccountEntry {
    account: Option<Account>,
    dirty: bool,
}

impl AccountEntry {
    fn cached(account: Option<Account>) -> AccountEntry {
        AccountEntry {
            account,
            dirty: false,
        }
    }

    fn dirty(account: Account) -> AccountEntry {
        AccountEntry {
            account: Some(account),
            dirty: true,
        }
    }
}

/// A copy-on-write overlay over the durable store. Reads fall through to
/// the store and fill the cache; writes stay in the cache until `commit`
/// drains them. One overlay belongs to one execution sequence at a time.
pub struct State {
    db: Arc<StateDb>,

    /// Read-through account cache; dirty entries drain at `commit`.
    cache: RwLock<HashMap<Address, AccountEntry>>,

    /// Code stored during execution, keyed by contract address.
    dirty_codes: HashMap<Address, Bytes>,

    /// Contract records registered during execution.
    dirty_contracts: HashMap<Address, ContractMeta>,
}

impl State {
    pub fn new(db: Arc<StateDb>) -> State {
        State {
            db,
            cache: Default::default(),
            dirty_codes: Default::default(),
            dirty_contracts: Default::default(),
        }
    }

    pub fn account(&self, address: &Address) -> DbResult<Option<Account>> {
        if let Some(entry) = self.cache.read().get(address) {
            return Ok(entry.account.clone());
        }
        let account = self.db.account(address)?;
        self.cache
            .write()
            .insert(*address, AccountEntry::cached(account.clone()));
        Ok(account)
    }

    pub fn exists(&self, address: &Address) -> DbResult<bool> {
        Ok(self.account(address)?.is_some())
    }

    pub fn balance(&self, address: &Address) -> DbResult<U256> {
        Ok(self
            .account(address)?
            .map_or_else(U256::zero, |account| account.balance))
    }

    pub fn code(&self, address: &Address) -> DbResult<Option<Bytes>> {
        if let Some(code) = self.dirty_codes.get(address) {
            return Ok(Some(code.clone()));
        }
        self.db.code(address)
    }

    pub fn contract(
        &self, address: &Address,
    ) -> DbResult<Option<ContractMeta>> {
        if let Some(meta) = self.dirty_contracts.get(address) {
            return Ok(Some(meta.clone()));
        }
        self.db.contract(address)
    }

    /// Registers a fresh account in the overlay, replacing whatever the
    /// cache held for the address.
    pub fn create_account(
        &mut self, address: Address, kind: AccountKind,
    ) -> DbResult<()> {
        let account = match kind {
            AccountKind::Basic => Account::new_basic(address, U256::zero()),
            AccountKind::Contract => Account::new_contract(address),
        };
        self.cache
            .get_mut()
            .insert(address, AccountEntry::dirty(account));
        Ok(())
    }

    pub fn create_contract(
        &mut self, address: Address, meta: ContractMeta,
    ) -> DbResult<()> {
        self.dirty_contracts.insert(address, meta);
        Ok(())
    }

    pub fn save_code(
        &mut self, address: Address, code: Bytes,
    ) -> DbResult<()> {
        self.dirty_codes.insert(address, code);
        Ok(())
    }

    pub fn add_balance(
        &mut self, address: &Address, by: &U256,
    ) -> DbResult<()> {
        let mut account = self
            .account(address)?
            .unwrap_or_else(|| Account::new_basic(*address, U256::zero()));
        account.balance = account.balance.saturating_add(*by);
        self.cache
            .get_mut()
            .insert(*address, AccountEntry::dirty(account));
        Ok(())
    }

    /// Balance sufficiency is the caller's precondition; validation on
    /// the native path checks it before any mutation.
    pub fn sub_balance(
        &mut self, address: &Address, by: &U256,
    ) -> DbResult<()> {
        let mut account = self
            .account(address)?
            .unwrap_or_else(|| Account::new_basic(*address, U256::zero()));
        account.balance = account.balance.saturating_sub(*by);
        self.cache
            .get_mut()
            .insert(*address, AccountEntry::dirty(account));
        Ok(())
    }

    /// Makes every pending mutation visible in the durable store. The
    /// only operation with effects outside this overlay.
    pub fn commit(&mut self) -> DbResult<()> {
        let mut to_commit = Vec::new();
        for entry in self.cache.get_mut().values_mut() {
            if entry.dirty {
                if let Some(account) = &entry.account {
                    to_commit.push(account.clone());
                }
                entry.dirty = false;
            }
        }
        to_commit.sort_by_key(|account| account.address);

        debug!(
            "state commit: {} accounts, {} codes, {} contracts",
            to_commit.len(),
            self.dirty_codes.len(),
            self.dirty_contracts.len()
        );

        for account in to_commit {
            self.db.write_account(account)?;
        }
        for (address, code) in std::mem::take(&mut self.dirty_codes) {
            self.db.write_code(address, code)?;
        }
        for (address, meta) in std::mem::take(&mut self.dirty_contracts) {
            self.db.write_contract(address, meta)?;
        }
        Ok(())
    }
}
