use super::{Fault, NativeOperation, OperationSink};
use crate::state::{DbResult, State};
use helios_types::Address;
use primitives::{AccountKind, CreateAccountRequest};

/// Registers a fresh basic account.
pub struct AccountCreateOperation {
    owner_address: Address,
    account_address: Address,
}

impl AccountCreateOperation {
    pub fn from_request(
        request: &CreateAccountRequest,
    ) -> AccountCreateOperation {
        AccountCreateOperation {
            owner_address: request.owner_address,
            account_address: request.account_address,
        }
    }
}

impl NativeOperation for AccountCreateOperation {
    fn validate(&self, state: &State) -> DbResult<Result<(), Fault>> {
        if !state.exists(&self.owner_address)? {
            return Ok(Err(Fault::Validation(format!(
                "owner account {:?} does not exist",
                self.owner_address
            ))));
        }
        if state.exists(&self.account_address)? {
            return Ok(Err(Fault::Validation(format!(
                "account {:?} already exists",
                self.account_address
            ))));
        }
        Ok(Ok(()))
    }

    fn apply(
        &self, state: &mut State, sink: &mut OperationSink,
    ) -> DbResult<Result<(), Fault>> {
        state.create_account(self.account_address, AccountKind::Basic)?;
        sink.record(format!(
            "created account {:?}",
            self.account_address
        ));
        Ok(Ok(()))
    }
}
