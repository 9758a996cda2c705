use super::{Fault, NativeOperation, OperationSink};
use crate::state::{DbResult, State};
use helios_types::{Address, U256};
use primitives::TransferRequest;

/// Moves value between accounts.
pub struct TransferOperation {
    owner_address: Address,
    to_address: Address,
    amount: U256,
}

impl TransferOperation {
    pub fn from_request(request: &TransferRequest) -> TransferOperation {
        TransferOperation {
            owner_address: request.owner_address,
            to_address: request.to_address,
            amount: request.amount,
        }
    }
}

impl NativeOperation for TransferOperation {
    fn validate(&self, state: &State) -> DbResult<Result<(), Fault>> {
        if self.amount.is_zero() {
            return Ok(Err(Fault::Validation(
                "transfer amount must be positive".into(),
            )));
        }
        if self.owner_address == self.to_address {
            return Ok(Err(Fault::Validation(
                "cannot transfer to self".into(),
            )));
        }
        if !state.exists(&self.owner_address)? {
            return Ok(Err(Fault::Validation(format!(
                "sender account {:?} does not exist",
                self.owner_address
            ))));
        }
        let balance = state.balance(&self.owner_address)?;
        if balance < self.amount {
            return Ok(Err(Fault::Validation(format!(
                "insufficient balance: has {}, needs {}",
                balance, self.amount
            ))));
        }
        Ok(Ok(()))
    }

    fn apply(
        &self, state: &mut State, sink: &mut OperationSink,
    ) -> DbResult<Result<(), Fault>> {
        if state.balance(&self.owner_address)? < self.amount {
            return Ok(Err(Fault::Application(
                "sender balance changed under transfer".into(),
            )));
        }
        state.sub_balance(&self.owner_address, &self.amount)?;
        state.add_balance(&self.to_address, &self.amount)?;
        sink.record(format!(
            "transferred {} from {:?} to {:?}",
            self.amount, self.owner_address, self.to_address
        ));
        Ok(Ok(()))
    }
}
