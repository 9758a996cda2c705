use helios_types::{Address, Bytes, U256};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Running the deployment bytecode of a new contract.
    Create,
    /// Calling the stored code of an existing contract.
    Call,
}

/// Invocation parameters handed to the interpreter: who calls what, with
/// which code and input. Built once per execution and owned by a single
/// orchestrator instance.
#[derive(Clone, Debug)]
pub struct ActionParams {
    pub sender: Address,
    /// Target of the action: the callee, or the address the new contract
    /// is being deployed at.
    pub address: Address,
    pub value: U256,
    pub code: Arc<Bytes>,
    /// Input data. `None` on the create path, where the code itself
    /// embeds its parameters.
    pub data: Option<Bytes>,
    pub kind: ActionKind,
}
