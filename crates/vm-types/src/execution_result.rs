use crate::Error;
use helios_types::{Address, Bytes};
use primitives::LogEntry;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExecutionStatus {
    #[default]
    Success,
    /// Voluntary abort requested by the executed code.
    Reverted,
    /// Internal interpreter fault.
    Failed(Error),
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionStatus::Success)
    }
}

/// Outcome of one interpreter run. The effect lists are meaningful only
/// for a successful run; `discard_effects` clears them before a
/// `Reverted`/`Failed` result is surfaced, whatever the interpreter
/// accumulated internally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub return_data: Bytes,
    /// Accounts scheduled for deletion by the executed code.
    pub delete_accounts: Vec<Address>,
    pub logs: Vec<LogEntry>,
    /// Gas refund accumulated during the run.
    pub future_refund: u64,
}

impl ExecutionResult {
    pub fn successful() -> ExecutionResult {
        ExecutionResult::default()
    }

    pub fn reverted() -> ExecutionResult {
        ExecutionResult {
            status: ExecutionStatus::Reverted,
            ..Default::default()
        }
    }

    pub fn failed(error: Error) -> ExecutionResult {
        ExecutionResult {
            status: ExecutionStatus::Failed(error),
            ..Default::default()
        }
    }

    pub fn discard_effects(&mut self) {
        self.delete_accounts.clear();
        self.logs.clear();
        self.future_refund = 0;
    }
}
