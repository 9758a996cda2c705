use helios_types::Address;
use helios_vm_types::ExecutionResult;
use primitives::{LogEntry, Receipt, Transaction, TransactionStatus};

/// Final, post-decision view of one transaction execution. Effect
/// accessors reflect the commit decision: they are empty on every
/// discard path and populated only for a kept success.
#[derive(Debug)]
pub struct ExecutionOutcome {
    result: Option<ExecutionResult>,
    runtime_error: Option<String>,
    operation_notes: Vec<String>,
}

impl ExecutionOutcome {
    pub(super) fn new(
        result: Option<ExecutionResult>, runtime_error: Option<String>,
        operation_notes: Vec<String>,
    ) -> ExecutionOutcome {
        ExecutionOutcome {
            result,
            runtime_error,
            operation_notes,
        }
    }

    /// The interpreter's result, or `None` when no interpreter ran.
    pub fn result(&self) -> Option<&ExecutionResult> {
        self.result.as_ref()
    }

    pub fn runtime_error(&self) -> Option<&str> {
        self.runtime_error.as_deref()
    }

    pub fn successful(&self) -> bool {
        self.runtime_error.is_none()
    }

    pub fn delete_accounts(&self) -> &[Address] {
        self.result
            .as_ref()
            .map_or(&[], |result| &result.delete_accounts)
    }

    pub fn logs(&self) -> &[LogEntry] {
        self.result.as_ref().map_or(&[], |result| &result.logs)
    }

    pub fn refund(&self) -> u64 {
        self.result.as_ref().map_or(0, |result| result.future_refund)
    }

    /// Notes recorded by native operation handlers.
    pub fn operation_notes(&self) -> &[String] {
        &self.operation_notes
    }

    pub fn status(&self) -> TransactionStatus {
        if self.successful() {
            TransactionStatus::Success
        } else {
            TransactionStatus::Failure
        }
    }

    pub fn error_message(&self) -> String {
        self.runtime_error.clone().unwrap_or_default()
    }

    pub fn make_receipt(self) -> Receipt {
        let status = self.status();
        let logs = self
            .result
            .map(|result| result.logs)
            .unwrap_or_default();
        Receipt::new(status, logs, self.runtime_error)
    }

    pub(super) fn log(&self, tx: &Transaction) {
        match (&self.result, &self.runtime_error) {
            (_, Some(error)) => {
                debug!(
                    "tx execution error: err={}, tx={:?}",
                    error,
                    tx.hash()
                );
            }
            (Some(result), None) => {
                trace!(
                    "tx executed successfully: result={:?}, tx={:?}",
                    result,
                    tx.hash()
                );
            }
            (None, None) => {
                trace!("native operations executed: tx={:?}", tx.hash());
            }
        }
    }
}
