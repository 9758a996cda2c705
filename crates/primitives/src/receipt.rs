// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

use crate::log_entry::LogEntry;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Executed and, where the mode allows, committed.
    Success,
    /// Executed but reverted or faulted; state changes were discarded.
    Failure,
    /// Not executed at all.
    Skipped,
}

/// Per-transaction record produced after the commit decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub status: TransactionStatus,
    pub logs: Vec<LogEntry>,
    pub error_message: Option<String>,
}

impl Receipt {
    pub fn new(
        status: TransactionStatus, logs: Vec<LogEntry>,
        error_message: Option<String>,
    ) -> Receipt {
        Receipt {
            status,
            logs,
            error_message,
        }
    }
}
