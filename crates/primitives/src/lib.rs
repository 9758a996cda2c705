// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Basic ledger records shared across the workspace: transactions and
//! their typed requests, accounts, contract records, logs and receipts.

pub mod account;
pub mod log_entry;
pub mod receipt;
pub mod transaction;

pub use account::{Account, AccountKind, ContractMeta};
pub use log_entry::LogEntry;
pub use receipt::{Receipt, TransactionStatus};
pub use transaction::{
    CallContractRequest, CreateAccountRequest, CreateContractRequest,
    Request, Transaction, TransferRequest,
};
