// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Native operations: built-in, non-bytecode state transitions. Each
//! handler validates its preconditions against the overlay and then
//! applies its effect; a fault from either phase halts the remaining
//! handlers of the transaction.

mod account_create;
mod transfer;

pub use account_create::AccountCreateOperation;
pub use transfer::TransferOperation;

use crate::state::{DbResult, State};
use primitives::{Request, Transaction};
use std::fmt;

/// Fault raised by a native operation handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// Preconditions not met; nothing was applied.
    Validation(String),
    /// The handler failed while mutating the overlay.
    Application(String),
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Fault::Validation(message) => {
                write!(f, "validation failed: {}", message)
            }
            Fault::Application(message) => {
                write!(f, "apply failed: {}", message)
            }
        }
    }
}

/// Notes accumulated by handlers for the transaction record.
#[derive(Debug, Default)]
pub struct OperationSink {
    notes: Vec<String>,
}

impl OperationSink {
    pub fn record(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    pub fn into_notes(self) -> Vec<String> {
        self.notes
    }
}

pub trait NativeOperation {
    fn validate(&self, state: &State) -> DbResult<Result<(), Fault>>;

    fn apply(
        &self, state: &mut State, sink: &mut OperationSink,
    ) -> DbResult<Result<(), Fault>>;
}

/// Builds the ordered handler catalog for a transaction. Contract
/// requests have no native handler and are skipped.
pub fn catalog_for(tx: &Transaction) -> Vec<Box<dyn NativeOperation>> {
    tx.requests
        .iter()
        .filter_map(|request| match request {
            Request::Transfer(r) => Some(Box::new(
                TransferOperation::from_request(r),
            )
                as Box<dyn NativeOperation>),
            Request::CreateAccount(r) => Some(Box::new(
                AccountCreateOperation::from_request(r),
            )
                as Box<dyn NativeOperation>),
            Request::CreateContract(_) | Request::CallContract(_) => None,
        })
        .collect()
}
