// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Interface types between the execution orchestrator and the bytecode
//! interpreter: invocation parameters, the structured run result and the
//! interpreter fault taxonomy.

mod action_params;
mod env;
mod error;
mod execution_result;
mod program;

pub use action_params::{ActionKind, ActionParams};
pub use env::Env;
pub use error::Error;
pub use execution_result::{ExecutionResult, ExecutionStatus};
pub use program::deployed_code;
