// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Ledger State: a caching overlay built upon the durable store.
//! Mutations stay in the overlay until `commit`; dropping the overlay
//! discards them.

mod error;
mod state_db;
mod state_object;

pub use error::{Error, Result as DbResult};
pub use state_db::StateDb;
pub use state_object::State;
