// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

//! Helios Executor: the core logic of executing transactions on the
//! Helios ledger. A transaction is classified by its first request,
//! routed to the native operation path or to the bytecode interpreter,
//! run against a discardable state overlay, and committed or discarded
//! according to the execution mode and the run's outcome.

#[macro_use]
extern crate log;

/// Contract Address Allocation: derives deterministic addresses for new
/// contracts, with a random fallback under collision.
pub mod allocator;

/// Transaction Execution Entry: manages the execution of transactions.
/// It classifies a transaction, drives the native path or the
/// interpreter, and applies the commit-or-discard decision.
pub mod executive;

/// Execution Engine Object: serves as a factory for chain parameters and
/// interpreter instances.
pub mod machine;

/// Native Operations: the catalog of built-in, non-bytecode state
/// transitions recognized directly by the ledger.
pub mod native;

/// Chain Parameter Control: general parameters consulted during
/// execution.
pub mod spec;

/// Ledger State: a caching overlay over the durable store, mutated
/// speculatively during execution and made visible only by `commit`.
pub mod state;
