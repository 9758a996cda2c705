// Copyright 2024 Helios Foundation. All rights reserved.
// Helios is free software and distributed under GNU General Public License.
// See http://www.gnu.org/licenses/

mod vm_factory;

use crate::{spec::CommonParams, state::State};
use helios_vm_types::{Env, ExecutionResult};

pub use vm_factory::VmFactory;

/// One prepared interpreter instance, bound to a single invocation. The
/// interpreter may mutate ledger state only through the overlay it is
/// handed here.
pub trait Exec {
    fn run_to_completion(
        &mut self, state: &mut State, env: &Env,
    ) -> ExecutionResult;
}

/// Factory object for everything an execution needs from the chain:
/// parameters and interpreter instances.
pub struct Machine {
    params: CommonParams,
    vm_factory: VmFactory,
}

impl Machine {
    pub fn new(params: CommonParams, vm_factory: VmFactory) -> Machine {
        Machine { params, vm_factory }
    }

    /// Get the general parameters of the chain.
    pub fn params(&self) -> &CommonParams {
        &self.params
    }

    pub fn vm_factory(&self) -> &VmFactory {
        &self.vm_factory
    }
}
