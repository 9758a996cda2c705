use helios_types::{Address, U256};

/// Block-level context for an execution. Modes without a containing
/// block run against the default value.
#[derive(Debug, Clone, Default)]
pub struct Env {
    pub number: u64,
    pub author: Address,
    pub timestamp: u64,
    pub gas_limit: U256,
}
