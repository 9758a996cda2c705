/// General chain parameters consulted during execution. Passed
/// explicitly into the `Machine` at construction; there is no
/// process-wide settings object.
#[derive(Debug, Clone)]
pub struct CommonParams {
    pub chain_id: u32,
    /// Gates whether prepared interpreters actually run. With the VM
    /// disabled a prepared run completes as an empty success.
    pub vm_enabled: bool,
}

impl Default for CommonParams {
    fn default() -> Self {
        CommonParams {
            chain_id: 1,
            vm_enabled: true,
        }
    }
}
