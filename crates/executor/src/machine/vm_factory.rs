use super::Exec;
use helios_vm_types::ActionParams;
use std::sync::Arc;

type Builder = dyn Fn(ActionParams) -> Box<dyn Exec> + Send + Sync;

/// Produces interpreter instances for prepared invocations. The
/// interpreter engine itself is external; it enters the executor through
/// the builder installed here.
#[derive(Clone)]
pub struct VmFactory {
    builder: Arc<Builder>,
}

impl VmFactory {
    pub fn new<F>(builder: F) -> VmFactory
    where F: Fn(ActionParams) -> Box<dyn Exec> + Send + Sync + 'static {
        VmFactory {
            builder: Arc::new(builder),
        }
    }

    pub fn create(&self, params: ActionParams) -> Box<dyn Exec> {
        (self.builder)(params)
    }
}
