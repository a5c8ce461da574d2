//! Pass nodes and the type-erased pass executor.

use crate::driver::Driver;
use crate::handle::ResourceHandle;

use super::resources::PassResources;

/// Type eraser for invoking a pass's execute callback.
pub(crate) trait PassExecutor {
    fn execute(&mut self, resources: &PassResources<'_>, driver: &mut dyn Driver);
}

/// Concrete executor: the pass data bundle plus the user callback.
pub(crate) struct PassEntry<Data, Execute> {
    pub data: Data,
    pub execute: Execute,
}

impl<Data, Execute> PassExecutor for PassEntry<Data, Execute>
where
    Execute: FnMut(&PassResources<'_>, &Data, &mut dyn Driver),
{
    fn execute(&mut self, resources: &PassResources<'_>, driver: &mut dyn Driver) {
        (self.execute)(resources, &self.data, driver);
    }
}

/// A registered pass.
pub(crate) struct PassNode {
    /// Pass name, for diagnostics.
    pub name: String,
    /// Sequential id; also the execution order.
    pub id: u32,
    /// The executor, installed after setup and taken out when the pass runs.
    pub executor: Option<Box<dyn PassExecutor>>,
    /// Handles this pass reads, at the version they were read.
    pub reads: Vec<ResourceHandle>,
    /// Handles this pass writes, at the version after the bump.
    pub writes: Vec<ResourceHandle>,
    /// Registry indices of resources to realize before executing.
    pub devirtualize: Vec<u16>,
    /// Registry indices of resources to release after executing.
    pub destroy: Vec<u16>,
    /// Count of resources keeping this pass alive; zero means culled.
    pub ref_count: u32,
    /// Pins the pass against culling even though it writes nothing.
    /// Set for present passes, whose effect is outside the graph.
    pub has_side_effect: bool,
}

impl PassNode {
    pub fn new(name: &str, id: u32) -> Self {
        Self {
            name: name.to_string(),
            id,
            executor: None,
            reads: Vec::new(),
            writes: Vec::new(),
            devirtualize: Vec::new(),
            destroy: Vec::new(),
            ref_count: 0,
            has_side_effect: false,
        }
    }
}

impl std::fmt::Debug for PassNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassNode")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("reads", &self.reads)
            .field("writes", &self.writes)
            .field("ref_count", &self.ref_count)
            .finish_non_exhaustive()
    }
}
