//! Frame graph registration, compilation, and execution.
//!
//! A frame is three sequential phases over one [`FrameGraph`] value:
//!
//! 1. **Registration** — [`FrameGraph::add_pass`] records passes; each
//!    pass's setup callback declares its reads and writes through a
//!    [`Builder`]. Writes rename handles so later passes cannot write the
//!    same resource through an old handle.
//! 2. **Compile** — [`FrameGraph::compile`] materializes one backing record
//!    per resource, applies aliases, counts references, culls passes whose
//!    outputs nothing consumes, and computes for every surviving resource
//!    the first and last pass that needs it.
//! 3. **Execute** — [`FrameGraph::execute`] walks passes in registration
//!    order, realizes resources entering their lifetime window through the
//!    [`Driver`], invokes each live pass's executor with a
//!    [`PassResources`] view, and releases resources leaving their window.
//!    Afterwards the graph is reset and ready for the next frame.

mod builder;
mod graphviz;
mod pass;
mod resource;
mod resources;

pub use builder::Builder;
pub use resources::PassResources;

use crate::driver::Driver;
use crate::error::GraphError;
use crate::handle::ResourceHandle;
use crate::types::{AttachmentFlags, TextureDescriptor};

use pass::{PassEntry, PassNode};
use resource::{Alias, ResourceEntry, ResourceNode};

/// A per-frame DAG of rendering work with virtualized resources.
#[derive(Default)]
pub struct FrameGraph {
    passes: Vec<PassNode>,
    resource_nodes: Vec<ResourceNode>,
    registry: Vec<ResourceEntry>,
    aliases: Vec<Alias>,
}

impl FrameGraph {
    /// Create an empty frame graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pass.
    ///
    /// `setup` runs immediately with a [`Builder`] scoped to the new pass
    /// and a fresh `Data` to fill with handles; `execute` runs during
    /// [`execute`](FrameGraph::execute) if the pass survives culling.
    /// Returns a clone of the populated `Data` so the caller can feed the
    /// pass's outputs into later passes.
    pub fn add_pass<Data, Setup, Execute>(
        &mut self,
        name: &str,
        setup: Setup,
        execute: Execute,
    ) -> Data
    where
        Data: Default + Clone + 'static,
        Setup: FnOnce(&mut Builder<'_>, &mut Data),
        Execute: FnMut(&PassResources<'_>, &Data, &mut dyn Driver) + 'static,
    {
        let id = self.passes.len() as u32;
        self.passes.push(PassNode::new(name, id));

        let mut data = Data::default();
        {
            let mut builder = Builder::new(self, id as usize);
            setup(&mut builder, &mut data);
        }

        let result = data.clone();
        self.passes[id as usize].executor = Some(Box::new(PassEntry { data, execute }));
        result
    }

    /// Pin a terminal resource by registering a pass that reads it and does
    /// nothing else.
    ///
    /// Without this, a resource no pass reads gets its producer culled.
    pub fn present(&mut self, input: ResourceHandle) {
        self.add_pass::<(), _, _>(
            "Present",
            |builder, _| {
                builder.read(input, AttachmentFlags::COLOR);
            },
            |_, _, _| {},
        );
        // Presenting is an effect the graph cannot see; without the pin the
        // pass would count zero writes and be skipped along with the destroy
        // list of everything it is the last user of.
        self.passes
            .last_mut()
            .expect("pass registered above")
            .has_side_effect = true;
    }

    /// Record an alias rerouting `to`'s backing record through `from`'s.
    ///
    /// No validation is performed; aliases are applied in registration order
    /// during compile, later entries winning. Must be called before
    /// [`compile`](FrameGraph::compile).
    pub fn move_resource(&mut self, from: ResourceHandle, to: ResourceHandle) {
        self.aliases.push(Alias { from, to });
    }

    /// Check whether `handle` refers to the current version of its resource.
    pub fn is_valid(&self, handle: ResourceHandle) -> bool {
        if !handle.is_initialized() {
            return false;
        }
        let index = handle.index() as usize;
        assert!(
            index < self.resource_nodes.len(),
            "resource handle index out of range"
        );
        handle.version() == self.resource_nodes[index].version
    }

    /// Descriptor of the texture `handle` refers to.
    ///
    /// Returns `None` (and logs) if the handle is stale or uninitialized.
    pub fn texture_desc(&self, handle: ResourceHandle) -> Option<&TextureDescriptor> {
        self.node_index(handle)
            .map(|index| &self.resource_nodes[index].desc)
    }

    /// Number of registered passes, including culled ones.
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }

    /// Number of declared logical resources.
    pub fn resource_count(&self) -> usize {
        self.resource_nodes.len()
    }

    /// Compile the registered graph.
    ///
    /// Materializes backing records, applies aliases, counts references,
    /// culls dead passes, and computes each surviving resource's
    /// realize/release bracket. Must run after all passes are registered and
    /// before [`execute`](FrameGraph::execute).
    pub fn compile(&mut self) -> Result<(), GraphError> {
        // Materialize one backing record per resource node.
        self.registry.clear();
        self.registry.reserve(self.resource_nodes.len());
        for node in &mut self.resource_nodes {
            node.entry = Some(self.registry.len());
            self.registry.push(ResourceEntry::new(node));
        }

        // Apply aliases; later entries win.
        for alias in &self.aliases {
            let from = self.resource_nodes[alias.from.index() as usize].entry;
            self.resource_nodes[alias.to.index() as usize].entry = from;
        }

        // Reference counts and first/last users, in registration order.
        for pass_index in 0..self.passes.len() {
            let pass_id = pass_index as u32;
            let pass = &mut self.passes[pass_index];
            pass.ref_count = pass.writes.len() as u32 + u32::from(pass.has_side_effect);
            pass.devirtualize.clear();
            pass.destroy.clear();

            for read_index in 0..self.passes[pass_index].reads.len() {
                let handle = self.passes[pass_index].reads[read_index];
                let entry_index = self.resource_nodes[handle.index() as usize]
                    .entry
                    .expect("backing record assigned above");
                let entry = &mut self.registry[entry_index];
                entry.reader_count += 1;
                entry.first = entry.first.or(Some(pass_id));
                entry.last = Some(pass_id);
            }

            for write_index in 0..self.passes[pass_index].writes.len() {
                let handle = self.passes[pass_index].writes[write_index];
                let entry_index = self.resource_nodes[handle.index() as usize]
                    .entry
                    .expect("backing record assigned above");
                let entry = &mut self.registry[entry_index];
                entry.writer = Some(pass_id);
                entry.writer_count += 1;
                entry.first = entry.first.or(Some(pass_id));
                entry.last = Some(pass_id);
            }
        }

        // Cull: start from resources nothing reads and walk back through
        // their writers.
        let mut stack: Vec<usize> = Vec::with_capacity(self.registry.len());
        for (index, entry) in self.registry.iter().enumerate() {
            if entry.reader_count == 0 {
                stack.push(index);
            }
        }

        while let Some(entry_index) = stack.pop() {
            let entry = &self.registry[entry_index];

            // Handle renaming means unrelated passes cannot write the same
            // record, and a read-modify-write chain keeps the reader count
            // above zero.
            if entry.writer_count > 1 {
                return Err(GraphError::ConflictingWriters {
                    resource: entry.name.clone(),
                    writers: entry.writer_count,
                });
            }

            let Some(writer) = entry.writer else {
                log::debug!("resource \"{}\" is never written", entry.name);
                continue;
            };

            let writer = writer as usize;
            debug_assert!(self.passes[writer].ref_count >= 1);
            self.passes[writer].ref_count -= 1;
            if self.passes[writer].ref_count == 0 {
                // The pass is culled; its reads no longer count.
                for read_index in 0..self.passes[writer].reads.len() {
                    let handle = self.passes[writer].reads[read_index];
                    let entry_index = self.resource_nodes[handle.index() as usize]
                        .entry
                        .expect("backing record assigned above");
                    let entry = &mut self.registry[entry_index];
                    entry.reader_count -= 1;
                    if entry.reader_count == 0 {
                        stack.push(entry_index);
                    }
                }
            }
        }

        // Attach lifetimes: the first user realizes, the last releases.
        for entry_index in 0..self.registry.len() {
            let entry = &self.registry[entry_index];
            debug_assert_eq!(entry.first.is_some(), entry.last.is_some());
            if entry.reader_count == 0 {
                continue;
            }
            if entry.writer.is_none() {
                // An unwritten resource has nothing worth realizing.
                log::debug!("resource \"{}\" is never written", entry.name);
                continue;
            }
            if let (Some(first), Some(last)) = (entry.first, entry.last) {
                self.passes[first as usize].devirtualize.push(entry_index as u16);
                self.passes[last as usize].destroy.push(entry_index as u16);
            }
        }

        Ok(())
    }

    /// Execute the compiled graph against `driver`, then reset.
    ///
    /// Passes run strictly in registration order; culled passes are
    /// skipped. For each live pass, resources entering their window are
    /// realized, the executor runs, and resources leaving their window are
    /// released. All per-frame state is cleared afterwards.
    pub fn execute(&mut self, driver: &mut dyn Driver) {
        for pass_index in 0..self.passes.len() {
            if self.passes[pass_index].ref_count == 0 {
                continue;
            }
            let Some(mut executor) = self.passes[pass_index].executor.take() else {
                continue;
            };

            for list_index in 0..self.passes[pass_index].devirtualize.len() {
                let entry_index = self.passes[pass_index].devirtualize[list_index] as usize;
                self.registry[entry_index].create(driver);
            }

            {
                let resources = PassResources::new(
                    &self.resource_nodes,
                    &self.registry,
                    &self.passes[pass_index],
                );
                executor.execute(&resources, driver);
            }

            for list_index in 0..self.passes[pass_index].destroy.len() {
                let entry_index = self.passes[pass_index].destroy[list_index] as usize;
                self.registry[entry_index].destroy(driver);
            }
        }

        self.reset();
    }

    /// Clear all per-frame state, keeping allocated capacity.
    ///
    /// Called automatically at the end of [`execute`](FrameGraph::execute);
    /// a reset graph is reusable for the next frame.
    pub fn reset(&mut self) {
        self.passes.clear();
        self.resource_nodes.clear();
        self.registry.clear();
        self.aliases.clear();
    }

    /// Resolve a handle to its node index, logging and returning `None` for
    /// stale or uninitialized handles.
    fn node_index(&self, handle: ResourceHandle) -> Option<usize> {
        if !handle.is_initialized() {
            log::error!("using an uninitialized resource handle");
            return None;
        }
        let index = handle.index() as usize;
        assert!(
            index < self.resource_nodes.len(),
            "resource handle index out of range"
        );
        let node = &self.resource_nodes[index];
        if handle.version() != node.version {
            log::error!(
                "using an invalid resource handle (version {}) for resource \"{}\" (id: {}, version: {})",
                handle.version(),
                node.name,
                node.index,
                node.version
            );
            return None;
        }
        Some(index)
    }
}

impl std::fmt::Debug for FrameGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameGraph")
            .field("passes", &self.passes)
            .field("resources", &self.resource_nodes.len())
            .field("aliases", &self.aliases.len())
            .finish()
    }
}
