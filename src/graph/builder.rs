//! Per-pass resource declaration scope.

use crate::handle::ResourceHandle;
use crate::types::{AttachmentFlags, TextureDescriptor};

use super::resource::ResourceNode;
use super::FrameGraph;

/// Builder handed to a pass's setup callback.
///
/// The builder is scoped to the pass being registered: every `read` and
/// `write` it records lands in that pass's access lists. Declaring a
/// resource does not realize anything; realization happens during execute,
/// driven by the compiled lifetime brackets.
///
/// Failed operations (a stale or uninitialized handle) log through the
/// diagnostic channel and return an uninitialized handle; they never panic.
pub struct Builder<'a> {
    graph: &'a mut FrameGraph,
    pass: usize,
}

impl<'a> Builder<'a> {
    pub(crate) fn new(graph: &'a mut FrameGraph, pass: usize) -> Self {
        Self { graph, pass }
    }

    /// Declare a new logical texture and return a handle to version 0.
    pub fn create_texture(&mut self, name: &str, desc: TextureDescriptor) -> ResourceHandle {
        let index = self.graph.resource_nodes.len();
        assert!(index < u16::MAX as usize, "resource table is full");
        self.graph
            .resource_nodes
            .push(ResourceNode::new(name, index as u16, desc));
        ResourceHandle::new(index as u16, 0)
    }

    /// Declare that this pass reads `input` with the given attachment roles.
    ///
    /// Returns `input` unchanged on success, an uninitialized handle if
    /// `input` is stale or uninitialized.
    pub fn read(&mut self, input: ResourceHandle, flags: AttachmentFlags) -> ResourceHandle {
        let Some(index) = self.graph.node_index(input) else {
            return ResourceHandle::uninitialized();
        };
        let node = &mut self.graph.resource_nodes[index];
        node.read_flags |= flags;
        let recorded = ResourceHandle::new(node.index, node.version);
        self.graph.passes[self.pass].reads.push(recorded);
        input
    }

    /// Declare that this pass writes `output` with the given attachment
    /// roles.
    ///
    /// The resource's version is bumped before the write is recorded, so
    /// handles obtained earlier (including `output` itself) become stale.
    /// Returns the renamed handle on success, an uninitialized handle if
    /// `output` is stale or uninitialized.
    pub fn write(&mut self, output: ResourceHandle, flags: AttachmentFlags) -> ResourceHandle {
        let Some(index) = self.graph.node_index(output) else {
            return ResourceHandle::uninitialized();
        };
        let node = &mut self.graph.resource_nodes[index];
        node.write_flags |= flags;
        node.version += 1;
        let renamed = ResourceHandle::new(node.index, node.version);
        self.graph.passes[self.pass].writes.push(renamed);
        renamed
    }
}
