//! Execution-time resource access view.

use crate::driver::{RenderTargetHandle, TextureHandle};
use crate::handle::ResourceHandle;
use crate::types::{AttachmentFlags, TextureUsage};

use super::pass::PassNode;
use super::resource::{ResourceEntry, ResourceNode};

/// Read-only view a pass executor uses to reach its realized resources.
///
/// The view resolves handles to the driver objects created for the current
/// frame; it never creates anything itself. Querying a resource the
/// surrounding pass did not declare is not detected.
pub struct PassResources<'a> {
    nodes: &'a [ResourceNode],
    registry: &'a [ResourceEntry],
    pass: &'a PassNode,
}

impl<'a> PassResources<'a> {
    pub(crate) fn new(
        nodes: &'a [ResourceNode],
        registry: &'a [ResourceEntry],
        pass: &'a PassNode,
    ) -> Self {
        Self {
            nodes,
            registry,
            pass,
        }
    }

    /// Name of the pass this view is bound to.
    pub fn pass_name(&self) -> &str {
        &self.pass.name
    }

    /// Driver texture realized for `handle` in the requested attachment
    /// role.
    ///
    /// [`TextureUsage::Default`] resolves to the depth slot when the
    /// resource is read as depth and nothing else, and to the color slot
    /// otherwise. Returns `None` if the requested slot was not realized.
    pub fn texture(&self, handle: ResourceHandle, usage: TextureUsage) -> Option<TextureHandle> {
        let entry = self.entry(handle)?;
        match usage {
            TextureUsage::Default => {
                if entry.read_flags == AttachmentFlags::DEPTH {
                    entry.textures[1]
                } else {
                    entry.textures[0]
                }
            }
            TextureUsage::ColorAttachment => entry.textures[0],
            TextureUsage::DepthAttachment => entry.textures[1],
        }
    }

    /// Driver render target realized for `handle`.
    ///
    /// Returns `None` if the resource has no writer and therefore no target.
    pub fn render_target(&self, handle: ResourceHandle) -> Option<RenderTargetHandle> {
        self.entry(handle)?.target
    }

    fn entry(&self, handle: ResourceHandle) -> Option<&ResourceEntry> {
        if !handle.is_initialized() {
            log::error!(
                "pass \"{}\": querying an uninitialized resource handle",
                self.pass.name
            );
            return None;
        }
        let index = handle.index() as usize;
        assert!(index < self.nodes.len(), "resource handle index out of range");
        self.nodes[index].entry.map(|entry| &self.registry[entry])
    }
}
