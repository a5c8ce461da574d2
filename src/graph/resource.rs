//! Virtual resources and their backing records.
//!
//! Every logical texture has two sides. [`ResourceNode`] is the virtual
//! side: a named, versioned entry in the graph's resource table that the
//! [`Builder`](crate::Builder) updates as passes declare accesses.
//! [`ResourceEntry`] is the physical side: the backing record created during
//! compile that accumulates reference counts, lifetime brackets, and
//! eventually the driver objects. Aliasing can point several nodes at one
//! entry; the reverse never happens.

use crate::driver::{Driver, RenderTargetDescriptor, RenderTargetHandle, TextureHandle};
use crate::handle::ResourceHandle;
use crate::types::{AttachmentFlags, TextureDescriptor, TextureFormat, TextureUsage};

/// A versioned view of a logical resource.
#[derive(Debug)]
pub(crate) struct ResourceNode {
    /// Resource name, for diagnostics.
    pub name: String,
    /// Index of this node in the resource table.
    pub index: u16,
    /// Current version; bumped on every write.
    pub version: u16,
    /// Desired shape of the realized texture.
    pub desc: TextureDescriptor,
    /// Attachment roles passes read this resource as.
    pub read_flags: AttachmentFlags,
    /// Attachment roles passes write this resource as.
    pub write_flags: AttachmentFlags,
    /// Backing record, assigned during compile and rerouted by aliases.
    pub entry: Option<usize>,
}

impl ResourceNode {
    pub fn new(name: &str, index: u16, desc: TextureDescriptor) -> Self {
        Self {
            name: name.to_string(),
            index,
            version: 0,
            desc,
            read_flags: AttachmentFlags::empty(),
            write_flags: AttachmentFlags::empty(),
            entry: None,
        }
    }
}

/// A request to reroute `to`'s backing record through `from`'s.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Alias {
    pub from: ResourceHandle,
    pub to: ResourceHandle,
}

/// The backing record for a logical resource.
///
/// Created in compile, populated with reference counts and the
/// first/last-user bracket, then realized and released by the execute loop.
#[derive(Debug)]
pub(crate) struct ResourceEntry {
    /// Resource name, for diagnostics.
    pub name: String,
    /// Most recent pass writing to this resource.
    pub writer: Option<u32>,
    /// First pass that needs the resource realized.
    pub first: Option<u32>,
    /// Last pass that needs the resource; releases it afterwards.
    pub last: Option<u32>,
    /// Number of passes writing to this resource.
    pub writer_count: u32,
    /// Number of passes reading from this resource.
    pub reader_count: u32,
    /// Shape of the realized texture.
    pub desc: TextureDescriptor,
    /// Union of attachment roles this resource is read as.
    pub read_flags: AttachmentFlags,
    /// Union of attachment roles this resource is written as.
    pub write_flags: AttachmentFlags,
    /// Realized textures: color at slot 0, depth at slot 1.
    pub textures: [Option<TextureHandle>; 2],
    /// Realized render target.
    pub target: Option<RenderTargetHandle>,
}

impl ResourceEntry {
    pub fn new(node: &ResourceNode) -> Self {
        Self {
            name: node.name.clone(),
            writer: None,
            first: None,
            last: None,
            writer_count: 0,
            reader_count: 0,
            desc: node.desc,
            read_flags: node.read_flags,
            write_flags: node.write_flags,
            textures: [None, None],
            target: None,
        }
    }

    /// Create the driver objects backing this resource.
    ///
    /// The read-flag set decides which sampleable textures exist; the
    /// write-flag set decides the render target's attachments. Textures are
    /// always single-sampled, the render target carries the descriptor's
    /// sample count.
    pub fn create(&mut self, driver: &mut dyn Driver) {
        if self.reader_count > 0 {
            if self.read_flags.contains(AttachmentFlags::COLOR) {
                let desc = TextureDescriptor {
                    samples: 1,
                    ..self.desc
                };
                self.textures[0] = Some(driver.create_texture(&desc, TextureUsage::ColorAttachment));
            }
            if self.read_flags.contains(AttachmentFlags::DEPTH) {
                let desc = TextureDescriptor {
                    format: TextureFormat::Depth24Plus,
                    samples: 1,
                    ..self.desc
                };
                self.textures[1] = Some(driver.create_texture(&desc, TextureUsage::DepthAttachment));
            }
        }
        if self.writer_count > 0 {
            let mut attachments = AttachmentFlags::empty();
            if self.write_flags.contains(AttachmentFlags::COLOR) {
                attachments |= AttachmentFlags::COLOR;
            }
            if self.write_flags.contains(AttachmentFlags::DEPTH) {
                attachments |= AttachmentFlags::DEPTH;
            }
            self.target = Some(driver.create_render_target(&RenderTargetDescriptor {
                attachments,
                width: self.desc.width,
                height: self.desc.height,
                samples: self.desc.samples,
                format: self.desc.format,
                color: self.textures[0],
                depth: self.textures[1],
            }));
        }
    }

    /// Release the driver objects backing this resource.
    pub fn destroy(&mut self, driver: &mut dyn Driver) {
        for texture in &mut self.textures {
            if let Some(texture) = texture.take() {
                driver.destroy_texture(texture);
            }
        }
        if let Some(target) = self.target.take() {
            driver.destroy_render_target(target);
        }
    }
}
