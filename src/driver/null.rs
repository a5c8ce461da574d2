//! No-op driver for testing and development.
//!
//! [`NullDriver`] doesn't perform actual GPU operations but provides a valid
//! implementation of the [`Driver`] trait, handing out sequential ids and
//! counting what the graph asked for. Useful for exercising graph logic
//! without GPU hardware.

use crate::types::{TextureDescriptor, TextureUsage};

use super::{Driver, RenderTargetDescriptor, RenderTargetHandle, TextureHandle};

/// Driver that allocates nothing and counts everything.
#[derive(Debug, Default)]
pub struct NullDriver {
    next_id: u64,
    created_textures: u32,
    destroyed_textures: u32,
    created_render_targets: u32,
    destroyed_render_targets: u32,
}

impl NullDriver {
    /// Create a new null driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of textures created so far.
    pub fn created_textures(&self) -> u32 {
        self.created_textures
    }

    /// Number of textures destroyed so far.
    pub fn destroyed_textures(&self) -> u32 {
        self.destroyed_textures
    }

    /// Number of render targets created so far.
    pub fn created_render_targets(&self) -> u32 {
        self.created_render_targets
    }

    /// Number of render targets destroyed so far.
    pub fn destroyed_render_targets(&self) -> u32 {
        self.destroyed_render_targets
    }

    /// Number of textures currently alive.
    pub fn alive_textures(&self) -> u32 {
        self.created_textures - self.destroyed_textures
    }

    /// Number of render targets currently alive.
    pub fn alive_render_targets(&self) -> u32 {
        self.created_render_targets - self.destroyed_render_targets
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Driver for NullDriver {
    fn create_texture(&mut self, desc: &TextureDescriptor, usage: TextureUsage) -> TextureHandle {
        self.created_textures += 1;
        log::trace!(
            "NullDriver: creating texture {}x{}x{} ({:?}, {:?})",
            desc.width,
            desc.height,
            desc.depth,
            desc.format,
            usage
        );
        TextureHandle::new(self.next_id())
    }

    fn create_render_target(&mut self, desc: &RenderTargetDescriptor) -> RenderTargetHandle {
        self.created_render_targets += 1;
        log::trace!(
            "NullDriver: creating render target {}x{} ({:?}, samples: {})",
            desc.width,
            desc.height,
            desc.attachments,
            desc.samples
        );
        RenderTargetHandle::new(self.next_id())
    }

    fn destroy_texture(&mut self, texture: TextureHandle) {
        self.destroyed_textures += 1;
        log::trace!("NullDriver: destroying texture {}", texture.raw());
    }

    fn destroy_render_target(&mut self, target: RenderTargetHandle) {
        self.destroyed_render_targets += 1;
        log::trace!("NullDriver: destroying render target {}", target.raw());
    }
}
