//! Common utilities for frame graph integration tests.

use framegraph::{
    AttachmentFlags, Driver, RenderTargetDescriptor, RenderTargetHandle, TextureDescriptor,
    TextureFormat, TextureHandle, TextureUsage,
};

/// A single call the graph made into the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    CreateTexture {
        handle: TextureHandle,
        format: TextureFormat,
        usage: TextureUsage,
        width: u32,
        height: u32,
        samples: u8,
    },
    CreateRenderTarget {
        handle: RenderTargetHandle,
        attachments: AttachmentFlags,
        format: TextureFormat,
        width: u32,
        height: u32,
        samples: u8,
    },
    DestroyTexture {
        handle: TextureHandle,
    },
    DestroyRenderTarget {
        handle: RenderTargetHandle,
    },
}

/// Driver that records every call in order, with deterministic ids.
///
/// Two identical frames against two fresh recording drivers produce
/// identical call lists, which is what the frame reuse tests compare.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    next_id: u64,
    calls: Vec<DriverCall>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in the order the graph issued them.
    pub fn calls(&self) -> &[DriverCall] {
        &self.calls
    }

    pub fn created_textures(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DriverCall::CreateTexture { .. }))
            .count()
    }

    pub fn destroyed_textures(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DriverCall::DestroyTexture { .. }))
            .count()
    }

    pub fn created_render_targets(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DriverCall::CreateRenderTarget { .. }))
            .count()
    }

    pub fn destroyed_render_targets(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DriverCall::DestroyRenderTarget { .. }))
            .count()
    }

    /// The texture created with the given attachment role, if exactly one
    /// such create happened.
    pub fn texture_created_as(&self, wanted: TextureUsage) -> Option<TextureHandle> {
        let mut found = None;
        for call in &self.calls {
            if let DriverCall::CreateTexture { handle, usage, .. } = call {
                if *usage == wanted {
                    if found.is_some() {
                        return None;
                    }
                    found = Some(*handle);
                }
            }
        }
        found
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

impl Driver for RecordingDriver {
    fn create_texture(&mut self, desc: &TextureDescriptor, usage: TextureUsage) -> TextureHandle {
        let handle = TextureHandle::new(self.next_id());
        self.calls.push(DriverCall::CreateTexture {
            handle,
            format: desc.format,
            usage,
            width: desc.width,
            height: desc.height,
            samples: desc.samples,
        });
        handle
    }

    fn create_render_target(&mut self, desc: &RenderTargetDescriptor) -> RenderTargetHandle {
        let handle = RenderTargetHandle::new(self.next_id());
        self.calls.push(DriverCall::CreateRenderTarget {
            handle,
            attachments: desc.attachments,
            format: desc.format,
            width: desc.width,
            height: desc.height,
            samples: desc.samples,
        });
        handle
    }

    fn destroy_texture(&mut self, texture: TextureHandle) {
        self.calls.push(DriverCall::DestroyTexture { handle: texture });
    }

    fn destroy_render_target(&mut self, target: RenderTargetHandle) {
        self.calls
            .push(DriverCall::DestroyRenderTarget { handle: target });
    }
}

/// Standard 2D color target descriptor used across the scenarios.
pub fn color_desc() -> TextureDescriptor {
    TextureDescriptor::new_2d(1280, 720, TextureFormat::Rgba8Unorm)
}
