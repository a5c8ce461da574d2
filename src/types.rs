//! Texture types and descriptors.

use bitflags::bitflags;

/// Texture format enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFormat {
    #[default]
    Rgba8Unorm,
    Rgba8UnormSrgb,
    Bgra8Unorm,
    Rgba16Float,
    Rgba32Float,
    R32Float,
    Depth24Plus,
    Depth32Float,
}

impl TextureFormat {
    /// Check whether this is a depth format.
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::Depth24Plus | TextureFormat::Depth32Float)
    }
}

/// Texture dimension (1D, 2D, 3D, Cube).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureDimension {
    D1,
    #[default]
    D2,
    D3,
    Cube,
}

/// How a realized texture is attached, both at creation time and when a pass
/// queries it through [`PassResources`](crate::PassResources).
///
/// `Default` resolves to the depth attachment when the resource is read as
/// depth only, and to the color attachment otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureUsage {
    #[default]
    Default,
    ColorAttachment,
    DepthAttachment,
}

bitflags! {
    /// Attachment roles a pass declares when reading or writing a resource.
    ///
    /// The empty set means "unspecified".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttachmentFlags: u32 {
        /// The color attachment of the resource.
        const COLOR = 1 << 0;
        /// The depth attachment of the resource.
        const DEPTH = 1 << 1;
    }
}

impl Default for AttachmentFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Descriptor for a logical texture.
///
/// Describes the shape a resource will have once it is realized; until then
/// the descriptor is the only thing the graph knows about the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureDescriptor {
    /// Texture dimension.
    pub dimension: TextureDimension,
    /// Mip level count.
    pub levels: u8,
    /// Texture format.
    pub format: TextureFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Depth in pixels (or array layers).
    pub depth: u32,
    /// Sample count for multisampling.
    pub samples: u8,
}

impl TextureDescriptor {
    /// Create a new 2D texture descriptor.
    pub fn new_2d(width: u32, height: u32, format: TextureFormat) -> Self {
        Self {
            dimension: TextureDimension::D2,
            levels: 1,
            format,
            width,
            height,
            depth: 1,
            samples: 1,
        }
    }

    /// Set the mip level count.
    pub fn with_levels(mut self, levels: u8) -> Self {
        self.levels = levels;
        self
    }

    /// Set the sample count for multisampling.
    pub fn with_samples(mut self, samples: u8) -> Self {
        self.samples = samples;
        self
    }

    /// Set the depth (or array layer count).
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the texture dimension.
    pub fn with_dimension(mut self, dimension: TextureDimension) -> Self {
        self.dimension = dimension;
        self
    }
}

impl Default for TextureDescriptor {
    fn default() -> Self {
        Self {
            dimension: TextureDimension::default(),
            levels: 1,
            format: TextureFormat::default(),
            width: 1,
            height: 1,
            depth: 1,
            samples: 1,
        }
    }
}
