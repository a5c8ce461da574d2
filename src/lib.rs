//! Frame graph - a per-frame declarative scheduler for GPU rendering work.
//!
//! Client code describes passes as black boxes that declare which logical
//! resources they read and write. The graph assembles the declarations into
//! a DAG, culls passes whose outputs nothing consumes, infers each
//! resource's lifetime window, and drives execution: concrete GPU objects
//! are created through a [`Driver`] just before the first pass that needs
//! them and released right after the last one.
//!
//! The design follows Yuriy O'Donnell's 2017 GDC talk "FrameGraph:
//! Extensible Rendering Architecture in Frostbite".
//!
//! # Example
//!
//! ```
//! use framegraph::{
//!     AttachmentFlags, FrameGraph, NullDriver, ResourceHandle, TextureDescriptor, TextureFormat,
//! };
//!
//! #[derive(Default, Clone)]
//! struct GBufferData {
//!     color: ResourceHandle,
//! }
//!
//! let mut graph = FrameGraph::new();
//!
//! let gbuffer = graph.add_pass::<GBufferData, _, _>(
//!     "GBuffer",
//!     |builder, data| {
//!         let color = builder.create_texture(
//!             "color",
//!             TextureDescriptor::new_2d(1280, 720, TextureFormat::Rgba8Unorm),
//!         );
//!         data.color = builder.write(color, AttachmentFlags::COLOR);
//!     },
//!     |resources, data, _driver| {
//!         // Record GPU work against the realized target here.
//!         let _target = resources.render_target(data.color);
//!     },
//! );
//!
//! // Pin the output so culling keeps the pass.
//! graph.present(gbuffer.color);
//!
//! graph.compile().unwrap();
//!
//! let mut driver = NullDriver::new();
//! graph.execute(&mut driver);
//!
//! // Everything realized during the frame was released again.
//! assert_eq!(driver.alive_textures(), 0);
//! assert_eq!(driver.alive_render_targets(), 0);
//! ```

pub mod driver;
pub mod error;
pub mod graph;
pub mod handle;
pub mod types;

pub use driver::{
    Driver, NullDriver, RenderTargetDescriptor, RenderTargetHandle, TextureHandle,
};
pub use error::GraphError;
pub use graph::{Builder, FrameGraph, PassResources};
pub use handle::ResourceHandle;
pub use types::{
    AttachmentFlags, TextureDescriptor, TextureDimension, TextureFormat, TextureUsage,
};
