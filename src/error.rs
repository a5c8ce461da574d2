//! Frame graph error types.

use thiserror::Error;

/// Errors reported by [`FrameGraph::compile`](crate::FrameGraph::compile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A backing resource that nothing reads is produced by more than one
    /// pass. Handle renaming makes this impossible through normal
    /// read-modify-write chains; hitting it means two passes wrote the same
    /// resource without any consumer in between.
    #[error("resource \"{resource}\" has {writers} writers, expected at most one")]
    ConflictingWriters {
        /// Name of the offending resource.
        resource: String,
        /// Number of writer passes recorded for it.
        writers: u32,
    },
}
