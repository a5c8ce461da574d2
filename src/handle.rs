//! Versioned handles to frame graph resources.

/// Handle to a logical resource in a [`FrameGraph`](crate::FrameGraph).
///
/// A handle pairs an index into the graph's resource table with the version
/// of the resource at the time the handle was obtained. Writing to a resource
/// bumps its version, so handles held from before the write no longer match
/// and are rejected by the graph. This is what forbids two passes from
/// writing to the same resource through independently obtained handles.
///
/// Handles are only meaningful within the frame graph that created them, and
/// only for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    /// Index into the resource node table.
    index: u16,
    /// Version of the resource when the handle was obtained.
    version: u16,
}

const UNINITIALIZED: u16 = u16::MAX;

impl ResourceHandle {
    /// Create a handle that refers to nothing.
    ///
    /// Uninitialized handles are returned by [`Builder`](crate::Builder)
    /// operations that fail, and are rejected everywhere a handle is
    /// accepted.
    pub fn uninitialized() -> Self {
        Self {
            index: UNINITIALIZED,
            version: 0,
        }
    }

    pub(crate) fn new(index: u16, version: u16) -> Self {
        Self { index, version }
    }

    /// Index of the resource this handle refers to.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Resource version this handle was obtained at.
    pub fn version(&self) -> u16 {
        self.version
    }

    /// Check whether this handle refers to a resource at all.
    ///
    /// An initialized handle can still be stale; use
    /// [`FrameGraph::is_valid`](crate::FrameGraph::is_valid) for the full
    /// check.
    pub fn is_initialized(&self) -> bool {
        self.index != UNINITIALIZED
    }
}

impl Default for ResourceHandle {
    fn default() -> Self {
        Self::uninitialized()
    }
}
