//! Frame identifier type.

use std::fmt;

/// Identifies a frame slot in a [`FrameSet`](crate::sim::FrameSet).
///
/// A frame's id is its row in the frame table. It never changes for the
/// lifetime of a run, regardless of which page the slot holds.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// // Can use directly as index: slots[frame_id.0]
/// assert_eq!(frame_id.0, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }
}

// Frames are numbered from 1 for people.
impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {}", self.0 + 1)
    }
}
