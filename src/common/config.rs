//! Configuration constants for pagesim.

/// Largest frame count accepted by [`Workload::new`](crate::sim::Workload::new).
///
/// The bound exists for display reasons: the frame table renders one row
/// per frame, and nine rows keep it readable. The simulator itself works
/// with any positive capacity (see `Workload::with_max_frames`).
pub const MAX_FRAMES: usize = 9;

/// Number of references in a generated reference sequence.
pub const DEFAULT_SEQUENCE_LEN: usize = 20;

/// Largest page id produced by the random generator (inclusive).
///
/// Generated pages are drawn uniformly from `0..=DEFAULT_MAX_PAGE`.
pub const DEFAULT_MAX_PAGE: u64 = 9;
