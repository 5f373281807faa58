//! Validated simulation input.
//!
//! A [`Workload`] is the only way into the simulator. Both input checks
//! (non-empty sequence, frame count in range) happen when it is built, so
//! a run that has a `Workload` cannot fail and every policy compared on it
//! sees the same pages.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::common::config::MAX_FRAMES;
use crate::common::{Error, PageId, Result};

/// An ordered, immutable, non-empty list of page references.
///
/// # Example
/// ```
/// use pagesim::{PageId, ReferenceSequence};
///
/// let seq = ReferenceSequence::new(vec![PageId::new(1), PageId::new(2)]).unwrap();
/// assert_eq!(seq.len(), 2);
/// assert!(ReferenceSequence::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PageId>", into = "Vec<PageId>")]
pub struct ReferenceSequence {
    pages: Vec<PageId>,
}

impl ReferenceSequence {
    /// Wrap a list of pages.
    ///
    /// # Errors
    /// - `Error::EmptySequence` if `pages` is empty
    pub fn new(pages: Vec<PageId>) -> Result<Self> {
        if pages.is_empty() {
            return Err(Error::EmptySequence);
        }
        Ok(Self { pages })
    }

    /// Build a sequence from raw page numbers.
    pub fn from_ids<I: IntoIterator<Item = u64>>(ids: I) -> Result<Self> {
        Self::new(ids.into_iter().map(PageId::new).collect())
    }

    /// Number of references.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<PageId> {
        self.pages.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Number of distinct pages referenced.
    pub fn distinct_count(&self) -> usize {
        let mut seen = std::collections::HashSet::with_capacity(self.pages.len());
        self.pages.iter().filter(|p| seen.insert(**p)).count()
    }
}

impl Index<usize> for ReferenceSequence {
    type Output = PageId;

    fn index(&self, index: usize) -> &PageId {
        &self.pages[index]
    }
}

impl TryFrom<Vec<PageId>> for ReferenceSequence {
    type Error = Error;

    fn try_from(pages: Vec<PageId>) -> Result<Self> {
        Self::new(pages)
    }
}

impl From<ReferenceSequence> for Vec<PageId> {
    fn from(seq: ReferenceSequence) -> Self {
        seq.pages
    }
}

/// A reference sequence paired with a frame count, both validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    sequence: ReferenceSequence,
    capacity: usize,
}

impl Workload {
    /// Create a workload with the default frame bound ([`MAX_FRAMES`]).
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is outside `1..=MAX_FRAMES`
    pub fn new(sequence: ReferenceSequence, capacity: usize) -> Result<Self> {
        Self::with_max_frames(sequence, capacity, MAX_FRAMES)
    }

    /// Create a workload with a caller-chosen frame bound.
    ///
    /// # Errors
    /// - `Error::InvalidCapacity` if `capacity` is outside `1..=max_frames`
    pub fn with_max_frames(
        sequence: ReferenceSequence,
        capacity: usize,
        max_frames: usize,
    ) -> Result<Self> {
        if capacity == 0 || capacity > max_frames {
            return Err(Error::InvalidCapacity {
                capacity: i64::try_from(capacity).unwrap_or(i64::MAX),
                max: max_frames,
            });
        }
        Ok(Self { sequence, capacity })
    }

    #[inline]
    pub fn sequence(&self) -> &ReferenceSequence {
        &self.sequence
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Parse a user-supplied frame count and check it against `max_frames`.
///
/// # Errors
/// - `Error::InvalidFrameCount` if `input` is not an integer
/// - `Error::InvalidCapacity` if it is outside `1..=max_frames`, negative
///   values included
pub fn parse_capacity(input: &str, max_frames: usize) -> Result<usize> {
    let capacity: i64 = input
        .trim()
        .parse()
        .map_err(|_| Error::InvalidFrameCount(input.to_string()))?;
    match usize::try_from(capacity) {
        Ok(frames) if (1..=max_frames).contains(&frames) => Ok(frames),
        _ => Err(Error::InvalidCapacity {
            capacity,
            max: max_frames,
        }),
    }
}
