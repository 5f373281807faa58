//! Optimal (Belady) replacement policy.
//!
//! Evicts the resident page whose next reference lies farthest in the
//! future, or that is never referenced again. This needs the whole
//! reference sequence up front, so it is only usable in simulation.

use std::collections::HashMap;

use crate::common::PageId;
use crate::sim::replacer::Replacer;
use crate::sim::{FrameSet, ReferenceSequence};

/// Look-ahead replacer backed by a per-page occurrence index.
///
/// Instead of rescanning the remaining sequence on every fault, the
/// constructor records the sorted positions of each page once. The next
/// use of page `p` after step `i` is then a binary search in `p`'s list.
///
/// Ties (several pages never used again, or equal distances, which cannot
/// happen for two different pages) go to the first page in frame-slot
/// order.
#[derive(Debug)]
pub struct OptimalReplacer {
    /// Page -> ascending positions at which it is referenced.
    occurrences: HashMap<PageId, Vec<usize>>,
}

impl OptimalReplacer {
    /// Index every reference position of `sequence`.
    pub fn new(sequence: &ReferenceSequence) -> Self {
        let mut occurrences: HashMap<PageId, Vec<usize>> = HashMap::new();
        for (index, page) in sequence.iter().enumerate() {
            occurrences.entry(page).or_default().push(index);
        }
        Self { occurrences }
    }

    /// Smallest position `> index` at which `page` is referenced, or `None`
    /// if it never is again.
    pub fn next_use(&self, page: PageId, index: usize) -> Option<usize> {
        let positions = self.occurrences.get(&page)?;
        let next = positions.partition_point(|&j| j <= index);
        positions.get(next).copied()
    }
}

impl Replacer for OptimalReplacer {
    // Everything is precomputed; admissions and hits change nothing.
    fn record_admission(&mut self, _page: PageId, _index: usize) {}

    fn victim(&mut self, frames: &FrameSet, index: usize) -> Option<PageId> {
        let mut best: Option<(PageId, usize)> = None;
        for page in frames.resident() {
            let distance = self.next_use(page, index).unwrap_or(usize::MAX);
            // Strictly greater: the first slot keeps a tie.
            if best.map_or(true, |(_, d)| distance > d) {
                best = Some((page, distance));
            }
        }
        best.map(|(page, _)| page)
    }
}
