//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use crate::common::PageId;
use crate::sim::FrameSet;
use crate::sim::replacer::Replacer;

/// Evicts pages in the order they were admitted.
///
/// Hits do not reorder the queue. That is the whole difference from LRU:
/// a page admitted first leaves first no matter how often it is used.
#[derive(Debug, Default)]
pub struct FifoReplacer {
    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Number of pages tracked.
    pub fn size(&self) -> usize {
        self.queue.len()
    }
}

impl Replacer for FifoReplacer {
    fn record_admission(&mut self, page: PageId, _index: usize) {
        self.queue.push_back(page);
    }

    fn victim(&mut self, _frames: &FrameSet, _index: usize) -> Option<PageId> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u64) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_fifo_basic() {
        let frames = FrameSet::new(3);
        let mut replacer = FifoReplacer::new();

        replacer.record_admission(p(0), 0);
        replacer.record_admission(p(1), 1);
        replacer.record_admission(p(2), 2);
        assert_eq!(replacer.size(), 3);

        // Should evict in FIFO order
        assert_eq!(replacer.victim(&frames, 3), Some(p(0)));
        assert_eq!(replacer.victim(&frames, 4), Some(p(1)));
        assert_eq!(replacer.victim(&frames, 5), Some(p(2)));
        assert_eq!(replacer.victim(&frames, 6), None);
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let frames = FrameSet::new(2);
        let mut replacer = FifoReplacer::new();

        replacer.record_admission(p(0), 0);
        replacer.record_admission(p(1), 1);
        replacer.record_hit(p(0), 2); // Access again - should NOT reorder

        // FIFO: page 0 was first, should be evicted first
        assert_eq!(replacer.victim(&frames, 3), Some(p(0)));
        assert_eq!(replacer.victim(&frames, 4), Some(p(1)));
    }

    #[test]
    fn test_fifo_readmission_goes_to_tail() {
        let frames = FrameSet::new(2);
        let mut replacer = FifoReplacer::new();

        replacer.record_admission(p(0), 0);
        replacer.record_admission(p(1), 1);
        assert_eq!(replacer.victim(&frames, 2), Some(p(0)));
        replacer.record_admission(p(0), 2);

        assert_eq!(replacer.victim(&frames, 3), Some(p(1)));
        assert_eq!(replacer.victim(&frames, 4), Some(p(0)));
    }
}
