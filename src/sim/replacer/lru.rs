//! LRU (Least-Recently-Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::sim::FrameSet;
use crate::sim::replacer::Replacer;

/// Evicts the resident page whose last access is oldest.
///
/// Last-use indices come from the step counter, which is strictly
/// increasing and touches one page per step, so no two resident pages
/// ever share an index and the minimum is unique.
#[derive(Debug, Default)]
pub struct LruReplacer {
    /// Resident page -> step of its most recent access.
    last_use: HashMap<PageId, usize>,
}

impl LruReplacer {
    /// Create a new LRU replacer.
    pub fn new() -> Self {
        Self {
            last_use: HashMap::new(),
        }
    }

    /// Step at which `page` was last accessed, if tracked.
    pub fn last_use(&self, page: PageId) -> Option<usize> {
        self.last_use.get(&page).copied()
    }

    fn touch(&mut self, page: PageId, index: usize) {
        self.last_use.insert(page, index);
    }
}

impl Replacer for LruReplacer {
    fn record_admission(&mut self, page: PageId, index: usize) {
        self.touch(page, index);
    }

    fn record_hit(&mut self, page: PageId, index: usize) {
        self.touch(page, index);
    }

    fn victim(&mut self, _frames: &FrameSet, _index: usize) -> Option<PageId> {
        let (&page, _) = self.last_use.iter().min_by_key(|&(_, step)| *step)?;
        self.last_use.remove(&page);
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(id: u64) -> PageId {
        PageId::new(id)
    }

    #[test]
    fn test_lru_evicts_oldest_access() {
        let frames = FrameSet::new(3);
        let mut replacer = LruReplacer::new();

        replacer.record_admission(p(1), 0);
        replacer.record_admission(p(2), 1);
        replacer.record_admission(p(3), 2);

        assert_eq!(replacer.victim(&frames, 3), Some(p(1)));
        assert_eq!(replacer.last_use(p(1)), None);
    }

    #[test]
    fn test_lru_hit_refreshes() {
        let frames = FrameSet::new(3);
        let mut replacer = LruReplacer::new();

        replacer.record_admission(p(1), 0);
        replacer.record_admission(p(2), 1);
        replacer.record_admission(p(3), 2);
        replacer.record_hit(p(1), 3);
        assert_eq!(replacer.last_use(p(1)), Some(3));

        assert_eq!(replacer.victim(&frames, 4), Some(p(2)));
        assert_eq!(replacer.victim(&frames, 5), Some(p(3)));
        assert_eq!(replacer.victim(&frames, 6), Some(p(1)));
        assert_eq!(replacer.victim(&frames, 7), None);
    }
}
