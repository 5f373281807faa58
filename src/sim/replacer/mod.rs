//! Eviction policy implementations (replacers).
//!
//! Implements:
//! - [`FifoReplacer`] - evict the longest-resident page
//! - [`LruReplacer`] - evict the least recently accessed page
//! - [`OptimalReplacer`] - evict the page needed farthest in the future
//!
//! The driver owns the [`FrameSet`] and tells a replacer about admissions
//! and hits; the replacer only ever decides *which* resident page leaves.

mod fifo;
mod lru;
mod optimal;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::PageId;
use crate::sim::{FrameSet, ReferenceSequence};

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// Victim selection for a full frame set.
///
/// `index` is always the position in the reference sequence of the access
/// being processed.
pub trait Replacer {
    /// `page` was placed in a frame at step `index`.
    fn record_admission(&mut self, page: PageId, index: usize);

    /// Resident `page` was accessed again at step `index`.
    fn record_hit(&mut self, _page: PageId, _index: usize) {}

    /// Pick a resident page to evict at step `index` and forget it.
    ///
    /// Only called when `frames` is full. Returns `None` if the replacer
    /// knows no resident page.
    fn victim(&mut self, frames: &FrameSet, index: usize) -> Option<PageId>;
}

/// The eviction policies the simulator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }

    /// Fresh replacer state for one run over `sequence`.
    pub fn replacer(self, sequence: &ReferenceSequence) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer::new(sequence)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
