//! Per-frame occupancy history for the frame table.

use crate::common::{FrameId, PageId};
use crate::sim::result::SimulationStep;

/// Occupancy of each frame slot across every step.
///
/// `rows[f][i]` is what slot `f` held after step `i`; `None` means the
/// slot was still empty. This is the step snapshots transposed: one row
/// per frame, one column per reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHistory {
    rows: Vec<Vec<Option<PageId>>>,
}

impl FrameHistory {
    /// Start an empty history for `frame_count` slots.
    pub fn new(frame_count: usize) -> Self {
        Self {
            rows: vec![Vec::new(); frame_count],
        }
    }

    /// Build the history from a finished trace.
    pub fn from_steps(steps: &[SimulationStep], frame_count: usize) -> Self {
        let mut history = Self::new(frame_count);
        for row in &mut history.rows {
            row.reserve(steps.len());
        }
        for step in steps {
            history.record(&step.frames);
        }
        history
    }

    /// Append one column.
    ///
    /// Slots past the end of `snapshot` are recorded as empty.
    pub fn record(&mut self, snapshot: &[Option<PageId>]) {
        for (slot, row) in self.rows.iter_mut().enumerate() {
            row.push(snapshot.get(slot).copied().flatten());
        }
    }

    pub fn frame_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns recorded.
    pub fn step_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Values held by one slot, in step order.
    pub fn row(&self, frame_id: FrameId) -> Option<&[Option<PageId>]> {
        self.rows.get(frame_id.0).map(Vec::as_slice)
    }

    /// Rows paired with their frame ids.
    pub fn rows(&self) -> impl Iterator<Item = (FrameId, &[Option<PageId>])> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| (FrameId::new(i), row.as_slice()))
    }

    /// What `frame_id` held after step `index`.
    pub fn get(&self, frame_id: FrameId, index: usize) -> Option<PageId> {
        self.rows.get(frame_id.0)?.get(index).copied().flatten()
    }
}
