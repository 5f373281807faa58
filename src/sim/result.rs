//! Per-step trace and final result of one policy run.

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId};
use crate::sim::history::FrameHistory;
use crate::sim::replacer::Policy;
use crate::sim::stats::RunStats;

/// What happened at one position of the reference sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStep {
    /// Position in the reference sequence.
    pub index: usize,

    /// Page accessed.
    pub page: PageId,

    /// Slot contents after the access, in slot order.
    pub frames: Vec<Option<PageId>>,

    /// Whether the access was a page fault.
    pub is_fault: bool,

    /// Page evicted to make room, if any.
    pub evicted: Option<PageId>,
}

impl SimulationStep {
    /// Number of occupied slots after this step.
    pub fn occupied(&self) -> usize {
        self.frames.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Fault count plus full trace for one (policy, sequence, capacity) run.
///
/// Built once by the simulator and read-only afterwards. Deserializing
/// rechecks the fault count, step indices and snapshot widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSimulationResult")]
pub struct SimulationResult {
    policy: Policy,
    capacity: usize,
    faults: usize,
    steps: Vec<SimulationStep>,
}

impl SimulationResult {
    pub(crate) fn new(
        policy: Policy,
        capacity: usize,
        faults: usize,
        steps: Vec<SimulationStep>,
    ) -> Self {
        Self {
            policy,
            capacity,
            faults,
            steps,
        }
    }

    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of frames simulated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total page faults.
    #[inline]
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Accesses that found their page resident.
    pub fn hits(&self) -> usize {
        self.steps.len() - self.faults
    }

    /// Faults that had to evict a page.
    pub fn evictions(&self) -> usize {
        self.steps.iter().filter(|s| s.evicted.is_some()).count()
    }

    /// One step per reference, in sequence order.
    #[inline]
    pub fn steps(&self) -> &[SimulationStep] {
        &self.steps
    }

    /// Slot contents after the last reference.
    pub fn final_frames(&self) -> &[Option<PageId>] {
        self.steps
            .last()
            .map(|s| s.frames.as_slice())
            .unwrap_or_default()
    }

    /// Transpose the trace into per-frame rows.
    pub fn history(&self) -> FrameHistory {
        FrameHistory::from_steps(&self.steps, self.capacity)
    }

    pub fn stats(&self) -> RunStats {
        RunStats::from_result(self)
    }
}

/// Unchecked wire form of [`SimulationResult`].
#[derive(Deserialize)]
struct RawSimulationResult {
    policy: Policy,
    capacity: usize,
    faults: usize,
    steps: Vec<SimulationStep>,
}

impl TryFrom<RawSimulationResult> for SimulationResult {
    type Error = Error;

    fn try_from(raw: RawSimulationResult) -> Result<Self, Error> {
        let counted = raw.steps.iter().filter(|s| s.is_fault).count();
        if raw.faults != counted {
            return Err(Error::InvalidResult(format!(
                "{} faults recorded but {} steps fault",
                raw.faults, counted
            )));
        }
        for (i, step) in raw.steps.iter().enumerate() {
            if step.index != i {
                return Err(Error::InvalidResult(format!(
                    "step {} has index {}",
                    i, step.index
                )));
            }
            if step.frames.len() != raw.capacity {
                return Err(Error::InvalidResult(format!(
                    "step {} has {} frames, expected {}",
                    i,
                    step.frames.len(),
                    raw.capacity
                )));
            }
        }
        Ok(Self::new(raw.policy, raw.capacity, raw.faults, raw.steps))
    }
}
