//! Simulation driver - runs a policy over a workload.
//!
//! [`simulate`] is the whole public contract: one policy, one validated
//! [`Workload`], one [`SimulationResult`]. [`compare`] and
//! [`compare_parallel`] run several policies over the same workload.

use std::thread;

use log::{debug, trace};

use crate::common::PageId;
use crate::sim::replacer::{Policy, Replacer};
use crate::sim::result::{SimulationResult, SimulationStep};
use crate::sim::{FrameSet, ReferenceSequence, Workload};

/// Mutable state of a single run.
///
/// # Architecture
/// ```text
/// ┌────────────────────────────────────────────────────┐
/// │                    Simulator                       │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────┐  │
/// │  │   frames     │  │   replacer   │  │  steps   │  │
/// │  │  FrameSet    │  │dyn Replacer  │  │  trace   │  │
/// │  └──────────────┘  └──────────────┘  └──────────┘  │
/// └────────────────────────────────────────────────────┘
/// ```
///
/// Created fresh for each run and consumed by [`Simulator::finish`]; no
/// state carries over between runs or policies. Pages come only from the
/// workload's sequence, one per [`Simulator::step`].
pub struct Simulator<'a> {
    policy: Policy,
    sequence: &'a ReferenceSequence,
    frames: FrameSet,
    replacer: Box<dyn Replacer>,
    faults: usize,
    steps: Vec<SimulationStep>,
}

impl<'a> Simulator<'a> {
    /// Set up an empty run of `policy` over `workload`.
    pub fn new(policy: Policy, workload: &'a Workload) -> Self {
        Self {
            policy,
            sequence: workload.sequence(),
            frames: FrameSet::new(workload.capacity()),
            replacer: policy.replacer(workload.sequence()),
            faults: 0,
            steps: Vec::with_capacity(workload.sequence().len()),
        }
    }

    /// Process the next reference and return the step it produced, or
    /// `None` once the sequence is exhausted.
    pub fn step(&mut self) -> Option<&SimulationStep> {
        let index = self.steps.len();
        let page = self.sequence.get(index)?;

        let (is_fault, evicted) = if self.frames.contains(page) {
            self.replacer.record_hit(page, index);
            (false, None)
        } else {
            self.faults += 1;
            let evicted = self.make_room(page, index);
            self.replacer.record_admission(page, index);
            (true, evicted)
        };

        self.steps.push(SimulationStep {
            index,
            page,
            frames: self.frames.snapshot(),
            is_fault,
            evicted,
        });
        self.steps.last()
    }

    /// Put a faulting page into a free slot, or evict to make one.
    ///
    /// Returns the evicted page.
    fn make_room(&mut self, page: PageId, index: usize) -> Option<PageId> {
        if self.frames.admit(page).is_some() {
            return None;
        }

        // Full: every resident page is known to the replacer.
        let Some(victim) = self.replacer.victim(&self.frames, index) else {
            unreachable!("{} replacer has no victim for a full frame set", self.policy);
        };
        let frame_id = self.frames.replace(victim, page);
        trace!(
            "{}: step {} evicts {} from {:?} for {}",
            self.policy,
            index,
            victim,
            frame_id,
            page
        );
        Some(victim)
    }

    /// References processed so far.
    pub fn position(&self) -> usize {
        self.steps.len()
    }

    /// Faults so far.
    pub fn faults(&self) -> usize {
        self.faults
    }

    /// Current frame contents.
    pub fn frames(&self) -> &FrameSet {
        &self.frames
    }

    /// Run any remaining references and seal the run.
    pub fn finish(mut self) -> SimulationResult {
        while self.step().is_some() {}
        SimulationResult::new(self.policy, self.frames.capacity(), self.faults, self.steps)
    }
}

/// Run `policy` over every reference of `workload`.
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy, ReferenceSequence, Workload};
///
/// let seq = ReferenceSequence::from_ids([1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]).unwrap();
/// let workload = Workload::new(seq, 3).unwrap();
///
/// assert_eq!(simulate(Policy::Fifo, &workload).faults(), 9);
/// assert_eq!(simulate(Policy::Lru, &workload).faults(), 10);
/// assert_eq!(simulate(Policy::Optimal, &workload).faults(), 7);
/// ```
pub fn simulate(policy: Policy, workload: &Workload) -> SimulationResult {
    let result = Simulator::new(policy, workload).finish();

    debug!(
        "{} over {} references with {} frames: {} faults",
        policy,
        workload.sequence().len(),
        workload.capacity(),
        result.faults()
    );
    result
}

/// Results of several policies over one workload, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    results: Vec<SimulationResult>,
}

impl Comparison {
    pub fn results(&self) -> &[SimulationResult] {
        &self.results
    }

    pub fn get(&self, policy: Policy) -> Option<&SimulationResult> {
        self.results.iter().find(|r| r.policy() == policy)
    }

    /// Policy with the fewest faults; the earliest one wins a tie.
    pub fn best(&self) -> Option<Policy> {
        self.results
            .iter()
            .min_by_key(|r| r.faults())
            .map(SimulationResult::policy)
    }

    pub fn into_results(self) -> Vec<SimulationResult> {
        self.results
    }
}

/// Run every policy, one after another.
pub fn compare(workload: &Workload) -> Comparison {
    compare_policies(workload, &Policy::ALL)
}

/// Run the given policies, one after another.
pub fn compare_policies(workload: &Workload, policies: &[Policy]) -> Comparison {
    Comparison {
        results: policies.iter().map(|&p| simulate(p, workload)).collect(),
    }
}

/// Run every policy, each on its own thread.
pub fn compare_parallel(workload: &Workload) -> Comparison {
    compare_policies_parallel(workload, &Policy::ALL)
}

/// Run the given policies, each on its own thread.
///
/// Runs share only the read-only workload, so the result is identical to
/// [`compare_policies`].
pub fn compare_policies_parallel(workload: &Workload, policies: &[Policy]) -> Comparison {
    let results: Vec<SimulationResult> = thread::scope(|s| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&policy| s.spawn(move || simulate(policy, workload)))
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    });

    Comparison { results }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload(ids: &[u64], capacity: usize) -> Workload {
        let seq = ReferenceSequence::from_ids(ids.iter().copied()).unwrap();
        Workload::new(seq, capacity).unwrap()
    }

    #[test]
    fn test_step_reports_each_reference() {
        let w = workload(&[1, 2, 1, 3], 2);
        let mut sim = Simulator::new(Policy::Fifo, &w);

        let step = sim.step().unwrap().clone();
        assert!(step.is_fault);
        assert_eq!(step.index, 0);
        assert_eq!(step.frames, vec![Some(PageId::new(1)), None]);

        sim.step();
        let step = sim.step().unwrap().clone();
        assert_eq!(step.page, PageId::new(1));
        assert!(!step.is_fault);
        assert_eq!(step.evicted, None);

        let step = sim.step().unwrap().clone();
        assert!(step.is_fault);
        assert_eq!(step.evicted, Some(PageId::new(1)));
        assert_eq!(step.frames, vec![Some(PageId::new(3)), Some(PageId::new(2))]);

        assert_eq!(sim.faults(), 3);
        assert_eq!(sim.frames().len(), 2);
        assert_eq!(sim.position(), 4);

        // Exhausted: no more steps, and the trace stays at sequence length.
        assert!(sim.step().is_none());
        assert!(sim.step().is_none());

        let result = sim.finish();
        assert_eq!(result.steps().len(), 4);
        assert_eq!(result.capacity(), 2);
    }

    #[test]
    fn test_finish_runs_remaining_references() {
        let w = workload(&[1, 2, 3], 2);
        let mut sim = Simulator::new(Policy::Optimal, &w);
        sim.step();

        let result = sim.finish();
        assert_eq!(result.steps().len(), w.sequence().len());
        assert_eq!(result, simulate(Policy::Optimal, &w));
    }

    #[test]
    fn test_compare_runs_all_policies_in_order() {
        let w = workload(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3);
        let cmp = compare(&w);

        let policies: Vec<_> = cmp.results().iter().map(|r| r.policy()).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
        assert_eq!(cmp.get(Policy::Optimal).unwrap().faults(), 7);
        assert_eq!(cmp.best(), Some(Policy::Optimal));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let w = workload(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1], 3);
        assert_eq!(compare_parallel(&w), compare(&w));
    }

    #[test]
    fn test_compare_subset() {
        let w = workload(&[1, 1, 2], 1);
        let cmp = compare_policies(&w, &[Policy::Lru]);
        assert_eq!(cmp.results().len(), 1);
        assert!(cmp.get(Policy::Fifo).is_none());
        assert_eq!(cmp.into_results()[0].faults(), 2);
    }
}
