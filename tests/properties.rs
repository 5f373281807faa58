//! Property tests over random reference strings.

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;

use pagesim::{compare, simulate, PageId, Policy, ReferenceSequence, SimulationResult, Workload};

fn workload_strategy() -> impl Strategy<Value = Workload> {
    (prop::collection::vec(0u64..12, 1..80), 1usize..=9).prop_map(|(ids, capacity)| {
        let seq = ReferenceSequence::from_ids(ids).unwrap();
        Workload::new(seq, capacity).unwrap()
    })
}

/// Optimal as a plain loop that rescans the remaining sequence on every
/// fault, filling and replacing slots in place.
fn naive_optimal(workload: &Workload) -> (usize, Vec<Vec<Option<PageId>>>) {
    let pages = workload.sequence().as_slice();
    let mut slots: Vec<Option<PageId>> = vec![None; workload.capacity()];
    let mut faults = 0;
    let mut snapshots = Vec::new();

    for (i, &page) in pages.iter().enumerate() {
        if !slots.contains(&Some(page)) {
            faults += 1;
            if let Some(free) = slots.iter().position(Option::is_none) {
                slots[free] = Some(page);
            } else {
                let mut best: Option<(usize, usize)> = None;
                for (slot, resident) in slots.iter().enumerate() {
                    let resident = resident.unwrap();
                    let next = pages[i + 1..]
                        .iter()
                        .position(|&q| q == resident)
                        .unwrap_or(usize::MAX);
                    if best.map_or(true, |(_, d)| next > d) {
                        best = Some((slot, next));
                    }
                }
                slots[best.unwrap().0] = Some(page);
            }
        }
        snapshots.push(slots.clone());
    }
    (faults, snapshots)
}

fn snapshots(result: &SimulationResult) -> Vec<Vec<Option<PageId>>> {
    result.steps().iter().map(|s| s.frames.clone()).collect()
}

proptest! {
    #[test]
    fn prop_step_count_and_fault_total(w in workload_strategy()) {
        for result in compare(&w).results() {
            prop_assert_eq!(result.steps().len(), w.sequence().len());
            let counted = result.steps().iter().filter(|s| s.is_fault).count();
            prop_assert_eq!(result.faults(), counted);
            for (i, step) in result.steps().iter().enumerate() {
                prop_assert_eq!(step.index, i);
                prop_assert_eq!(step.page, w.sequence()[i]);
            }
        }
    }

    #[test]
    fn prop_frames_well_formed(w in workload_strategy()) {
        for result in compare(&w).results() {
            let mut occupied = 0;
            for step in result.steps() {
                prop_assert_eq!(step.frames.len(), w.capacity());
                prop_assert!(step.occupied() <= w.capacity());
                // Occupancy never shrinks.
                prop_assert!(step.occupied() >= occupied);
                occupied = step.occupied();

                let resident: Vec<PageId> = step.frames.iter().flatten().copied().collect();
                let unique: HashSet<PageId> = resident.iter().copied().collect();
                prop_assert_eq!(unique.len(), resident.len());
                prop_assert!(unique.contains(&step.page));

                // Only a fault on a full frame set evicts.
                if step.evicted.is_some() {
                    prop_assert!(step.is_fault);
                    prop_assert_eq!(step.occupied(), w.capacity());
                }
            }
        }
    }

    #[test]
    fn prop_optimal_never_worse(w in workload_strategy()) {
        let cmp = compare(&w);
        let optimal = cmp.get(Policy::Optimal).unwrap().faults();
        prop_assert!(optimal <= cmp.get(Policy::Fifo).unwrap().faults());
        prop_assert!(optimal <= cmp.get(Policy::Lru).unwrap().faults());
    }

    #[test]
    fn prop_optimal_matches_rescan(w in workload_strategy()) {
        let result = simulate(Policy::Optimal, &w);
        let (faults, expected) = naive_optimal(&w);
        prop_assert_eq!(result.faults(), faults);
        prop_assert_eq!(snapshots(&result), expected);
    }

    #[test]
    fn prop_fifo_keeps_latest_admissions(w in workload_strategy()) {
        let result = simulate(Policy::Fifo, &w);
        let mut admitted: VecDeque<PageId> = VecDeque::new();

        for step in result.steps() {
            if step.is_fault {
                admitted.push_back(step.page);
                if admitted.len() > w.capacity() {
                    admitted.pop_front();
                }
            }
            let expected: HashSet<PageId> = admitted.iter().copied().collect();
            let resident: HashSet<PageId> = step.frames.iter().flatten().copied().collect();
            prop_assert_eq!(resident, expected);
        }
    }

    #[test]
    fn prop_lru_single_frame_faults_on_change(ids in prop::collection::vec(0u64..5, 1..60)) {
        let changes = ids.windows(2).filter(|w| w[0] != w[1]).count();
        let w = Workload::new(ReferenceSequence::from_ids(ids).unwrap(), 1).unwrap();
        prop_assert_eq!(simulate(Policy::Lru, &w).faults(), 1 + changes);
    }

    #[test]
    fn prop_single_frame_policies_identical(ids in prop::collection::vec(0u64..5, 1..60)) {
        let w = Workload::new(ReferenceSequence::from_ids(ids).unwrap(), 1).unwrap();
        let cmp = compare(&w);
        let fifo = snapshots(&cmp.results()[0]);
        for result in cmp.results() {
            prop_assert_eq!(&snapshots(result), &fifo);
        }
    }

    #[test]
    fn prop_enough_frames_one_fault_per_page(ids in prop::collection::vec(0u64..6, 1..60)) {
        let seq = ReferenceSequence::from_ids(ids).unwrap();
        let distinct = seq.distinct_count();
        let w = Workload::new(seq, 6).unwrap();
        for result in compare(&w).results() {
            prop_assert_eq!(result.faults(), distinct);
            prop_assert_eq!(result.evictions(), 0);
        }
    }

    #[test]
    fn prop_runs_are_deterministic(w in workload_strategy()) {
        for policy in Policy::ALL {
            prop_assert_eq!(simulate(policy, &w), simulate(policy, &w));
        }
    }
}
