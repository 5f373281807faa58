//! Run statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::result::SimulationResult;

/// Counters summarising one simulation run.
///
/// Unlike `SimulationResult`, this is small and `Copy`, so it can be
/// printed, serialized and compared freely.
///
/// # Example
/// ```
/// use pagesim::{simulate, Policy, ReferenceSequence, Workload};
///
/// let seq = ReferenceSequence::from_ids([1, 2, 1, 3]).unwrap();
/// let workload = Workload::new(seq, 2).unwrap();
/// let stats = simulate(Policy::Lru, &workload).stats();
/// assert_eq!(stats.faults, 3);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of references processed.
    pub accesses: u64,

    /// Accesses that found their page resident.
    pub hits: u64,

    /// Accesses that did not.
    pub faults: u64,

    /// Faults that displaced a resident page.
    pub evictions: u64,
}

impl RunStats {
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            accesses: result.steps().len() as u64,
            hits: result.hits() as u64,
            faults: result.faults() as u64,
            evictions: result.evictions() as u64,
        }
    }

    /// Hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }

    /// Fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.faults as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        let stats = RunStats {
            accesses: 10,
            hits: 7,
            faults: 3,
            evictions: 1,
        };
        assert_eq!(stats.hit_rate(), 0.7);
        assert_eq!(stats.fault_rate(), 0.3);
    }

    #[test]
    fn test_zero_accesses() {
        let stats = RunStats {
            accesses: 0,
            hits: 0,
            faults: 0,
            evictions: 0,
        };
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = RunStats {
            accesses: 100,
            hits: 80,
            faults: 20,
            evictions: 5,
        };
        let display = format!("{}", stats);

        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
