//! Page replacement simulation.
//!
//! Pure and side-effect free: nothing here renders or does I/O.
//!
//! # Components
//! - [`Workload`] / [`ReferenceSequence`] - Validated input
//! - [`FrameSet`] - Fixed frame slots a run fills
//! - [`replacer`] - Eviction policies (FIFO, LRU, Optimal)
//! - [`simulate`] - The driver loop
//! - [`FrameHistory`] - Per-frame view of a trace, for the frame table
//! - [`RunStats`] - Summary counters

mod frame_set;
mod history;
pub mod replacer;
mod result;
mod simulator;
mod stats;
mod workload;

pub use frame_set::FrameSet;
pub use history::FrameHistory;
pub use replacer::{Policy, Replacer};
pub use result::{SimulationResult, SimulationStep};
pub use simulator::{
    compare, compare_parallel, compare_policies, compare_policies_parallel, simulate,
    Comparison, Simulator,
};
pub use stats::RunStats;
pub use workload::{parse_capacity, ReferenceSequence, Workload};
