//! pagesim - page replacement simulation with FIFO, LRU and Optimal eviction.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          pagesim                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────┐      ┌─────────────────────────┐  │
//! │  │  reference/          │      │  report/                │  │
//! │  │  generator + parser  │      │  frame table + JSON     │  │
//! │  └──────────┬───────────┘      └────────────▲────────────┘  │
//! │             ↓                               │               │
//! │  ┌──────────────────────────────────────────┴────────────┐  │
//! │  │                 Simulation (sim/)                     │  │
//! │  │   Workload → simulate() → SimulationResult            │  │
//! │  │   ┌───────────────────────────────────────────────┐   │  │
//! │  │   │   Replacers: FIFO | LRU | Optimal             │   │  │
//! │  │   └───────────────────────────────────────────────┘   │  │
//! │  │        FrameSet + FrameHistory + RunStats             │  │
//! │  └───────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`sim`] - The simulator and eviction policies
//! - [`reference`] - Reference sequence generation and parsing
//! - [`report`] - Text and JSON rendering of results
//! - [`logging`] - Logger setup
//!
//! # Quick Start
//! ```
//! use pagesim::{compare, Policy, ReferenceSequence, Workload};
//!
//! let seq = ReferenceSequence::from_ids([7, 0, 1, 2, 0, 3, 0, 4]).unwrap();
//! let workload = Workload::new(seq, 3).unwrap();
//!
//! let comparison = compare(&workload);
//! let optimal = comparison.get(Policy::Optimal).unwrap();
//! assert!(optimal.faults() <= comparison.get(Policy::Lru).unwrap().faults());
//! ```

pub mod common;
pub mod logging;
pub mod reference;
pub mod report;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::MAX_FRAMES;
pub use common::{Error, FrameId, PageId, Result};

pub use sim::{
    compare, compare_parallel, simulate, Comparison, FrameHistory, FrameSet, Policy,
    ReferenceSequence, RunStats, SimulationResult, SimulationStep, Workload,
};
