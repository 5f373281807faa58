//! Presentation of simulation results.
//!
//! Read-only consumers of the simulator's output:
//! - [`render_table`] / [`render_comparison`] - the text frame table
//! - [`ComparisonReport`] - the same data as JSON

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::Result;
use crate::sim::{Comparison, FrameHistory, ReferenceSequence, RunStats, SimulationResult, Workload};

/// Width of one table column, excluding the `" "` and `" |"` around it.
const CELL_WIDTH: usize = 5;

/// Width of the `"Frame N  |"` label column.
const LABEL_WIDTH: usize = 8;

/// Render the frame table for one run.
///
/// ```text
/// Frames ↓ |     1 |     2 |     3 |
/// -----------------------------------
/// Frame 1  |     1 |     1 |     1 |
/// Frame 2  |       |     2 |     2 |
/// ```
///
/// The header lists the reference sequence; each following row is one
/// frame slot, blank where the slot was empty.
pub fn render_table(sequence: &ReferenceSequence, history: &FrameHistory) -> String {
    let mut out = String::new();

    out.push_str("Frames ↓ |");
    for page in sequence.iter() {
        let _ = write!(out, " {:>width$} |", page, width = CELL_WIDTH);
    }
    out.push('\n');

    out.push_str(&"-".repeat(LABEL_WIDTH + (CELL_WIDTH + 2) * sequence.len()));
    out.push('\n');

    for (frame_id, row) in history.rows() {
        let _ = write!(out, "Frame {:<2} |", frame_id.0 + 1);
        for value in row {
            match value {
                Some(page) => {
                    let _ = write!(out, " {:>width$} |", page, width = CELL_WIDTH);
                }
                None => {
                    let _ = write!(out, " {:>width$} |", "", width = CELL_WIDTH);
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Title, frame table and fault count for one run.
pub fn render_result(sequence: &ReferenceSequence, result: &SimulationResult) -> String {
    format!(
        "{} Simulation\n\n{}Page Faults: {}\n",
        result.policy(),
        render_table(sequence, &result.history()),
        result.faults()
    )
}

/// The reference string followed by every run in `comparison`.
pub fn render_comparison(workload: &Workload, comparison: &Comparison) -> String {
    let pages: Vec<String> = workload.sequence().iter().map(|p| p.to_string()).collect();
    let mut out = format!("Page Reference String:\n[{}]\n\n", pages.join(", "));

    for result in comparison.results() {
        out.push_str(&render_result(workload.sequence(), result));
        out.push('\n');
    }
    out
}

/// One policy's entry in a [`ComparisonReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyReport {
    #[serde(flatten)]
    pub result: SimulationResult,
    pub stats: RunStats,
}

/// Machine-readable form of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub sequence: ReferenceSequence,
    pub capacity: usize,
    pub policies: Vec<PolicyReport>,
}

impl ComparisonReport {
    pub fn new(workload: &Workload, comparison: &Comparison) -> Self {
        Self {
            sequence: workload.sequence().clone(),
            capacity: workload.capacity(),
            policies: comparison
                .results()
                .iter()
                .map(|result| PolicyReport {
                    stats: result.stats(),
                    result: result.clone(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write pretty-printed JSON to `writer`.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Write the report to a file, replacing it if it exists.
    ///
    /// # Errors
    /// - I/O errors from creating or writing the file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
