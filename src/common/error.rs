//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Simulation itself cannot fail. Every variant except `Io` and `Json` is
/// a caller input error, reported before any policy runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Frame count outside `1..=max`.
    #[error("invalid frame count {capacity}: must be between 1 and {max}")]
    InvalidCapacity { capacity: i64, max: usize },

    /// Frame count that is not an integer at all.
    #[error("invalid frame count '{0}': expected an integer")]
    InvalidFrameCount(String),

    /// The reference sequence has no pages.
    #[error("reference sequence is empty")]
    EmptySequence,

    /// A deserialized simulation result whose counts disagree with its steps.
    #[error("inconsistent simulation result: {0}")]
    InvalidResult(String),

    /// A token in a reference sequence is not a page id.
    #[error("invalid page reference '{0}': expected a non-negative integer")]
    InvalidPage(String),

    /// I/O error while writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
