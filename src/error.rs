//! Error taxonomy for the crate: one `thiserror`-derived enum with
//! `#[from]` conversions only where the wrapped error type is
//! unambiguous, and each I/O variant tagged with the path that failed.

use std::io;
use std::path::PathBuf;

/// The crate's error taxonomy, plus the I/O plumbing needed to surface
/// errors from file-backed operations.
#[derive(Debug, thiserror::Error)]
pub enum IlaError {
    /// Malformed CSV, inconsistent field counts, missing file, missing
    /// required labels, empty dataset, an exclusion list covering every
    /// field, or an unparseable `ignore-fields` argument.
    #[error("input error: {0}")]
    Input(String),

    /// Induction could not classify every invalid training record because
    /// a valid and an invalid record share all classify-field values.
    #[error(
        "contradictory training data: a valid and an invalid record agree on every classify field"
    )]
    ContradictoryTraining,

    /// The `TrainingIndex` dual-index invariant drifted out of sync. This
    /// should be unreachable; it indicates a bug in the induction engine.
    /// Learning is aborted and no partial `RuleSet` is returned.
    #[error("internal invariant violated in training index: {0}")]
    InvariantViolation(String),

    /// A file could not be written.
    #[error("failed to write output file {path}: {source}")]
    Output { path: PathBuf, source: io::Error },

    /// Wraps an I/O failure that occurred while reading a file, tagged
    /// with the path for a useful message.
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
}

impl IlaError {
    /// Short tag used by the CLI for scripting.
    pub fn taxonomy_tag(&self) -> &'static str {
        match self {
            IlaError::Input(_) => "input",
            IlaError::ContradictoryTraining => "contradictory-training",
            IlaError::InvariantViolation(_) => "invariant-violation",
            IlaError::Output { .. } | IlaError::Read { .. } => "output",
        }
    }
}

/// Result alias used throughout the crate.
pub type IlaResult<T> = Result<T, IlaError>;
