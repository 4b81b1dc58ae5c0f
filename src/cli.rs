//! CLI argument surface. A single binary, four subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ila", about = "Categorical rule induction (ILA) for tabular records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Learn a RuleSet from a training file and classify another file with it.
    Classify {
        training_file: PathBuf,
        to_classify_file: PathBuf,
        output_file: PathBuf,
        /// Comma-separated list of field indices to exclude from induction
        /// (no spaces), e.g. `1,3`.
        #[arg(value_parser = parse_ignore_fields)]
        ignore_fields: Option<Vec<usize>>,
    },
    /// Partition a file into a contiguous slice and its complement.
    Slice {
        input_file: PathBuf,
        slice_out: PathBuf,
        remainder_out: PathBuf,
        /// 1-based index of the first line in the slice.
        first_line: usize,
        /// Number of lines in the slice.
        line_count: usize,
    },
    /// Remove the last comma-separated field of each line.
    Strip { input_file: PathBuf, output_file: PathBuf },
    /// Compare a baseline file and a results file, reporting last-field
    /// differences for otherwise-identical record bodies.
    Compare {
        baseline_file: PathBuf,
        results_file: PathBuf,
        mismatches_file: PathBuf,
    },
}

/// Parses a comma-separated, space-free list of non-negative field indices.
/// An empty string parses to an empty list (no exclusions).
fn parse_ignore_fields(raw: &str) -> Result<Vec<usize>, String> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("invalid field index {s:?} in ignore-fields list"))
        })
        .collect()
}
