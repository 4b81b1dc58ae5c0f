//! Command implementations backing the CLI subcommands. Kept separate
//! from `cli.rs` (argument parsing) and `main.rs` (wiring) so each
//! command can be exercised directly from integration tests without
//! spawning the binary.

use crate::classifier::classify_group_with_performance;
use crate::config::PerformanceConfig;
use crate::csv_io;
use crate::error::{IlaError, IlaResult};
use crate::inducer::induce_with_performance;
use std::fs;
use std::path::Path;

/// `ila classify <training> <to-classify> <output> [ignore-fields]`
pub fn classify(
    training_file: &Path,
    to_classify_file: &Path,
    output_file: &Path,
    ignore_fields: &[usize],
    performance: &PerformanceConfig,
) -> IlaResult<String> {
    let training = csv_io::read_records(training_file)?;
    let mut to_classify = csv_io::read_records(to_classify_file)?;

    let rules = induce_with_performance(&training, ignore_fields, performance)?;
    classify_group_with_performance(&rules, &mut to_classify, performance);
    csv_io::write_records(output_file, &to_classify)?;

    Ok(rules.to_string())
}

/// `ila slice <in> <slice-out> <remainder-out> <first-line> <line-count>`
///
/// Operates on raw lines, not parsed records: slicing is a file-level
/// transform independent of the record model.
pub fn slice(
    input_file: &Path,
    slice_out: &Path,
    remainder_out: &Path,
    first_line: usize,
    line_count: usize,
) -> IlaResult<()> {
    let contents = read_to_string(input_file)?;
    let lines: Vec<&str> = contents.lines().collect();

    if first_line == 0 || first_line > lines.len() {
        return Err(IlaError::Input(format!(
            "{}: input has {} lines, cannot start a slice at line {}",
            input_file.display(),
            lines.len(),
            first_line
        )));
    }

    let start = first_line - 1;
    let end = (start + line_count).min(lines.len());

    let slice_body = join_with_newline(&lines[start..end]);
    let remainder_body = join_with_newline(&[&lines[..start], &lines[end..]].concat());

    write_to_file(slice_out, &slice_body)?;
    write_to_file(remainder_out, &remainder_body)?;
    Ok(())
}

/// `ila strip <in> <out>` — removes the last comma-separated field of each
/// line.
pub fn strip(input_file: &Path, output_file: &Path) -> IlaResult<()> {
    let contents = read_to_string(input_file)?;
    let stripped: Vec<String> = contents
        .lines()
        .map(|line| match line.rfind(',') {
            Some(pos) => line[..pos].to_string(),
            None => String::new(),
        })
        .collect();
    write_to_file(output_file, &join_with_newline_owned(&stripped))?;
    Ok(())
}

/// `ila compare <baseline> <results> <mismatches-out>` — record bodies
/// (everything before the last comma) must agree line-for-line; only the
/// last field may differ. Reports mismatches; a body or count disagreement
/// is a hard error.
pub fn compare(baseline_file: &Path, results_file: &Path, mismatches_file: &Path) -> IlaResult<usize> {
    let baseline = read_to_string(baseline_file)?;
    let results = read_to_string(results_file)?;

    let baseline_lines: Vec<&str> = baseline.lines().collect();
    let results_lines: Vec<&str> = results.lines().collect();

    if baseline_lines.len() != results_lines.len() {
        return Err(IlaError::Input(format!(
            "record count mismatch: baseline has {}, results has {}",
            baseline_lines.len(),
            results_lines.len()
        )));
    }

    let mut mismatches = Vec::new();
    for (i, (b, r)) in baseline_lines.iter().zip(results_lines.iter()).enumerate() {
        let (b_body, b_last) = split_last_field(b)?;
        let (r_body, r_last) = split_last_field(r)?;
        if b_body != r_body {
            return Err(IlaError::Input(format!(
                "record body mismatch at line {}: {b_body:?} vs {r_body:?}",
                i + 1
            )));
        }
        if b_last != r_last {
            mismatches.push(format!("{b_body},{b_last},{r_last}"));
        }
    }

    write_to_file(mismatches_file, &join_with_newline_owned(&mismatches))?;
    Ok(mismatches.len())
}

fn split_last_field(line: &str) -> IlaResult<(&str, &str)> {
    line.rfind(',')
        .map(|pos| (&line[..pos], &line[pos + 1..]))
        .ok_or_else(|| IlaError::Input(format!("line has no comma-separated fields: {line:?}")))
}

fn read_to_string(path: &Path) -> IlaResult<String> {
    fs::read_to_string(path).map_err(|source| IlaError::Read { path: path.to_path_buf(), source })
}

fn write_to_file(path: &Path, body: &str) -> IlaResult<()> {
    let mut body = body.to_string();
    if !body.is_empty() {
        body.push('\n');
    }
    fs::write(path, body).map_err(|source| IlaError::Output { path: path.to_path_buf(), source })
}

fn join_with_newline(lines: &[&str]) -> String {
    lines.join("\n")
}

fn join_with_newline_owned(lines: &[String]) -> String {
    lines.join("\n")
}
