//! CSV reader/writer — the boundary adapter between the core's `Record`
//! model and line-oriented, comma-separated files. No escaping, no
//! quoting: a field may not contain a literal comma.

use crate::error::{IlaError, IlaResult};
use crate::record::{Record, RecordGroup};
use std::fs;
use std::path::Path;

/// Reads a CSV file into a [`RecordGroup`]. Blank lines are skipped. All
/// non-blank lines must split into the same number of fields; otherwise
/// this returns `InputError`.
pub fn read_records(path: impl AsRef<Path>) -> IlaResult<RecordGroup> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| IlaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut group = RecordGroup::new();
    let mut expected_arity: Option<usize> = None;
    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split(',').map(str::to_string).collect();
        match expected_arity {
            None => expected_arity = Some(fields.len()),
            Some(arity) if arity != fields.len() => {
                return Err(IlaError::Input(format!(
                    "{}: inconsistent field count (expected {arity}, got {}) in line {line:?}",
                    path.display(),
                    fields.len()
                )))
            }
            Some(_) => {}
        }
        group.push(Record::new(fields));
    }

    if group.is_empty() {
        return Err(IlaError::Input(format!("{}: no records found", path.display())));
    }
    Ok(group)
}

/// Writes a [`RecordGroup`] as CSV, one record per line, each field joined
/// by a single `,` and a trailing newline per record.
pub fn write_records(path: impl AsRef<Path>, group: &RecordGroup) -> IlaResult<()> {
    let path = path.as_ref();
    let mut body = String::new();
    for record in group.iter() {
        body.push_str(&record.to_string());
        body.push('\n');
    }
    fs::write(path, body).map_err(|source| IlaError::Output {
        path: path.to_path_buf(),
        source,
    })
}
