//! Record model: fixed-arity sequences of string fields, plus the binary
//! [`Label`] carried by training records in their final column.

use std::fmt;

/// Binary verdict on a record.
///
/// Training files spell this `"true"`/`"false"` in the final CSV column; that
/// literal is parsed into `Label` at the CSV boundary ([`crate::csv_io`]) and
/// never leaks into the induction core, which only ever sees the typed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Valid,
    Invalid,
}

impl Label {
    /// Parses the wire-level literal. Case-sensitive, per the external
    /// interface contract.
    pub fn parse(literal: &str) -> Option<Self> {
        match literal {
            "true" => Some(Label::Valid),
            "false" => Some(Label::Invalid),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Valid => "true",
            Label::Invalid => "false",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, fixed-arity sequence of string fields.
///
/// `Record` is a thin wrapper around `Vec<String>` rather than a bare alias
/// so that field access (`record.field(i)`) can be written once and shared
/// between the predicate, training-index, and classifier modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields }
    }

    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// The value at `field`, or `None` if the record is too short. Absence
    /// is not an error: a predicate referencing a missing field simply
    /// fails.
    pub fn field(&self, field: usize) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn push_field(&mut self, value: String) {
        self.fields.push(value);
    }

    /// Splits off the final field, returning it separately. Used when a
    /// training record's label column must be removed from the
    /// classification view of the record.
    pub fn split_last(&self) -> Option<(&[String], &str)> {
        self.fields.split_last().map(|(last, rest)| (rest, last.as_str()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fields.join(","))
    }
}

/// A non-empty, uniform-arity group of records. Uniform arity is enforced at
/// construction so downstream code (`TrainingIndex`, `Classifier`) never has
/// to re-check it.
#[derive(Debug, Clone, Default)]
pub struct RecordGroup {
    records: Vec<Record>,
}

impl RecordGroup {
    pub fn new() -> Self {
        RecordGroup { records: Vec::new() }
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        RecordGroup { records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Record> {
        self.records.iter_mut()
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }
}

impl IntoIterator for RecordGroup {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
