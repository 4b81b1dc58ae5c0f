//! [`PredicateGroup`]: a sorted, unique-per-field conjunction of
//! [`FieldPredicate`]s — a filter, or rule, in this crate's terms.

use crate::predicate::FieldPredicate;
use crate::record::Record;
use std::fmt;

/// Construction-time failure for [`PredicateGroup`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    #[error("a predicate group must contain at least one predicate")]
    Empty,
    #[error("field {0} appears more than once in the same predicate group")]
    DuplicateField(usize),
}

/// An immutable, non-empty conjunction of [`FieldPredicate`]s with no two
/// predicates sharing a field index. Passes a record iff every member
/// predicate passes.
///
/// Kept sorted by field index internally so that `Display`, `Hash`, and
/// equality are all defined in terms of one canonical ordering
/// (`[f1->v1, f2->v2, …]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PredicateGroup {
    predicates: Vec<FieldPredicate>,
}

impl PredicateGroup {
    /// Builds a group from a single predicate. Cannot fail.
    pub fn single(predicate: FieldPredicate) -> Self {
        PredicateGroup { predicates: vec![predicate] }
    }

    /// Builds a group from a non-empty list of predicates, sorting and
    /// validating the unique-field invariant.
    pub fn from_predicates(mut predicates: Vec<FieldPredicate>) -> Result<Self, GroupError> {
        if predicates.is_empty() {
            return Err(GroupError::Empty);
        }
        predicates.sort();
        for pair in predicates.windows(2) {
            if pair[0].same_field_as(&pair[1]) {
                return Err(GroupError::DuplicateField(pair[0].field()));
            }
        }
        Ok(PredicateGroup { predicates })
    }

    /// Derives one predicate per requested field index from `record`, in
    /// field order. `fields` must itself be free of duplicates; the caller
    /// (`TrainingIndex`) always supplies `classify_fields`, which is.
    pub fn from_record_fields(record: &Record, fields: &[usize]) -> Result<Self, GroupError> {
        let predicates = fields
            .iter()
            .filter_map(|&f| record.field(f).map(|v| FieldPredicate::new(f, v)))
            .collect();
        Self::from_predicates(predicates)
    }

    /// Builds a new group by adding one predicate on a field not already
    /// present in `self`.
    pub fn extend_with(&self, predicate: FieldPredicate) -> Result<Self, GroupError> {
        let mut predicates = self.predicates.clone();
        predicates.push(predicate);
        Self::from_predicates(predicates)
    }

    pub fn arity(&self) -> usize {
        self.predicates.len()
    }

    /// The maximum field index among the group's predicates. Sorted order
    /// guarantees this is simply the last element.
    pub fn last_field(&self) -> usize {
        self.predicates
            .last()
            .expect("PredicateGroup is never empty")
            .field()
    }

    pub fn predicates(&self) -> &[FieldPredicate] {
        &self.predicates
    }

    /// True iff every predicate in the group passes `record`.
    pub fn passes(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.passes(record))
    }
}

impl fmt::Display for PredicateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, predicate) in self.predicates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}->{}", predicate.field(), predicate.value())?;
        }
        write!(f, "]")
    }
}
