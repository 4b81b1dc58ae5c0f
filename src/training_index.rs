//! [`TrainingIndex`] — the dual index of candidate [`PredicateGroup`]s to
//! the training records they cover, and back. This is the core data
//! structure the induction loop ([`crate::inducer`]) drives: an explicit
//! cursor + ignore-set selection protocol stands in for an iterator
//! because the selected element is about to be deleted, which cascades
//! deletions across many other entries and would invalidate a standard
//! iterator mid-walk.

use crate::config::PerformanceConfig;
use crate::error::{IlaError, IlaResult};
use crate::predicate::FieldPredicate;
use crate::predicate_group::PredicateGroup;
use crate::record::{Record, RecordGroup};
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

/// Stable handle into the index's record arena. Both the forward and
/// reverse maps reference records by `RecordId` rather than by value, so a
/// record is never duplicated or prematurely dropped while still
/// referenced from the other side of the bipartite relation.
pub type RecordId = usize;

/// The dual index over a single label class during learning.
pub struct TrainingIndex {
    arena: Vec<Record>,
    forward: HashMap<PredicateGroup, HashSet<RecordId>>,
    reverse: HashMap<RecordId, HashSet<PredicateGroup>>,
    ignore: HashSet<PredicateGroup>,
    cursor: Option<PredicateGroup>,
    classify_fields: Vec<usize>,
    arity: usize,
    parallel_select: bool,
    parallel_threshold: usize,
}

impl TrainingIndex {
    /// Builds the index at arity 1 from `records`, excluding `label_column`
    /// and every field in `exclude` from the classify-field set.
    ///
    /// Rejects: an empty record group, records of differing arities, zero
    /// record arity, or an exclusion set that removes every field.
    pub fn new(records: RecordGroup, label_column: usize, exclude: &[usize]) -> IlaResult<Self> {
        Self::with_performance(records, label_column, exclude, &PerformanceConfig::default())
    }

    /// As [`TrainingIndex::new`], but honoring the parallel-scan knobs in
    /// `performance`. The result is identical either way; only the
    /// wall-clock cost of `select_largest`/`select_next_largest` differs.
    pub fn with_performance(
        records: RecordGroup,
        label_column: usize,
        exclude: &[usize],
        performance: &PerformanceConfig,
    ) -> IlaResult<Self> {
        if records.is_empty() {
            return Err(IlaError::Input("training record group is empty".into()));
        }

        let arity = records
            .iter()
            .next()
            .expect("non-empty group has a first record")
            .arity();
        if arity == 0 {
            return Err(IlaError::Input("training records have zero fields".into()));
        }
        if records.iter().any(|r| r.arity() != arity) {
            return Err(IlaError::Input(
                "training records do not all have the same number of fields".into(),
            ));
        }

        let excluded: HashSet<usize> = exclude.iter().copied().collect();
        let classify_fields: Vec<usize> = (0..arity)
            .filter(|f| *f != label_column && !excluded.contains(f))
            .collect();
        if classify_fields.is_empty() {
            return Err(IlaError::Input(
                "exclusion list leaves no fields to classify on".into(),
            ));
        }

        let arena: Vec<Record> = records.into_records();
        let mut forward: HashMap<PredicateGroup, HashSet<RecordId>> = HashMap::new();
        let mut reverse: HashMap<RecordId, HashSet<PredicateGroup>> = HashMap::new();

        for (id, record) in arena.iter().enumerate() {
            for &field in &classify_fields {
                let value = record
                    .field(field)
                    .expect("classify field is within the uniform record arity");
                let group = PredicateGroup::single(FieldPredicate::new(field, value));
                forward.entry(group.clone()).or_default().insert(id);
                reverse.entry(id).or_default().insert(group);
            }
        }

        Ok(TrainingIndex {
            arena,
            forward,
            reverse,
            ignore: HashSet::new(),
            cursor: None,
            classify_fields,
            arity: 1,
            parallel_select: performance.parallel_select,
            parallel_threshold: performance.parallel_threshold,
        })
    }

    pub fn classify_fields(&self) -> &[usize] {
        &self.classify_fields
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// True iff the forward index has no keys; the induction loop
    /// terminates (successfully) when this becomes true.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// True iff a further [`TrainingIndex::incr_arity`] would necessarily
    /// abort, because every group already spans every classify field.
    pub fn one_filters_all_fields(&self) -> bool {
        self.arity >= self.classify_fields.len()
    }

    /// True iff `group` is currently a forward-index key.
    pub fn has_group(&self, group: &PredicateGroup) -> bool {
        self.forward.contains_key(group)
    }

    /// Resets the ignore set and cursor, then returns the forward key with
    /// the largest covered-record set (ties broken by `selection_key`).
    pub fn select_largest(&mut self) -> Option<PredicateGroup> {
        self.ignore.clear();
        self.cursor = None;
        let picked = self.pick_best(&self.ignore);
        self.cursor = picked.clone();
        picked
    }

    /// Adds the current cursor to the ignore set (if any), then returns the
    /// largest forward key not yet ignored.
    pub fn select_next_largest(&mut self) -> Option<PredicateGroup> {
        if let Some(cursor) = self.cursor.take() {
            self.ignore.insert(cursor);
        }
        let picked = self.pick_best(&self.ignore);
        self.cursor = picked.clone();
        picked
    }

    fn pick_best(&self, ignore: &HashSet<PredicateGroup>) -> Option<PredicateGroup> {
        let use_parallel = self.parallel_select && self.forward.len() >= self.parallel_threshold;
        if use_parallel {
            self.pick_best_parallel(ignore)
        } else {
            self.pick_best_sequential(ignore)
        }
    }

    fn pick_best_sequential(&self, ignore: &HashSet<PredicateGroup>) -> Option<PredicateGroup> {
        self.forward
            .iter()
            .filter(|(g, _)| !ignore.contains(*g))
            .max_by_key(|(g, records)| selection_key(g, records.len()))
            .map(|(g, _)| g.clone())
    }

    fn pick_best_parallel(&self, ignore: &HashSet<PredicateGroup>) -> Option<PredicateGroup> {
        use rayon::prelude::*;
        self.forward
            .par_iter()
            .filter(|(g, _)| !ignore.contains(*g))
            .max_by_key(|(g, records)| selection_key(g, records.len()))
            .map(|(g, _)| g.clone())
    }

    /// Deletes the cursor group and cascades the removal to every other
    /// group that covered one of its records. Returns the next selection
    /// so callers can drive the induction loop with a single call per
    /// iteration.
    pub fn delete_last(&mut self) -> IlaResult<Option<PredicateGroup>> {
        let group = self.cursor.take().ok_or_else(|| {
            IlaError::InvariantViolation("delete_last called with no cursor set".into())
        })?;

        let covered = self.forward.remove(&group).ok_or_else(|| {
            IlaError::InvariantViolation(format!(
                "cursor group {group} is not a forward-index key"
            ))
        })?;
        self.ignore.remove(&group);

        for record_id in &covered {
            let covering_groups = self.reverse.remove(record_id).ok_or_else(|| {
                IlaError::InvariantViolation(format!(
                    "record {record_id} covered by {group} has no reverse-index entry"
                ))
            })?;
            for other in covering_groups {
                if other == group {
                    continue;
                }
                let still_covered = self.forward.get_mut(&other).ok_or_else(|| {
                    IlaError::InvariantViolation(format!(
                        "group {other} referenced from reverse index but absent from forward index"
                    ))
                })?;
                still_covered.remove(record_id);
                if still_covered.is_empty() {
                    self.forward.remove(&other);
                    self.ignore.remove(&other);
                }
            }
        }

        Ok(self.select_next_largest())
    }

    /// Rebuilds the forward/reverse indexes so every group has arity
    /// `arity + 1`. Aborts (leaving `self` unchanged) if extending some
    /// group would drop one of its records entirely.
    pub fn incr_arity(&mut self) -> IlaResult<()> {
        let mut new_forward: HashMap<PredicateGroup, HashSet<RecordId>> = HashMap::new();
        let mut new_reverse: HashMap<RecordId, HashSet<PredicateGroup>> = HashMap::new();

        for (group, records) in &self.forward {
            for &record_id in records {
                let record = &self.arena[record_id];
                let next_fields: Vec<usize> = self
                    .classify_fields
                    .iter()
                    .copied()
                    .filter(|&f| f > group.last_field())
                    .collect();

                if next_fields.is_empty() {
                    if group.arity() == self.classify_fields.len() {
                        return Err(IlaError::InvariantViolation(format!(
                            "incr_arity would drop record {record_id} from group {group}: \
                             it already spans every classify field"
                        )));
                    }
                    // Group already exhausted this record's relevant fields;
                    // it contributes no descendants for this record.
                    continue;
                }

                for field in next_fields {
                    let value = record
                        .field(field)
                        .expect("classify field is within the uniform record arity");
                    let extended = group
                        .extend_with(FieldPredicate::new(field, value))
                        .map_err(|e| IlaError::InvariantViolation(e.to_string()))?;
                    new_forward.entry(extended.clone()).or_default().insert(record_id);
                    new_reverse.entry(record_id).or_default().insert(extended);
                }
            }
        }

        self.forward = new_forward;
        self.reverse = new_reverse;
        self.ignore.clear();
        self.cursor = None;
        self.arity += 1;
        Ok(())
    }

    /// Checks that the forward/reverse maps and the ignore set are still
    /// mutually consistent (every group covers the records it claims to,
    /// every record points back to every group covering it, no empty
    /// forward entries, uniform arity). Exposed for tests only; not used
    /// on the hot path.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) -> Result<(), String> {
        for (group, records) in &self.forward {
            if records.is_empty() {
                return Err(format!("I3 violated: {group} has an empty record set"));
            }
            if group.arity() != self.arity {
                return Err(format!(
                    "I4 violated: {group} has arity {} but index arity is {}",
                    group.arity(),
                    self.arity
                ));
            }
            for predicate in group.predicates() {
                if !self.classify_fields.contains(&predicate.field()) {
                    return Err(format!(
                        "I4 violated: {group} predicates on non-classify field {}",
                        predicate.field()
                    ));
                }
            }
            for record_id in records {
                let record = &self.arena[*record_id];
                if !group.passes(record) {
                    return Err(format!("I1 violated: {group} does not pass record {record_id}"));
                }
                match self.reverse.get(record_id) {
                    Some(groups) if groups.contains(group) => {}
                    _ => {
                        return Err(format!(
                            "I1 violated: {group} missing from reverse[{record_id}]"
                        ))
                    }
                }
            }
        }
        for (record_id, groups) in &self.reverse {
            for group in groups {
                match self.forward.get(group) {
                    Some(records) if records.contains(record_id) => {}
                    _ => {
                        return Err(format!(
                            "I2 violated: record {record_id} missing from forward[{group}]"
                        ))
                    }
                }
            }
        }
        for group in &self.ignore {
            if !self.forward.contains_key(group) {
                return Err(format!("I5 violated: ignored group {group} is not a forward key"));
            }
        }
        Ok(())
    }
}

fn selection_key(group: &PredicateGroup, count: usize) -> (usize, Reverse<usize>, Reverse<String>) {
    (count, Reverse(group.last_field()), Reverse(group.to_string()))
}
