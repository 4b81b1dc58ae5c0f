//! [`Inducer`]: orchestrates the Induction Learning Algorithm (ILA) by
//! splitting training data by label and driving a pair of
//! [`TrainingIndex`]es in lock-step. A rule is safe to emit iff it selects
//! no valid training record; growing the valid-label index in step with
//! the invalid one keeps that membership check meaningful, since both
//! operate over the same arity at every point in the loop. Each outer
//! iteration either removes at least one group from the invalid index or
//! strictly increases arity, and arity is bounded by the number of
//! classify fields, so the loop always terminates.

use crate::config::PerformanceConfig;
use crate::error::{IlaError, IlaResult};
use crate::record::{Label, RecordGroup};
use crate::rule_set::RuleSet;
use crate::training_index::TrainingIndex;

/// Learns a [`RuleSet`] from a labelled training set.
///
/// `training` must carry the label in its final field as the literal
/// `"true"`/`"false"`; `exclude` is an optional list of classify-field
/// indices to drop from induction (e.g. an operator-chosen exclusion
/// list).
pub fn induce(training: &RecordGroup, exclude: &[usize]) -> IlaResult<RuleSet> {
    induce_with_performance(training, exclude, &PerformanceConfig::default())
}

/// As [`induce`], but honoring the parallel-scan knobs. Output is
/// identical to the sequential path.
pub fn induce_with_performance(
    training: &RecordGroup,
    exclude: &[usize],
    performance: &PerformanceConfig,
) -> IlaResult<RuleSet> {
    if training.is_empty() {
        return Err(IlaError::Input("training record group is empty".into()));
    }

    let label_column = training
        .iter()
        .next()
        .expect("non-empty group has a first record")
        .arity()
        .checked_sub(1)
        .ok_or_else(|| IlaError::Input("training records have zero fields".into()))?;

    if training.iter().any(|r| r.arity() < 2) {
        return Err(IlaError::Input(
            "training records must have at least two fields (classify fields plus label)".into(),
        ));
    }

    let mut valid_records = RecordGroup::new();
    let mut invalid_records = RecordGroup::new();
    for record in training.iter() {
        let literal = record
            .field(label_column)
            .expect("label column is within the record's arity");
        match Label::parse(literal) {
            Some(Label::Valid) => valid_records.push(record.clone()),
            Some(Label::Invalid) => invalid_records.push(record.clone()),
            None => {
                return Err(IlaError::Input(format!(
                    "label field must be exactly \"true\" or \"false\", got {literal:?}"
                )))
            }
        }
    }

    if valid_records.is_empty() || invalid_records.is_empty() {
        return Err(IlaError::Input(
            "training data must contain at least one record of each label".into(),
        ));
    }

    let mut valid_index =
        TrainingIndex::with_performance(valid_records, label_column, exclude, performance)?;
    let mut invalid_index =
        TrainingIndex::with_performance(invalid_records, label_column, exclude, performance)?;

    let mut rules = RuleSet::new();

    while !invalid_index.is_empty() && !invalid_index.one_filters_all_fields() {
        tracing::debug!(
            arity = invalid_index.arity(),
            rules_so_far = rules.len(),
            "induction: starting selection pass at this arity"
        );

        let mut candidate = invalid_index.select_largest();
        while let Some(group) = candidate {
            if valid_index.has_group(&group) {
                candidate = invalid_index.select_next_largest();
            } else {
                tracing::debug!(rule = %group, "induction: emitting rule");
                rules.push(group);
                candidate = invalid_index.delete_last()?;
            }
        }

        if !invalid_index.is_empty() && !invalid_index.one_filters_all_fields() {
            invalid_index.incr_arity()?;
            valid_index.incr_arity()?;
        }
    }

    if !invalid_index.is_empty() {
        return Err(IlaError::ContradictoryTraining);
    }

    Ok(rules)
}
