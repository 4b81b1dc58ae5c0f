//! [`Classifier`]: applies a learned (or hand-built) [`RuleSet`] to
//! unlabelled records, appending the verdict as a new trailing field.

use crate::config::PerformanceConfig;
use crate::record::{Label, RecordGroup};
use crate::rule_set::RuleSet;

/// Applies `rules` to every record in `group`, appending `"true"` or
/// `"false"` as a new trailing field. Mutates in place; never reorders or
/// removes records. A record too short for one of the rule set's
/// predicates simply fails that predicate — it is never an error to
/// classify a short record.
pub fn classify_group(rules: &RuleSet, group: &mut RecordGroup) {
    classify_group_with_performance(rules, group, &PerformanceConfig::default());
}

/// As [`classify_group`], but honoring the parallel-classify knob. Labels
/// are identical to the sequential path; only wall-clock cost differs.
pub fn classify_group_with_performance(
    rules: &RuleSet,
    group: &mut RecordGroup,
    performance: &PerformanceConfig,
) {
    let use_parallel =
        performance.parallel_classify && group.len() >= performance.parallel_threshold;

    if use_parallel {
        use rayon::prelude::*;
        let labels: Vec<Label> = group
            .iter()
            .collect::<Vec<_>>()
            .par_iter()
            .map(|record| classify_one(rules, record))
            .collect();
        for (record, label) in group.iter_mut().zip(labels) {
            record.push_field(label.as_str().to_string());
        }
    } else {
        for record in group.iter_mut() {
            let label = classify_one(rules, record);
            record.push_field(label.as_str().to_string());
        }
    }
}

fn classify_one(rules: &RuleSet, record: &crate::record::Record) -> Label {
    if rules.passes(record) {
        Label::Invalid
    } else {
        Label::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::FieldPredicate;
    use crate::predicate_group::PredicateGroup;
    use crate::record::Record;

    fn rule_set() -> RuleSet {
        let mut rules = RuleSet::new();
        rules.push(PredicateGroup::single(FieldPredicate::new(1, "value3")));
        rules
    }

    #[test]
    fn classify_examples() {
        let rules = rule_set();
        let mut group = RecordGroup::from_records(vec![
            Record::new(vec!["value1".into(), "value4".into()]),
            Record::new(vec!["value5".into(), "value3".into()]),
        ]);
        classify_group(&rules, &mut group);
        let records: Vec<_> = group.into_records();
        assert_eq!(records[0].field(2), Some("true"));
        assert_eq!(records[1].field(2), Some("false"));
    }

    #[test]
    fn short_record_classifies_valid() {
        let rules = rule_set();
        let mut group = RecordGroup::from_records(vec![Record::new(vec!["value1".into()])]);
        classify_group(&rules, &mut group);
        let records = group.into_records();
        assert_eq!(records[0].field(1), Some("true"));
    }

    #[test]
    fn classification_is_idempotent_given_stripped_label() {
        let rules = rule_set();
        let mut group = RecordGroup::from_records(vec![Record::new(vec!["a".into(), "value3".into()])]);
        classify_group(&rules, &mut group);
        let first_label = group.get(0).unwrap().field(2).unwrap().to_string();

        // Strip the appended label and re-classify.
        let stripped: Vec<Record> = group
            .into_records()
            .into_iter()
            .map(|r| {
                let (rest, _) = r.split_last().unwrap();
                Record::new(rest.to_vec())
            })
            .collect();
        let mut group2 = RecordGroup::from_records(stripped);
        classify_group(&rules, &mut group2);
        let second_label = group2.get(0).unwrap().field(2).unwrap().to_string();

        assert_eq!(first_label, second_label);
    }

    #[test]
    fn parallel_and_sequential_paths_agree() {
        let rules = rule_set();
        let mut sequential = RecordGroup::from_records(
            (0..50)
                .map(|i| Record::new(vec![format!("a{i}"), if i % 3 == 0 { "value3".into() } else { format!("b{i}") }]))
                .collect(),
        );
        let mut parallel = sequential.clone();
        classify_group(&rules, &mut sequential);
        let performance = PerformanceConfig { parallel_classify: true, parallel_threshold: 1, ..PerformanceConfig::default() };
        classify_group_with_performance(&rules, &mut parallel, &performance);

        let seq_labels: Vec<_> = sequential.iter().map(|r| r.field(2).unwrap().to_string()).collect();
        let par_labels: Vec<_> = parallel.iter().map(|r| r.field(2).unwrap().to_string()).collect();
        assert_eq!(seq_labels, par_labels);
    }
}
