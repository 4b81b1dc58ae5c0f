//! Synthetic data generator — a test-fixture collaborator, not a feature
//! surface. Produces labelled [`RecordGroup`]s by running a hand-built
//! "ground truth" [`RuleSet`] over randomly produced field values, so
//! property tests can exercise the [`crate::inducer`] against data where
//! the correct answer is known in advance.

use crate::record::{Label, Record, RecordGroup};
use crate::rule_set::RuleSet;
use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;

/// Produces a field value given its index and an RNG. The default
/// producer returns a short alphanumeric string drawn from a small
/// alphabet, so that generated records collide on individual field values
/// often enough to give the inducer multiple candidate groups to choose
/// between.
pub trait FieldProducer {
    fn produce(&self, field: usize, rng: &mut dyn rand::RngCore) -> String;
}

/// Default producer: picks one of `alphabet_size` short strings per field,
/// independent of the field index.
pub struct SmallAlphabetProducer {
    pub alphabet_size: u32,
}

impl Default for SmallAlphabetProducer {
    fn default() -> Self {
        SmallAlphabetProducer { alphabet_size: 4 }
    }
}

impl FieldProducer for SmallAlphabetProducer {
    fn produce(&self, _field: usize, rng: &mut dyn rand::RngCore) -> String {
        let choice = rng.gen_range(0..self.alphabet_size);
        format!("v{choice}")
    }
}

/// A producer drawing fully random alphanumeric values (no collisions
/// expected); useful for stress-testing arity growth.
pub struct RandomProducer {
    pub length: usize,
}

impl FieldProducer for RandomProducer {
    fn produce(&self, _field: usize, rng: &mut dyn rand::RngCore) -> String {
        Alphanumeric.sample_string(rng, self.length)
    }
}

/// Generates `count` labelled records of `arity` classify fields (plus the
/// trailing label field), labelling each by `ground_truth`'s verdict.
pub fn generate(
    count: usize,
    arity: usize,
    producer: &dyn FieldProducer,
    ground_truth: &RuleSet,
    rng: &mut dyn rand::RngCore,
) -> RecordGroup {
    let mut group = RecordGroup::new();
    for _ in 0..count {
        let mut fields: Vec<String> = (0..arity).map(|f| producer.produce(f, rng)).collect();
        let probe = Record::new(fields.clone());
        let label = if ground_truth.passes(&probe) { Label::Invalid } else { Label::Valid };
        fields.push(label.as_str().to_string());
        group.push(Record::new(fields));
    }
    group
}
