//! # ila — categorical rule induction
//!
//! Learns a classifier for tabular records from a labelled training set,
//! then applies it to unlabelled records. Unlike a statistical model, the
//! learned classifier is a *set of categorical filter rules*: each rule
//! fixes a small number of field values, and a record is declared invalid
//! if it matches any rule.
//!
//! The learner is an instantiation of the Induction Learning Algorithm
//! (ILA): it searches for the shortest conjunctive filters that separate
//! invalid training records from every valid one, preferring generality
//! (fewer fields) over specificity, and iteratively removes covered
//! records until every invalid training record is explained.
//!
//! ## Module map
//!
//! | Module | Role |
//! |--------|------|
//! | [`predicate`] | `FieldPredicate` — one `(field, value)` equality test |
//! | [`predicate_group`] | `PredicateGroup` — a conjunction of predicates (a rule) |
//! | [`rule_set`] | `RuleSet` — a disjunction of predicate groups (the classifier) |
//! | [`training_index`] | `TrainingIndex` — the dual forward/reverse index the induction loop drives |
//! | [`inducer`] | Orchestrates ILA over a labelled training set |
//! | [`classifier`] | Applies a learned `RuleSet` to unlabelled records |
//! | [`record`] | The `Record`/`RecordGroup`/`Label` data model |
//! | [`csv_io`] | Line-oriented CSV reader/writer |
//! | [`synthetic`] | Synthetic labelled-data generator for tests and demos |
//! | [`commands`] | CLI subcommand implementations (`classify`/`slice`/`strip`/`compare`) |
//! | [`config`] | Runtime configuration (parallelism knobs, logging) |
//! | [`error`] | Error taxonomy |
//!
//! ## Example
//!
//! ```
//! use ila::inducer::induce;
//! use ila::classifier::classify_group;
//! use ila::record::{Record, RecordGroup};
//!
//! let training = RecordGroup::from_records(vec![
//!     Record::new(vec!["value1".into(), "value2".into(), "true".into()]),
//!     Record::new(vec!["value1".into(), "value3".into(), "false".into()]),
//! ]);
//! let rules = induce(&training, &[]).unwrap();
//!
//! let mut unlabelled = RecordGroup::from_records(vec![
//!     Record::new(vec!["value1".into(), "value4".into()]),
//! ]);
//! classify_group(&rules, &mut unlabelled);
//! assert_eq!(unlabelled.get(0).unwrap().field(2), Some("true"));
//! ```

pub mod classifier;
pub mod commands;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod inducer;
pub mod predicate;
pub mod predicate_group;
pub mod record;
pub mod rule_set;
pub mod synthetic;
pub mod training_index;

pub use classifier::classify_group;
pub use config::Config;
pub use error::{IlaError, IlaResult};
pub use inducer::induce;
pub use predicate::FieldPredicate;
pub use predicate_group::PredicateGroup;
pub use record::{Label, Record, RecordGroup};
pub use rule_set::RuleSet;
pub use training_index::TrainingIndex;
