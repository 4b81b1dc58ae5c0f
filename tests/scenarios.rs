//! End-to-end scenario tests: training a classifier end to end through
//! CSV files and the CLI command layer, rather than the in-crate unit
//! tests which exercise `induce`/`classify_group` directly.

use ila::commands;
use ila::config::PerformanceConfig;
use ila::error::IlaError;
use std::fs;
use tempfile::tempdir;

#[test]
fn single_field_rule_via_files() {
    let dir = tempdir().unwrap();
    let training = dir.path().join("training.csv");
    let to_classify = dir.path().join("unlabelled.csv");
    let output = dir.path().join("output.csv");

    fs::write(&training, "value1,value2,true\nvalue1,value3,false\n").unwrap();
    fs::write(&to_classify, "value1,value4\nvalue5,value3\n").unwrap();

    let rendered = commands::classify(
        &training,
        &to_classify,
        &output,
        &[],
        &PerformanceConfig::default(),
    )
    .unwrap();
    assert_eq!(rendered, "[1->value3]");

    let result = fs::read_to_string(&output).unwrap();
    assert_eq!(result, "value1,value4,true\nvalue5,value3,false\n");
}

#[test]
fn contradiction_surfaces_as_error() {
    let dir = tempdir().unwrap();
    let training = dir.path().join("training.csv");
    let to_classify = dir.path().join("unlabelled.csv");
    fs::write(&training, "v1,v3,v5,false\nv1,v3,v5,true\n").unwrap();
    fs::write(&to_classify, "v1,v3,v5\n").unwrap();

    let err = commands::classify(
        &training,
        &to_classify,
        &dir.path().join("output.csv"),
        &[],
        &PerformanceConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IlaError::ContradictoryTraining));
}

#[test]
fn exclusion_list_can_turn_separable_data_contradictory() {
    let dir = tempdir().unwrap();
    let training = dir.path().join("training.csv");
    fs::write(&training, "value1,value2,true\nvalue1,value3,false\n").unwrap();

    let err = commands::classify(
        &training,
        &training,
        &dir.path().join("output.csv"),
        &[1],
        &PerformanceConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, IlaError::ContradictoryTraining));
}

#[test]
fn slice_strip_compare_round_trip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("all.csv");
    fs::write(&input, "a,1,true\nb,2,false\nc,3,true\nd,4,false\n").unwrap();

    let slice_out = dir.path().join("slice.csv");
    let remainder_out = dir.path().join("remainder.csv");
    commands::slice(&input, &slice_out, &remainder_out, 2, 2).unwrap();
    assert_eq!(fs::read_to_string(&slice_out).unwrap(), "b,2,false\nc,3,true\n");

    let stripped = dir.path().join("stripped.csv");
    commands::strip(&slice_out, &stripped).unwrap();
    assert_eq!(fs::read_to_string(&stripped).unwrap(), "b,2\nc,3\n");

    // Re-attach a (possibly different) verdict and compare against the
    // original slice as a baseline.
    let results = dir.path().join("results.csv");
    fs::write(&results, "b,2,true\nc,3,true\n").unwrap();
    let mismatches = dir.path().join("mismatches.csv");
    let count = commands::compare(&slice_out, &results, &mismatches).unwrap();
    assert_eq!(count, 1);
    assert_eq!(fs::read_to_string(&mismatches).unwrap(), "b,2,false,true\n");
}
