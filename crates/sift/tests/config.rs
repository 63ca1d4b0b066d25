//! Loading and saving filter spec files.

use std::fs;

use sift::config::{load_spec, save_spec, ConfigError, SpecConfig};
use sift::{Boundary, ExistenceFilter, FilterSpec, RangeFilter};
use tempfile::tempdir;

fn sample_spec() -> FilterSpec {
    FilterSpec::builder()
        .range(
            RangeFilter::builder()
                .start("BEGIN")
                .end(Boundary::patterns(["END", "FIN"]).unwrap())
                .include_end(true)
                .regex()
                .build()
                .unwrap(),
        )
        .include(ExistenceFilter::occurrence(["a", "b"]).unwrap())
        .exclude(ExistenceFilter::regex([r"\s*#"]).unwrap())
        .build()
        .unwrap()
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.yml");
    let spec = sample_spec();

    save_spec(&path, &spec).unwrap();
    let loaded = load_spec(&path).unwrap();

    assert_eq!(SpecConfig::from(&loaded), SpecConfig::from(&spec));
}

#[test]
fn saved_file_omits_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.yml");
    let spec = FilterSpec::builder()
        .include(ExistenceFilter::occurrence(["x"]).unwrap())
        .build()
        .unwrap();

    save_spec(&path, &spec).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "include:\n  patterns:\n  - x\n"
    );
}

#[test]
fn loaded_spec_filters() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.yml");
    fs::write(
        &path,
        "range:\n  start: START\n  end: END\n  include_end: true\n",
    )
    .unwrap();

    let spec = load_spec(&path).unwrap();
    let items = ["h1", "START", "x", "y", "END", "z"];
    let kept: Vec<&str> = spec.apply(&items).into_iter().copied().collect();
    assert_eq!(kept, ["START", "x", "y", "END"]);
}

#[test]
fn end_zero_in_file_means_to_the_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.yml");
    fs::write(&path, "range: {start: 4, end: 0}\n").unwrap();

    let spec = load_spec(&path).unwrap();
    let items = ["h1", "START", "x", "y", "END", "z"];
    assert_eq!(spec.apply(&items), vec![&"END", &"z"]);
}

#[test]
fn invalid_regex_in_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("spec.yml");
    fs::write(&path, "exclude: {patterns: ['('], use_regex: true}\n").unwrap();

    match load_spec(&path) {
        Err(ConfigError::Invalid { source, .. }) => assert!(source.is_pattern()),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_file() {
    let dir = tempdir().unwrap();
    let err = load_spec(dir.path().join("nope.yml")).unwrap_err();
    assert!(matches!(err, ConfigError::File(_)));
}
