// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Integration tests for gojunit-gotest
//!
//! These tests parse captured `go test -v` logs from `tests/fixtures` through
//! the `Parser` trait, the way the command line tool does.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use gojunit_core::{Parser, Report, TestOutcome};
use gojunit_gotest::GotestParser;
use similar_asserts::assert_eq;

/// Get the fixtures directory for test data
fn fixtures_dir() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    Path::new(&manifest_dir).join("tests/fixtures")
}

fn parse_fixture(name: &str, package_name: &str) -> Report {
    let path = fixtures_dir().join(name);
    let file = File::open(&path).unwrap_or_else(|e| panic!("open {}: {e}", path.display()));
    let mut reader = BufReader::new(file);
    GotestParser::new()
        .parse(&mut reader, package_name)
        .expect("fixture should parse")
}

#[test]
fn test_all_passing() {
    let report = parse_fixture("pass.txt", "");

    assert_eq!(report.packages.len(), 1);
    let package = &report.packages[0];
    assert_eq!(package.name, "package/name");
    assert_eq!(package.time, 160);
    assert_eq!(package.coverage_pct, None);

    let names: Vec<&str> = package.tests.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["TestZ", "TestA"]);
    assert_eq!(package.tests[0].time, 60);
    assert_eq!(package.tests[1].time, 100);
    assert!(package.tests.iter().all(|t| t.passed()));
    assert_eq!(report.failures(), 0);
}

#[test]
fn test_failure_with_output() {
    let report = parse_fixture("fail.txt", "");

    let package = &report.packages[0];
    assert_eq!(package.name, "package/name");
    assert_eq!(package.time, 151);

    let failed = &package.tests[0];
    assert_eq!(failed.outcome, TestOutcome::Failed);
    assert_eq!(failed.time, 20);
    assert_eq!(
        failed.output,
        vec![
            "file_test.go:11: Error message",
            "file_test.go:11: Longer",
            "\terror",
            "\tmessage.",
        ]
    );
    assert!(package.tests[1].passed());
    assert_eq!(report.failures(), 1);
}

#[test]
fn test_skipped_with_output() {
    let report = parse_fixture("skip.txt", "");

    let skipped = &report.packages[0].tests[0];
    assert_eq!(skipped.outcome, TestOutcome::Skipped);
    assert_eq!(skipped.output, vec!["file_test.go:11: Skip message"]);
    assert_eq!(report.failures(), 0);
    assert_eq!(report.packages[0].skipped(), 1);
}

#[test]
fn test_multiple_packages() {
    let report = parse_fixture("multi.txt", "");

    let names: Vec<&str> = report.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["package/name1", "package/name2"]);
    assert_eq!(report.packages[0].tests[0].name, "TestA");
    assert_eq!(report.packages[1].tests[0].name, "TestB");
}

#[test]
fn test_compiled_binary_uses_fallback_name() {
    let report = parse_fixture("compiled.txt", "test/package");

    assert_eq!(report.packages.len(), 1);
    let package = &report.packages[0];
    assert_eq!(package.name, "test/package");
    assert_eq!(package.time, 60 + 100);
    assert_eq!(package.tests[1].output, vec!["main_test.go:9: boom"]);
    assert_eq!(report.failures(), 1);
}

#[test]
fn test_coverage_standalone_and_embedded() {
    let report = parse_fixture("coverage.txt", "");

    assert_eq!(report.packages.len(), 2);
    assert_eq!(report.packages[0].coverage_pct.as_deref(), Some("13.37"));
    assert_eq!(report.packages[1].coverage_pct.as_deref(), Some("99.8"));
    assert_eq!(report.packages[1].time, 20);
}
