// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for `StreamingParser`
//!
//! Feeds arbitrary lines and checks the finished report against the events
//! the classifier saw: every `=== RUN` becomes one test, in order, and a test
//! whose name never had a result line is still failed.

#![no_main]

use std::collections::HashSet;

use gojunit_core::TestOutcome;
use gojunit_gotest::{LineEvent, StreamingParser, classify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let mut parser = StreamingParser::new();
    let mut started = Vec::new();
    let mut with_result = HashSet::new();
    let mut package_lines = 0;

    for line in input.lines() {
        match classify(line) {
            Some(LineEvent::TestStart { name }) => started.push(name.to_string()),
            Some(LineEvent::TestResult { name, .. }) => {
                with_result.insert(name.to_string());
            }
            Some(LineEvent::PackageResult { .. }) => package_lines += 1,
            _ => {}
        }
        let _ = parser.process_line(line);
    }
    let pending = !parser.pending_tests().is_empty();
    let report = parser.finish("fuzz");

    assert_eq!(report.packages.len(), package_lines + usize::from(pending));

    let tests: Vec<_> = report.packages.iter().flat_map(|p| &p.tests).collect();
    let names: Vec<&str> = tests.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, started);

    for test in tests {
        if !with_result.contains(&test.name) {
            assert_eq!(test.outcome, TestOutcome::Failed);
        }
    }
    assert!(report.failures() <= report.total());
});
