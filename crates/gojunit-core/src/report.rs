// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report model types
//!
//! A [`Report`] is an ordered list of [`Package`]s, each owning its [`Test`]s.
//! Durations are plain integers in the units produced by
//! [`crate::duration`]; writers decide how to render them.

use serde::{Deserialize, Serialize};

/// Possible test outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    /// Test passed
    Passed,
    /// Test failed, or never reported a result
    #[default]
    Failed,
    /// Test was skipped
    Skipped,
}

impl TestOutcome {
    /// Map a `--- PASS/FAIL/SKIP` status word to an outcome
    ///
    /// Anything other than `PASS` or `SKIP` is a failure.
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "PASS" => Self::Passed,
            "SKIP" => Self::Skipped,
            _ => Self::Failed,
        }
    }
}

/// A single test case with its captured output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Test {
    /// Test name
    pub name: String,
    /// Duration in test units (see [`crate::duration::parse_test_duration`])
    pub time: u64,
    /// Test outcome
    pub outcome: TestOutcome,
    /// Output lines captured while the test ran, in input order
    pub output: Vec<String>,
}

impl Test {
    /// Create a test that has started but not reported a result
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: 0,
            outcome: TestOutcome::Failed,
            output: Vec::new(),
        }
    }

    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == TestOutcome::Passed
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.outcome == TestOutcome::Failed
    }

    /// Check if the test was skipped
    #[must_use]
    pub fn skipped(&self) -> bool {
        self.outcome == TestOutcome::Skipped
    }
}

/// The results of a single package's test run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package name (import path, or the caller's fallback name)
    pub name: String,
    /// Duration in package units, 0 if unknown
    pub time: u64,
    /// Tests in the order they started
    pub tests: Vec<Test>,
    /// Statement coverage percentage, e.g. `"80.0"`
    pub coverage_pct: Option<String>,
}

impl Package {
    /// Count failed tests in this package
    #[must_use]
    pub fn failures(&self) -> usize {
        self.tests.iter().filter(|t| t.failed()).count()
    }

    /// Count skipped tests in this package
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.tests.iter().filter(|t| t.skipped()).count()
    }
}

/// A collection of package results, in the order they completed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Finished packages
    pub packages: Vec<Package>,
}

impl Report {
    /// Create an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count failed tests across all packages
    #[must_use]
    pub fn failures(&self) -> usize {
        self.packages.iter().map(Package::failures).sum()
    }

    /// Count all tests across all packages
    #[must_use]
    pub fn total(&self) -> usize {
        self.packages.iter().map(|p| p.tests.len()).sum()
    }

    /// Check if no test failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures() == 0
    }

    /// Get failing tests with the name of the package that owns them
    #[must_use]
    pub fn failing_tests(&self) -> Vec<(&str, &Test)> {
        self.packages
            .iter()
            .flat_map(|p| {
                p.tests
                    .iter()
                    .filter(|t| t.failed())
                    .map(move |t| (p.name.as_str(), t))
            })
            .collect()
    }
}
