// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! `go test -v` parse state machine
//!
//! Package boundaries are only marked by the package result line that follows
//! a package's tests, so the parser collects tests until it sees one. Output of
//! a precompiled test binary has no such line; whatever is still pending when
//! the input ends becomes a package named by the caller.
//!
//! # Example
//!
//! ```
//! use gojunit_core::Parser;
//! use gojunit_gotest::GotestParser;
//!
//! let mut input = "=== RUN TestFoo\n--- FAIL: TestFoo (0.10s)\n".as_bytes();
//! let report = GotestParser::new().parse(&mut input, "my/pkg").unwrap();
//! assert_eq!(report.failures(), 1);
//! ```

use std::collections::HashMap;
use std::io::BufRead;

use gojunit_core::duration::{parse_duration, parse_test_duration};
use gojunit_core::{LineReader, Package, ParseError, Parser, Report, Test};
use tracing::{debug, trace};

use crate::classify::{LineEvent, classify};

/// Parser for `go test -v` output
#[derive(Debug, Clone, Copy, Default)]
pub struct GotestParser;

impl GotestParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Parser for GotestParser {
    fn parse(&self, reader: &mut dyn BufRead, package_name: &str) -> Result<Report, ParseError> {
        let mut parser = StreamingParser::new();
        for line in LineReader::new(reader) {
            parser.process_line(&line?);
        }
        Ok(parser.finish(package_name))
    }
}

/// Parse complete `go test -v` output held in memory
///
/// `package_name` names the package for tests that are not followed by a
/// package result line.
#[must_use]
pub fn parse_output(output: &str, package_name: &str) -> Report {
    let mut parser = StreamingParser::new();
    for line in output.lines() {
        parser.process_line(line);
    }
    parser.finish(package_name)
}

/// Incremental parser state
///
/// Each instance owns its state; independent inputs need independent parsers.
#[derive(Debug, Default)]
pub struct StreamingParser {
    report: Report,
    /// Tests of the package being collected
    tests: Vec<Test>,
    /// Name to position in `tests`; a repeated name points at the latest one
    by_name: HashMap<String, usize>,
    /// Test that receives output lines
    current: Option<usize>,
    /// Sum of test durations, used when no package result line arrives
    tests_time: u64,
    /// Coverage seen on a standalone line, waiting for its package
    coverage_pct: Option<String>,
}

impl StreamingParser {
    /// Create a new streaming parser
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a single line of output
    ///
    /// Returns the package completed by this line, if any.
    pub fn process_line(&mut self, line: &str) -> Option<&Package> {
        match classify(line)? {
            LineEvent::TestStart { name } => {
                self.start_test(name);
                None
            }
            LineEvent::TestResult {
                outcome,
                name,
                duration,
            } => {
                let Some(&idx) = self.by_name.get(name) else {
                    debug!(test = name, "Result for unknown test, skipping");
                    self.current = None;
                    return None;
                };
                let time = parse_test_duration(duration);
                let test = &mut self.tests[idx];
                test.outcome = outcome;
                test.name = name.to_string();
                test.time = time;
                self.tests_time = self.tests_time.saturating_add(time);
                self.current = Some(idx);
                trace!(test = name, ?outcome, time, "Test finished");
                None
            }
            LineEvent::PackageResult {
                ok,
                package,
                duration,
                coverage_pct,
            } => {
                let coverage_pct = coverage_pct
                    .map(str::to_string)
                    .or_else(|| self.coverage_pct.take());
                self.finish_package(package.to_string(), parse_duration(duration), coverage_pct);
                debug!(package, ok, "Package finished");
                self.report.packages.last()
            }
            LineEvent::Coverage { pct } => {
                trace!(pct, "Coverage");
                self.coverage_pct = Some(pct.to_string());
                None
            }
            LineEvent::Output { text } => {
                if let Some(idx) = self.current {
                    self.tests[idx].output.push(text.to_string());
                }
                None
            }
        }
    }

    /// Tests collected since the last package result line
    #[must_use]
    pub fn pending_tests(&self) -> &[Test] {
        &self.tests
    }

    /// Packages finished so far
    #[must_use]
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Finalize and return the report
    ///
    /// Pending tests are wrapped in a package named `package_name` whose time
    /// is the sum of their durations.
    #[must_use]
    pub fn finish(mut self, package_name: &str) -> Report {
        if !self.tests.is_empty() {
            debug!(
                package = package_name,
                tests = self.tests.len(),
                "No package result line, using fallback package name"
            );
            let time = self.tests_time;
            let coverage_pct = self.coverage_pct.take();
            self.finish_package(package_name.to_string(), time, coverage_pct);
        }
        self.report
    }

    fn start_test(&mut self, name: &str) {
        trace!(test = name, "Test started");
        let idx = self.tests.len();
        self.tests.push(Test::new(name));
        self.by_name.insert(name.to_string(), idx);
        self.current = Some(idx);
    }

    fn finish_package(&mut self, name: String, time: u64, coverage_pct: Option<String>) {
        self.report.packages.push(Package {
            name,
            time,
            tests: std::mem::take(&mut self.tests),
            coverage_pct,
        });
        self.by_name.clear();
        self.current = None;
        self.tests_time = 0;
        self.coverage_pct = None;
    }
}
