// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification for `go test -v` output
//!
//! Each line is matched independently against a fixed, ordered set of
//! patterns. Lines matching none of them are not events and are dropped by the
//! caller.

use gojunit_core::TestOutcome;
use once_cell::sync::Lazy;
use regex::Regex;

const RUN_PREFIX: &str = "=== RUN ";

const STATUS_PATTERN: &str = r"^--- (PASS|FAIL|SKIP): (.+) \((\d+\.\d+)(?: seconds|s)\)$";
const COVERAGE_PATTERN: &str = r"^coverage:\s+(\d+\.\d+)%\s+of\s+statements$";
const PACKAGE_PATTERN: &str =
    r"^(ok|FAIL)\s+(.+)\s(\d+\.\d+)s(?:\s+coverage:\s+(\d+\.\d+)%\s+of\s+statements)?$";

static STATUS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(STATUS_PATTERN).expect("invalid test status regex"));
static COVERAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(COVERAGE_PATTERN).expect("invalid coverage regex"));
static PACKAGE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PACKAGE_PATTERN).expect("invalid package result regex"));

/// A recognized line of `go test -v` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// `=== RUN TestName`
    TestStart {
        /// Test name, surrounding whitespace trimmed
        name: &'a str,
    },
    /// `--- PASS: TestName (0.01 seconds)` or `(0.01s)`
    TestResult {
        /// Reported outcome
        outcome: TestOutcome,
        /// Test name
        name: &'a str,
        /// Decimal seconds as printed
        duration: &'a str,
    },
    /// `ok  \tpkg\t0.010s` with optional `coverage: N% of statements`
    PackageResult {
        /// `true` for `ok`, `false` for `FAIL`
        ok: bool,
        /// Package import path
        package: &'a str,
        /// Decimal seconds as printed
        duration: &'a str,
        /// Embedded coverage percentage
        coverage_pct: Option<&'a str>,
    },
    /// Standalone `coverage: N% of statements`
    Coverage {
        /// Coverage percentage
        pct: &'a str,
    },
    /// Tab-indented output, with the tab removed
    Output {
        /// Output text
        text: &'a str,
    },
}

/// Classify a single line of output
///
/// Returns `None` for lines that are not events.
#[must_use]
pub fn classify(line: &str) -> Option<LineEvent<'_>> {
    if let Some(rest) = line.strip_prefix(RUN_PREFIX) {
        return Some(LineEvent::TestStart { name: rest.trim() });
    }

    if let Some(caps) = PACKAGE_REGEX.captures(line) {
        let (Some(status), Some(package), Some(duration)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            return None;
        };
        return Some(LineEvent::PackageResult {
            ok: status.as_str() == "ok",
            package: package.as_str().trim(),
            duration: duration.as_str(),
            coverage_pct: caps.get(4).map(|m| m.as_str()),
        });
    }

    if let Some(caps) = STATUS_REGEX.captures(line) {
        let (Some(status), Some(name), Some(duration)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            return None;
        };
        return Some(LineEvent::TestResult {
            outcome: TestOutcome::from_status(status.as_str()),
            name: name.as_str(),
            duration: duration.as_str(),
        });
    }

    if let Some(pct) = COVERAGE_REGEX.captures(line).and_then(|caps| caps.get(1)) {
        return Some(LineEvent::Coverage { pct: pct.as_str() });
    }

    line.strip_prefix('\t').map(|text| LineEvent::Output { text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_classify_run() {
        assert_eq!(
            classify("=== RUN TestOne"),
            Some(LineEvent::TestStart { name: "TestOne" })
        );
        assert_eq!(
            classify("=== RUN   TestPadded  "),
            Some(LineEvent::TestStart { name: "TestPadded" })
        );
    }

    #[test]
    fn test_classify_result_seconds_suffix() {
        assert_eq!(
            classify("--- PASS: TestOne (0.06 seconds)"),
            Some(LineEvent::TestResult {
                outcome: TestOutcome::Passed,
                name: "TestOne",
                duration: "0.06",
            })
        );
    }

    #[test]
    fn test_classify_result_s_suffix() {
        assert_eq!(
            classify("--- FAIL: TestTwo (1.50s)"),
            Some(LineEvent::TestResult {
                outcome: TestOutcome::Failed,
                name: "TestTwo",
                duration: "1.50",
            })
        );
        assert_eq!(
            classify("--- SKIP: TestThree (0.00s)"),
            Some(LineEvent::TestResult {
                outcome: TestOutcome::Skipped,
                name: "TestThree",
                duration: "0.00",
            })
        );
    }

    #[test]
    fn test_classify_result_without_duration_is_ignored() {
        assert_eq!(classify("--- PASS: TestOne"), None);
        assert_eq!(classify("--- PASS: TestOne (fast)"), None);
    }

    #[test]
    fn test_classify_package_result() {
        assert_eq!(
            classify("ok  \tpackage/name\t0.160s"),
            Some(LineEvent::PackageResult {
                ok: true,
                package: "package/name",
                duration: "0.160",
                coverage_pct: None,
            })
        );
        assert_eq!(
            classify("FAIL\tpackage/name\t0.151s"),
            Some(LineEvent::PackageResult {
                ok: false,
                package: "package/name",
                duration: "0.151",
                coverage_pct: None,
            })
        );
    }

    #[test]
    fn test_classify_package_result_with_coverage() {
        assert_eq!(
            classify("ok  example.com/pkg  0.01s coverage: 80.0% of statements"),
            Some(LineEvent::PackageResult {
                ok: true,
                package: "example.com/pkg",
                duration: "0.01",
                coverage_pct: Some("80.0"),
            })
        );
    }

    #[test]
    fn test_classify_coverage() {
        assert_eq!(
            classify("coverage: 13.37% of statements"),
            Some(LineEvent::Coverage { pct: "13.37" })
        );
        assert_eq!(classify("coverage: 13% of statements"), None);
    }

    #[test]
    fn test_classify_output() {
        assert_eq!(
            classify("\tfile_test.go:11: Error message"),
            Some(LineEvent::Output {
                text: "file_test.go:11: Error message"
            })
        );
        assert_eq!(
            classify("\t\tnested"),
            Some(LineEvent::Output { text: "\tnested" })
        );
    }

    #[test]
    fn test_classify_unrecognized() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("PASS"), None);
        assert_eq!(classify("FAIL"), None);
        assert_eq!(classify("?   \tpkg\t[no test files]"), None);
        assert_eq!(classify("    indented with spaces"), None);
        assert_eq!(classify("exit status 1"), None);
    }
}
