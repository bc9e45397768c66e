// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Duration normalization
//!
//! `go test` prints durations as decimal seconds. They are stored as integers by
//! dropping the decimal point, so the unit depends on how many fractional digits
//! the runner printed: package lines (`0.160s`) give milliseconds, test lines
//! (`0.06 seconds`) give hundredths. Test durations are multiplied by
//! [`TEST_DURATION_SCALE`] so both land on the same millisecond scale for the
//! classic output format.

/// Factor applied to test-level durations relative to package-level ones
pub const TEST_DURATION_SCALE: u64 = 10;

/// Parse a decimal duration such as `"12.340"` into `12340`
///
/// Returns 0 for anything that is not a number once the decimal point is
/// removed.
#[must_use]
pub fn parse_duration(text: &str) -> u64 {
    text.replace('.', "").parse().unwrap_or(0)
}

/// Parse a test-level duration, applying [`TEST_DURATION_SCALE`]
#[must_use]
pub fn parse_test_duration(text: &str) -> u64 {
    parse_duration(text).saturating_mul(TEST_DURATION_SCALE)
}
