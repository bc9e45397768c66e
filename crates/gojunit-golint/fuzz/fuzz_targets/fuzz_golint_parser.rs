// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the golint parser

#![no_main]

use libfuzzer_sys::fuzz_target;

use gojunit_core::Parser;
use gojunit_golint::GolintParser;

fuzz_target!(|data: &[u8]| {
    let mut input = data;
    let report = GolintParser::new()
        .parse(&mut input, "")
        .expect("in-memory parse failed");
    // Every lint test is a failure
    assert_eq!(report.failures(), report.total());
});
