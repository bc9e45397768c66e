// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the go test parser
//!
//! Feeds raw bytes, including invalid UTF-8, through the `Parser` trait.

#![no_main]

use libfuzzer_sys::fuzz_target;

use gojunit_core::Parser;
use gojunit_gotest::GotestParser;

fuzz_target!(|data: &[u8]| {
    let mut input = data;
    // In-memory reads cannot fail, so parsing must always succeed
    let report = GotestParser::new()
        .parse(&mut input, "fuzz")
        .expect("in-memory parse failed");
    assert!(report.failures() <= report.total());
});
