// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gojunit-gotest: `go test -v` output parsing
//!
//! This library crate turns the line-oriented output of `go test -v` (or of a
//! precompiled test binary run with `-test.v`) into a [`gojunit_core::Report`].
//!
//! # Example
//!
//! ```
//! use gojunit_gotest::{StreamingParser, parse_output};
//!
//! let output = "=== RUN TestFoo\n--- PASS: TestFoo (0.01 seconds)\nok  \texample.com/pkg\t0.010s\n";
//! let report = parse_output(output, "fallback");
//! assert_eq!(report.packages[0].name, "example.com/pkg");
//!
//! // Or feed lines one at a time
//! let mut parser = StreamingParser::new();
//! parser.process_line("=== RUN TestFoo");
//! let report = parser.finish("fallback");
//! assert_eq!(report.packages[0].name, "fallback");
//! ```

#![warn(missing_docs)]

pub mod classify;
pub mod parser;

pub use classify::{LineEvent, classify};
pub use parser::{GotestParser, StreamingParser, parse_output};
