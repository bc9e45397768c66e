// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gojunit-golint: golint output parsing
//!
//! Turns `golint` findings into a [`gojunit_core::Report`] so lint problems
//! show up in CI dashboards next to test failures: each directory becomes a
//! package and each offending file a failed test whose output lists its
//! findings.

#![warn(missing_docs)]

pub mod parser;

pub use parser::{GolintParser, parse_output};
