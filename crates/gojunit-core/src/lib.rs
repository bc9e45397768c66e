// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! gojunit-core: Report model shared by the go-junit-report parsers
//!
//! This library crate provides the hierarchical test report (packages, tests,
//! outcomes), the duration normalizer used by the go test parser, and the
//! [`Parser`] trait implemented by each input dialect.
//!
//! # Example
//!
//! ```
//! use gojunit_core::{Package, Report, Test, TestOutcome};
//!
//! let mut report = Report::new();
//! report.packages.push(Package {
//!     name: "example.com/pkg".to_string(),
//!     time: 10,
//!     tests: vec![Test::new("TestFoo")],
//!     coverage_pct: None,
//! });
//!
//! // Tests without a result line are failures
//! assert_eq!(report.failures(), 1);
//! assert_eq!(report.packages[0].tests[0].outcome, TestOutcome::Failed);
//! ```

#![warn(missing_docs)]

pub mod duration;
pub mod error;
pub mod lines;
pub mod parser;
pub mod report;

pub use error::ParseError;
pub use lines::LineReader;
pub use parser::Parser;
pub use report::{Package, Report, Test, TestOutcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ParseError;
    pub use crate::parser::Parser;
    pub use crate::report::{Package, Report, Test, TestOutcome};
}
