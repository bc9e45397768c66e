// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! The seam between input dialects and the report writers

use std::io::BufRead;

use crate::error::ParseError;
use crate::report::Report;

/// A parser turns a line-oriented text stream into a [`Report`]
///
/// Implementations consume the reader to exhaustion and degrade gracefully on
/// lines they do not recognize.
pub trait Parser {
    /// Parse everything readable from `reader`
    ///
    /// `package_name` names the package for tests whose package could not be
    /// determined from the input, e.g. output of a precompiled test binary.
    /// Parsers that always know their package may ignore it.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if reading from `reader` fails.
    fn parse(&self, reader: &mut dyn BufRead, package_name: &str) -> Result<Report, ParseError>;
}
