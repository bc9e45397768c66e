// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gojunit-core

use thiserror::Error;

/// Errors that can abort a parse
///
/// Unrecognized or malformed lines never produce an error; only a failure of
/// the underlying reader does.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Error reading from the input stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
