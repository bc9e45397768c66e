// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tracing subscriber setup
//!
//! stdout carries the report, so all log output goes to stderr.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` directives plus `level` as the default
#[must_use]
pub fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level.into())
}

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
