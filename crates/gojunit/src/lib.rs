// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! go-junit-report library
//!
//! This module exports the command line front end (configuration, report
//! writers, run orchestration) for use in integration tests and as a library.

pub mod app;
pub mod config;
pub mod junit;
pub mod logging;
