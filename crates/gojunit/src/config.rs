// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for go-junit-report
//!
//! This module provides the command line options: which parser to use, the
//! fallback package name, output format and destination, exit code behavior,
//! and logging verbosity.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// go-junit-report - convert go test output to JUnit XML
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "go-junit-report")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Package name for tests without a package result line
    ///
    /// Output of a precompiled test binary (`pkg.test -test.v`) never says
    /// which package it belongs to.
    #[arg(long, env = "GO_JUNIT_PACKAGE_NAME")]
    pub package_name: Option<String>,

    /// Parse input as golint output instead of go test output
    #[arg(long, default_value = "false")]
    pub golint: bool,

    /// Do not print the XML declaration
    #[arg(long, default_value = "false")]
    pub no_xml_header: bool,

    /// Exit with status 1 if any test failed
    #[arg(long, default_value = "false")]
    pub set_exit_code: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Xml)]
    pub format: OutputFormat,

    /// Read from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - only errors are logged
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Report output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JUnit XML
    #[default]
    Xml,
    /// The parsed report model as JSON
    Json,
}

impl Config {
    /// Get the fallback package name, empty if not given
    #[must_use]
    pub fn package_name(&self) -> &str {
        self.package_name.as_deref().unwrap_or_default()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path is specified but doesn't exist or isn't a file
    /// - The output path's parent directory doesn't exist
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }

        if let Some(parent) = self.output.as_ref().and_then(|o| o.parent()) {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(ConfigError::OutputDirectoryNotFound(parent.to_path_buf()));
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    ///
    /// Defaults to WARN since the report itself is the tool's output.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),

    /// Directory for the output file does not exist
    #[error("Output directory not found: {0}")]
    OutputDirectoryNotFound(PathBuf),
}
