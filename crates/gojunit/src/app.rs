// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Run orchestration
//!
//! Picks a parser, reads the whole input into a [`Report`], writes it in the
//! configured format, and decides the exit status.
//!
//! # Example
//!
//! ```
//! use gojunit::app;
//! use gojunit::config::Config;
//!
//! let config = Config::default();
//! let mut input = "=== RUN TestA\n--- PASS: TestA (0.01s)\nok  \tpkg\t0.010s\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let report = app::run(&config, &mut input, &mut output).expect("run");
//! assert_eq!(app::exit_code(&config, &report), 0);
//! assert!(String::from_utf8(output).unwrap().contains("<testsuite "));
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use gojunit_core::{ParseError, Parser, Report};
use gojunit_golint::GolintParser;
use gojunit_gotest::GotestParser;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, OutputFormat};
use crate::junit::{JunitWriter, WriteError};

/// Errors that end a run
#[derive(Debug, Error)]
pub enum AppError {
    /// The input could not be read
    #[error("Error reading input: {0}")]
    Read(#[from] ParseError),

    /// The XML report could not be written
    #[error("Error writing report: {0}")]
    Write(#[from] WriteError),

    /// The JSON report could not be written
    #[error("Error writing report: {0}")]
    Json(#[from] serde_json::Error),

    /// An input or output file could not be opened
    #[error("Failed to open {path}: {source}")]
    Open {
        /// The file that could not be opened
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },
}

/// Choose the parser for the configured input dialect
#[must_use]
pub fn select_parser(config: &Config) -> Box<dyn Parser> {
    if config.golint {
        Box::new(GolintParser::new())
    } else {
        Box::new(GotestParser::new())
    }
}

/// Parse `input` with the configured parser
///
/// # Errors
///
/// Returns `AppError::Read` if reading fails.
pub fn parse_input(config: &Config, input: &mut dyn BufRead) -> Result<Report, AppError> {
    let parser = select_parser(config);
    let report = parser.parse(input, config.package_name())?;

    info!(
        packages = report.packages.len(),
        tests = report.total(),
        failures = report.failures(),
        "Parsed report"
    );
    if report.packages.is_empty() {
        warn!("No tests found in input");
    }
    for (package, test) in report.failing_tests() {
        debug!(package, test = %test.name, "Failed test");
    }

    Ok(report)
}

/// Parse `input` and write the report to `output`
///
/// Returns the parsed report so the caller can pick an exit status.
///
/// # Errors
///
/// Returns `AppError::Read` if reading fails and `AppError::Write` or
/// `AppError::Json` if writing fails.
pub fn run(
    config: &Config,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Report, AppError> {
    let report = parse_input(config, input)?;
    write_report(config, &report, output)?;
    Ok(report)
}

/// Write `report` in the configured format
///
/// # Errors
///
/// Returns `AppError::Write` or `AppError::Json` if writing fails.
pub fn write_report(
    config: &Config,
    report: &Report,
    output: &mut dyn Write,
) -> Result<(), AppError> {
    match config.format {
        OutputFormat::Xml => {
            JunitWriter::new()
                .with_xml_header(!config.no_xml_header)
                .write(report, output)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *output, report)?;
            output.write_all(b"\n").map_err(WriteError::from)?;
            output.flush().map_err(WriteError::from)?;
        }
    }
    Ok(())
}

/// Run with the input and output named by `config`, or stdin and stdout
///
/// The output file is only created once the input has been parsed, so a read
/// failure leaves an existing report untouched.
///
/// # Errors
///
/// Returns `AppError::Open` if a configured file cannot be opened, otherwise
/// whatever [`parse_input`] or [`write_report`] returns.
pub fn run_with_config(config: &Config) -> Result<Report, AppError> {
    let report = match config.input {
        Some(ref path) => {
            debug!(path = %path.display(), "Reading input file");
            let file = File::open(path).map_err(|source| AppError::Open {
                path: path.clone(),
                source,
            })?;
            parse_input(config, &mut BufReader::new(file))?
        }
        None => parse_input(config, &mut io::stdin().lock())?,
    };

    match config.output {
        Some(ref path) => {
            debug!(path = %path.display(), "Writing output file");
            let file = File::create(path).map_err(|source| AppError::Open {
                path: path.clone(),
                source,
            })?;
            write_report(config, &report, &mut BufWriter::new(file))?;
        }
        None => write_report(config, &report, &mut io::stdout().lock())?,
    }

    Ok(report)
}

/// Exit status for a finished run: 1 when `--set-exit-code` is given and a
/// test failed, 0 otherwise
#[must_use]
pub fn exit_code(config: &Config, report: &Report) -> u8 {
    if config.set_exit_code && !report.all_passed() {
        1
    } else {
        0
    }
}
