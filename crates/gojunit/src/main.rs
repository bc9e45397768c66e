// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! go-junit-report: convert `go test -v` or golint output to JUnit XML
//!
//! Reads from stdin (or `--input`) and writes the report to stdout (or
//! `--output`). Logs go to stderr.

use std::process::ExitCode;

use clap::Parser;

use gojunit::app;
use gojunit::config::Config;
use gojunit::logging;

fn main() -> ExitCode {
    let config = Config::parse();
    logging::init(config.log_level());

    if let Err(e) = config.validate() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match app::run_with_config(&config) {
        Ok(report) => ExitCode::from(app::exit_code(&config, &report)),
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
