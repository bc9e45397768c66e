// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for go-junit-report flags
//!
//! These tests verify flag parsing, defaults, and the log level mapping.

use std::path::PathBuf;

use clap::Parser;
use gojunit::config::{Config, OutputFormat};
use tracing::Level;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_no_flags() {
    let config = Config::try_parse_from(["go-junit-report"]).expect("parse should succeed");
    assert!(!config.golint);
    assert!(!config.no_xml_header);
    assert!(!config.set_exit_code);
    assert_eq!(config.format, OutputFormat::Xml);
    assert_eq!(config.log_level(), Level::WARN);
}

// ============================================================================
// Parser and report flags
// ============================================================================

#[test]
fn test_package_name_flag() {
    let config = Config::try_parse_from(["go-junit-report", "--package-name", "test/pkg"])
        .expect("parse should succeed");
    assert_eq!(config.package_name(), "test/pkg");
}

#[test]
fn test_golint_flag() {
    let config =
        Config::try_parse_from(["go-junit-report", "--golint"]).expect("parse should succeed");
    assert!(config.golint);
}

#[test]
fn test_no_xml_header_and_set_exit_code() {
    let config = Config::try_parse_from(["go-junit-report", "--no-xml-header", "--set-exit-code"])
        .expect("parse should succeed");
    assert!(config.no_xml_header);
    assert!(config.set_exit_code);
}

#[test]
fn test_format_json() {
    let config = Config::try_parse_from(["go-junit-report", "--format", "json"])
        .expect("parse should succeed");
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_format_unknown_rejected() {
    let result = Config::try_parse_from(["go-junit-report", "--format", "html"]);
    assert!(result.is_err(), "Unknown formats should be rejected");
}

#[test]
fn test_input_and_output_paths() {
    let config = Config::try_parse_from(["go-junit-report", "-i", "test.log", "-o", "report.xml"])
        .expect("parse should succeed");
    assert_eq!(config.input, Some(PathBuf::from("test.log")));
    assert_eq!(config.output, Some(PathBuf::from("report.xml")));
}

#[test]
fn test_unknown_flag_rejected() {
    let result = Config::try_parse_from(["go-junit-report", "--database", "x"]);
    assert!(result.is_err());
}

// ============================================================================
// Logging flags
// ============================================================================

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["go-junit-report", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_long_flag() {
    let config =
        Config::try_parse_from(["go-junit-report", "--quiet"]).expect("parse should succeed");
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::ERROR);
}

#[test]
fn test_verbose_and_quiet_verbose_wins() {
    let config =
        Config::try_parse_from(["go-junit-report", "-q", "-v"]).expect("parse should succeed");
    assert!(config.verbose);
    assert!(config.quiet);
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_log_levels_are_distinct() {
    let verbose = Config {
        verbose: true,
        ..Default::default()
    };
    let quiet = Config {
        quiet: true,
        ..Default::default()
    };
    let default = Config::default();

    assert_ne!(verbose.log_level(), default.log_level());
    assert_ne!(default.log_level(), quiet.log_level());
    assert_ne!(verbose.log_level(), quiet.log_level());
}
