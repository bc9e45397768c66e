// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! golint output parsing
//!
//! Findings look like `path/to/file.go:12:3: message`. Lines without that shape
//! are skipped.
//!
//! Grouping is by location, not by input order: one package per directory and
//! one test per file, both in order of first appearance. A file whose findings
//! are interleaved with other files' still produces a single test.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::{Component, Path};

use gojunit_core::{LineReader, Package, ParseError, Parser, Report, Test};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static FINDING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.go:\d+:\d+: ").expect("invalid golint finding regex"));

/// Parser for golint output
#[derive(Debug, Clone, Copy, Default)]
pub struct GolintParser;

impl GolintParser {
    /// Create a new parser
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Parser for GolintParser {
    /// The package name is always derived from the finding's path, so
    /// `package_name` is unused.
    fn parse(&self, reader: &mut dyn BufRead, _package_name: &str) -> Result<Report, ParseError> {
        let mut grouper = Grouper::default();
        for line in LineReader::new(reader) {
            grouper.push(&line?);
        }
        Ok(grouper.finish())
    }
}

/// Parse complete golint output held in memory
#[must_use]
pub fn parse_output(output: &str) -> Report {
    let mut grouper = Grouper::default();
    for line in output.lines() {
        grouper.push(line);
    }
    grouper.finish()
}

#[derive(Default)]
struct Grouper {
    packages: Vec<Package>,
    package_by_dir: HashMap<String, usize>,
    /// File path to (package index, test index)
    test_by_path: HashMap<String, (usize, usize)>,
}

impl Grouper {
    fn push(&mut self, line: &str) {
        if !FINDING_REGEX.is_match(line) {
            return;
        }
        let path = line.split(':').next().unwrap_or_default();

        let (pkg_idx, test_idx) = match self.test_by_path.get(path) {
            Some(&found) => found,
            None => self.add_file(path),
        };
        trace!(path, "Lint finding");
        self.packages[pkg_idx].tests[test_idx]
            .output
            .push(line.to_string());
    }

    fn add_file(&mut self, path: &str) -> (usize, usize) {
        let dir = package_name(path);
        let pkg_idx = match self.package_by_dir.get(&dir) {
            Some(&idx) => idx,
            None => {
                debug!(package = %dir, "New lint package");
                self.packages.push(Package {
                    name: dir.clone(),
                    time: 0,
                    tests: Vec::new(),
                    coverage_pct: None,
                });
                let idx = self.packages.len() - 1;
                self.package_by_dir.insert(dir, idx);
                idx
            }
        };

        let tests = &mut self.packages[pkg_idx].tests;
        tests.push(Test::new(file_name(path)));
        let found = (pkg_idx, tests.len() - 1);
        self.test_by_path.insert(path.to_string(), found);
        found
    }

    fn finish(self) -> Report {
        Report {
            packages: self.packages,
        }
    }
}

/// Dotted package name for the directory containing `path`
///
/// `/src/app/main.go` becomes `src.app`; a bare file name becomes `.` and a
/// file at the root becomes the empty name.
fn package_name(path: &str) -> String {
    let parent = Path::new(path).parent().unwrap_or_else(|| Path::new(""));
    let parts: Vec<String> = parent
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect();

    if parts.is_empty() {
        if parent.has_root() {
            String::new()
        } else {
            ".".to_string()
        }
    } else {
        parts.join(".")
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map_or_else(|| path.to_string(), |n| n.to_string_lossy().into_owned())
}
