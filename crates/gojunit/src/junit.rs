// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JUnit XML report writer
//!
//! One `<testsuite>` per package and one `<testcase>` per test. Failed tests get
//! a `<failure>` element holding their output, skipped tests a `<skipped>`
//! element whose message is their output.

use std::borrow::Cow;
use std::io::Write;

use gojunit_core::{Package, Report, Test, TestOutcome};
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use thiserror::Error;

/// Errors that can occur while writing XML
#[derive(Debug, Error)]
pub enum WriteError {
    /// Error writing to the destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a [`Report`] as JUnit XML
#[derive(Debug, Clone, Copy)]
pub struct JunitWriter {
    xml_header: bool,
}

impl Default for JunitWriter {
    fn default() -> Self {
        Self { xml_header: true }
    }
}

impl JunitWriter {
    /// Create a writer that emits the XML declaration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the `<?xml ...?>` declaration
    #[must_use]
    pub fn with_xml_header(mut self, xml_header: bool) -> Self {
        self.xml_header = xml_header;
        self
    }

    /// Write `report` to `out`
    ///
    /// # Errors
    ///
    /// Returns `WriteError` if writing to `out` fails.
    pub fn write<W: Write>(&self, report: &Report, out: W) -> Result<(), WriteError> {
        let mut writer = Writer::new_with_indent(out, b'\t', 1);

        if self.xml_header {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        writer.write_event(Event::Start(BytesStart::new("testsuites")))?;
        for package in &report.packages {
            write_suite(&mut writer, package)?;
        }
        writer.write_event(Event::End(BytesEnd::new("testsuites")))?;

        let out = writer.get_mut();
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }

    /// Render `report` into a string
    ///
    /// # Errors
    ///
    /// Returns `WriteError` if rendering fails.
    pub fn to_string(&self, report: &Report) -> Result<String, WriteError> {
        let mut buf = Vec::new();
        self.write(report, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn write_suite<W: Write>(writer: &mut Writer<W>, package: &Package) -> Result<(), WriteError> {
    let tests = package.tests.len().to_string();
    let failures = package.failures().to_string();
    let time = format_time(package.time);

    let suite = BytesStart::new("testsuite").with_attributes([
        ("tests", tests.as_str()),
        ("failures", failures.as_str()),
        ("time", time.as_str()),
        ("name", package.name.as_str()),
    ]);

    if package.tests.is_empty() && package.coverage_pct.is_none() {
        writer.write_event(Event::Empty(suite))?;
        return Ok(());
    }

    writer.write_event(Event::Start(suite))?;

    if let Some(ref pct) = package.coverage_pct {
        writer.write_event(Event::Start(BytesStart::new("properties")))?;
        writer.write_event(Event::Empty(BytesStart::new("property").with_attributes([
            ("name", "coverage.statements.pct"),
            ("value", pct.as_str()),
        ])))?;
        writer.write_event(Event::End(BytesEnd::new("properties")))?;
    }

    let classname = class_name(&package.name);
    for test in &package.tests {
        write_case(writer, classname, test)?;
    }

    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    Ok(())
}

fn write_case<W: Write>(
    writer: &mut Writer<W>,
    classname: &str,
    test: &Test,
) -> Result<(), WriteError> {
    let time = format_time(test.time);
    let case = BytesStart::new("testcase").with_attributes([
        ("classname", classname),
        ("name", test.name.as_str()),
        ("time", time.as_str()),
    ]);

    match test.outcome {
        TestOutcome::Passed => {
            writer.write_event(Event::Empty(case))?;
        }
        TestOutcome::Failed => {
            let failure =
                BytesStart::new("failure").with_attributes([("message", "Failed"), ("type", "")]);
            let contents = test.output.join("\n");

            writer.write_event(Event::Start(case))?;
            if contents.is_empty() {
                writer.write_event(Event::Empty(failure))?;
            } else {
                writer.write_event(Event::Start(failure))?;
                writer.write_event(Event::Text(BytesText::new(&contents)))?;
                writer.write_event(Event::End(BytesEnd::new("failure")))?;
            }
            writer.write_event(Event::End(BytesEnd::new("testcase")))?;
        }
        TestOutcome::Skipped => {
            let message = test.output.join("\n");
            let mut skipped = BytesStart::new("skipped");
            skipped.push_attribute(Attribute {
                key: QName(b"message"),
                value: Cow::Owned(escape_attribute(&message).into_bytes()),
            });
            writer.write_event(Event::Start(case))?;
            writer.write_event(Event::Empty(skipped))?;
            writer.write_event(Event::End(BytesEnd::new("testcase")))?;
        }
    }
    Ok(())
}

/// Escape `value` for an attribute, writing line breaks and tabs as character
/// references
fn escape_attribute(value: &str) -> String {
    escape(value)
        .replace('\n', "&#xA;")
        .replace('\r', "&#xD;")
        .replace('\t', "&#x9;")
}

/// Render an integer duration as seconds with three decimals
///
/// Durations are in thousandths, so `160` becomes `0.160`.
#[must_use]
pub fn format_time(time: u64) -> String {
    format!("{}.{:03}", time / 1000, time % 1000)
}

/// Last `/`-separated segment of a package name
#[must_use]
pub fn class_name(package: &str) -> &str {
    package.rsplit('/').next().unwrap_or(package)
}
