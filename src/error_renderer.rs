//! Error rendering using ariadne
//!
//! This module renders evaluation diagnostics with a snippet of the input
//! and a label under the offending span.

use crate::Diagnostic;
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<input>";

/// Render a diagnostic for `source` to stderr
pub fn render_error(source: &str, diagnostic: &Diagnostic) {
    render_error_to_writer(source, diagnostic, &mut std::io::stderr(), true).ok();
}

/// Render a diagnostic to a specific writer
pub fn render_error_to(
    source: &str,
    diagnostic: &Diagnostic,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(source, diagnostic, writer, true)
}

/// Render a diagnostic to a String
pub fn render_error_to_string(source: &str, diagnostic: &Diagnostic) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, diagnostic, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render a diagnostic to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, diagnostic: &Diagnostic) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, diagnostic, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    diagnostic: &Diagnostic,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    // Spans are byte offsets. Clamp so a zero-width span at the end of input still points somewhere.
    let end = diagnostic.span.0.end.min(source.len());
    let start = diagnostic.span.0.start.min(end);

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, start..end))
        .with_message(&diagnostic.message)
        .with_code(diagnostic.code)
        .with_config(
            ariadne::Config::default()
                .with_color(use_color)
                .with_index_type(IndexType::Byte),
        );

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, start..end))
            .with_message(&diagnostic.message)
            .with_color(color),
    );

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
