//! Error rendering using miette
//!
//! Errors only record a [`SourcePosition`], so by default a report shows the
//! code, message and help text. Hosts that still have the source text can use
//! [`render_error_with_source`] to get a labelled snippet as well.

use core::fmt;
use std::{error::Error as _, io::Write};

use miette::{
    Diagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan, NamedSource, SourceCode,
    SourceSpan,
};

use crate::{Error, SourcePosition};

/// Render an error with formatting to stderr
pub fn render_error(error: &Error) {
    let output = render(error, GraphicalTheme::unicode());
    std::io::stderr().write_all(output.as_bytes()).ok();
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    render(error, GraphicalTheme::unicode())
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    render(error, GraphicalTheme::unicode_nocolor())
}

/// Render an error against the source text it was built from, labelling the
/// span of the offending node. `name` identifies the source in the report.
pub fn render_error_with_source(error: &Error, name: &str, source: &str) -> String {
    let report = WithSource {
        error,
        source: NamedSource::new(name, source.to_string()),
        span: span_of(source, error.pos()),
    };
    render(&report, GraphicalTheme::unicode_nocolor())
}

fn render(diagnostic: &dyn Diagnostic, theme: GraphicalTheme) -> String {
    let mut output = String::new();
    GraphicalReportHandler::new_themed(theme)
        .with_width(120)
        .render_report(&mut output, diagnostic)
        .ok();
    output
}

/// Byte span covered by `pos` in `source`. Lines and columns are 1-based and
/// columns count characters.
fn span_of(source: &str, pos: SourcePosition) -> SourceSpan {
    let start = offset_of(source, pos.line, pos.column);
    let end = offset_of(source, pos.end_line, pos.end_column).max(start);
    (start, end - start).into()
}

fn offset_of(source: &str, line: u32, column: u32) -> usize {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        if index + 1 == line as usize {
            let column = (column as usize).saturating_sub(1);
            return offset
                + text
                    .char_indices()
                    .nth(column)
                    .map_or(text.trim_end_matches('\n').len(), |(i, _)| i);
        }
        offset += text.len();
    }
    source.len()
}

#[derive(Debug)]
struct WithSource<'a> {
    error: &'a Error,
    source: NamedSource<String>,
    span: SourceSpan,
}

impl fmt::Display for WithSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.error, f)
    }
}

impl std::error::Error for WithSource<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.error.source()
    }
}

impl Diagnostic for WithSource<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.error.help()
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some("here".to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}
