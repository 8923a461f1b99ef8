//! Fancy diagnostics support using `ariadne`.
//!
//! Warnings and errors of the decoder carry 1-based line numbers through `SourceLineMixin`. This module maps those lines back onto the source text and renders them as `ariadne::Report`, without changing the warning types.
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(feature = "diagnostics")]
//! # {
//! use osu_rs::{
//!     diagnostics::emit_osu_warnings,
//!     osu::{default_config, parse_osu_str},
//! };
//!
//! let source = "osu file format v14\n[General]\nUnknown: 1\n[Metadata]\n[Difficulty]\n[TimingPoints]\n[HitObjects]\n";
//! let output = parse_osu_str(source, default_config());
//!
//! emit_osu_warnings("test.osu", source, &output.warnings);
//! # }
//! ```

use std::ops::Range;

#[cfg(feature = "diagnostics")]
use ariadne::{Color, Label, Report, ReportKind, Source};

#[cfg(feature = "diagnostics")]
use crate::osu::{
    OsuWarning,
    lex::LexWarningWithLine,
    parse::{ParseError, ParseWarningWithLine},
};

/// Simple source container that holds the filename and source text.
///
/// # Usage Example
///
/// ```rust
/// use osu_rs::diagnostics::SimpleSource;
///
/// let source = SimpleSource::new("test.osu", "osu file format v14\r\n[General]\r\n");
/// assert_eq!(source.name(), "test.osu");
/// assert_eq!(source.line_span(2), 21..30);
/// ```
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The span of the 1-based `line` in characters, without its terminator.
    ///
    /// Line `0` and lines past the end give an empty span at the start or the end of the text.
    #[must_use]
    pub fn line_span(&self, line: usize) -> Range<usize> {
        if line == 0 {
            return 0..0;
        }
        let mut start = 0;
        for (index, raw) in self.text.split_inclusive('\n').enumerate() {
            let len = raw.chars().count();
            if index + 1 == line {
                let content = raw.trim_end_matches(['\r', '\n']).chars().count();
                return start..start + content;
            }
            start += len;
        }
        start..start
    }
}

/// Trait for converting line-numbered errors to `ariadne::Report`.
///
/// # Usage Example
///
/// ```rust
/// use ariadne::Source;
/// use osu_rs::{diagnostics::{SimpleSource, ToAriadne}, osu::OsuWarning};
///
/// let warnings: Vec<OsuWarning> = vec![];
/// let source_text = "osu file format v14\n";
/// let source = SimpleSource::new("test.osu", source_text);
/// let ariadne_source = Source::from(source_text);
///
/// for warning in &warnings {
///     let report = warning.to_report(&source);
///     let _ = report.print(("test.osu".to_string(), ariadne_source.clone()));
/// }
/// ```
#[cfg(feature = "diagnostics")]
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)>;
}

/// Helper to build a styled ariadne `Report` pointing at one line.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    line: usize,
    title: &str,
    label_message: impl ToString,
    color: Color,
) -> Report<'a, (String, Range<usize>)> {
    let filename = src.name().to_string();
    let range = src.line_span(line);
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(title)
        .with_label(
            Label::new((filename, range))
                .with_message(label_message.to_string())
                .with_color(color),
        )
        .finish()
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for LexWarningWithLine {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.line(),
            "lex",
            self.content(),
            Color::Yellow,
        )
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for ParseWarningWithLine {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(
            src,
            ReportKind::Warning,
            self.line(),
            "parse",
            self.content(),
            Color::Blue,
        )
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for OsuWarning {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        match self {
            Self::Lex(warning) => warning.to_report(src),
            Self::Parse(warning) => warning.to_report(src),
        }
    }
}

#[cfg(feature = "diagnostics")]
impl ToAriadne for ParseError {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> Report<'a, (String, Range<usize>)> {
        build_report(
            src,
            ReportKind::Error,
            self.line().unwrap_or(0),
            "cannot read the beatmap",
            self,
            Color::Red,
        )
    }
}

/// Convenience method: batch render `OsuWarning` list to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete `.osu` source text
/// * `warnings` - List of warnings to display
#[cfg(feature = "diagnostics")]
pub fn emit_osu_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a OsuWarning>,
) {
    let ariadne_source = Source::from(source);
    for report in collect_osu_reports(name, source, warnings) {
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Collect `ariadne::Report` instances for a list of `OsuWarning` without printing.
///
/// This is useful in tests to verify diagnostics can be generated while keeping test output clean.
#[cfg(feature = "diagnostics")]
#[must_use]
pub fn collect_osu_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a OsuWarning>,
) -> Vec<Report<'a, (String, Range<usize>)>> {
    let simple = SimpleSource::new(name, source);
    warnings.into_iter().map(|w| w.to_report(&simple)).collect()
}
