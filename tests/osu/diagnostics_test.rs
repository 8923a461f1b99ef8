//! Test diagnostics module functionality

use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

/// Removes the colour escapes of the terminal output.
fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            chars.by_ref().find(|c| c.is_ascii_alphabetic());
        } else {
            plain.push(c);
        }
    }
    plain
}

#[test]
fn test_simple_source_creation() {
    let source_text = "osu file format v14\n[General]\n";
    let source = SimpleSource::new("test.osu", source_text);

    assert_eq!(source.text(), source_text);
    assert_eq!(source.name(), "test.osu");
}

#[test]
fn test_collect_reports_for_every_warning() {
    let source = include_str!("files/mania_crlf.osu");
    let output = parse_osu_str(source, default_config());
    assert!(!output.warnings.is_empty());

    let reports = collect_osu_reports("mania_crlf.osu", source, &output.warnings);
    assert_eq!(reports.len(), output.warnings.len());
}

#[test]
fn test_report_points_at_the_line() {
    let source = "osu file format v14\n[General]\nFancyKey: 1\n";
    let simple = SimpleSource::new("test.osu", source);
    let warning = OsuWarning::Parse(ParseWarningWithLine::new(
        ParseWarning::UnknownKey {
            section: Section::General,
            key: "FancyKey".to_owned(),
        },
        3,
    ));
    assert_eq!(simple.line_span(warning.line()), 30..41);

    let mut rendered = Vec::new();
    warning
        .to_report(&simple)
        .write(
            ("test.osu".to_owned(), ariadne::Source::from(source)),
            &mut rendered,
        )
        .unwrap();
    let rendered = strip_ansi(&String::from_utf8(rendered).unwrap());
    assert!(rendered.contains("unknown key `FancyKey` in [General]"));
    assert!(rendered.contains("test.osu"));
}

#[test]
fn test_fatal_error_report() {
    let source = "[General]\n";
    let error = parse_osu_str(source, default_config())
        .beatmap
        .unwrap_err();
    let simple = SimpleSource::new("test.osu", source);
    let mut rendered = Vec::new();
    error
        .to_report(&simple)
        .write(
            ("test.osu".to_owned(), ariadne::Source::from(source)),
            &mut rendered,
        )
        .unwrap();
    assert!(!rendered.is_empty());
}

#[test]
fn test_emit_warnings_does_not_panic() {
    let source = include_str!("files/mania_crlf.osu");
    let output = parse_osu_str(source, default_config());
    emit_osu_warnings("mania_crlf.osu", source, &output.warnings);
}
