//! Parsing the sections of the `.osu` format into [`BeatMap`](super::model::BeatMap) parts.
//!
//! Every section has its own processor in [`section_processor`]. A processor reads only the lines of its section through a [`ProcessContext`] and returns its own part of the beatmap, which [`super::parse_osu`] merges.

pub mod section_processor;

use std::{ops::Range, str::FromStr};

use thiserror::Error;

use super::{
    command::mixin::{SourceLineMixin, SourceLineMixinExt},
    lex::{
        LexWarningWithLine, Section,
        cursor::{Cursor, is_ignorable},
        key_value::{KeyValueOutput, KeyValues},
    },
    prompt::Prompter,
};

/// A problem on a line which is skipped or a value which falls back to its default.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// The key is not known in the section.
    #[error("unknown key `{key}` in [{section}]")]
    UnknownKey {
        /// The section containing the key.
        section: Section,
        /// The unknown key.
        key: String,
    },
    /// The record has a wrong number of comma separated fields.
    #[error("expected {expected} fields but found {found}")]
    InvalidFieldCount {
        /// What was expected, such as `8` or `at least 6`.
        expected: String,
        /// The actual number of fields.
        found: usize,
    },
    /// A field is not a number of the expected type.
    #[error("expected a number for {field} but found `{value}`")]
    InvalidNumber {
        /// Name of the field.
        field: String,
        /// The text found.
        value: String,
    },
    /// A field is a number but not in its domain.
    #[error("{field} is out of range: {value}")]
    OutOfRange {
        /// Name of the field.
        field: String,
        /// The number found.
        value: i64,
    },
    /// A boolean field is neither `0` nor `1`.
    #[error("expected `0` or `1` for {field} but found `{value}`")]
    InvalidBool {
        /// Name of the field.
        field: String,
        /// The text found.
        value: String,
    },
    /// The event type is not background, video or break.
    #[error("unsupported event type `{0}`")]
    UnknownEventType(String),
    /// The colour name is not `ComboN`, `SliderTrackOverride` or `SliderBorder`.
    #[error("unknown colour name `{0}`")]
    UnknownColourName(String),
    /// The type byte of a hit object has no shape bit.
    #[error("hit object type {0} has no shape")]
    UnknownHitObjectType(u8),
    /// A slider edge list does not have one entry per edge.
    #[error("expected {expected} {field} but found {found}")]
    EdgeCountMismatch {
        /// Name of the list.
        field: String,
        /// `slides + 1`.
        expected: usize,
        /// The actual length.
        found: usize,
    },
}

/// type alias of `SourceLineMixin<ParseWarning>`
pub type ParseWarningWithLine = SourceLineMixin<ParseWarning>;

/// type alias of `core::result::Result<T, ParseWarning>`
pub(crate) type Result<T> = core::result::Result<T, ParseWarning>;

/// A problem which makes the whole file unreadable.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// No `osu file format vN` line before the first section.
    #[error("missing `osu file format v` version line")]
    MissingVersion,
    /// The version after `osu file format v` is not an integer.
    #[error("invalid format version `{version}` at line {line}")]
    InvalidVersion {
        /// The text after `v`.
        version: String,
        /// 1-based line number.
        line: usize,
    },
    /// A mandatory section is absent.
    #[error("missing mandatory section [{0}]")]
    MissingSection(Section),
    /// A value in a mandatory scalar section could not be read.
    #[error("invalid value `{value}` for {key} in [{section}] at line {line}: {reason}")]
    InvalidValue {
        /// The section.
        section: Section,
        /// The key.
        key: String,
        /// The value.
        value: String,
        /// 1-based line number.
        line: usize,
        /// Why the value was rejected.
        reason: ParseWarning,
    },
}

impl ParseError {
    /// 1-based line number the error points at, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::InvalidVersion { line, .. } | Self::InvalidValue { line, .. } => Some(*line),
            Self::MissingVersion | Self::MissingSection(_) => None,
        }
    }
}

/// Everything a [`section_processor::SectionProcessor`] reads, and the sink of its warnings.
pub struct ProcessContext<'a, 'p, P> {
    lines: &'a [&'a str],
    body: Range<usize>,
    prompter: &'p P,
    lex_warnings: Vec<LexWarningWithLine>,
    parse_warnings: Vec<ParseWarningWithLine>,
}

impl<'a, 'p, P: Prompter> ProcessContext<'a, 'p, P> {
    /// Creates a context over the `body` lines of a section.
    pub fn new(lines: &'a [&'a str], body: Range<usize>, prompter: &'p P) -> Self {
        Self {
            lines,
            body,
            prompter,
            lex_warnings: Vec::new(),
            parse_warnings: Vec::new(),
        }
    }

    /// The prompter of the parse.
    pub const fn prompter(&self) -> &'p P {
        self.prompter
    }

    /// Extracts the `Key: Value` pairs of the body, collecting the lex warnings.
    pub fn key_values(&mut self) -> KeyValues<'a> {
        let mut cursor = Cursor::with_range(self.lines, self.body.clone());
        let KeyValueOutput {
            key_values,
            lex_warnings,
        } = KeyValues::extract(&mut cursor, self.prompter);
        self.lex_warnings.extend(lex_warnings);
        key_values
    }

    /// Iterates the body lines carrying data, with their 0-based indices.
    pub fn record_lines(&self) -> impl Iterator<Item = (usize, &'a str)> + use<'a, P> {
        Cursor::with_range(self.lines, self.body.clone()).filter(is_record_line)
    }

    /// Parses every record line with `parse`, dropping the failed lines with a warning.
    pub fn all_records<T>(&mut self, mut parse: impl FnMut(&'a str) -> Result<T>) -> Vec<T> {
        let mut records = Vec::new();
        for (index, line) in self.record_lines() {
            match parse(line) {
                Ok(record) => records.push(record),
                Err(warning) => self.warn(warning.into_wrapper_index(index)),
            }
        }
        records
    }

    /// Records a warning.
    pub fn warn(&mut self, warning: ParseWarningWithLine) {
        self.parse_warnings.push(warning);
    }

    /// Takes the collected warnings out.
    pub fn into_warnings(self) -> (Vec<LexWarningWithLine>, Vec<ParseWarningWithLine>) {
        (self.lex_warnings, self.parse_warnings)
    }
}

fn is_record_line(&(_, line): &(usize, &str)) -> bool {
    !is_ignorable(line)
}

/// Parses a number, naming `field` on failure. Non-finite floats are rejected.
pub(crate) fn parse_number<T: FromStr + Finite>(field: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .ok()
        .filter(Finite::is_finite)
        .ok_or_else(|| ParseWarning::InvalidNumber {
            field: field.to_owned(),
            value: value.to_owned(),
        })
}

/// Parses a `0` or `1` flag.
pub(crate) fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(ParseWarning::InvalidBool {
            field: field.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Parses an integer code and converts it into an enum.
pub(crate) fn parse_code<T: TryFrom<i64, Error = i64>>(field: &str, value: &str) -> Result<T> {
    let code: i64 = parse_number(field, value)?;
    T::try_from(code).map_err(|value| ParseWarning::OutOfRange {
        field: field.to_owned(),
        value,
    })
}

/// Parses an integer and narrows it into `T`, reporting out of range values.
pub(crate) fn parse_ranged<T: TryFrom<i64>>(field: &str, value: &str) -> Result<T> {
    let number: i64 = parse_number(field, value)?;
    T::try_from(number).map_err(|_| ParseWarning::OutOfRange {
        field: field.to_owned(),
        value: number,
    })
}

/// Checks the number of fields of a record.
pub(crate) fn expect_fields(fields: &[&str], expected: usize) -> Result<()> {
    if fields.len() == expected {
        return Ok(());
    }
    Err(ParseWarning::InvalidFieldCount {
        expected: expected.to_string(),
        found: fields.len(),
    })
}

/// Numbers which may be infinite or NaN.
pub(crate) trait Finite {
    fn is_finite(&self) -> bool;
}

impl Finite for f64 {
    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

macro_rules! impl_finite_for_integers {
    ($($t:ty),*) => {
        $(impl Finite for $t {
            fn is_finite(&self) -> bool {
                true
            }
        })*
    };
}

impl_finite_for_integers!(i32, i64, u32, u8);
