//! Lexical layer of the `.osu` format.
//!
//! The format is line oriented: a version line, then sections introduced by `[Name]` headers. Scalar sections hold `Key: Value` lines, list sections hold comma separated records. This module finds the sections ([`section`]) and splits scalar lines into pairs ([`key_value`]). Reading the values is the job of [`super::parse`].

pub mod cursor;
pub mod key_value;
pub mod section;

use thiserror::Error;

use super::command::mixin::SourceLineMixin;

pub use self::section::Section;

/// A line which could not be read as a `Key: Value` pair.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexWarning {
    /// The line has no `:`.
    #[error("expected `Key: Value` but no `:` found in `{content}`")]
    MissingDelimiter {
        /// The whole line.
        content: String,
    },
    /// The text before `:` is blank.
    #[error("key is empty in `{content}`")]
    EmptyKey {
        /// The whole line.
        content: String,
    },
    /// The key was already defined in the same section.
    #[error("key `{key}` is duplicated, first defined at line {older_line}")]
    DuplicateKey {
        /// The duplicated key.
        key: String,
        /// 1-based line number of the existing definition.
        older_line: usize,
    },
}

/// type alias of `SourceLineMixin<LexWarning>`
pub type LexWarningWithLine = SourceLineMixin<LexWarning>;
