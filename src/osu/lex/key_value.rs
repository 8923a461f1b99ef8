//! Extraction of `Key: Value` lines.

use super::{
    LexWarning, LexWarningWithLine,
    cursor::{Cursor, is_ignorable},
};
use crate::osu::{
    command::mixin::SourceLineMixinExt,
    prompt::{KeyDuplication, Prompter},
};

/// A trimmed key and value pair with its source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyValue<'a> {
    /// The text before the first `:`, trimmed.
    pub key: &'a str,
    /// The text after the first `:`, trimmed. It may contain more `:`.
    pub value: &'a str,
    /// 1-based line number.
    pub line: usize,
}

/// An ordered mapping from keys to values, in the order the keys first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyValues<'a> {
    entries: Vec<KeyValue<'a>>,
}

/// Result of [`KeyValues::extract`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueOutput<'a> {
    /// Extracted pairs.
    pub key_values: KeyValues<'a>,
    /// Lines which could not be read as pairs.
    pub lex_warnings: Vec<LexWarningWithLine>,
}

impl<'a> KeyValues<'a> {
    /// Reads pairs from the cursor until the next section header or the end of the cursor.
    ///
    /// Blank and `//` comment lines are skipped. The header line is left unconsumed.
    pub fn extract(cursor: &mut Cursor<'a>, prompter: &impl Prompter) -> KeyValueOutput<'a> {
        let mut output = KeyValueOutput::default();
        while !cursor.at_section_header() {
            let Some((index, line)) = cursor.next_line() else {
                break;
            };
            if is_ignorable(line) {
                continue;
            }
            let Some((key, value)) = line.split_once(':') else {
                output.lex_warnings.push(
                    LexWarning::MissingDelimiter {
                        content: line.to_owned(),
                    }
                    .into_wrapper_index(index),
                );
                continue;
            };
            let entry = KeyValue {
                key: key.trim(),
                value: value.trim(),
                line: index + 1,
            };
            if entry.key.is_empty() {
                output.lex_warnings.push(
                    LexWarning::EmptyKey {
                        content: line.to_owned(),
                    }
                    .into_wrapper_index(index),
                );
                continue;
            }
            if let Some(warning) = output.key_values.insert(entry, prompter) {
                output.lex_warnings.push(warning);
            }
        }
        output
    }

    /// Inserts an entry, consulting `prompter` when the key is already present.
    ///
    /// Keys are compared ignoring ASCII case. The first spelling of a key is kept.
    ///
    /// Returns a warning if the prompter asked to report the duplication.
    pub fn insert(
        &mut self,
        entry: KeyValue<'a>,
        prompter: &impl Prompter,
    ) -> Option<LexWarningWithLine> {
        let Some(position) = self
            .entries
            .iter()
            .position(|older| older.key.eq_ignore_ascii_case(entry.key))
        else {
            self.entries.push(entry);
            return None;
        };
        let older = &mut self.entries[position];
        let workaround = prompter.handle_duplication(KeyDuplication {
            key: entry.key,
            older: older.value,
            newer: entry.value,
            line: entry.line,
        });
        let warning = workaround.warns().then(|| {
            LexWarning::DuplicateKey {
                key: entry.key.to_owned(),
                older_line: older.line,
            }
            .into_wrapper_line(entry.line)
        });
        if workaround.takes_newer() {
            older.value = entry.value;
            older.line = entry.line;
        }
        warning
    }

    /// Gets the value of `key`, compared ignoring ASCII case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.get_entry(key).map(|entry| entry.value)
    }

    /// Gets the whole entry of `key`, compared ignoring ASCII case.
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<&KeyValue<'a>> {
        self.entries
            .iter()
            .find(|entry| entry.key.eq_ignore_ascii_case(key))
    }

    /// Iterates the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, KeyValue<'a>> {
        self.entries.iter()
    }

    /// Number of the entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a, 'b> IntoIterator for &'b KeyValues<'a> {
    type Item = &'b KeyValue<'a>;
    type IntoIter = std::slice::Iter<'b, KeyValue<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
