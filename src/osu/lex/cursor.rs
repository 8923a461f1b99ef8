//! Line cursor bounded to a section body.

use std::ops::Range;

/// A forward-only cursor over a bounded range of the line sequence.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The whole line sequence.
    lines: &'a [&'a str],
    /// The index of the next line to read.
    index: usize,
    /// The index where reading stops, exclusive.
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over all the lines.
    #[must_use]
    pub const fn new(lines: &'a [&'a str]) -> Self {
        Self {
            lines,
            index: 0,
            end: lines.len(),
        }
    }

    /// Creates a cursor over `range` of the lines. The range is clipped into the sequence.
    #[must_use]
    pub fn with_range(lines: &'a [&'a str], range: Range<usize>) -> Self {
        let end = range.end.min(lines.len());
        Self {
            lines,
            index: range.start.min(end),
            end,
        }
    }

    /// Whether no lines are left.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.index >= self.end
    }

    /// Returns the 0-based index of the next line.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the next line without moving the cursor.
    #[must_use]
    pub fn peek_line(&self) -> Option<&'a str> {
        if self.is_end() {
            return None;
        }
        Some(self.lines[self.index])
    }

    /// Moves the cursor through the next line and returns it with its 0-based index.
    pub fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.peek_line()?;
        let index = self.index;
        self.index += 1;
        Some((index, line))
    }

    /// Whether the next line opens a new section.
    #[must_use]
    pub fn at_section_header(&self) -> bool {
        self.peek_line().is_some_and(is_section_header)
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line()
    }
}

/// Whether the line opens a section, that is starts with `[`.
#[must_use]
pub fn is_section_header(line: &str) -> bool {
    line.trim_start().starts_with('[')
}

/// Whether the line carries no data: blank or a `//` comment.
#[must_use]
pub fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_forward() {
        let lines = ["[General]", "A: 1", "", "[Editor]"];
        let mut cursor = Cursor::new(&lines);
        assert!(cursor.at_section_header());
        assert_eq!(cursor.next_line(), Some((0, "[General]")));
        assert_eq!(cursor.peek_line(), Some("A: 1"));
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.by_ref().count(), 3);
        assert!(cursor.is_end());
        assert_eq!(cursor.next_line(), None);
    }

    #[test]
    fn test_cursor_with_range_is_clipped() {
        let lines = ["a", "b", "c"];
        let cursor = Cursor::with_range(&lines, 1..10);
        assert_eq!(cursor.collect::<Vec<_>>(), vec![(1, "b"), (2, "c")]);

        let mut empty = Cursor::with_range(&lines, 5..10);
        assert!(empty.is_end());
        assert_eq!(empty.next_line(), None);
    }

    #[test]
    fn test_line_classes() {
        assert!(is_section_header("[HitObjects]"));
        assert!(is_section_header("  [Broken"));
        assert!(!is_section_header("Key: [value]"));
        assert!(is_ignorable(""));
        assert!(is_ignorable("   "));
        assert!(is_ignorable("// comment"));
        assert!(!is_ignorable("Key: // value"));
    }
}
