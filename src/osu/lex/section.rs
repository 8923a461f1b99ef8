//! Locating section headers in the line sequence.

use std::ops::Range;

use super::cursor::is_section_header;

/// A named section of the `.osu` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// `[General]`
    General,
    /// `[Editor]`
    Editor,
    /// `[Metadata]`
    Metadata,
    /// `[Difficulty]`
    Difficulty,
    /// `[Events]`
    Events,
    /// `[TimingPoints]`
    TimingPoints,
    /// `[Colours]`
    Colours,
    /// `[HitObjects]`
    HitObjects,
}

impl Section {
    /// All the sections in the order they are written.
    pub const ALL: [Self; 8] = [
        Self::General,
        Self::Editor,
        Self::Metadata,
        Self::Difficulty,
        Self::Events,
        Self::TimingPoints,
        Self::Colours,
        Self::HitObjects,
    ];

    /// The bare name of the section.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Editor => "Editor",
            Self::Metadata => "Metadata",
            Self::Difficulty => "Difficulty",
            Self::Events => "Events",
            Self::TimingPoints => "TimingPoints",
            Self::Colours => "Colours",
            Self::HitObjects => "HitObjects",
        }
    }

    /// The header line introducing the section, such as `[General]`.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::General => "[General]",
            Self::Editor => "[Editor]",
            Self::Metadata => "[Metadata]",
            Self::Difficulty => "[Difficulty]",
            Self::Events => "[Events]",
            Self::TimingPoints => "[TimingPoints]",
            Self::Colours => "[Colours]",
            Self::HitObjects => "[HitObjects]",
        }
    }

    /// Whether decoding fails without the section.
    #[must_use]
    pub const fn is_mandatory(self) -> bool {
        !matches!(self, Self::Editor | Self::Events | Self::Colours)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Finds the 0-based index of the first line starting with `header`, ignoring leading whitespace.
#[must_use]
pub fn find_section(lines: &[&str], header: &str) -> Option<usize> {
    lines
        .iter()
        .position(|line| line.trim_start().starts_with(header))
}

/// Finds the index of the first section header after `from`, or `lines.len()` if there is none.
#[must_use]
pub fn next_section(lines: &[&str], from: usize) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(from.saturating_add(1))
        .find_map(|(index, line)| is_section_header(line).then_some(index))
        .unwrap_or(lines.len())
}

/// The location of a section in the line sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionRange {
    /// Index of the header line.
    pub header: usize,
    /// Indices of the lines between the header and the next section.
    pub body: Range<usize>,
}

/// Locates `section`, returning the header position and the body range.
#[must_use]
pub fn locate(lines: &[&str], section: Section) -> Option<SectionRange> {
    let header = find_section(lines, section.header())?;
    Some(SectionRange {
        header,
        body: header + 1..next_section(lines, header),
    })
}
