//! Prompting interface and utilities.
//!
//! An object implementing [`Prompter`] is carried by [`super::ParseConfig`]. It is used to handle conflicts on parsing the `.osu` file, that is a key written twice in one scalar section.

/// It represents that a key is duplicated in one scalar section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct KeyDuplication<'a> {
    /// The duplicated key.
    pub key: &'a str,
    /// Existing value.
    pub older: &'a str,
    /// Incoming value.
    pub newer: &'a str,
    /// 1-based line number of the incoming value.
    pub line: usize,
}

/// A choice to handle the duplicated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DuplicationWorkaround {
    /// Choose to use the existing one.
    UseOlder,
    /// Choose to use the incoming one.
    UseNewer,
    /// Report a warning and use the existing one.
    WarnAndUseOlder,
    /// Report a warning and use the incoming one.
    WarnAndUseNewer,
}

impl DuplicationWorkaround {
    /// Whether the incoming value replaces the existing one.
    #[must_use]
    pub const fn takes_newer(self) -> bool {
        matches!(self, Self::UseNewer | Self::WarnAndUseNewer)
    }

    /// Whether the duplication should be reported as a warning.
    #[must_use]
    pub const fn warns(self) -> bool {
        matches!(self, Self::WarnAndUseOlder | Self::WarnAndUseNewer)
    }
}

/// An interface to prompt about handling conflicts on the `.osu` file.
pub trait Prompter {
    /// Determines a [`DuplicationWorkaround`] for a duplicated key.
    fn handle_duplication(&self, duplication: KeyDuplication<'_>) -> DuplicationWorkaround;
}

impl<T: Prompter + ?Sized> Prompter for &T {
    fn handle_duplication(&self, duplication: KeyDuplication<'_>) -> DuplicationWorkaround {
        (**self).handle_duplication(duplication)
    }
}

/// The strategy that always using older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseOlder;

impl Prompter for AlwaysUseOlder {
    fn handle_duplication(&self, _: KeyDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseOlder
    }
}

/// The strategy that always using newer ones. This is how the game client reads the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysUseNewer;

impl Prompter for AlwaysUseNewer {
    fn handle_duplication(&self, _: KeyDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::UseNewer
    }
}

/// The strategy that always warns and uses newer ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysWarnAndUseNewer;

impl Prompter for AlwaysWarnAndUseNewer {
    fn handle_duplication(&self, _: KeyDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::WarnAndUseNewer
    }
}

/// The strategy that always warns and uses older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AlwaysWarnAndUseOlder;

impl Prompter for AlwaysWarnAndUseOlder {
    fn handle_duplication(&self, _: KeyDuplication<'_>) -> DuplicationWorkaround {
        DuplicationWorkaround::WarnAndUseOlder
    }
}
