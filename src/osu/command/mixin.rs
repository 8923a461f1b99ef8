//! Mixin types for structures.
//!
//! - `SourceLineMixin` is a generic wrapper that attaches the source line number to a value.
//! - `SourceLineMixinExt` is a trait that provides extension methods for `SourceLineMixin`, providing more convenient methods to create `SourceLineMixin` instances.

/// A generic wrapper that attaches the source line number to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLineMixin<T> {
    /// Wrapped content value
    content: T,
    /// Line number in the source (1-based)
    line: usize,
}

impl<T> SourceLineMixin<T> {
    /// Instances a new `SourceLineMixin`
    pub const fn new(content: T, line: usize) -> Self {
        Self { content, line }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Returns the wrapped content as a mutable reference.
    pub const fn content_mut(&mut self) -> &mut T {
        &mut self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the 1-based line number of the source.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based index of the source line in the line sequence.
    pub const fn line_index(&self) -> usize {
        self.line.saturating_sub(1)
    }

    /// Returns the inner reference version of the wrapper.
    pub const fn inner_ref(&self) -> SourceLineMixin<&T> {
        SourceLineMixin::new(&self.content, self.line)
    }

    /// Maps the content of the wrapper.
    pub fn map<U, F>(self, f: F) -> SourceLineMixin<U>
    where
        F: FnOnce(T) -> U,
    {
        SourceLineMixin::new(f(self.content), self.line)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceLineMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at line {}", self.content, self.line)
    }
}

impl<T> From<(T, usize)> for SourceLineMixin<T> {
    fn from(value: (T, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<T> From<SourceLineMixin<T>> for (T, usize) {
    fn from(value: SourceLineMixin<T>) -> Self {
        (value.content, value.line)
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceLineMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for `SourceLineMixin`.
pub trait SourceLineMixinExt {
    /// Instances a new `SourceLineMixin` with the same line as a wrapper.
    fn into_wrapper<W>(self, wrapper: &SourceLineMixin<W>) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, wrapper.line)
    }

    /// Instances a new `SourceLineMixin` at the given 1-based line number.
    fn into_wrapper_line(self, line: usize) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, line)
    }

    /// Instances a new `SourceLineMixin` from a 0-based index into the line sequence.
    fn into_wrapper_index(self, index: usize) -> SourceLineMixin<Self>
    where
        Self: Sized,
    {
        SourceLineMixin::new(self, index + 1)
    }
}

impl<T> SourceLineMixinExt for T {}
