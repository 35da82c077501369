//! Source location tracking for tokens and elements.

/// A span of source text.
///
/// Tracks byte offsets and the 1-based line/column where the span starts,
/// for error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset where this span starts.
    pub start: usize,
    /// Byte offset where this span ends (exclusive).
    pub end: usize,
    /// 1-based line number where this span starts.
    pub line: u32,
    /// 1-based column number where this span starts.
    pub column: u32,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns the text this span covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Returns the full source line this span starts on.
    ///
    /// Used as error-message context.
    #[must_use]
    pub fn line_text<'a>(&self, source: &'a str) -> &'a str {
        source
            .lines()
            .nth(self.line.saturating_sub(1) as usize)
            .unwrap_or("")
    }
}
