//! Line/column lookup for source text.
//!
//! Diagnostics carry byte ranges; reporting needs 1-based line and column
//! numbers. [`LineIndex`] records where every line starts so that lookups are a
//! binary search instead of a rescan of the source.

use std::fmt;
use std::num::NonZeroUsize;

use text_size::TextSize;

/// A 1-based index (line or column number).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneIndexed(NonZeroUsize);

impl OneIndexed {
    /// The smallest value, `1`.
    pub const MIN: Self = Self(NonZeroUsize::MIN);

    /// Create from a 1-based value. Returns `None` for zero.
    pub const fn new(value: usize) -> Option<Self> {
        match NonZeroUsize::new(value) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// Create from a 0-based value.
    pub const fn from_zero_indexed(value: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(value))
    }

    /// The 1-based value.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based value.
    pub const fn to_zero_indexed(self) -> usize {
        self.0.get() - 1
    }
}

impl Default for OneIndexed {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for OneIndexed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A line/column pair, both 1-based. The column counts characters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineColumn {
    pub line: OneIndexed,
    pub column: OneIndexed,
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start offsets of every line in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    /// Build the index. `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn from_source_text(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut line_starts = Vec::with_capacity(text.len() / 80 + 1);
        line_starts.push(TextSize::from(0));

        for pos in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            // `\r\n` is a single terminator; the `\n` pass records the start.
            if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
                continue;
            }
            line_starts.push(to_text_size(pos + 1));
        }

        Self {
            line_starts,
            len: to_text_size(text.len()),
        }
    }

    /// Line containing `offset`.
    pub fn line_index(&self, offset: TextSize) -> OneIndexed {
        match self.line_starts.binary_search(&offset) {
            Ok(row) => OneIndexed::from_zero_indexed(row),
            Err(next_row) => OneIndexed::from_zero_indexed(next_row - 1),
        }
    }

    /// Offset of the first character of `line`. Lines past the end clamp to
    /// the end of the text.
    pub fn line_start(&self, line: OneIndexed) -> TextSize {
        self.line_starts
            .get(line.to_zero_indexed())
            .copied()
            .unwrap_or(self.len)
    }

    /// Line and column of `offset` in `text`.
    pub fn line_column(&self, offset: TextSize, text: &str) -> LineColumn {
        let line = self.line_index(offset);
        let line_start = usize::from(self.line_start(line));
        let offset = usize::from(offset).min(text.len());
        let column = text
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());

        LineColumn {
            line,
            column: OneIndexed::from_zero_indexed(column),
        }
    }
}

fn to_text_size(offset: usize) -> TextSize {
    TextSize::try_from(offset).unwrap_or_else(|_| TextSize::from(u32::MAX))
}
