use text_size::{TextRange, TextSize};

/// A text edit to be applied to a source file: `range` is replaced with
/// `content`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edit {
    /// The range of the original text being replaced.
    range: TextRange,
    /// The replacement content.
    content: Box<str>,
}

impl Edit {
    /// Creates an edit that replaces the content in `range` with `content`.
    pub fn range_replacement(content: String, range: TextRange) -> Self {
        Self {
            content: Box::from(content),
            range,
        }
    }

    /// The text that replaces [`Edit::range`].
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn start(&self) -> TextSize {
        self.range.start()
    }

    pub fn end(&self) -> TextSize {
        self.range.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_bounds() {
        let range = TextRange::new(TextSize::from(4), TextSize::from(8));
        let edit = Edit::range_replacement("x".to_string(), range);

        assert_eq!(edit.content(), "x");
        assert_eq!(edit.start(), TextSize::from(4));
        assert_eq!(edit.end(), TextSize::from(8));
    }

    #[test]
    fn test_empty_content_deletes() {
        let range = TextRange::new(TextSize::from(1), TextSize::from(2));
        assert_eq!(Edit::range_replacement(String::new(), range).content(), "");
    }
}
