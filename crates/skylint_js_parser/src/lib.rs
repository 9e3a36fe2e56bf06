//! JavaScript/JSX parser for skylint, built on tree-sitter.

/// Which grammar a source unit is parsed with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// JavaScript with JSX.
    #[default]
    Jsx,
    /// TypeScript without JSX. Angle brackets are type assertions.
    Ts,
    /// TypeScript with JSX.
    Tsx,
}

impl SourceType {
    /// Pick a grammar from a file extension. Unknown extensions yield `None`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::Ts),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    /// The tree-sitter language for this source type.
    pub fn language(self) -> tree_sitter::Language {
        match self {
            Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::Ts => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// Result of parsing a source file.
pub struct ParseResult {
    pub tree: tree_sitter::Tree,
}

impl ParseResult {
    /// True when tree-sitter had to recover from syntax errors.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Parser wrapping tree-sitter.
pub struct JsParser {
    parser: tree_sitter::Parser,
}

impl JsParser {
    /// Create a parser for JavaScript with JSX.
    pub fn new() -> Self {
        Self::for_source_type(SourceType::Jsx)
    }

    /// Create a parser for the given source type.
    pub fn for_source_type(source_type: SourceType) -> Self {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&source_type.language())
            .expect("Failed to load JavaScript grammar");
        Self { parser }
    }

    /// Parse source code into a syntax tree.
    pub fn parse(&mut self, source: &str) -> Option<ParseResult> {
        let tree = self.parser.parse(source, None)?;
        Some(ParseResult { tree })
    }
}

impl Default for JsParser {
    fn default() -> Self {
        Self::new()
    }
}
