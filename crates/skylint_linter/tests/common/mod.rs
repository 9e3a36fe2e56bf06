//! Shared helpers for the rule integration tests.

#![allow(dead_code)]

use skylint_config::SkylintConfig;
use skylint_js_parser::SourceType;
use skylint_linter::Linter;
use skylint_source_file::LineIndex;

/// A reported violation at a 1-based line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub message_id: Option<&'static str>,
}

impl Finding {
    pub fn new(line: usize, column: usize, message: &str) -> Self {
        Self {
            line,
            column,
            message: message.to_string(),
            message_id: None,
        }
    }
}

/// Build a linter from a skylint.toml snippet.
pub fn linter(config: &str) -> Linter {
    let config = SkylintConfig::parse(config).expect("test config should parse");
    Linter::from_config(&config).expect("test config should be valid")
}

/// Lint `source` as JSX and report findings in source order.
pub fn lint(config: &str, source: &str) -> Vec<Finding> {
    lint_as(config, source, SourceType::Jsx)
}

pub fn lint_as(config: &str, source: &str, source_type: SourceType) -> Vec<Finding> {
    let result = linter(config).lint(source, source_type);
    let line_index = LineIndex::from_source_text(source);

    result
        .diagnostics
        .iter()
        .map(|diagnostic| {
            let loc = line_index.line_column(diagnostic.range.start(), source);
            Finding {
                line: loc.line.get(),
                column: loc.column.get(),
                message: diagnostic.kind.body.clone(),
                message_id: diagnostic.kind.message_id,
            }
        })
        .collect()
}

/// Only the (line, column) pairs of the findings.
pub fn positions(findings: &[Finding]) -> Vec<(usize, usize)> {
    findings.iter().map(|f| (f.line, f.column)).collect()
}
