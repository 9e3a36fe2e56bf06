//! JavaScript/JSX linter with auto-fix support.

pub mod fix;
pub mod linter;
pub mod registry;
pub mod rules;

pub use fix::{FixOutcome, apply_fixes};
pub use linter::{Linter, SourceUnit};
pub use registry::{FromConfig, RuleRegistry};

use skylint_diagnostics::Diagnostic;
use skylint_js_cst::{CommentToken, CstNode};
use skylint_source_file::{LineColumn, LineIndex};
use text_size::TextSize;

/// What a rule may look at besides the node itself.
pub struct CheckContext<'a> {
    source: &'a str,
    line_index: LineIndex,
}

impl<'a> CheckContext<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line_index: LineIndex::from_source_text(source),
        }
    }

    /// 1-based line and column of `offset`, for logs.
    pub fn line_column(&self, offset: TextSize) -> LineColumn {
        self.line_index.line_column(offset, self.source)
    }
}

/// A lint rule.
///
/// The driver walks every node of a tree once and hands each node to the
/// rules whose [`Rule::relevant_kinds`] include the node's kind. After the
/// walk, every rule sees the full comment list of the source once.
pub trait Rule: Send + Sync {
    /// The rule's name as used in configuration (e.g. `no-jira-todo`).
    fn name(&self) -> &'static str;

    /// Node kinds this rule cares about.
    fn relevant_kinds(&self) -> &'static [&'static str] {
        &[]
    }

    fn check(&self, _ctx: &CheckContext, _node: &CstNode) -> Vec<Diagnostic> {
        vec![]
    }

    /// Check the comments of a source, given in source order.
    fn check_comments(&self, _ctx: &CheckContext, _comments: &[CommentToken]) -> Vec<Diagnostic> {
        vec![]
    }
}

/// Diagnostics of one source, ordered by position.
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics that carry a fix, whatever its applicability.
    pub fn fixable(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.fixable())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.error_count()
    }
}
