//! The lint driver: parses sources and runs the configured rules over them.

use std::path::Path;

use rayon::prelude::*;
use skylint_config::{ConfigError, RuleLevel, SkylintConfig};
use skylint_diagnostics::{Applicability, Diagnostic, Severity};
use skylint_js_cst::{TreeWalker, comments};
use skylint_js_parser::{JsParser, SourceType};

use crate::fix::{FixOutcome, apply_fixes};
use crate::registry::RuleRegistry;
use crate::rules::{ForbidComponentProps, NoJiraTodo};
use crate::{CheckContext, LintResult, Rule};

/// One independent source to lint.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// File name or other label used in logs.
    pub name: String,
    pub source: String,
    pub source_type: SourceType,
}

impl SourceUnit {
    /// A source unit whose grammar is picked from the extension of `name`.
    /// Unknown extensions fall back to JavaScript.
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let name = name.into();
        let source_type = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(SourceType::from_extension)
            .unwrap_or_default();
        Self {
            name,
            source: source.into(),
            source_type,
        }
    }

    #[must_use]
    pub fn with_source_type(mut self, source_type: SourceType) -> Self {
        self.source_type = source_type;
        self
    }
}

struct ConfiguredRule {
    rule: Box<dyn Rule>,
    severity: Severity,
}

impl ConfiguredRule {
    fn wants(&self, kind: &str) -> bool {
        self.rule.relevant_kinds().contains(&kind)
    }

    fn stamp(&self, diagnostics: Vec<Diagnostic>) -> impl Iterator<Item = Diagnostic> + '_ {
        diagnostics
            .into_iter()
            .map(|d| d.with_severity(self.severity))
    }
}

/// A set of rules plus the fix threshold they are applied with.
pub struct Linter {
    rules: Vec<ConfiguredRule>,
    applicability: Applicability,
}

impl Linter {
    /// A linter without rules that applies safe fixes only.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            applicability: Applicability::Safe,
        }
    }

    /// The recommended rule set: `no-jira-todo` reporting errors.
    ///
    /// `forbid-component-props` is opt-in.
    pub fn recommended() -> Self {
        Self::new().with_rule(NoJiraTodo::default(), Severity::Error)
    }

    /// Build the rules enabled in `config`.
    ///
    /// Invalid options fail the whole configuration. Unknown rule names are
    /// logged and skipped.
    pub fn from_config(config: &SkylintConfig) -> Result<Self, ConfigError> {
        let registry = RuleRegistry::builtin();
        let mut linter = Self::new();

        for (name, setting) in config.enabled_rules() {
            let Some(rule) = registry.create_rule(name, setting) else {
                tracing::warn!(rule = name, "unknown rule in configuration, skipping");
                continue;
            };
            let severity = match setting.level {
                RuleLevel::Error => Severity::Error,
                RuleLevel::Warn => Severity::Warning,
                RuleLevel::Off => continue,
            };
            let rule = rule?;
            tracing::debug!(rule = name, %severity, "enabled rule");
            linter.rules.push(ConfiguredRule { rule, severity });
        }

        if config.fix.unsafe_fixes {
            linter.applicability = Applicability::Unsafe;
        }
        Ok(linter)
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl Rule + 'static, severity: Severity) -> Self {
        self.rules.push(ConfiguredRule {
            rule: Box::new(rule),
            severity,
        });
        self
    }

    #[must_use]
    pub fn with_applicability(mut self, applicability: Applicability) -> Self {
        self.applicability = applicability;
        self
    }

    pub fn applicability(&self) -> Applicability {
        self.applicability
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|configured| configured.rule.name())
    }

    /// Lint one source.
    ///
    /// A source tree-sitter cannot parse at all yields no diagnostics.
    pub fn lint(&self, source: &str, source_type: SourceType) -> LintResult {
        let mut parser = JsParser::for_source_type(source_type);
        let Some(result) = parser.parse(source) else {
            tracing::warn!(?source_type, "failed to parse source");
            return LintResult::new();
        };
        if result.has_errors() {
            tracing::debug!(?source_type, "source parsed with syntax errors");
        }
        self.lint_tree(&result.tree, source)
    }

    /// Lint an already parsed tree.
    pub fn lint_tree(&self, tree: &tree_sitter::Tree, source: &str) -> LintResult {
        let ctx = CheckContext::new(source);
        let mut result = LintResult::new();

        for node in TreeWalker::new(tree.root_node(), source) {
            let kind = node.kind();
            for configured in self.rules.iter().filter(|r| r.wants(kind)) {
                let diagnostics = configured.rule.check(&ctx, &node);
                result.diagnostics.extend(configured.stamp(diagnostics));
            }
        }

        let all_comments: Vec<_> = comments(tree.root_node(), source).collect();
        for configured in &self.rules {
            let diagnostics = configured.rule.check_comments(&ctx, &all_comments);
            result.diagnostics.extend(configured.stamp(diagnostics));
        }

        result.diagnostics.sort_by_key(|d| d.range.start());
        result
    }

    /// Lint independent sources in parallel. Results keep the input order.
    pub fn lint_batch(&self, units: &[SourceUnit]) -> Vec<LintResult> {
        units
            .par_iter()
            .map(|unit| {
                tracing::trace!(name = %unit.name, "linting source unit");
                self.lint(&unit.source, unit.source_type)
            })
            .collect()
    }

    /// Lint `source` and apply every fix allowed by [`Linter::applicability`].
    pub fn fix(&self, source: &str, source_type: SourceType) -> FixOutcome {
        let result = self.lint(source, source_type);
        apply_fixes(source, &result.diagnostics, self.applicability)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::recommended()
    }
}
