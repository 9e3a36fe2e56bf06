//! Diagnostic types for reporting violations.

use std::collections::BTreeMap;
use std::fmt;

use text_size::TextRange;

use crate::Fix;

/// Indicates whether a fix is available for a violation.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub enum FixAvailability {
    /// A fix is always available.
    Always,
    /// A fix is never available.
    #[default]
    None,
}

/// How seriously the host should treat a diagnostic.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, is_macro::Is)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Warning,
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A trait for violations that can be reported as diagnostics.
pub trait Violation: std::fmt::Debug + Clone + Send + Sync {
    /// The availability of a fix for this violation.
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::None;

    /// Returns the message describing the violation.
    fn message(&self) -> String;

    /// Stable key of the message template, when the message came from one.
    fn message_id(&self) -> Option<&'static str> {
        None
    }

    /// Values substituted into the message template.
    fn data(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns the title for the fix, if available.
    fn fix_title(&self) -> Option<String> {
        None
    }
}

/// The kind of diagnostic (code, message and the data it was built from).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticKind {
    /// The violation code (e.g., "ForbiddenProp").
    pub code: String,
    /// The rendered message.
    pub body: String,
    /// Key of the message template; `None` for literal messages.
    pub message_id: Option<&'static str>,
    /// Substitution data for the message template.
    pub data: BTreeMap<String, String>,
    /// Title of the fix, if any.
    pub fix_title: Option<String>,
}

/// A diagnostic representing a violation found in source code.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The kind of diagnostic.
    pub kind: DiagnosticKind,
    /// The range in the source where the violation occurs.
    pub range: TextRange,
    /// Severity assigned by the configuration.
    pub severity: Severity,
    /// The optional fix for the violation.
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Create a new diagnostic from a violation.
    #[allow(clippy::needless_pass_by_value)]
    pub fn new<V: Violation>(violation: V, range: TextRange) -> Self {
        Self {
            kind: DiagnosticKind {
                code: std::any::type_name::<V>()
                    .split("::")
                    .last()
                    .unwrap_or("Unknown")
                    .to_string(),
                body: violation.message(),
                message_id: violation.message_id(),
                data: violation
                    .data()
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
                fix_title: violation.fix_title(),
            },
            range,
            severity: Severity::default(),
            fix: None,
        }
    }

    /// Add a fix to this diagnostic.
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Set the severity for this diagnostic.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns true if this diagnostic has a fix.
    pub fn fixable(&self) -> bool {
        self.fix.is_some()
    }

    /// The message key, or the literal message when there is no key.
    pub fn message_or_id(&self) -> &str {
        self.kind.message_id.unwrap_or(&self.kind.body)
    }
}
