//! NoJiraTodo rule implementation.
//!
//! Every `TODO`/`FIXME` comment must reference a ticket. Offending comments
//! are replaced by a placeholder that names a dummy ticket.

use skylint_config::{ConfigError, NoJiraTodoOptions, RuleSetting};
use skylint_diagnostics::{Diagnostic, Edit, Fix, FixAvailability, Violation};
use skylint_js_cst::{CommentKind, CommentToken};

use super::ticket::TicketPattern;
use crate::{CheckContext, FromConfig, Rule};

/// Prefixes that oblige a comment to reference a ticket. Case-sensitive.
pub const OBLIGATION_MARKERS: [&str; 4] = ["TODO", "FIXME", "@TODO", "@FIXME"];

/// Replacement text for a comment without a ticket.
pub const PLACEHOLDER_COMMENT: &str = "// TODO: [JIRA-XXXX]";

/// The marker `comment_value` starts with, ignoring leading whitespace.
pub fn obligation_marker(comment_value: &str) -> Option<&'static str> {
    let value = comment_value.trim_start();
    OBLIGATION_MARKERS
        .into_iter()
        .find(|marker| value.starts_with(marker))
}

/// Requires ticket references in obligation comments.
#[derive(Debug, Clone, Default)]
pub struct NoJiraTodo {
    ticket: TicketPattern,
}

impl NoJiraTodo {
    pub fn new(ticket: TicketPattern) -> Self {
        Self { ticket }
    }
}

impl FromConfig for NoJiraTodo {
    const NAME: &'static str = "no-jira-todo";

    fn from_options(setting: &RuleSetting) -> Result<Self, ConfigError> {
        let options: NoJiraTodoOptions = setting.options(Self::NAME)?;
        let ticket =
            TicketPattern::new(options.tracker_url()?).map_err(|err| ConfigError::InvalidOptions {
                rule: Self::NAME.to_string(),
                message: err.to_string(),
            })?;
        Ok(Self::new(ticket))
    }
}

/// Violation for an obligation comment without a ticket reference.
#[derive(Debug, Clone)]
pub struct MissingTicketViolation {
    pub marker: &'static str,
}

impl Violation for MissingTicketViolation {
    const FIX_AVAILABILITY: FixAvailability = FixAvailability::Always;

    fn message(&self) -> String {
        "All TODO comments must have a JIRA ticket".to_string()
    }

    fn message_id(&self) -> Option<&'static str> {
        Some("todo-error")
    }

    fn data(&self) -> Vec<(&'static str, String)> {
        vec![("marker", self.marker.to_string())]
    }

    fn fix_title(&self) -> Option<String> {
        Some(format!("Replace comment with `{PLACEHOLDER_COMMENT}`"))
    }
}

impl NoJiraTodo {
    fn check_comment(&self, ctx: &CheckContext, comment: &CommentToken) -> Option<Diagnostic> {
        let value = comment.value().trim_start();
        let marker = obligation_marker(value)?;
        if self.ticket.is_match(value) {
            return None;
        }
        tracing::trace!(marker, at = %ctx.line_column(comment.range().start()), "comment without ticket");

        let edit = Edit::range_replacement(PLACEHOLDER_COMMENT.to_string(), comment.range());
        // A line comment in place of a block comment swallows the rest of its line.
        let fix = match comment.kind() {
            CommentKind::Line => Fix::safe_edit(edit),
            CommentKind::Block => Fix::unsafe_edit(edit),
        };

        Some(Diagnostic::new(MissingTicketViolation { marker }, comment.range()).with_fix(fix))
    }
}

impl Rule for NoJiraTodo {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check_comments(&self, ctx: &CheckContext, comments: &[CommentToken]) -> Vec<Diagnostic> {
        comments
            .iter()
            .filter_map(|comment| self.check_comment(ctx, comment))
            .collect()
    }
}
