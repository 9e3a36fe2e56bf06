//! Applying fixes to source text.

use std::cmp::Reverse;

use skylint_diagnostics::{Applicability, Diagnostic, Edit, Fix};
use text_size::TextRange;

/// Result of applying fixes to one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    /// The source with all accepted edits applied.
    pub output: String,
    /// Diagnostics whose fix was applied.
    pub fixed: usize,
    /// Diagnostics without a fix, whose fix is below the threshold, or whose
    /// fix overlaps one that was applied.
    pub unfixable: usize,
}

impl FixOutcome {
    pub fn changed(&self, source: &str) -> bool {
        self.output != source
    }
}

/// Apply every fix at least as safe as `applicability`.
///
/// When two fixes overlap the one that starts later is kept.
pub fn apply_fixes(
    source: &str,
    diagnostics: &[Diagnostic],
    applicability: Applicability,
) -> FixOutcome {
    let mut fixes: Vec<(TextRange, &Fix)> = Vec::new();
    let mut unfixable = 0;

    for diagnostic in diagnostics {
        match diagnostic.fix.as_ref().filter(|fix| fix.applies(applicability)) {
            Some(fix) => match fix_span(fix) {
                Some(span) => fixes.push((span, fix)),
                None => unfixable += 1,
            },
            None => unfixable += 1,
        }
    }

    // Apply from the end so earlier offsets stay valid.
    fixes.sort_by_key(|(span, _)| Reverse(span.start()));

    let mut edits: Vec<&Edit> = Vec::new();
    let mut fixed = 0;
    for (span, fix) in fixes {
        let overlaps = edits.last().is_some_and(|accepted| span.end() > accepted.start());
        if overlaps {
            tracing::debug!(range = ?span, "dropping overlapping fix");
            unfixable += 1;
            continue;
        }
        edits.extend(fix.edits().iter().rev());
        fixed += 1;
    }

    FixOutcome {
        output: apply_edits(source, &edits),
        fixed,
        unfixable,
    }
}

/// The range covered by all edits of `fix`.
fn fix_span(fix: &Fix) -> Option<TextRange> {
    fix.edits().iter().map(Edit::range).reduce(TextRange::cover)
}

/// Apply edits sorted descending by start.
fn apply_edits(source: &str, edits: &[&Edit]) -> String {
    let mut result = source.to_string();

    for edit in edits {
        let start = usize::from(edit.start());
        let end = usize::from(edit.end());
        result.replace_range(start..end, edit.content());
    }

    result
}
