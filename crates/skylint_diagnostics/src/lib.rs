//! Diagnostic and fix infrastructure for linting.
//!
//! The edit/fix model follows [ruff_diagnostics](https://github.com/astral-sh/ruff)
//! by Astral Software Inc., licensed under MIT.

pub use diagnostic::{Diagnostic, DiagnosticKind, FixAvailability, Severity, Violation};
pub use edit::Edit;
pub use fix::{Applicability, Fix};
pub use message::interpolate;

mod diagnostic;
mod edit;
mod fix;
mod message;
