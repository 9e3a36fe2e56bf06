//! Comment rules (no-jira-todo).

mod no_jira_todo;
pub mod ticket;

pub use no_jira_todo::{MissingTicketViolation, NoJiraTodo, OBLIGATION_MARKERS, PLACEHOLDER_COMMENT};
