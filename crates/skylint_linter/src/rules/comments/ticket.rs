//! Ticket reference pattern for obligation comments.
//!
//! A comment satisfies the pattern when it contains `TODO:` or `FIXME:`
//! (optionally prefixed with `@`), one whitespace character, and then a
//! ticket reference: either a tracker URL ending in a ticket id, or a ticket
//! id in square brackets. Anything after the reference must be separated by
//! whitespace.
//!
//! Ticket ids are two or more uppercase letters, a dash, and two to eight
//! characters that are digits or `X` (`JIRA-XXXX` is a valid placeholder).

use regex::Regex;
use skylint_config::DEFAULT_TRACKER_URL;

const MARKER: &str = "@?(?:TODO|FIXME)";
const TICKET_ID: &str = "[A-Z]{2,255}-[0-9X]{2,8}";

/// Compiled ticket reference pattern.
#[derive(Debug, Clone)]
pub struct TicketPattern {
    regex: Regex,
}

impl TicketPattern {
    /// Build the pattern for a tracker whose ticket URLs start with `tracker_url`.
    ///
    /// The URL is matched literally.
    pub fn new(tracker_url: &str) -> Result<Self, regex::Error> {
        let url = regex::escape(tracker_url);
        let pattern = format!(r"{MARKER}:\s(?:{url}{TICKET_ID}|\[{TICKET_ID}\])(?:\s.*)?");
        let regex = Regex::new(&pattern)?;
        tracing::debug!(%pattern, "compiled ticket pattern");
        Ok(Self { regex })
    }

    /// Whether `comment` carries a well-formed ticket reference somewhere.
    pub fn is_match(&self, comment: &str) -> bool {
        self.regex.is_match(comment)
    }
}

impl Default for TicketPattern {
    fn default() -> Self {
        Self::new(DEFAULT_TRACKER_URL).expect("default ticket pattern is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_ids() {
        let pattern = TicketPattern::default();
        assert!(pattern.is_match(" TODO: [JIRA-1234] fix this"));
        assert!(pattern.is_match(" FIXME: [BD-12]"));
        assert!(pattern.is_match(" @TODO: [JIRA-XXXX]"));
        assert!(pattern.is_match(" @FIXME: [WEB-1X2X3X4X]"));
    }

    #[test]
    fn test_tracker_urls() {
        let pattern = TicketPattern::default();
        assert!(pattern.is_match(" TODO: https://skyscanner.atlassian.net/browse/JIRA-1234"));
        assert!(pattern.is_match(
            " FIXME: https://skyscanner.atlassian.net/browse/BD-456 remove after launch"
        ));
        assert!(!pattern.is_match(" TODO: https://example.atlassian.net/browse/JIRA-1234"));
    }

    #[test]
    fn test_tracker_url_is_literal() {
        let pattern = TicketPattern::default();
        assert!(!pattern.is_match(" TODO: https://skyscannerXatlassian.net/browse/JIRA-1234"));

        let custom = TicketPattern::new("https://tickets.example.com/").unwrap();
        assert!(custom.is_match(" TODO: https://tickets.example.com/OPS-99"));
    }

    #[test]
    fn test_malformed_references() {
        let pattern = TicketPattern::default();
        for comment in [
            " TODO: fix this",
            " TODO [JIRA-1234]",
            " TODO:[JIRA-1234]",
            " TODO: JIRA-1234",
            " TODO: [J-1234]",
            " TODO: [JIRA-1]",
            " TODO: [jira-1234]",
            " todo: [JIRA-1234]",
        ] {
            assert!(!pattern.is_match(comment), "{comment:?} should not match");
        }
    }

    #[test]
    fn test_match_is_unanchored() {
        let pattern = TicketPattern::default();
        assert!(pattern.is_match(" TODO see FIXME: [JIRA-12]"));
    }

    #[test]
    fn test_id_length_limits() {
        let pattern = TicketPattern::default();
        assert!(pattern.is_match(" TODO: [JIRA-12345678]"));
        assert!(!pattern.is_match(" TODO: [JIRA-123456789]"));
    }
}
