//! Option schemas of the built-in rules.

use std::collections::HashSet;

use serde::Deserialize;

use crate::ConfigError;

/// Props forbidden on components when `forbid` is not configured.
pub const DEFAULT_FORBIDDEN_PROPS: [&str; 2] = ["className", "style"];

/// Prefix of ticket URLs accepted by `no-jira-todo`.
pub const DEFAULT_TRACKER_URL: &str = "https://skyscanner.atlassian.net/browse/";

/// Options of `forbid-component-props`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForbidComponentPropsOptions {
    /// `None` means "use [`DEFAULT_FORBIDDEN_PROPS`]"; an empty list forbids nothing.
    #[serde(default)]
    pub forbid: Option<Vec<RawForbidEntry>>,
}

impl ForbidComponentPropsOptions {
    /// Validated entries, or `None` when `forbid` was not given.
    pub fn entries(&self) -> Result<Option<Vec<ForbidEntry>>, ConfigError> {
        self.forbid
            .as_ref()
            .map(|raw| raw.iter().cloned().map(ForbidEntry::try_from).collect())
            .transpose()
    }
}

/// A `forbid` item exactly as written in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawForbidEntry {
    Name(String),
    Policy(RawForbidPolicy),
}

/// Structured `forbid` item. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawForbidPolicy {
    pub prop_name: Option<String>,
    pub allowed_for: Option<Vec<String>>,
    pub allowed_for_regex: Option<String>,
    pub disallowed_for: Option<Vec<String>>,
    pub message: Option<String>,
}

/// A validated `forbid` item.
///
/// The allow form and the disallow form are disjoint: an entry either names
/// the components a prop is allowed on, or the components it is forbidden on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForbidEntry {
    /// Forbidden on every component.
    Bare(String),
    /// Forbidden everywhere except the listed components and pattern matches.
    AllowPolicy {
        prop_name: String,
        allowed_for: Vec<String>,
        allowed_for_regex: Option<String>,
        message: Option<String>,
    },
    /// Forbidden only on the listed components. The list is never empty.
    DisallowPolicy {
        prop_name: String,
        disallowed_for: Vec<String>,
        message: Option<String>,
    },
}

impl ForbidEntry {
    pub fn prop_name(&self) -> &str {
        match self {
            ForbidEntry::Bare(name) => name,
            ForbidEntry::AllowPolicy { prop_name, .. }
            | ForbidEntry::DisallowPolicy { prop_name, .. } => prop_name,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ForbidEntry::Bare(_) => None,
            ForbidEntry::AllowPolicy { message, .. } | ForbidEntry::DisallowPolicy { message, .. } => {
                message.as_deref()
            }
        }
    }
}

impl TryFrom<RawForbidEntry> for ForbidEntry {
    type Error = ConfigError;

    fn try_from(raw: RawForbidEntry) -> Result<Self, Self::Error> {
        let policy = match raw {
            RawForbidEntry::Name(name) => return Ok(ForbidEntry::Bare(name)),
            RawForbidEntry::Policy(policy) => policy,
        };

        let Some(prop_name) = policy.prop_name else {
            return Err(invalid("<missing>", "`propName` is required"));
        };

        if let Some(disallowed_for) = policy.disallowed_for {
            if policy.allowed_for.is_some() || policy.allowed_for_regex.is_some() {
                return Err(invalid(
                    &prop_name,
                    "`disallowedFor` cannot be combined with `allowedFor` or `allowedForRegex`",
                ));
            }
            if disallowed_for.is_empty() {
                return Err(invalid(&prop_name, "`disallowedFor` must not be empty"));
            }
            ensure_unique(&prop_name, "disallowedFor", &disallowed_for)?;
            return Ok(ForbidEntry::DisallowPolicy {
                prop_name,
                disallowed_for,
                message: policy.message,
            });
        }

        let allowed_for = policy.allowed_for.unwrap_or_default();
        ensure_unique(&prop_name, "allowedFor", &allowed_for)?;
        Ok(ForbidEntry::AllowPolicy {
            prop_name,
            allowed_for,
            allowed_for_regex: policy.allowed_for_regex,
            message: policy.message,
        })
    }
}

fn ensure_unique(prop: &str, field: &str, names: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(names.len());
    match names.iter().find(|name| !seen.insert(name.as_str())) {
        Some(duplicate) => Err(invalid(
            prop,
            &format!("`{field}` lists `{duplicate}` more than once"),
        )),
        None => Ok(()),
    }
}

fn invalid(prop: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidForbidEntry {
        prop: prop.to_string(),
        reason: reason.to_string(),
    }
}

/// Options of `no-jira-todo`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NoJiraTodoOptions {
    /// Prefix of ticket URLs, up to and including the path before the ticket id.
    pub tracker_url: Option<String>,
}

impl NoJiraTodoOptions {
    /// The configured tracker URL, or [`DEFAULT_TRACKER_URL`].
    ///
    /// A blank URL is rejected: it would accept bare ticket ids without brackets.
    pub fn tracker_url(&self) -> Result<&str, ConfigError> {
        match self.tracker_url.as_deref() {
            None => Ok(DEFAULT_TRACKER_URL),
            Some(url) if url.trim().is_empty() => Err(ConfigError::InvalidOptions {
                rule: "no-jira-todo".to_string(),
                message: "`trackerUrl` must not be empty".to_string(),
            }),
            Some(url) => Ok(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_options(toml: &str) -> ForbidComponentPropsOptions {
        toml::from_str(toml).unwrap()
    }

    fn entries(toml: &str) -> Result<Option<Vec<ForbidEntry>>, ConfigError> {
        parse_options(toml).entries()
    }

    #[test]
    fn test_missing_forbid_means_defaults() {
        assert_eq!(entries("").unwrap(), None);
    }

    #[test]
    fn test_empty_forbid_is_kept() {
        assert_eq!(entries("forbid = []").unwrap(), Some(vec![]));
    }

    #[test]
    fn test_mixed_entries() {
        let toml = r#"
forbid = [
  "style",
  { propName = "className", allowedFor = ["ReactModal"], allowedForRegex = "^Bpk", message = "nope" },
  { propName = "onClick", disallowedFor = ["Footer"] },
  { propName = "id" },
]
"#;
        let entries = entries(toml).unwrap().unwrap();
        assert_eq!(
            entries,
            vec![
                ForbidEntry::Bare("style".to_string()),
                ForbidEntry::AllowPolicy {
                    prop_name: "className".to_string(),
                    allowed_for: vec!["ReactModal".to_string()],
                    allowed_for_regex: Some("^Bpk".to_string()),
                    message: Some("nope".to_string()),
                },
                ForbidEntry::DisallowPolicy {
                    prop_name: "onClick".to_string(),
                    disallowed_for: vec!["Footer".to_string()],
                    message: None,
                },
                ForbidEntry::AllowPolicy {
                    prop_name: "id".to_string(),
                    allowed_for: vec![],
                    allowed_for_regex: None,
                    message: None,
                },
            ]
        );
        assert_eq!(entries[1].message(), Some("nope"));
        assert_eq!(entries[0].message(), None);
    }

    #[test]
    fn test_unknown_entry_field_is_rejected() {
        let result: Result<ForbidComponentPropsOptions, _> =
            toml::from_str(r#"forbid = [{ propName = "className", allowedForPattern = "x" }]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_prop_name() {
        let err = entries(r#"forbid = [{ allowedFor = ["Foo"] }]"#).unwrap_err();
        assert!(err.to_string().contains("`propName` is required"));
    }

    #[test]
    fn test_empty_disallowed_for() {
        let err = entries(r#"forbid = [{ propName = "style", disallowedFor = [] }]"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidForbidEntry { ref prop, .. } if prop == "style"));
    }

    #[test]
    fn test_disallow_and_allow_are_disjoint() {
        let err = entries(
            r#"forbid = [{ propName = "style", disallowedFor = ["Foo"], allowedFor = ["Bar"] }]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot be combined"));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = entries(r#"forbid = [{ propName = "style", allowedFor = ["Foo", "Foo"] }]"#)
            .unwrap_err();
        assert!(err.to_string().contains("`Foo` more than once"));
    }

    #[test]
    fn test_tracker_url_default() {
        let options: NoJiraTodoOptions = toml::from_str("").unwrap();
        assert_eq!(options.tracker_url().unwrap(), DEFAULT_TRACKER_URL);

        let options: NoJiraTodoOptions =
            toml::from_str(r#"trackerUrl = "https://example.atlassian.net/browse/""#).unwrap();
        assert_eq!(options.tracker_url().unwrap(), "https://example.atlassian.net/browse/");
    }

    #[test]
    fn test_blank_tracker_url_is_rejected() {
        for toml in [r#"trackerUrl = """#, r#"trackerUrl = "  ""#] {
            let options: NoJiraTodoOptions = toml::from_str(toml).unwrap();
            let err = options.tracker_url().unwrap_err();
            assert!(matches!(err, ConfigError::InvalidOptions { ref rule, .. } if rule == "no-jira-todo"));
        }
    }
}
