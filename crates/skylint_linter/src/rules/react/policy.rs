//! Compiled forbid policy for component props.
//!
//! The configuration is compiled once into a [`PolicyTable`] keyed by prop
//! name. Decisions follow a fixed precedence:
//!
//! 1. a prop without an entry is allowed;
//! 2. primitive elements (`div`, `this.foo`) are always allowed;
//! 3. a non-empty disallow list decides alone: forbidden iff the element is listed;
//! 4. otherwise an element in the allow list is allowed;
//! 5. otherwise an element matching the allow pattern is allowed;
//! 6. otherwise the prop is forbidden.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use skylint_config::{ConfigError, DEFAULT_FORBIDDEN_PROPS, ForbidEntry};

use super::common::ConstructIdentity;

/// Policy for a single prop.
#[derive(Debug, Clone)]
pub struct PolicyEntry {
    prop_name: String,
    allow_list: HashSet<String>,
    disallow_list: HashSet<String>,
    allow_pattern: Option<Regex>,
    custom_message: Option<String>,
}

impl PolicyEntry {
    /// A prop forbidden on every component.
    pub fn new(prop_name: impl Into<String>) -> Self {
        Self {
            prop_name: prop_name.into(),
            allow_list: HashSet::new(),
            disallow_list: HashSet::new(),
            allow_pattern: None,
            custom_message: None,
        }
    }

    #[must_use]
    pub fn allowed_for<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn disallowed_for<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disallow_list.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_allow_pattern(mut self, pattern: Regex) -> Self {
        self.allow_pattern = Some(pattern);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.custom_message = Some(message.into());
        self
    }

    /// Compile a validated configuration entry.
    pub fn compile(entry: &ForbidEntry) -> Result<Self, ConfigError> {
        let policy = match entry {
            ForbidEntry::Bare(prop_name) => Self::new(prop_name.as_str()),
            ForbidEntry::AllowPolicy {
                prop_name,
                allowed_for,
                allowed_for_regex,
                ..
            } => {
                let mut policy = Self::new(prop_name.as_str()).allowed_for(allowed_for);
                if let Some(source) = allowed_for_regex {
                    policy = policy.with_allow_pattern(compile_pattern(prop_name, source)?);
                }
                policy
            }
            ForbidEntry::DisallowPolicy {
                prop_name,
                disallowed_for,
                ..
            } => Self::new(prop_name.as_str()).disallowed_for(disallowed_for),
        };

        Ok(match entry.message() {
            Some(message) => policy.with_message(message),
            None => policy,
        })
    }

    pub fn custom_message(&self) -> Option<&str> {
        self.custom_message.as_deref()
    }

    /// Whether this prop is forbidden on a (non-primitive) construct.
    pub fn forbids(&self, identity: &ConstructIdentity) -> bool {
        let name = identity.display_name.as_str();

        if !self.disallow_list.is_empty() {
            return self.disallow_list.contains(name);
        }

        if self.allow_list.contains(name) {
            return false;
        }

        !self
            .allow_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(name))
    }
}

fn compile_pattern(prop_name: &str, source: &str) -> Result<Regex, ConfigError> {
    Regex::new(source).map_err(|err| ConfigError::InvalidPattern {
        prop: prop_name.to_string(),
        pattern: source.to_string(),
        message: err.to_string(),
    })
}

/// Outcome of checking one prop on one construct.
#[derive(Debug, Clone, Copy)]
pub enum Verdict<'a> {
    Allowed,
    Forbidden(&'a PolicyEntry),
}

impl Verdict<'_> {
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Verdict::Forbidden(_))
    }
}

/// Immutable prop name → policy mapping.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    entries: HashMap<String, PolicyEntry>,
}

impl PolicyTable {
    /// The policy used when nothing is configured: `className` and `style`
    /// are forbidden on every component.
    pub fn defaults() -> Self {
        Self::from_entries(DEFAULT_FORBIDDEN_PROPS.into_iter().map(PolicyEntry::new))
    }

    /// Compile configured entries; `None` selects [`PolicyTable::defaults`].
    ///
    /// A later entry for the same prop replaces an earlier one.
    pub fn compile(entries: Option<&[ForbidEntry]>) -> Result<Self, ConfigError> {
        let Some(entries) = entries else {
            return Ok(Self::defaults());
        };

        let table = entries
            .iter()
            .map(PolicyEntry::compile)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from_entries)?;

        tracing::debug!(props = ?table.prop_names().collect::<Vec<_>>(), "compiled prop policy");
        Ok(table)
    }

    /// Build a table from entries, last entry per prop wins.
    pub fn from_entries(entries: impl IntoIterator<Item = PolicyEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.prop_name.clone(), entry))
                .collect(),
        }
    }

    pub fn get(&self, prop_name: &str) -> Option<&PolicyEntry> {
        self.entries.get(prop_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Decide whether `prop_name` may be used on `identity`.
    pub fn check(&self, prop_name: &str, identity: &ConstructIdentity) -> Verdict<'_> {
        let Some(entry) = self.entries.get(prop_name) else {
            return Verdict::Allowed;
        };

        if identity.is_primitive || !entry.forbids(identity) {
            return Verdict::Allowed;
        }

        Verdict::Forbidden(entry)
    }
}
