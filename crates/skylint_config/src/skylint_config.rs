//! Parser for skylint.toml configuration files.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

use crate::ConfigError;

/// How a rule's findings are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleLevel {
    /// Report violations as errors.
    #[default]
    Error,
    /// Report violations as warnings.
    Warn,
    /// Skip the rule entirely.
    Off,
}

impl<'de> Deserialize<'de> for RuleLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.to_lowercase().as_str() {
            "error" => Ok(RuleLevel::Error),
            "warn" | "warning" => Ok(RuleLevel::Warn),
            "off" | "disabled" => Ok(RuleLevel::Off),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid rule level: {s}. Expected error, warn, or off"
            ))),
        }
    }
}

/// Settings of one rule: its level plus rule-specific options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSetting {
    #[serde(default)]
    pub level: RuleLevel,

    /// Every other key of the rule's table, interpreted by the rule itself.
    #[serde(flatten)]
    pub options: toml::Table,
}

impl RuleSetting {
    /// Deserialize the options into a rule's option type.
    pub fn options<T: DeserializeOwned>(&self, rule: &str) -> Result<T, ConfigError> {
        toml::Value::Table(self.options.clone())
            .try_into::<T>()
            .map_err(|err: toml::de::Error| ConfigError::InvalidOptions {
                rule: rule.to_string(),
                message: err.message().to_string(),
            })
    }

    pub fn is_enabled(&self) -> bool {
        self.level != RuleLevel::Off
    }
}

/// Fix-related configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FixConfig {
    /// Whether unsafe fixes are applied.
    #[serde(default)]
    pub unsafe_fixes: bool,
}

/// Root skylint.toml configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SkylintConfig {
    /// Fix behavior configuration.
    #[serde(default)]
    pub fix: FixConfig,

    /// Rule settings keyed by rule name.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl SkylintConfig {
    /// Parse a skylint.toml file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse skylint.toml content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Settings for a specific rule, if configured.
    pub fn rule(&self, rule_name: &str) -> Option<&RuleSetting> {
        self.rules.get(rule_name)
    }

    /// Level of a rule; unconfigured rules are off.
    pub fn level(&self, rule_name: &str) -> RuleLevel {
        self.rule(rule_name).map_or(RuleLevel::Off, |r| r.level)
    }

    /// Rules that are not switched off, by name.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules
            .iter()
            .filter(|(_, setting)| setting.is_enabled())
            .map(|(name, setting)| (name.as_str(), setting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ForbidComponentPropsOptions, ForbidEntry};
    use std::io::Write;

    #[test]
    fn test_parse_empty_config() {
        let config = SkylintConfig::parse("").unwrap();
        assert!(!config.fix.unsafe_fixes);
        assert!(config.rules.is_empty());
        assert_eq!(config.enabled_rules().count(), 0);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[fix]
unsafe_fixes = true

[rules.forbid-component-props]
level = "error"
forbid = ["style", { propName = "className", allowedForRegex = "^Bpk" }]

[rules.no-jira-todo]
level = "warn"

[rules.something-else]
level = "off"
"#;

        let config = SkylintConfig::parse(toml).unwrap();

        assert!(config.fix.unsafe_fixes);
        assert_eq!(config.level("forbid-component-props"), RuleLevel::Error);
        assert_eq!(config.level("no-jira-todo"), RuleLevel::Warn);
        assert_eq!(config.level("something-else"), RuleLevel::Off);
        assert_eq!(config.level("unconfigured"), RuleLevel::Off);

        let enabled: Vec<_> = config.enabled_rules().map(|(name, _)| name).collect();
        assert_eq!(enabled, vec!["forbid-component-props", "no-jira-todo"]);

        let options: ForbidComponentPropsOptions = config
            .rule("forbid-component-props")
            .unwrap()
            .options("forbid-component-props")
            .unwrap();
        let entries = options.entries().unwrap().unwrap();
        assert_eq!(entries[0], ForbidEntry::Bare("style".to_string()));
        assert_eq!(entries[1].prop_name(), "className");
    }

    #[test]
    fn test_level_defaults_to_error() {
        let config = SkylintConfig::parse("[rules.no-jira-todo]\n").unwrap();
        assert_eq!(config.level("no-jira-todo"), RuleLevel::Error);
    }

    #[test]
    fn test_rule_level_case_insensitive() {
        let toml = r#"
[rules.a]
level = "ERROR"
[rules.b]
level = "Warning"
[rules.c]
level = "OFF"
"#;
        let config = SkylintConfig::parse(toml).unwrap();
        assert_eq!(config.level("a"), RuleLevel::Error);
        assert_eq!(config.level("b"), RuleLevel::Warn);
        assert_eq!(config.level("c"), RuleLevel::Off);
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let err = SkylintConfig::parse("[rules.a]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
        assert!(err.to_string().contains("Invalid rule level"));
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let config = SkylintConfig::parse("[rules.forbid-component-props]\nforbidd = []\n").unwrap();
        let err = config
            .rule("forbid-component-props")
            .unwrap()
            .options::<ForbidComponentPropsOptions>("forbid-component-props")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptions { ref rule, .. } if rule == "forbid-component-props"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules.no-jira-todo]\nlevel = \"warn\"").unwrap();

        let config = SkylintConfig::from_file(file.path()).unwrap();
        assert_eq!(config.level("no-jira-todo"), RuleLevel::Warn);
    }

    #[test]
    fn test_missing_file() {
        let err = SkylintConfig::from_file("/definitely/not/here/skylint.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
