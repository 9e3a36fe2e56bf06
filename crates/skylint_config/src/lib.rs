//! Configuration for skylint.
//!
//! `skylint.toml` names the rules to run, their level, and their options:
//!
//! ```toml
//! [fix]
//! unsafe_fixes = false
//!
//! [rules.forbid-component-props]
//! level = "error"
//! forbid = ["style", { propName = "className", allowedForRegex = "^Bpk" }]
//!
//! [rules.no-jira-todo]
//! level = "warn"
//! ```

mod error;
mod rule_options;
mod skylint_config;

pub use error::ConfigError;
pub use rule_options::{
    DEFAULT_FORBIDDEN_PROPS, DEFAULT_TRACKER_URL, ForbidComponentPropsOptions, ForbidEntry,
    NoJiraTodoOptions, RawForbidEntry, RawForbidPolicy,
};
pub use skylint_config::{FixConfig, RuleLevel, RuleSetting, SkylintConfig};
