use thiserror::Error;

/// Error raised while loading or validating configuration.
///
/// Configuration errors are fatal: a rule is never run with a partially
/// understood configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid options for rule `{rule}`: {message}")]
    InvalidOptions { rule: String, message: String },
    #[error("Invalid forbid entry for prop `{prop}`: {reason}")]
    InvalidForbidEntry { prop: String, reason: String },
    #[error("Invalid allowedForRegex `{pattern}` for prop `{prop}`: {message}")]
    InvalidPattern {
        prop: String,
        pattern: String,
        message: String,
    },
}
