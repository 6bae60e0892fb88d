//! Errors raised while loading or checking `BoardConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `TASKBOARD_*` variable could not be merged or extracted.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs is empty.
    #[error("Configuration section '{section}' is not configured (set it in .taskboard/config.toml or TASKBOARD_* env vars)")]
    NotConfigured { section: String },

    /// A key is present but its value is unusable.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
