//! # tb-config
//!
//! Layered configuration loading for Taskboard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKBOARD_*` prefix, `__` as separator)
//! 2. Project-level `.taskboard/config.toml`
//! 3. User-level `~/.config/taskboard/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKBOARD_DATABASE__PATH` -> `database.path`,
//! `TASKBOARD_GENERAL__LOG_LEVEL` -> `general.log_level`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tb_config::BoardConfig;
//!
//! let config = BoardConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("database: {}", config.database.path);
//! ```

mod auth;
mod database;
mod error;
mod general;

pub use auth::AuthConfig;
pub use database::{DEFAULT_DB_PATH, DatabaseConfig, IN_MEMORY};
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every configuration key.
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Project-local configuration file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".taskboard/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl BoardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would only fail later, at open or verify time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty database path or an
    /// empty token / user id in `[auth.tokens]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }

        for (token, user_id) in &self.auth.tokens {
            if token.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "auth.tokens".into(),
                    reason: "token must not be empty".into(),
                });
            }
            if user_id.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("auth.tokens.{token}"),
                    reason: "user id must not be empty".into(),
                });
            }
        }
        Ok(())
    }

    /// The `[auth]` section, if any tokens are configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the token table is empty.
    pub fn require_auth(&self) -> Result<&AuthConfig, ConfigError> {
        if self.auth.is_configured() {
            Ok(&self.auth)
        } else {
            Err(ConfigError::NotConfigured {
                section: "auth".into(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskboard").join("config.toml"))
    }
}
