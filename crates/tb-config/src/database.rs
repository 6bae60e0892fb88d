//! Task database location.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DB_PATH: &str = ".taskboard/tasks.db";
pub const IN_MEMORY: &str = ":memory:";

fn default_path() -> String {
    String::from(DEFAULT_DB_PATH)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }
}
