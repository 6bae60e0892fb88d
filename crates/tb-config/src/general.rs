//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_log_level() -> String {
    String::from("warn")
}

const fn default_refresh_on_failure() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Tracing filter used when neither `TASKBOARD_LOG` nor `--quiet`/`--verbose`
    /// is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Re-fetch the board after a rejected move instead of restoring the
    /// local snapshot.
    #[serde(default = "default_refresh_on_failure")]
    pub refresh_on_failure: bool,

    /// Board rendering width; detected from the terminal when unset.
    #[serde(default)]
    pub term_width: Option<u16>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            refresh_on_failure: default_refresh_on_failure(),
            term_width: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.log_level, "warn");
        assert!(config.refresh_on_failure);
        assert_eq!(config.term_width, None);
    }
}
