//! Static bearer token table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Bearer token → user id.
    ///
    /// ```toml
    /// [auth.tokens]
    /// tok_alice = "user_alice"
    /// ```
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
}

impl AuthConfig {
    pub fn is_configured(&self) -> bool {
        !self.tokens.is_empty()
    }
}
