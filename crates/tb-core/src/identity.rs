use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Verified user principal attached to a request.
///
/// Produced by `tb-auth`, consumed by `tb-service` and `tb-cli`.
/// Contains only data fields — no credential handling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    /// Stable user ID; stored as `Task::owner`.
    pub user_id: String,
}

impl Identity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}
