use std::collections::HashMap;

use async_trait::async_trait;
use tb_core::identity::Identity;

use crate::Authenticator;
use crate::bearer::parse_bearer;
use crate::error::AuthError;

/// Authenticator backed by a fixed token → user id table.
///
/// Built from the `[auth] tokens` configuration section.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    tokens: HashMap<String, String>,
}

impl StaticTokenAuthenticator {
    #[must_use]
    pub fn new<I, K, V>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|(token, user)| (token.into(), user.into()))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn verify(&self, credential: Option<&str>) -> Result<Identity, AuthError> {
        let token = parse_bearer(credential.ok_or(AuthError::NotAuthenticated)?)?;
        match self.tokens.get(token) {
            Some(user_id) => {
                tracing::debug!(user_id = %user_id, "bearer token verified");
                Ok(Identity::new(user_id.as_str()))
            }
            None => {
                tracing::debug!("bearer token rejected");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
