//! # tb-auth
//!
//! The Authentication Provider seam for Taskboard.
//!
//! Every task operation requires a verified [`Identity`]. An [`Authenticator`]
//! turns a bearer credential into one, or fails with [`AuthError`] (which maps
//! to HTTP 401). The only bundled provider is [`StaticTokenAuthenticator`],
//! configured from the `[auth] tokens` table.

pub mod bearer;
pub mod error;
pub mod static_tokens;

use async_trait::async_trait;
use tb_core::identity::Identity;

pub use error::AuthError;
pub use static_tokens::StaticTokenAuthenticator;

/// Verifies a bearer credential and yields a stable user identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// `credential` is an `Authorization` header value or a bare token;
    /// `None` when the caller supplied nothing.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the credential is absent, malformed, or unknown.
    async fn verify(&self, credential: Option<&str>) -> Result<Identity, AuthError>;
}
