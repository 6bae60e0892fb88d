use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated: pass --token or set TASKBOARD_TOKEN")]
    NotAuthenticated,

    #[error("malformed authorization header: {0}")]
    MalformedHeader(String),

    #[error("invalid or unknown bearer token")]
    InvalidToken,
}

impl AuthError {
    /// Every authentication failure is a 401.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        401
    }
}
