use tb_auth::AuthError;
use tb_core::errors::TaskError;
use thiserror::Error;

/// Failure of a single client → service call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a task error (400/404/500).
    #[error(transparent)]
    Task(#[from] TaskError),

    /// The credential was rejected upstream of the service (401).
    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    /// No answer: connection dropped, timeout.
    #[error("request failed: {0}")]
    Transport(String),
}

impl ApiError {
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// HTTP status the server answered with, if it answered at all.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Task(err) => Some(err.status_code()),
            Self::Unauthorized(err) => Some(err.status_code()),
            Self::Transport(_) => None,
        }
    }

    /// The error message carried in the server's response body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Task(err) => Some(err.client_message()),
            Self::Unauthorized(_) => Some(String::from("Unauthorized")),
            Self::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use tb_core::errors::StoreError;

    use super::*;

    #[test]
    fn server_message_prefers_task_message() {
        let err = ApiError::from(TaskError::validation("Title is required"));
        assert_eq!(err.server_message().as_deref(), Some("Title is required"));
        assert_eq!(err.status_code(), Some(400));
    }

    #[test]
    fn storage_details_are_not_leaked() {
        let err = ApiError::from(TaskError::from(StoreError::Unavailable("db down".into())));
        assert_eq!(err.server_message().as_deref(), Some("Server error"));
    }

    #[test]
    fn transport_failures_have_no_server_message() {
        let err = ApiError::Transport("timed out".into());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.status_code(), None);
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn auth_failures_are_401() {
        let err = ApiError::from(AuthError::InvalidToken);
        assert!(err.is_unauthorized());
        assert_eq!(err.status_code(), Some(401));
    }
}
