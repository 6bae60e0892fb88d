//! Error taxonomy surfaced at the Task Service boundary.
//!
//! `TaskError` is what every service operation returns. Storage backends
//! report through `StoreError`, which the service wraps unchanged.
//! Backend-specific errors (e.g. `DatabaseError`) live in their own crates
//! and convert into `StoreError`.

use thiserror::Error;

/// Errors raised by a `TaskStore` implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend failed while executing an operation.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Discriminant of a [`TaskError`], for callers that branch on kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

/// Errors returned by every Task Service operation.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Malformed input: missing title, unknown status value.
    #[error("{0}")]
    Validation(String),

    /// The task does not exist or is owned by someone else. The two causes
    /// are deliberately indistinguishable.
    #[error("Task not found")]
    NotFound { id: String },

    /// The task store failed.
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl TaskError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }

    /// HTTP status code this error maps to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Storage(_) => 500,
        }
    }

    /// Message safe to show a client. Storage internals are not exposed.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Storage(_) => String::from("Server error"),
            other => other.to_string(),
        }
    }
}
