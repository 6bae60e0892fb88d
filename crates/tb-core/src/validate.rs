//! Validation of request payloads into store-ready values.
//!
//! Validation never touches storage. Each function either returns a fully
//! typed value (`TaskDraft`, `TaskChanges`, `Option<TaskStatus>`) or a
//! `TaskError::Validation` carrying the client-facing message.
//!
//! Create and update validate status separately because their optionality
//! differs: create falls back to `pending`, update leaves status untouched
//! unless the caller sent one.

use chrono::NaiveDate;

use crate::enums::TaskStatus;
use crate::errors::TaskError;
use crate::requests::{NewTask, TaskFilter, TaskPatch};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const INVALID_STATUS: &str = "Status must be one of: pending, in-progress, completed";
pub const INVALID_FILTER_STATUS: &str =
    "Invalid status. Must be: pending, in-progress, or completed";

/// A validated create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
}

/// A validated merge-patch. `None` fields are left unchanged by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<NaiveDate>>,
}

/// Validate a create request.
///
/// # Errors
///
/// Returns `TaskError::Validation` if the title is absent or blank, or the
/// status is present but not one of the three values.
pub fn validate_new_task(input: NewTask) -> Result<TaskDraft, TaskError> {
    let title = require_title(input.title)?;
    let status = match input.status.as_deref() {
        Some(raw) => parse_status(raw, INVALID_STATUS)?,
        None => TaskStatus::default(),
    };
    Ok(TaskDraft {
        title,
        description: normalize_description(input.description),
        status,
        due_date: input.due_date,
    })
}

/// Validate an update request.
///
/// # Errors
///
/// Returns `TaskError::Validation` if a present status is invalid or a
/// present title is blank.
pub fn validate_patch(patch: TaskPatch) -> Result<TaskChanges, TaskError> {
    let status = patch
        .status
        .as_deref()
        .map(|raw| parse_status(raw, INVALID_STATUS))
        .transpose()?;
    let title = match patch.title {
        Some(title) => Some(require_title(Some(title))?),
        None => None,
    };
    Ok(TaskChanges {
        title,
        description: patch.description.map(normalize_description),
        status,
        due_date: patch.due_date,
    })
}

/// Validate a list filter.
///
/// # Errors
///
/// Returns `TaskError::Validation` if the status filter is present but invalid.
pub fn validate_filter(filter: &TaskFilter) -> Result<Option<TaskStatus>, TaskError> {
    filter
        .status
        .as_deref()
        .map(|raw| parse_status(raw, INVALID_FILTER_STATUS))
        .transpose()
}

fn parse_status(raw: &str, message: &str) -> Result<TaskStatus, TaskError> {
    raw.parse().map_err(|_| TaskError::validation(message))
}

fn require_title(title: Option<String>) -> Result<String, TaskError> {
    match title {
        Some(title) if !title.trim().is_empty() => Ok(title),
        _ => Err(TaskError::validation(TITLE_REQUIRED)),
    }
}

/// An empty description is stored as no description.
fn normalize_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.is_empty())
}
