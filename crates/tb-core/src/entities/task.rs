use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// A unit of work owned by exactly one identity.
///
/// Serializes to `{id, owner, title, description, status, due_date, created_at}`;
/// absent optional fields serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub owner: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Card footer text: `"No due date"` or e.g. `"Mar 5, 2026"`.
    #[must_use]
    pub fn due_label(&self) -> String {
        self.due_date.map_or_else(
            || String::from("No due date"),
            |date| date.format("%b %-d, %Y").to_string(),
        )
    }

    /// A task is overdue when its due date is strictly before `today`.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today)
    }
}
