//! Task status enum.
//!
//! Serialized as `kebab-case`, which yields the exact wire strings
//! `"pending"`, `"in-progress"` and `"completed"`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// ```text
/// pending ⇄ in-progress ⇄ completed
///    ↑__________________________↓
/// ```
///
/// Every status may move to every other status. The workflow is a label,
/// not a gated process.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Return the string representation used on the wire and in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Human-readable column heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self != next
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string is not one of the three status values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for TaskStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TaskStatus::Pending, "pending")]
    #[case(TaskStatus::InProgress, "in-progress")]
    #[case(TaskStatus::Completed, "completed")]
    fn wire_string_matches_serde(#[case] status: TaskStatus, #[case] expected: &str) {
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, format!("\"{expected}\""));
        assert_eq!(status.as_str(), expected);
        assert_eq!(expected.parse::<TaskStatus>().unwrap(), status);
    }

    #[rstest]
    #[case("bogus")]
    #[case("in_progress")]
    #[case("Pending")]
    #[case("")]
    fn parse_rejects_unknown(#[case] raw: &str) {
        let err = raw.parse::<TaskStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus(raw.to_string()));
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn every_distinct_transition_is_allowed() {
        for from in TaskStatus::ALL {
            for to in TaskStatus::ALL {
                assert_eq!(from.can_transition_to(to), from != to, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn labels_follow_column_order() {
        let labels: Vec<_> = TaskStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Pending", "In Progress", "Completed"]);
    }
}
