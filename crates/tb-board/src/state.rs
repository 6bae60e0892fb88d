//! Board state container and the pure functions that mutate it.
//!
//! Nothing here performs I/O. [`apply_optimistic_move`] and [`revert`] are
//! the only ways a drag changes local state, so the reconciliation protocol
//! can be exercised without a server.

use serde::Serialize;
use tb_core::entities::Task;
use tb_core::enums::TaskStatus;

use crate::error::ApiError;

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

/// A visible, non-blocking error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The server's message when it sent one, otherwise `fallback`.
    #[must_use]
    pub fn from_error(error: &ApiError, fallback: &str) -> Self {
        Self::new(
            error
                .server_message()
                .unwrap_or_else(|| fallback.to_string()),
        )
    }
}

// ---------------------------------------------------------------------------
// BoardState
// ---------------------------------------------------------------------------

/// Client-side view of the caller's tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    tasks: Vec<Task>,
    notices: Vec<Notice>,
    signed_in: bool,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tasks: Vec::new(),
            notices: Vec::new(),
            signed_in: true,
        }
    }

    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Remove and return all pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Replace the collection with a fresh server copy.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.signed_in = true;
    }

    pub(crate) fn append(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub(crate) fn remove(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub(crate) fn sign_out(&mut self) {
        self.tasks.clear();
        self.signed_in = false;
    }

    /// The three board columns in display order, each holding its tasks in
    /// collection order.
    #[must_use]
    pub fn columns(&self) -> [Column<'_>; 3] {
        TaskStatus::ALL.map(|status| Column {
            status,
            label: status.label(),
            tasks: self.tasks.iter().filter(|t| t.status == status).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Column<'a> {
    pub status: TaskStatus,
    pub label: &'static str,
    pub tasks: Vec<&'a Task>,
}

impl Column<'_> {
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

// ---------------------------------------------------------------------------
// Optimistic apply / revert
// ---------------------------------------------------------------------------

/// Pre-drag copy of the task collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Vec<Task>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing changed: no target, unknown task, or already in the target.
    NoOp,
    /// The task was moved locally; keep the snapshot to undo it.
    Applied(Snapshot),
}

/// Move `task_id` into `target` immediately, before the server confirms.
pub fn apply_optimistic_move(
    state: &mut BoardState,
    task_id: &str,
    target: Option<TaskStatus>,
) -> MoveOutcome {
    let Some(target) = target else {
        return MoveOutcome::NoOp;
    };
    let Some(index) = state.tasks.iter().position(|task| task.id == task_id) else {
        return MoveOutcome::NoOp;
    };
    if !state.tasks[index].status.can_transition_to(target) {
        return MoveOutcome::NoOp;
    }

    let snapshot = Snapshot(state.tasks.clone());
    state.tasks[index].status = target;
    MoveOutcome::Applied(snapshot)
}

/// Restore the task collection captured before an optimistic move.
pub fn revert(state: &mut BoardState, snapshot: Snapshot) {
    state.tasks = snapshot.0;
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.into(),
            owner: "user_a".into(),
            title: format!("Task {id}"),
            description: None,
            status,
            due_date: None,
            created_at: Utc::now(),
        }
    }

    fn board() -> BoardState {
        BoardState::with_tasks(vec![
            task("tsk-00000001", TaskStatus::Pending),
            task("tsk-00000002", TaskStatus::InProgress),
            task("tsk-00000003", TaskStatus::Pending),
        ])
    }

    #[test]
    fn columns_are_ordered_and_counted() {
        let state = board();
        let columns = state.columns();

        let labels: Vec<_> = columns.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["Pending", "In Progress", "Completed"]);

        let counts: Vec<_> = columns.iter().map(Column::count).collect();
        assert_eq!(counts, [2, 1, 0]);

        let pending: Vec<_> = columns[0].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(pending, ["tsk-00000001", "tsk-00000003"]);
    }

    #[test]
    fn apply_moves_only_the_target_task() {
        let mut state = board();
        let outcome =
            apply_optimistic_move(&mut state, "tsk-00000001", Some(TaskStatus::Completed));

        assert!(matches!(outcome, MoveOutcome::Applied(_)));
        assert_eq!(
            state.task("tsk-00000001").unwrap().status,
            TaskStatus::Completed
        );
        assert_eq!(
            state.task("tsk-00000003").unwrap().status,
            TaskStatus::Pending
        );
    }

    #[rstest]
    #[case("tsk-00000001", Some(TaskStatus::Pending))]
    #[case("tsk-00000002", Some(TaskStatus::InProgress))]
    #[case("tsk-00000001", None)]
    #[case("tsk-ffffffff", Some(TaskStatus::Completed))]
    fn non_moves_leave_state_alone(#[case] id: &str, #[case] target: Option<TaskStatus>) {
        let mut state = board();
        let before = state.clone();
        assert_eq!(
            apply_optimistic_move(&mut state, id, target),
            MoveOutcome::NoOp
        );
        assert_eq!(state, before);
    }

    #[test]
    fn revert_restores_pre_drag_state() {
        let mut state = board();
        let before = state.tasks().to_vec();

        let MoveOutcome::Applied(snapshot) =
            apply_optimistic_move(&mut state, "tsk-00000002", Some(TaskStatus::Pending))
        else {
            panic!("expected an applied move");
        };
        revert(&mut state, snapshot);

        assert_eq!(state.tasks(), before.as_slice());
    }

    #[test]
    fn sign_out_clears_tasks() {
        let mut state = board();
        state.sign_out();
        assert!(!state.is_signed_in());
        assert!(state.tasks().is_empty());
        assert!(state.columns().iter().all(|c| c.count() == 0));
    }

    #[test]
    fn notice_falls_back_without_server_message() {
        let notice = Notice::from_error(
            &ApiError::Transport("timeout".into()),
            "Failed to update task status",
        );
        assert_eq!(notice.message, "Failed to update task status");
    }
}
