//! Board Reconciliation Client.
//!
//! Drives a [`BoardState`] against a [`TaskApi`]. Status drags are applied
//! locally first and reconciled with the server afterwards; creations and
//! deletions wait for the server.

use tb_core::entities::Task;
use tb_core::enums::TaskStatus;
use tb_core::requests::TaskPatch;
use tracing::{debug, warn};

use crate::api::TaskApi;
use crate::form::CreateForm;
use crate::state::{BoardState, MoveOutcome, Notice, Snapshot, apply_optimistic_move, revert};

pub const FAILED_UPDATE: &str = "Failed to update task status";
pub const FAILED_CREATE: &str = "Failed to create task";
pub const FAILED_DELETE: &str = "Failed to delete task";
pub const FAILED_FETCH: &str = "Failed to fetch tasks";

/// Result of a drop, as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// No request was sent.
    Ignored,
    /// The server accepted the new status.
    Confirmed,
    /// The server rejected or never answered; local state was rolled back.
    Reverted,
}

pub struct BoardClient<A> {
    api: A,
    refresh: bool,
}

impl<A: TaskApi> BoardClient<A> {
    /// Client with full-refresh capability enabled.
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api, refresh: true }
    }

    /// Enable or disable re-fetching the collection after a failed move or a
    /// successful delete.
    #[must_use]
    pub const fn with_refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    /// Fetch the caller's full collection into `state`.
    ///
    /// A rejected credential signs the board out and clears it. Any other
    /// failure keeps the current tasks and raises a notice.
    pub async fn load(&self, state: &mut BoardState) {
        match self.api.list().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "board loaded");
                state.replace_tasks(tasks);
            }
            Err(error) if error.is_unauthorized() => {
                debug!(%error, "board signed out");
                state.sign_out();
            }
            Err(error) => {
                warn!(%error, "failed to load board");
                state.push_notice(Notice::from_error(&error, FAILED_FETCH));
            }
        }
    }

    /// Drop `task_id` into `target`.
    ///
    /// The move is applied to `state` before the request is sent. On failure
    /// the board is re-fetched, or restored from the pre-drag snapshot when
    /// re-fetching is disabled or itself fails, and a notice is raised.
    pub async fn drop_task(
        &self,
        state: &mut BoardState,
        task_id: &str,
        target: Option<TaskStatus>,
    ) -> DropOutcome {
        let Some(target) = target else {
            return DropOutcome::Ignored;
        };
        let MoveOutcome::Applied(snapshot) = apply_optimistic_move(state, task_id, Some(target))
        else {
            return DropOutcome::Ignored;
        };

        match self
            .api
            .update(task_id, TaskPatch::status_only(target.as_str()))
            .await
        {
            Ok(_) => {
                debug!(task_id, status = %target, "status change confirmed");
                DropOutcome::Confirmed
            }
            Err(error) => {
                warn!(task_id, status = %target, %error, "status change rejected, reverting");
                self.reconcile(state, snapshot).await;
                state.push_notice(Notice::from_error(&error, FAILED_UPDATE));
                DropOutcome::Reverted
            }
        }
    }

    /// Submit the create form. The returned task is appended only once the
    /// server has accepted it.
    pub async fn create_task(&self, state: &mut BoardState, form: &CreateForm) -> Option<Task> {
        let request = match form.to_request() {
            Ok(request) => request,
            Err(message) => {
                state.push_notice(Notice::new(message));
                return None;
            }
        };

        match self.api.create(request).await {
            Ok(task) => {
                debug!(task_id = %task.id, "task created from board");
                state.append(task.clone());
                Some(task)
            }
            Err(error) => {
                warn!(%error, "failed to create task");
                state.push_notice(Notice::from_error(&error, FAILED_CREATE));
                None
            }
        }
    }

    /// Delete `task_id`. On failure state is untouched and a notice is raised.
    pub async fn delete_task(&self, state: &mut BoardState, task_id: &str) -> bool {
        if let Err(error) = self.api.delete(task_id).await {
            warn!(task_id, %error, "failed to delete task");
            state.push_notice(Notice::from_error(&error, FAILED_DELETE));
            return false;
        }

        if self.refresh {
            match self.api.list().await {
                Ok(tasks) => {
                    state.replace_tasks(tasks);
                    return true;
                }
                Err(error) => {
                    warn!(%error, "refresh after delete failed");
                    state.push_notice(Notice::from_error(&error, FAILED_FETCH));
                }
            }
        }
        state.remove(task_id);
        true
    }

    async fn reconcile(&self, state: &mut BoardState, snapshot: Snapshot) {
        if !self.refresh {
            revert(state, snapshot);
            return;
        }
        match self.api.list().await {
            Ok(tasks) => state.replace_tasks(tasks),
            Err(error) => {
                warn!(%error, "refresh after failed move failed, restoring snapshot");
                revert(state, snapshot);
            }
        }
    }
}
