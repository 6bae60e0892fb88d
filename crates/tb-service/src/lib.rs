//! # tb-service
//!
//! The Task Service: owner-scoped create/list/get/update/delete over any
//! [`TaskStore`].
//!
//! Every operation follows the same protocol:
//! 1. Validate the request (no store access on failure)
//! 2. For Get/Update/Delete, load-and-authorize the target task
//! 3. Execute the single store operation
//!
//! A task owned by someone else is reported exactly like a missing task.

use tb_core::entities::Task;
use tb_core::errors::TaskError;
use tb_core::identity::Identity;
use tb_core::ids::{PREFIX_TASK, has_id_shape};
use tb_core::requests::{Confirmation, NewTask, TaskFilter, TaskPatch};
use tb_core::store::TaskStore;
use tb_core::validate::{validate_filter, validate_new_task, validate_patch};
use tracing::debug;

pub struct TaskService<S> {
    store: S,
}

impl<S: TaskStore> TaskService<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Create a task owned by `identity`. Status defaults to `pending`.
    ///
    /// # Errors
    ///
    /// `TaskError::Validation` for a missing/blank title or unknown status;
    /// `TaskError::Storage` if the insert fails.
    pub async fn create(&self, identity: &Identity, input: NewTask) -> Result<Task, TaskError> {
        let draft = validate_new_task(input)?;
        let task = self.store.insert(identity.user_id(), draft).await?;
        debug!(owner = %identity.user_id, task_id = %task.id, status = %task.status, "task created");
        Ok(task)
    }

    /// List the caller's tasks, newest first, optionally by status.
    ///
    /// # Errors
    ///
    /// `TaskError::Validation` for an unknown status filter;
    /// `TaskError::Storage` if the query fails.
    pub async fn list(
        &self,
        identity: &Identity,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, TaskError> {
        let status = validate_filter(filter)?;
        let tasks = self.store.list_owned(identity.user_id(), status).await?;
        debug!(owner = %identity.user_id, ?status, count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    /// Fetch one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// `TaskError::NotFound` if the task is missing or not owned by `identity`.
    pub async fn get(&self, identity: &Identity, task_id: &str) -> Result<Task, TaskError> {
        self.load_owned(identity, task_id).await
    }

    /// Merge-patch one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// `TaskError::Validation` for an invalid status or blank title (checked
    /// before any lookup); `TaskError::NotFound` under the ownership rule.
    pub async fn update(
        &self,
        identity: &Identity,
        task_id: &str,
        patch: TaskPatch,
    ) -> Result<Task, TaskError> {
        let changes = validate_patch(patch)?;
        self.load_owned(identity, task_id).await?;

        let updated = self
            .store
            .update_owned(identity.user_id(), task_id, &changes)
            .await?
            // Deleted between the lookup and the write.
            .ok_or_else(|| TaskError::not_found(task_id))?;
        debug!(owner = %identity.user_id, task_id, ?changes, "task updated");
        Ok(updated)
    }

    /// Hard-delete one of the caller's tasks.
    ///
    /// # Errors
    ///
    /// `TaskError::NotFound` under the ownership rule, including a second
    /// delete of the same task.
    pub async fn delete(
        &self,
        identity: &Identity,
        task_id: &str,
    ) -> Result<Confirmation, TaskError> {
        self.load_owned(identity, task_id).await?;
        if !self.store.delete_owned(identity.user_id(), task_id).await? {
            return Err(TaskError::not_found(task_id));
        }
        debug!(owner = %identity.user_id, task_id, "task deleted");
        Ok(Confirmation::task_deleted())
    }

    /// Load-and-authorize: the task if it exists and `identity` owns it,
    /// otherwise `NotFound`. An id the store could never have generated is
    /// not looked up.
    async fn load_owned(&self, identity: &Identity, task_id: &str) -> Result<Task, TaskError> {
        if !has_id_shape(task_id, PREFIX_TASK) {
            debug!(owner = %identity.user_id, task_id, "malformed task id");
            return Err(TaskError::not_found(task_id));
        }
        self.store
            .find_owned(identity.user_id(), task_id)
            .await?
            .ok_or_else(|| {
                debug!(owner = %identity.user_id, task_id, "task not found for owner");
                TaskError::not_found(task_id)
            })
    }
}
