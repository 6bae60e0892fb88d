//! Persistence seam for task records.
//!
//! Every method is scoped by `owner`: a store never returns, changes or
//! removes a record whose owner differs from the one passed in. Each call is
//! a single atomic record operation; callers get no multi-record
//! transactions.

use async_trait::async_trait;

use crate::entities::Task;
use crate::enums::TaskStatus;
use crate::errors::StoreError;
use crate::validate::{TaskChanges, TaskDraft};

#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a new task. The store assigns `id` and `created_at`.
    async fn insert(&self, owner: &str, draft: TaskDraft) -> Result<Task, StoreError>;

    /// Load a task if it exists and belongs to `owner`.
    async fn find_owned(&self, owner: &str, id: &str) -> Result<Option<Task>, StoreError>;

    /// All tasks of `owner`, optionally restricted to one status, newest first.
    async fn list_owned(
        &self,
        owner: &str,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, StoreError>;

    /// Apply a merge-patch. Returns `None` if no owned task matched.
    async fn update_owned(
        &self,
        owner: &str,
        id: &str,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, StoreError>;

    /// Hard-delete. Returns whether an owned task was removed.
    async fn delete_owned(&self, owner: &str, id: &str) -> Result<bool, StoreError>;
}
