//! The client's view of the Task Service.

use std::sync::Arc;

use async_trait::async_trait;
use tb_auth::Authenticator;
use tb_core::entities::Task;
use tb_core::identity::Identity;
use tb_core::requests::{Confirmation, NewTask, TaskFilter, TaskPatch};
use tb_core::store::TaskStore;
use tb_service::TaskService;

use crate::error::ApiError;

/// Task operations as the board client sees them: one request, one answer.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>, ApiError>;
    async fn create(&self, input: NewTask) -> Result<Task, ApiError>;
    async fn update(&self, task_id: &str, patch: TaskPatch) -> Result<Task, ApiError>;
    async fn delete(&self, task_id: &str) -> Result<Confirmation, ApiError>;
}

/// In-process [`TaskApi`]: verifies the credential on every call, then
/// invokes the service directly.
pub struct LocalApi<S> {
    service: Arc<TaskService<S>>,
    authenticator: Arc<dyn Authenticator>,
    credential: Option<String>,
}

impl<S: TaskStore> LocalApi<S> {
    #[must_use]
    pub fn new(
        service: Arc<TaskService<S>>,
        authenticator: Arc<dyn Authenticator>,
        credential: Option<String>,
    ) -> Self {
        Self {
            service,
            authenticator,
            credential,
        }
    }

    async fn identity(&self) -> Result<Identity, ApiError> {
        Ok(self
            .authenticator
            .verify(self.credential.as_deref())
            .await?)
    }
}

#[async_trait]
impl<S: TaskStore> TaskApi for LocalApi<S> {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let identity = self.identity().await?;
        Ok(self.service.list(&identity, &TaskFilter::default()).await?)
    }

    async fn create(&self, input: NewTask) -> Result<Task, ApiError> {
        let identity = self.identity().await?;
        Ok(self.service.create(&identity, input).await?)
    }

    async fn update(&self, task_id: &str, patch: TaskPatch) -> Result<Task, ApiError> {
        let identity = self.identity().await?;
        Ok(self.service.update(&identity, task_id, patch).await?)
    }

    async fn delete(&self, task_id: &str) -> Result<Confirmation, ApiError> {
        let identity = self.identity().await?;
        Ok(self.service.delete(&identity, task_id).await?)
    }
}
