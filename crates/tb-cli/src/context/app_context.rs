use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tb_auth::{Authenticator, StaticTokenAuthenticator};
use tb_board::{BoardClient, LocalApi};
use tb_config::{BoardConfig, DatabaseConfig};
use tb_core::identity::Identity;
use tb_db::TaskDb;
use tb_service::TaskService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: Arc<TaskService<TaskDb>>,
    pub authenticator: Arc<dyn Authenticator>,
    pub credential: Option<String>,
    pub config: BoardConfig,
}

impl AppContext {
    /// Open the task database and build the token table.
    ///
    /// `--db` wins over `database.path`. The parent directory of a file
    /// database is created on demand.
    pub async fn init(config: BoardConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let database = flags
            .db
            .clone()
            .map_or_else(|| config.database.clone(), |path| DatabaseConfig { path });

        if !database.is_in_memory()
            && let Some(parent) = Path::new(&database.path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let db_path = database.path;
        let db = TaskDb::open_local(&db_path)
            .await
            .with_context(|| format!("failed to open task database at {db_path}"))?;

        let authenticator = StaticTokenAuthenticator::new(config.auth.tokens.clone());
        tracing::debug!(db_path, tokens = authenticator.len(), "application context ready");

        Ok(Self {
            service: Arc::new(TaskService::new(db)),
            authenticator: Arc::new(authenticator),
            credential: flags.token.clone(),
            config,
        })
    }

    /// Verify the caller's token.
    pub async fn identity(&self) -> anyhow::Result<Identity> {
        self.config.require_auth()?;
        let identity = self
            .authenticator
            .verify(self.credential.as_deref())
            .await?;
        Ok(identity)
    }

    /// A board client over the in-process service, refreshing per
    /// `general.refresh_on_failure`.
    pub fn board_client(&self) -> BoardClient<LocalApi<TaskDb>> {
        let api = LocalApi::new(
            Arc::clone(&self.service),
            Arc::clone(&self.authenticator),
            self.credential.clone(),
        );
        BoardClient::new(api).with_refresh(self.config.general.refresh_on_failure)
    }
}
