//! Task repository — owner-scoped CRUD.

use async_trait::async_trait;
use chrono::Utc;

use tb_core::entities::Task;
use tb_core::enums::TaskStatus;
use tb_core::errors::StoreError;
use tb_core::ids::PREFIX_TASK;
use tb_core::store::TaskStore;
use tb_core::validate::{TaskChanges, TaskDraft};

use crate::TaskDb;
use crate::error::DatabaseError;
use crate::helpers::{
    format_date, format_timestamp, get_opt_string, parse_datetime, parse_enum,
    parse_optional_date,
};

const SELECT_COLS: &str = "id, owner, title, description, status, due_date, created_at";

fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        owner: row.get(1)?,
        title: row.get(2)?,
        description: get_opt_string(row, 3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        due_date: parse_optional_date(get_opt_string(row, 5)?.as_deref())?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}

async fn collect_tasks(mut rows: libsql::Rows) -> Result<Vec<Task>, DatabaseError> {
    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        tasks.push(row_to_task(&row)?);
    }
    Ok(tasks)
}

impl TaskDb {
    pub async fn create_task(&self, owner: &str, draft: TaskDraft) -> Result<Task, DatabaseError> {
        let now = Utc::now();
        let created_at = format_timestamp(now);
        let id = self.generate_id(PREFIX_TASK).await?;
        let due_date = draft.due_date.map(format_date);

        self.conn()
            .execute(
                &format!("INSERT INTO tasks ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
                libsql::params![
                    id.as_str(),
                    owner,
                    draft.title.as_str(),
                    draft.description.as_deref(),
                    draft.status.as_str(),
                    due_date.as_deref(),
                    created_at.as_str()
                ],
            )
            .await?;

        Ok(Task {
            id,
            owner: owner.to_string(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            due_date: draft.due_date,
            created_at: parse_datetime(&created_at)?,
        })
    }

    pub async fn get_owned_task(
        &self,
        owner: &str,
        id: &str,
    ) -> Result<Option<Task>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1 AND owner = ?2"),
                [id, owner],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_owned_tasks(
        &self,
        owner: &str,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, DatabaseError> {
        let rows = match status {
            Some(status) => {
                self.conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM tasks WHERE owner = ?1 AND status = ?2 \
                             ORDER BY created_at DESC, rowid DESC"
                        ),
                        [owner, status.as_str()],
                    )
                    .await?
            }
            None => {
                self.conn()
                    .query(
                        &format!(
                            "SELECT {SELECT_COLS} FROM tasks WHERE owner = ?1 \
                             ORDER BY created_at DESC, rowid DESC"
                        ),
                        [owner],
                    )
                    .await?
            }
        };
        collect_tasks(rows).await
    }

    pub async fn update_owned_task(
        &self,
        owner: &str,
        id: &str,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = changes.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref description) = changes.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.clone().map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }
        if let Some(status) = changes.status {
            sets.push(format!("status = ?{idx}"));
            params.push(status.as_str().into());
            idx += 1;
        }
        if let Some(due_date) = changes.due_date {
            sets.push(format!("due_date = ?{idx}"));
            params.push(due_date.map(format_date).map_or(libsql::Value::Null, Into::into));
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_owned_task(owner, id).await;
        }

        params.push(id.into());
        params.push(owner.into());
        let sql = format!(
            "UPDATE tasks SET {} WHERE id = ?{idx} AND owner = ?{}",
            sets.join(", "),
            idx + 1
        );
        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        if changed == 0 {
            return Ok(None);
        }
        self.get_owned_task(owner, id).await
    }

    pub async fn delete_owned_task(&self, owner: &str, id: &str) -> Result<bool, DatabaseError> {
        let removed = self
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1 AND owner = ?2", [id, owner])
            .await?;
        Ok(removed > 0)
    }
}

#[async_trait]
impl TaskStore for TaskDb {
    async fn insert(&self, owner: &str, draft: TaskDraft) -> Result<Task, StoreError> {
        Ok(self.create_task(owner, draft).await?)
    }

    async fn find_owned(&self, owner: &str, id: &str) -> Result<Option<Task>, StoreError> {
        Ok(self.get_owned_task(owner, id).await?)
    }

    async fn list_owned(
        &self,
        owner: &str,
        status: Option<TaskStatus>,
    ) -> Result<Vec<Task>, StoreError> {
        Ok(self.list_owned_tasks(owner, status).await?)
    }

    async fn update_owned(
        &self,
        owner: &str,
        id: &str,
        changes: &TaskChanges,
    ) -> Result<Option<Task>, StoreError> {
        Ok(self.update_owned_task(owner, id, changes).await?)
    }

    async fn delete_owned(&self, owner: &str, id: &str) -> Result<bool, StoreError> {
        Ok(self.delete_owned_task(owner, id).await?)
    }
}
