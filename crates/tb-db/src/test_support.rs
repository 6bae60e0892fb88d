//! Shared test utilities for tb-db unit tests.

pub(crate) mod helpers {
    use tb_core::entities::Task;
    use tb_core::enums::TaskStatus;
    use tb_core::store::TaskStore;
    use tb_core::validate::TaskDraft;

    use crate::TaskDb;

    /// Create an in-memory database with the schema applied.
    pub async fn test_db() -> TaskDb {
        TaskDb::open_local(":memory:").await.unwrap()
    }

    /// Draft with only a title, status pending.
    pub fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: None,
            status: TaskStatus::Pending,
            due_date: None,
        }
    }

    /// Insert a task for `owner` with the given status.
    pub async fn insert_with_status(
        db: &TaskDb,
        owner: &str,
        title: &str,
        status: TaskStatus,
    ) -> Task {
        db.insert(
            owner,
            TaskDraft {
                status,
                ..draft(title)
            },
        )
        .await
        .unwrap()
    }
}
