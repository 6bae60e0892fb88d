//! Board Reconciliation Client against a scripted server double and against
//! the real service stack.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tb_auth::{AuthError, Authenticator, StaticTokenAuthenticator};
use tb_board::client::{FAILED_CREATE, FAILED_FETCH, FAILED_UPDATE};
use tb_board::{
    ApiError, BoardClient, BoardState, CreateForm, DropOutcome, LocalApi, Notice, TaskApi,
};
use tb_core::entities::Task;
use tb_core::enums::TaskStatus;
use tb_core::errors::{StoreError, TaskError};
use tb_core::identity::Identity;
use tb_core::requests::{Confirmation, NewTask, TaskPatch};
use tb_db::TaskDb;
use tb_service::TaskService;

// ---------------------------------------------------------------------------
// Scripted server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Transport,
    Storage,
    Unauthorized,
    NotFound,
}

impl Failure {
    fn into_error(self) -> ApiError {
        match self {
            Self::Transport => ApiError::Transport("timed out".into()),
            Self::Storage => TaskError::from(StoreError::Unavailable("db down".into())).into(),
            Self::Unauthorized => AuthError::InvalidToken.into(),
            Self::NotFound => TaskError::not_found("tsk-00000000").into(),
        }
    }
}

#[derive(Default)]
struct Script {
    tasks: Vec<Task>,
    fail_list: Option<Failure>,
    fail_create: Option<Failure>,
    fail_update: Option<Failure>,
    fail_delete: Option<Failure>,
    calls: Vec<&'static str>,
}

/// Holds the authoritative copy of the tasks and fails on request.
#[derive(Default, Clone)]
struct ScriptedApi(Arc<Mutex<Script>>);

impl ScriptedApi {
    fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        api.0.lock().unwrap().tasks = tasks;
        api
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.0.lock().unwrap()
    }

    fn server_status(&self, id: &str) -> TaskStatus {
        self.script()
            .tasks
            .iter()
            .find(|t| t.id == id)
            .unwrap()
            .status
    }

    fn calls(&self) -> Vec<&'static str> {
        self.script().calls.clone()
    }
}

#[async_trait]
impl TaskApi for ScriptedApi {
    async fn list(&self) -> Result<Vec<Task>, ApiError> {
        let mut script = self.script();
        script.calls.push("list");
        match script.fail_list {
            Some(failure) => Err(failure.into_error()),
            None => Ok(script.tasks.clone()),
        }
    }

    async fn create(&self, input: NewTask) -> Result<Task, ApiError> {
        let mut script = self.script();
        script.calls.push("create");
        if let Some(failure) = script.fail_create {
            return Err(failure.into_error());
        }
        let mut created = task(
            &format!("tsk-{:08x}", script.tasks.len() + 100),
            input.title.as_deref().unwrap_or_default(),
            input
                .status
                .as_deref()
                .map_or(TaskStatus::Pending, |s| s.parse().unwrap()),
        );
        created.description = input.description;
        script.tasks.insert(0, created.clone());
        Ok(created)
    }

    async fn update(&self, task_id: &str, patch: TaskPatch) -> Result<Task, ApiError> {
        let mut script = self.script();
        script.calls.push("update");
        if let Some(failure) = script.fail_update {
            return Err(failure.into_error());
        }
        let task = script
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| ApiError::from(TaskError::not_found(task_id)))?;
        if let Some(status) = patch.status {
            task.status = status.parse().unwrap();
        }
        Ok(task.clone())
    }

    async fn delete(&self, task_id: &str) -> Result<Confirmation, ApiError> {
        let mut script = self.script();
        script.calls.push("delete");
        if let Some(failure) = script.fail_delete {
            return Err(failure.into_error());
        }
        let before = script.tasks.len();
        script.tasks.retain(|t| t.id != task_id);
        if script.tasks.len() == before {
            return Err(TaskError::not_found(task_id).into());
        }
        Ok(Confirmation::task_deleted())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
        id: id.into(),
        owner: "user_alice".into(),
        title: title.into(),
        description: None,
        status,
        due_date: None,
        created_at: Utc::now() - TimeDelta::minutes(5),
    }
}

fn seeded() -> ScriptedApi {
    ScriptedApi::with_tasks(vec![
        task("tsk-00000001", "Write spec", TaskStatus::Pending),
        task("tsk-00000002", "Review", TaskStatus::InProgress),
    ])
}

async fn loaded(client: &BoardClient<ScriptedApi>) -> BoardState {
    let mut state = BoardState::new();
    client.load(&mut state).await;
    state
}

fn status_of(state: &BoardState, id: &str) -> TaskStatus {
    state.task(id).unwrap().status
}

// ---------------------------------------------------------------------------
// Drag and drop
// ---------------------------------------------------------------------------

#[tokio::test]
async fn confirmed_drop_keeps_new_status() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;

    let outcome = client
        .drop_task(&mut state, "tsk-00000001", Some(TaskStatus::InProgress))
        .await;

    assert_eq!(outcome, DropOutcome::Confirmed);
    assert_eq!(status_of(&state, "tsk-00000001"), TaskStatus::InProgress);
    assert_eq!(api.server_status("tsk-00000001"), TaskStatus::InProgress);
    assert!(state.notices().is_empty());
    assert_eq!(api.calls(), ["list", "update"]);
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn failed_drop_reverts_to_pending_with_notice(#[case] refresh: bool) {
    let api = seeded();
    let client = BoardClient::new(api.clone()).with_refresh(refresh);
    let mut state = loaded(&client).await;
    api.script().fail_update = Some(Failure::Transport);

    let outcome = client
        .drop_task(&mut state, "tsk-00000001", Some(TaskStatus::InProgress))
        .await;

    assert_eq!(outcome, DropOutcome::Reverted);
    assert_eq!(status_of(&state, "tsk-00000001"), TaskStatus::Pending);
    assert_eq!(state.notices(), [Notice::new(FAILED_UPDATE)]);

    let expected_calls: &[&str] = if refresh {
        &["list", "update", "list"]
    } else {
        &["list", "update"]
    };
    assert_eq!(api.calls(), expected_calls);
}

#[tokio::test]
async fn failed_refresh_falls_back_to_snapshot() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;
    let before = state.tasks().to_vec();
    {
        let mut script = api.script();
        script.fail_update = Some(Failure::Storage);
        script.fail_list = Some(Failure::Transport);
    }

    client
        .drop_task(&mut state, "tsk-00000002", Some(TaskStatus::Completed))
        .await;

    assert_eq!(state.tasks(), before.as_slice());
    assert_eq!(state.notices(), [Notice::new("Server error")]);
}

#[tokio::test]
async fn refresh_picks_up_server_side_changes() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;

    // Another session deletes the task before this one drags it.
    api.script().tasks.retain(|t| t.id != "tsk-00000001");

    let outcome = client
        .drop_task(&mut state, "tsk-00000001", Some(TaskStatus::Completed))
        .await;

    assert_eq!(outcome, DropOutcome::Reverted);
    assert!(state.task("tsk-00000001").is_none());
    assert_eq!(state.notices(), [Notice::new("Task not found")]);
}

#[rstest]
#[case("tsk-00000001", Some(TaskStatus::Pending))]
#[case("tsk-00000001", None)]
#[case("tsk-ffffffff", Some(TaskStatus::Completed))]
#[tokio::test]
async fn ignored_drops_send_nothing(#[case] id: &str, #[case] target: Option<TaskStatus>) {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;

    assert_eq!(
        client.drop_task(&mut state, id, target).await,
        DropOutcome::Ignored
    );
    assert_eq!(api.calls(), ["list"]);
}

#[tokio::test]
async fn sequential_drops_end_at_last_target() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;

    client
        .drop_task(&mut state, "tsk-00000001", Some(TaskStatus::InProgress))
        .await;
    client
        .drop_task(&mut state, "tsk-00000001", Some(TaskStatus::Completed))
        .await;

    assert_eq!(status_of(&state, "tsk-00000001"), TaskStatus::Completed);
    assert_eq!(api.server_status("tsk-00000001"), TaskStatus::Completed);
    let counts: Vec<_> = state.columns().iter().map(|c| c.count()).collect();
    assert_eq!(counts, [0, 1, 1]);
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_load_signs_out() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;
    api.script().fail_list = Some(Failure::Unauthorized);

    client.load(&mut state).await;

    assert!(!state.is_signed_in());
    assert!(state.tasks().is_empty());
    assert!(state.notices().is_empty());
}

#[tokio::test]
async fn failed_load_keeps_tasks() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;
    api.script().fail_list = Some(Failure::Transport);

    client.load(&mut state).await;

    assert!(state.is_signed_in());
    assert_eq!(state.tasks().len(), 2);
    assert_eq!(state.notices(), [Notice::new(FAILED_FETCH)]);
}

// ---------------------------------------------------------------------------
// Create / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blank_title_never_reaches_the_server() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;

    let created = client
        .create_task(&mut state, &CreateForm::titled("  "))
        .await;

    assert!(created.is_none());
    assert_eq!(state.notices(), [Notice::new("Title is required")]);
    assert_eq!(api.calls(), ["list"]);
}

#[tokio::test]
async fn created_task_is_appended_after_success() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;

    let created = client
        .create_task(&mut state, &CreateForm::titled(" New card "))
        .await
        .unwrap();

    assert_eq!(created.title, "New card");
    assert_eq!(state.tasks().last(), Some(&created));
    assert_eq!(state.tasks().len(), 3);
}

#[rstest]
#[case(Failure::Transport, FAILED_CREATE)]
#[case(Failure::Storage, "Server error")]
#[tokio::test]
async fn failed_create_leaves_state(#[case] failure: Failure, #[case] message: &str) {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;
    api.script().fail_create = Some(failure);

    let created = client
        .create_task(&mut state, &CreateForm::titled("Doomed"))
        .await;

    assert!(created.is_none());
    assert_eq!(state.tasks().len(), 2);
    assert_eq!(state.notices(), [Notice::new(message)]);
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn delete_removes_the_card(#[case] refresh: bool) {
    let api = seeded();
    let client = BoardClient::new(api.clone()).with_refresh(refresh);
    let mut state = loaded(&client).await;

    assert!(client.delete_task(&mut state, "tsk-00000002").await);
    assert!(state.task("tsk-00000002").is_none());
    assert_eq!(state.tasks().len(), 1);
    assert_eq!(api.calls().last(), Some(&if refresh { "list" } else { "delete" }));
}

#[tokio::test]
async fn failed_delete_leaves_state() {
    let api = seeded();
    let client = BoardClient::new(api.clone());
    let mut state = loaded(&client).await;
    let before = state.tasks().to_vec();
    api.script().fail_delete = Some(Failure::NotFound);

    assert!(!client.delete_task(&mut state, "tsk-00000002").await);
    assert_eq!(state.tasks(), before.as_slice());
    assert_eq!(state.notices(), [Notice::new("Task not found")]);
}

// ---------------------------------------------------------------------------
// Full stack
// ---------------------------------------------------------------------------

async fn local_client(
    credential: &str,
) -> (BoardClient<LocalApi<TaskDb>>, Arc<TaskService<TaskDb>>) {
    let service = Arc::new(TaskService::new(
        TaskDb::open_local(":memory:").await.unwrap(),
    ));
    let auth: Arc<dyn Authenticator> =
        Arc::new(StaticTokenAuthenticator::new([("tok_alice", "user_alice")]));
    let api = LocalApi::new(Arc::clone(&service), auth, Some(credential.to_string()));
    (BoardClient::new(api), service)
}

#[tokio::test]
async fn board_over_local_service() {
    let (client, service) = local_client("tok_alice").await;
    let alice = Identity::new("user_alice");
    let task = service
        .create(&alice, NewTask::titled("Write spec"))
        .await
        .unwrap();

    let mut state = BoardState::new();
    client.load(&mut state).await;
    assert_eq!(state.columns()[0].count(), 1);

    let outcome = client
        .drop_task(&mut state, &task.id, Some(TaskStatus::InProgress))
        .await;
    assert_eq!(outcome, DropOutcome::Confirmed);
    assert_eq!(
        service.get(&alice, &task.id).await.unwrap().status,
        TaskStatus::InProgress
    );

    // Deleted behind the board's back: the drag is reverted via refresh.
    service.delete(&alice, &task.id).await.unwrap();
    let outcome = client
        .drop_task(&mut state, &task.id, Some(TaskStatus::Completed))
        .await;
    assert_eq!(outcome, DropOutcome::Reverted);
    assert!(state.tasks().is_empty());
    assert_eq!(state.notices(), [Notice::new("Task not found")]);
}

#[tokio::test]
async fn board_with_bad_token_is_signed_out() {
    let (client, _service) = local_client("tok_wrong").await;
    let mut state = BoardState::new();
    client.load(&mut state).await;
    assert!(!state.is_signed_in());
}
