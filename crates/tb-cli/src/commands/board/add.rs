use chrono::NaiveDate;
use tb_board::{BoardState, CreateForm};
use tb_core::enums::TaskStatus;

use super::{fail_on_notices, print_board};
use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due: Option<NaiveDate>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.board_client();
    let mut state = BoardState::new();
    client.load(&mut state).await;
    fail_on_notices(state.take_notices())?;

    if client.create_task(&mut state, &form(params)).await.is_none() {
        return fail_on_notices(state.take_notices());
    }
    print_board(&state, flags)
}

fn form(params: Params) -> CreateForm {
    CreateForm {
        title: params.title,
        description: params.description.unwrap_or_default(),
        status: params.status.unwrap_or_default(),
        due_date: params.due,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_pending_with_blank_description() {
        let form = form(Params {
            title: " Ship ".into(),
            description: None,
            status: None,
            due: None,
        });
        assert_eq!(form.status, TaskStatus::Pending);
        assert_eq!(form.description, "");
        assert_eq!(form.to_request().unwrap().title.as_deref(), Some("Ship"));
    }

    #[test]
    fn blank_title_is_rejected_locally() {
        let form = form(Params {
            title: "   ".into(),
            description: Some("notes".into()),
            status: Some(TaskStatus::Completed),
            due: None,
        });
        assert_eq!(form.to_request().unwrap_err(), "Title is required");
    }
}
