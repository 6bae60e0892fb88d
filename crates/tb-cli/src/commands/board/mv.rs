use tb_board::{BoardState, DropOutcome};
use tb_core::enums::TaskStatus;

use super::{fail_on_notices, print_board};
use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(
    id: &str,
    status: TaskStatus,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = ctx.board_client();
    let mut state = BoardState::new();
    client.load(&mut state).await;
    fail_on_notices(state.take_notices())?;

    if state.task(id).is_none() {
        anyhow::bail!("Task not found: {id}");
    }

    let outcome = client.drop_task(&mut state, id, Some(status)).await;
    tracing::debug!(id, %status, ?outcome, "board move finished");

    print_board(&state, flags)?;
    if outcome == DropOutcome::Reverted {
        fail_on_notices(state.take_notices())?;
    }
    Ok(())
}
