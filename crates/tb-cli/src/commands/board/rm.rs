use tb_board::BoardState;

use super::{fail_on_notices, print_board};
use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.board_client();
    let mut state = BoardState::new();
    client.load(&mut state).await;
    fail_on_notices(state.take_notices())?;

    if state.task(id).is_none() {
        anyhow::bail!("Task not found: {id}");
    }
    if !client.delete_task(&mut state, id).await {
        return fail_on_notices(state.take_notices());
    }
    // A failed refresh after the delete stays visible as a notice on the board.
    print_board(&state, flags)
}
