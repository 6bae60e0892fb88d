use tb_board::BoardState;

use super::{fail_on_notices, print_board};
use crate::cli::GlobalFlags;
use crate::context::AppContext;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = ctx.board_client();
    let mut state = BoardState::new();
    client.load(&mut state).await;
    fail_on_notices(state.take_notices())?;
    print_board(&state, flags)
}
