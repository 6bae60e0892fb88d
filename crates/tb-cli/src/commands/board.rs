#[path = "board/add.rs"]
mod add;
#[path = "board/mv.rs"]
mod mv;
#[path = "board/rm.rs"]
mod rm;
#[path = "board/show.rs"]
mod show;

use tb_board::{BoardState, Notice};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BoardCommands;
use crate::context::AppContext;
use crate::output::board::{BoardView, render_board};
use crate::output::table_options;

/// Handle `tb board`.
pub async fn handle(
    action: &BoardCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    // Fail on a bad token before touching the board.
    ctx.identity().await?;
    match action {
        BoardCommands::Show => show::run(ctx, flags).await,
        BoardCommands::Add {
            title,
            description,
            status,
            due,
        } => {
            add::run(
                add::Params {
                    title: title.clone(),
                    description: description.clone(),
                    status: *status,
                    due: *due,
                },
                ctx,
                flags,
            )
            .await
        }
        BoardCommands::Move { id, status } => mv::run(id, *status, ctx, flags).await,
        BoardCommands::Rm { id } => rm::run(id, ctx, flags).await,
    }
}

fn print_board(state: &BoardState, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = chrono::Local::now().date_naive();
    let view = BoardView::new(state, today);
    println!("{}", render_board(&view, flags.format, table_options())?);
    Ok(())
}

/// Turn notices into an error so the process exits non-zero.
fn fail_on_notices(notices: Vec<Notice>) -> anyhow::Result<()> {
    if notices.is_empty() {
        return Ok(());
    }
    let messages = notices
        .into_iter()
        .map(|notice| notice.message)
        .collect::<Vec<_>>();
    anyhow::bail!(messages.join("; "))
}
