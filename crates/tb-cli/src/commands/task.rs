#[path = "task/create.rs"]
mod create;
#[path = "task/delete.rs"]
mod delete;
#[path = "task/get.rs"]
mod get;
#[path = "task/list.rs"]
mod list;
#[path = "task/update.rs"]
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `tb task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let identity = ctx.identity().await?;
    match action {
        TaskCommands::Create {
            title,
            description,
            status,
            due,
        } => {
            create::run(
                create::Params {
                    title: title.clone(),
                    description: description.clone(),
                    status: status.clone(),
                    due: *due,
                },
                &identity,
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::List { status } => list::run(status.as_deref(), &identity, ctx, flags).await,
        TaskCommands::Get { id } => get::run(id, &identity, ctx, flags).await,
        TaskCommands::Update {
            id,
            title,
            description,
            status,
            due,
            clear_due,
        } => {
            update::run(
                update::Params {
                    id: id.clone(),
                    title: title.clone(),
                    description: description.clone(),
                    status: status.clone(),
                    due: *due,
                    clear_due: *clear_due,
                },
                &identity,
                ctx,
                flags,
            )
            .await
        }
        TaskCommands::Delete { id } => delete::run(id, &identity, ctx, flags).await,
    }
}
