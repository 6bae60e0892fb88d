use tb_core::identity::Identity;
use tb_core::requests::TaskFilter;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    status: Option<&str>,
    identity: &Identity,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = status.map_or_else(TaskFilter::default, TaskFilter::by_status);
    let tasks = ctx.service.list(identity, &filter).await?;
    output(&tasks, flags.format)
}
