use tb_core::identity::Identity;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    identity: &Identity,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = ctx.service.get(identity, id).await?;
    output(&task, flags.format)
}
