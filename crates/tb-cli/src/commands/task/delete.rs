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
    let confirmation = ctx.service.delete(identity, id).await?;
    output(&confirmation, flags.format)
}
