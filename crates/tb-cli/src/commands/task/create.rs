use chrono::NaiveDate;
use tb_core::identity::Identity;
use tb_core::requests::NewTask;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due: Option<NaiveDate>,
}

pub async fn run(
    params: Params,
    identity: &Identity,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let task = ctx.service.create(identity, new_task(params)).await?;
    output(&task, flags.format)
}

fn new_task(params: Params) -> NewTask {
    NewTask {
        title: Some(params.title),
        description: params.description,
        status: params.status,
        due_date: params.due,
    }
}
