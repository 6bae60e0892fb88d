use chrono::NaiveDate;
use tb_core::identity::Identity;
use tb_core::requests::{TaskPatch, TaskPatchBuilder};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due: Option<NaiveDate>,
    pub clear_due: bool,
}

pub async fn run(
    params: Params,
    identity: &Identity,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let patch = build_patch(&params);
    let task = ctx.service.update(identity, &params.id, patch).await?;
    output(&task, flags.format)
}

fn build_patch(params: &Params) -> TaskPatch {
    let mut builder = TaskPatchBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = params.description.as_deref() {
        let description = Some(description).filter(|d| !d.is_empty());
        builder = builder.description(description.map(String::from));
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(status);
    }
    if params.clear_due {
        builder = builder.due_date(None);
    } else if let Some(due) = params.due {
        builder = builder.due_date(Some(due));
    }
    builder.build()
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && params.status.is_none()
        && params.due.is_none()
        && !params.clear_due
    {
        anyhow::bail!(
            "At least one of --title, --description, --status, --due, or --clear-due must be provided"
        );
    }
    Ok(())
}
