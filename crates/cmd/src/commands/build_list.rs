use std::io::Write;

use anyhow::Result;
use bosun_core::{Store, fetch_builds, write_table};
use chrono::Utc;
use clap::Args;

#[derive(Args, Debug)]
pub struct BuildListArgs {
    /// Only list builds of this project
    pub project: Option<String>,
}

pub async fn execute<S: Store>(store: &S, args: &BuildListArgs) -> Result<()> {
    list_builds(store, args, &mut std::io::stdout()).await
}

/// Fetches first and writes only on success, so a failed lookup prints nothing.
async fn list_builds<S: Store, W: Write>(
    store: &S,
    args: &BuildListArgs,
    out: &mut W,
) -> Result<()> {
    let project = args.project.as_deref().unwrap_or_default();
    let builds = fetch_builds(store, project).await?;

    write_table(out, &builds, Utc::now())?;
    Ok(())
}
