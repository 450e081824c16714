//! `uepm open`: show the project folder in the file browser.

use tracing::instrument;

use crate::{cli::ProjectArgs, context::AppContext, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: ProjectArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let dir = ctx.projects().open_folder(&args.name)?;
    output.success(&format!("Opened {}", dir.display()))?;
    Ok(())
}
