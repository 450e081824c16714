//! `uepm run`: start the packaged standalone build.

use tracing::instrument;

use crate::{cli::ProjectArgs, context::AppContext, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: ProjectArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let executable = ctx.projects().run_standalone(&args.name)?;
    output.success(&format!("Started {}", executable.display()))?;
    Ok(())
}
