//! `uepm link`: register a project folder that already exists.

use tracing::instrument;

use crate::{
    cli::LinkArgs,
    context::AppContext,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: LinkArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    // Records always hold absolute paths.
    let path = std::path::absolute(&args.path)
        .with_cli_context(|| format!("failed to resolve '{}'", args.path.display()))?;

    let report = ctx.scaffolder().link_project(&path)?;

    output.success(&format!(
        "Linked '{}' at {}",
        report.record.name,
        report.record.project_dir.display(),
    ))?;
    if report.generated_launchers {
        output.info("Generated Build.bat, Compile.bat, Cook.bat and Editor.bat")?;
    }
    Ok(())
}
