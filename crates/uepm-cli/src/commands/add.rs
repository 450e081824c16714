//! `uepm add`: register or update an engine install.

use tracing::instrument;
use uepm_core::domain::Upsert;

use crate::{
    cli::AddArgs,
    context::AppContext,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(engine = %args.name, default = args.is_default))]
pub fn execute(args: AddArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let path = std::path::absolute(&args.path)
        .with_cli_context(|| format!("failed to resolve '{}'", args.path.display()))?;

    let report = ctx.engines().add(&args.name, &path, args.is_default)?;

    for warning in &report.warnings {
        output.warning(warning)?;
    }

    let engine = &report.association;
    let verb = match report.outcome {
        Upsert::Added => "added",
        Upsert::Updated => "updated",
    };
    let version = engine
        .version
        .map_or_else(|| "unknown version".to_string(), |v| v.to_string());
    let marker = if engine.is_default { " [default]" } else { "" };

    output.success(&format!("Engine '{}' {verb} ({version}){marker}", engine.name))?;
    Ok(())
}
