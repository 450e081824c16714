//! Implementation of the `uepm new` command.
//!
//! Responsibility: turn CLI arguments and settings into `ScaffoldOptions`,
//! call the scaffold service, and display results.

use tracing::{info, instrument};
use uepm_core::{
    application::{ScaffoldOptions, ScaffoldPlan},
    domain::FsEntry,
};

use crate::{
    cli::NewArgs, config::AppConfig, context::AppContext, error::CliResult,
    output::OutputManager,
};

/// Execute the `uepm new` command.
///
/// 1. Resolve options from flags and settings
/// 2. Early-exit with a listing if `--dry-run`
/// 3. Write, register, build and open via `ScaffoldService`
/// 4. Report how the build went
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    ctx: &AppContext,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let options = scaffold_options(&args, config);
    let service = ctx.scaffolder();

    if args.dry_run {
        let plan = service.plan(&args.name, &options)?;
        return show_plan(&plan, output);
    }

    output.header(&format!("Creating '{}'...", args.name))?;
    let report = service.create_project(&args.name, &options)?;
    info!(files = report.files_written, "Project written");

    output.success(&format!(
        "Project '{}' created at {} ({} files)",
        report.record.name,
        report.record.project_dir.display(),
        report.files_written,
    ))?;

    match &report.build {
        Some(outcome) if outcome.success() => output.success("Initial build finished")?,
        Some(outcome) => output.warning(&format!(
            "Initial build failed (exit code {}); fix the errors and run `uepm build --name {}`",
            outcome
                .exit_code
                .map_or_else(|| "none".to_string(), |c| c.to_string()),
            report.record.name,
        ))?,
        None => output.info("Initial build skipped")?,
    }

    if report.editor_launched {
        output.info("The editor is starting")?;
    }

    Ok(())
}

/// `--skip-build` turns off both follow-up steps regardless of settings.
fn scaffold_options(args: &NewArgs, config: &AppConfig) -> ScaffoldOptions {
    ScaffoldOptions {
        engine: args.engine.clone(),
        initial_build: !args.skip_build && config.launch.initial_build,
        open_editor: !args.skip_build && config.launch.open_editor,
    }
}

fn show_plan(plan: &ScaffoldPlan, output: &OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Dry run: would create '{}' at {}",
        plan.record.name,
        plan.record.project_dir.display(),
    ))?;
    output.print(&format!("  Engine: {}", plan.engine_path.display()))?;

    for entry in plan.structure.entries() {
        let line = match entry {
            FsEntry::Directory(dir) => format!("  {}/", dir.path.display()),
            FsEntry::File(file) => format!("  {}", file.path.display()),
        };
        output.print(&line)?;
    }

    output.info("Nothing was written")?;
    Ok(())
}
