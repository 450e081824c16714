//! `uepm config`: set or show the engine and projects folders.

use tracing::instrument;
use uepm_core::{domain::GlobalConfig, error::UepmError};

use crate::{
    cli::{ConfigArgs, OutputFormat},
    context::AppContext,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    prompt::Prompter,
};

#[instrument(skip_all, fields(show = args.show))]
pub fn execute(
    args: ConfigArgs,
    ctx: &AppContext,
    output: &OutputManager,
    prompter: &dyn Prompter,
) -> CliResult<()> {
    let registry = ctx.registry();

    if args.show {
        let current = registry.global_config()?;
        return show(&current, ctx, output);
    }

    // Offer the stored values as defaults when re-configuring.
    let current = registry.global_config().ok();

    let engine_path = value_or_prompt(
        args.engine_path,
        prompter,
        "Unreal Engine folder",
        current.as_ref().map(|c| c.engine_path.clone()),
    )?;
    let projects_dir = value_or_prompt(
        args.projects_dir,
        prompter,
        "Projects folder",
        current.map(|c| c.projects_root_path),
    )?;

    // Quotes are rejected on the typed values, before they become paths.
    let typed = GlobalConfig::new(engine_path, projects_dir);
    typed.validate().map_err(UepmError::from)?;

    let saved = registry.configure(
        &absolute(&typed.engine_path)?,
        &absolute(&typed.projects_root_path)?,
    )?;

    output.success(&format!(
        "Configuration saved to {}",
        ctx.app_dir().display()
    ))?;
    output.print(&format!("  Engine:   {}", saved.engine_path))?;
    output.print(&format!("  Projects: {}", saved.projects_root_path))?;
    Ok(())
}

fn show(config: &GlobalConfig, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(config).map_err(|e| {
            CliError::Core(UepmError::Internal {
                message: format!("failed to serialise configuration: {e}"),
            })
        })?;
        output.data(&json)?;
        return Ok(());
    }

    output.header("Current configuration")?;
    output.print(&format!("  Registry: {}", ctx.app_dir().display()))?;
    output.print(&format!("  Engine:   {}", config.engine_path))?;
    output.print(&format!("  Projects: {}", config.projects_root_path))?;
    Ok(())
}

/// Stored paths are always absolute.
fn absolute(path: &str) -> CliResult<String> {
    let resolved = std::path::absolute(path)
        .with_cli_context(|| format!("failed to resolve '{path}'"))?;
    Ok(resolved.display().to_string())
}

/// The flag value when given, otherwise the user's answer.
fn value_or_prompt(
    flag: Option<String>,
    prompter: &dyn Prompter,
    prompt: &str,
    default: Option<String>,
) -> CliResult<String> {
    match flag {
        Some(value) => Ok(value),
        None => prompter.ask(prompt, default),
    }
}
