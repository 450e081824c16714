//! `uepm engines`: list registered engine installs.

use owo_colors::OwoColorize;
use uepm_core::{domain::EngineAssociation, error::UepmError};

use crate::{
    cli::{EnginesArgs, ListFormat},
    commands::resolve_list_format,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: EnginesArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let engines = ctx.engines().list()?;
    let engines: Vec<&EngineAssociation> = engines.iter().collect();

    match resolve_list_format(args.format, output) {
        ListFormat::Table => {
            if engines.is_empty() {
                output.info("No engines registered yet. Add one with `uepm add <NAME> <PATH>`")?;
                return Ok(());
            }
            output.header("Registered engines:")?;
            for engine in &engines {
                let marker = match (engine.is_default, output.supports_color()) {
                    (true, true) => "*".green().bold().to_string(),
                    (true, false) => "*".to_string(),
                    (false, _) => " ".to_string(),
                };
                output.print(&format!(
                    "  {marker} {:<16} {:<10} {}",
                    engine.name,
                    version_label(engine),
                    engine.path.display()
                ))?;
            }
        }

        ListFormat::Plain => {
            for engine in &engines {
                output.data(&format!(
                    "{}\t{}\t{}\t{}",
                    engine.name,
                    version_label(engine),
                    engine.is_default,
                    engine.path.display()
                ))?;
            }
        }

        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&engines).map_err(|e| {
                CliError::Core(UepmError::Internal {
                    message: format!("failed to serialise engine list: {e}"),
                })
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

fn version_label(engine: &EngineAssociation) -> String {
    engine
        .version
        .map_or_else(|| "unknown".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use uepm_core::domain::EngineVersion;

    use super::*;

    #[test]
    fn unknown_version_is_labelled() {
        let engine = EngineAssociation::new("src", "/opt/ue-src");
        assert_eq!(version_label(&engine), "unknown");
    }

    #[test]
    fn known_version_is_printed_in_full() {
        let engine = EngineAssociation::new("ue53", "/opt/UE_5.3")
            .with_version(Some(EngineVersion::new(5, 3, 2)));
        assert_eq!(version_label(&engine), "5.3.2");
    }
}
