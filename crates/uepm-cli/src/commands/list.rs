//! Implementation of the `uepm list` command.

use chrono::{DateTime, Local};
use serde::Serialize;
use uepm_core::{domain::ProjectEntry, error::UepmError};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::resolve_list_format,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One listing row, numbered from 1.
#[derive(Debug, Serialize)]
struct Row {
    index: usize,
    name: String,
    modified: DateTime<Local>,
}

impl Row {
    fn from_entry(index: usize, entry: ProjectEntry) -> Self {
        Self {
            index: index + 1,
            name: entry.name,
            modified: DateTime::<Local>::from(entry.modified),
        }
    }

    fn timestamp(&self) -> String {
        self.modified.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

pub fn execute(args: ListArgs, ctx: &AppContext, output: &OutputManager) -> CliResult<()> {
    let rows: Vec<Row> = ctx
        .registry()
        .list_projects()?
        .into_iter()
        .enumerate()
        .map(|(i, entry)| Row::from_entry(i, entry))
        .collect();

    match resolve_list_format(args.format, output) {
        ListFormat::Table => {
            if rows.is_empty() {
                output.info("No projects registered yet. Create one with `uepm new --name <NAME>`")?;
                return Ok(());
            }
            output.header("Registered projects:")?;
            for row in &rows {
                output.print(&format!(
                    "  {:>3}  {:<32} {}",
                    row.index,
                    row.name,
                    row.timestamp()
                ))?;
            }
        }

        ListFormat::Plain => {
            for row in &rows {
                output.data(&format!("{}\t{}\t{}", row.index, row.name, row.timestamp()))?;
            }
        }

        ListFormat::Json => {
            // Bypasses the styled helpers: JSON must stay parseable in pipes.
            let json = serde_json::to_string_pretty(&rows).map_err(|e| {
                CliError::Core(UepmError::Internal {
                    message: format!("failed to serialise project list: {e}"),
                })
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime};

    use super::*;

    #[test]
    fn rows_are_numbered_from_one() {
        let entry = ProjectEntry {
            name: "Foo".into(),
            modified: SystemTime::UNIX_EPOCH + Duration::from_secs(86_400),
        };
        let row = Row::from_entry(0, entry);
        assert_eq!(row.index, 1);
        assert_eq!(row.name, "Foo");
    }

    #[test]
    fn json_rows_carry_name_and_timestamp() {
        let row = Row::from_entry(
            2,
            ProjectEntry {
                name: "Bar".into(),
                modified: SystemTime::now(),
            },
        );
        let json: serde_json::Value = serde_json::to_value(&row).unwrap();
        assert_eq!(json["index"], 3);
        assert_eq!(json["name"], "Bar");
        assert!(json["modified"].is_string());
    }
}
