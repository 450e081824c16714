//! One handler per verb.
//!
//! Handlers translate parsed arguments into service calls and print the
//! outcome. No business logic lives here.

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod engines;
pub mod launch;
pub mod link;
pub mod list;
pub mod new;
pub mod open;
pub mod run;

use crate::{
    cli::{ListFormat, OutputFormat},
    output::OutputManager,
};

/// `--format` wins; otherwise follow the global output format.
pub(crate) fn resolve_list_format(requested: Option<ListFormat>, output: &OutputManager) -> ListFormat {
    requested.unwrap_or(match output.format() {
        OutputFormat::Json => ListFormat::Json,
        OutputFormat::Plain => ListFormat::Plain,
        OutputFormat::Auto | OutputFormat::Human => ListFormat::Table,
    })
}
