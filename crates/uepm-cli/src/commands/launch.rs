//! `uepm build | editor | compile | cook`: run one of the project's
//! launcher scripts and wait for it.
//!
//! The script's output is echoed by the process runner as it arrives.

use tracing::instrument;
use uepm_core::domain::LauncherKind;

use crate::{cli::ProjectArgs, context::AppContext, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(project = %args.name, script = %kind))]
pub fn execute(
    kind: LauncherKind,
    args: ProjectArgs,
    ctx: &AppContext,
    output: &OutputManager,
) -> CliResult<()> {
    output.header(&format!("{}: {}", args.name, kind.describe()))?;
    ctx.projects().launch(&args.name, kind)?;
    output.success(&format!("{} finished", kind.file_name()))?;
    Ok(())
}
