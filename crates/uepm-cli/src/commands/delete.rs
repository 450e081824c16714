//! `uepm delete`: drop a project from the registry.
//!
//! Only the record file goes; the project folder is never touched.

use tracing::instrument;

use crate::{
    cli::DeleteArgs,
    context::AppContext,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::{Prompter, confirm},
};

#[instrument(skip_all, fields(project = %args.name, yes = args.yes))]
pub fn execute(
    args: DeleteArgs,
    ctx: &AppContext,
    output: &OutputManager,
    prompter: &dyn Prompter,
) -> CliResult<()> {
    let service = ctx.projects();
    // Unknown names fail before anything is asked.
    let record = service.resolve(&args.name)?;

    if !args.yes {
        output.info(&format!(
            "'{}' will be removed from the registry; files in {} are kept",
            record.name,
            record.project_dir.display(),
        ))?;
        if !confirm(prompter, &format!("Remove '{}'?", record.name))? {
            return Err(CliError::Cancelled);
        }
    }

    let report = service.delete(&record.name)?;
    if report.directory_missing {
        output.warning(&format!(
            "Project directory {} no longer exists",
            report.record.project_dir.display()
        ))?;
    }
    output.success(&format!("Removed '{}' from the registry", report.record.name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use uepm_core::domain::ProjectRecord;

    use super::*;
    use crate::{
        cli::{GlobalArgs, OutputFormat},
        config::AppConfig,
        prompt::MockPrompter,
    };

    fn setup() -> (tempfile::TempDir, AppContext) {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::new(dir.path().join("registry"));
        ctx.registry()
            .register(&ProjectRecord::new("Foo", dir.path().join("Foo")))
            .unwrap();
        (dir, ctx)
    }

    fn output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            app_dir: None,
            output_format: OutputFormat::Plain,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    fn args(name: &str, yes: bool) -> DeleteArgs {
        DeleteArgs {
            name: name.into(),
            yes,
        }
    }

    #[test]
    fn declining_keeps_the_record() {
        let (_dir, ctx) = setup();
        let mut prompter = MockPrompter::new();
        prompter.expect_ask().returning(|_, _| Ok("no".into()));

        let err = execute(args("Foo", false), &ctx, &output(), &prompter).unwrap_err();

        assert!(matches!(err, CliError::Cancelled));
        assert!(ctx.registry().project_exists("Foo"));
    }

    #[test]
    fn confirming_removes_the_record() {
        let (_dir, ctx) = setup();
        let mut prompter = MockPrompter::new();
        prompter.expect_ask().times(1).returning(|_, _| Ok("y".into()));

        execute(args("Foo", false), &ctx, &output(), &prompter).unwrap();

        assert!(!ctx.registry().project_exists("Foo"));
    }

    #[test]
    fn unknown_project_is_not_prompted_for() {
        let (_dir, ctx) = setup();
        let mut prompter = MockPrompter::new();
        prompter.expect_ask().never();

        let err = execute(args("Bar", false), &ctx, &output(), &prompter).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
