//! # uepm
//!
//! Unreal Engine project manager.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load settings (defaults, file, environment).
//! 4. Build the [`OutputManager`].
//! 5. Resolve the registry directory and dispatch to the verb handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};
use uepm_core::domain::LauncherKind;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    context::AppContext,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
    prompt::TerminalPrompter,
};

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod logging;
mod output;
mod prompt;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too; clap picks their exit code.
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load settings ──────────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load settings: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, &config, &output) {
        Ok(()) => {
            info!("uepm completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        command => command,
    };

    let ctx = AppContext::resolve(&cli.global, config)?;
    let prompter = TerminalPrompter;

    match command {
        Commands::Config(args) => commands::config::execute(args, &ctx, output, &prompter),
        Commands::New(args) => commands::new::execute(args, &ctx, config, output),
        Commands::Link(args) => commands::link::execute(args, &ctx, output),
        Commands::Open(args) => commands::open::execute(args, &ctx, output),
        Commands::Run(args) => commands::run::execute(args, &ctx, output),
        Commands::Build(args) => commands::launch::execute(LauncherKind::Build, args, &ctx, output),
        Commands::Editor(args) => {
            commands::launch::execute(LauncherKind::Editor, args, &ctx, output)
        }
        Commands::Compile(args) => {
            commands::launch::execute(LauncherKind::Compile, args, &ctx, output)
        }
        Commands::Cook(args) => commands::launch::execute(LauncherKind::Cook, args, &ctx, output),
        Commands::List(args) => commands::list::execute(args, &ctx, output),
        Commands::Delete(args) => commands::delete::execute(args, &ctx, output, &prompter),
        Commands::Add(args) => commands::add::execute(args, &ctx, output),
        Commands::Engines(args) => commands::engines::execute(args, &ctx, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Straight to stderr so the message survives a redirected stdout.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
