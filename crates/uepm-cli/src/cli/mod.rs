//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "uepm",
    bin_name = "uepm",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Unreal Engine project manager",
    long_about = "uepm keeps a registry of your Unreal Engine projects and engine \
                  installs, scaffolds new C++ projects and runs their build, \
                  cook and editor scripts.",
    after_help = "EXAMPLES:\n\
        \x20 uepm config --engine-path \"C:\\Program Files\\Epic Games\\UE_5.3\" --projects-dir D:\\Projects\n\
        \x20 uepm new --name Shooter\n\
        \x20 uepm compile --name Shooter\n\
        \x20 uepm run --name Shooter\n\
        \x20 uepm completions bash > /usr/share/bash-completion/completions/uepm",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set the engine folder and the projects folder.
    #[command(
        about = "Configure the engine and projects folders",
        after_help = "EXAMPLES:\n\
            \x20 uepm config                       # prompts for both paths\n\
            \x20 uepm config --engine-path C:\\UE_5.3 --projects-dir D:\\Projects\n\
            \x20 uepm config --show"
    )]
    Config(ConfigArgs),

    /// Create and register a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 uepm new --name Shooter\n\
            \x20 uepm new --name Shooter --engine ue53\n\
            \x20 uepm new --name Shooter --dry-run"
    )]
    New(NewArgs),

    /// Register an existing project folder.
    #[command(
        about = "Register an existing project",
        after_help = "EXAMPLES:\n\
            \x20 uepm link --path D:\\Work\\Shooter"
    )]
    Link(LinkArgs),

    /// Open the project folder in the file browser.
    #[command(about = "Open the project folder")]
    Open(ProjectArgs),

    /// Start the packaged standalone build.
    #[command(about = "Run the standalone build")]
    Run(ProjectArgs),

    /// Run the project's Build script.
    #[command(about = "Build the editor target")]
    Build(ProjectArgs),

    /// Run the project's Editor script.
    #[command(about = "Open the project in the editor")]
    Editor(ProjectArgs),

    /// Run the project's Compile script.
    #[command(about = "Compile a standalone build")]
    Compile(ProjectArgs),

    /// Run the project's Cook script.
    #[command(about = "Cook content")]
    Cook(ProjectArgs),

    /// List registered projects.
    #[command(
        visible_alias = "ls",
        about = "List registered projects",
        after_help = "EXAMPLES:\n\
            \x20 uepm list\n\
            \x20 uepm list --format json"
    )]
    List(ListArgs),

    /// Remove a project from the registry.
    #[command(
        about = "Remove a project from the registry (files are kept)",
        after_help = "EXAMPLES:\n\
            \x20 uepm delete --name Shooter\n\
            \x20 uepm delete --name Shooter --yes"
    )]
    Delete(DeleteArgs),

    /// Register or update an engine install.
    #[command(
        about = "Register an engine install",
        after_help = "EXAMPLES:\n\
            \x20 uepm add ue53 \"C:\\Program Files\\Epic Games\\UE_5.3\" --isDefault"
    )]
    Add(AddArgs),

    /// List registered engine installs.
    #[command(about = "List registered engines")]
    Engines(EnginesArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 uepm completions bash > ~/.local/share/bash-completion/completions/uepm\n\
            \x20 uepm completions zsh  > ~/.zfunc/_uepm\n\
            \x20 uepm completions fish > ~/.config/fish/completions/uepm.fish"
    )]
    Completions(CompletionsArgs),
}

// ── config ────────────────────────────────────────────────────────────────────

/// Arguments for `uepm config`.
///
/// Values not given as flags are prompted for.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[arg(
        long = "engine-path",
        value_name = "DIR",
        help = "Engine root folder (the one containing Engine/)"
    )]
    pub engine_path: Option<String>,

    #[arg(
        long = "projects-dir",
        value_name = "DIR",
        help = "Folder new projects are created in"
    )]
    pub projects_dir: Option<String>,

    /// Print the stored configuration instead of changing it.
    #[arg(
        long = "show",
        conflicts_with_all = ["engine_path", "projects_dir"],
        help = "Show the current configuration"
    )]
    pub show: bool,
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `uepm new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Registered engine to point the launcher scripts at.
    #[arg(
        short = 'e',
        long = "engine",
        value_name = "ENGINE",
        help = "Registered engine to use instead of the configured engine path"
    )]
    pub engine: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[arg(
        long = "skip-build",
        help = "Do not run the initial build or open the editor"
    )]
    pub skip_build: bool,
}

// ── link ──────────────────────────────────────────────────────────────────────

/// Arguments for `uepm link`.
#[derive(Debug, Args)]
pub struct LinkArgs {
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        help = "Folder containing the .uproject file"
    )]
    pub path: PathBuf,
}

// ── open / run / build / editor / compile / cook ─────────────────────────────

/// A verb that acts on one registered project.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Registered project name"
    )]
    pub name: String,
}

// ── list / engines ────────────────────────────────────────────────────────────

/// Arguments for `uepm list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format. Defaults to `json` under `--output-format json`,
    /// `table` otherwise.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Arguments for `uepm engines`.
#[derive(Debug, Args)]
pub struct EnginesArgs {
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// Tab-separated rows.
    Plain,
    /// JSON array.
    Json,
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `uepm delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(
        short = 'n',
        long = "name",
        value_name = "NAME",
        help = "Registered project name"
    )]
    pub name: String,

    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `uepm add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(value_name = "NAME", help = "Engine name, e.g. ue53")]
    pub name: String,

    #[arg(value_name = "PATH", help = "Engine root folder")]
    pub path: PathBuf,

    #[arg(
        long = "isDefault",
        visible_alias = "is-default",
        help = "Make this the default engine"
    )]
    pub is_default: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `uepm completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["uepm", "new", "--name", "Shooter", "--skip-build"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "Shooter");
                assert!(args.skip_build);
                assert!(!args.dry_run);
            }
            other => panic!("expected New command, got {other:?}"),
        }
    }

    #[test]
    fn project_verbs_require_name() {
        for verb in ["open", "run", "build", "editor", "compile", "cook", "delete"] {
            assert!(
                Cli::try_parse_from(["uepm", verb]).is_err(),
                "{verb} accepted a missing --name"
            );
        }
    }

    #[test]
    fn add_accepts_both_default_spellings() {
        for flag in ["--isDefault", "--is-default"] {
            let cli = Cli::parse_from(["uepm", "add", "ue53", "/opt/UE_5.3", flag]);
            let Commands::Add(args) = cli.command else {
                panic!("expected Add command");
            };
            assert!(args.is_default);
            assert_eq!(args.path, PathBuf::from("/opt/UE_5.3"));
        }
    }

    #[test]
    fn config_show_conflicts_with_values() {
        let result = Cli::try_parse_from(["uepm", "config", "--show", "--engine-path", "/e"]);
        assert!(result.is_err());
    }

    #[test]
    fn app_dir_is_global() {
        let cli = Cli::parse_from(["uepm", "list", "--app-dir", "/tmp/reg"]);
        assert_eq!(cli.global.app_dir, Some(PathBuf::from("/tmp/reg")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["uepm", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
