//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the outside world
//! (missing records, collisions, external processes). Validation errors are
//! `DomainError` from `crate::domain`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Which kind of registry record a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Project,
    Engine,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => f.write_str("project"),
            Self::Engine => f.write_str("engine"),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The global configuration file is absent, unreadable or incomplete.
    #[error("Global configuration missing or invalid ({path}): {reason}")]
    ConfigMissingOrInvalid { path: PathBuf, reason: String },

    /// A project with this name is already registered.
    #[error("A project named '{name}' is already registered")]
    DuplicateName { name: String },

    /// The target project directory already exists on disk.
    #[error("Directory already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// No record with this name.
    #[error("There is no {kind} named '{name}'")]
    NotFound { kind: RecordKind, name: String },

    /// A link target contains no project descriptor.
    #[error("No project descriptor (*.uproject) found in {path}")]
    NoProjectFileFound { path: PathBuf },

    /// `run` was requested before a standalone build exists.
    #[error("Standalone build not found at {executable}; compile the project first")]
    CompileFirst { executable: PathBuf },

    /// A generated launcher script has gone missing.
    #[error("Launcher script not found: {path}")]
    LauncherMissing { path: PathBuf },

    /// An external process ran but reported failure.
    #[error("{program} exited with {}", describe_exit(.exit_code))]
    ProcessFailed {
        program: String,
        exit_code: Option<i32>,
    },

    /// An external process could not be started at all.
    #[error("Failed to start {program}: {reason}")]
    ProcessLaunch { program: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A record file could not be read, parsed or written.
    #[error("Record store error at {path}: {reason}")]
    StoreError { path: PathBuf, reason: String },

    /// In-memory adapter lock poisoned.
    #[error("Record store lock poisoned")]
    StoreLockError,
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "no exit code".to_string(), |c| format!("code {c}"))
}

impl ApplicationError {
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Project,
            name: name.into(),
        }
    }

    pub fn engine_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            kind: RecordKind::Engine,
            name: name.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigMissingOrInvalid { .. } => vec![
                "Run: uepm config".into(),
                "Enter the engine folder and the folder new projects should go in".into(),
            ],
            Self::DuplicateName { name } => vec![
                format!("'{name}' is already in the registry"),
                "Choose a different project name".into(),
                format!("Or remove the old entry first: uepm delete --name {name}"),
            ],
            Self::AlreadyExists { path } => vec![
                format!("The folder '{}' already exists", path.display()),
                format!(
                    "Register it instead: uepm link --path \"{}\"",
                    path.display()
                ),
            ],
            Self::NotFound {
                kind: RecordKind::Project,
                ..
            } => vec![
                "List registered projects: uepm list".into(),
                "Register an existing project: uepm link --path <dir>".into(),
            ],
            Self::NotFound {
                kind: RecordKind::Engine,
                ..
            } => vec![
                "List registered engines: uepm engines".into(),
                "Register one: uepm add <name> <path>".into(),
            ],
            Self::NoProjectFileFound { .. } => vec![
                "Point --path at the folder that contains the .uproject file".into(),
                "Create a fresh project instead: uepm new --name <name>".into(),
            ],
            Self::CompileFirst { .. } => vec!["Build a standalone version: uepm compile --name <name>".into()],
            Self::LauncherMissing { .. } => vec![
                "Regenerate the launcher scripts: uepm link --path <project dir>".into(),
                "(remove the registry entry with 'uepm delete' first)".into(),
            ],
            Self::ProcessFailed { .. } => vec!["Check the tool output above for details".into()],
            Self::ProcessLaunch { program, .. } => vec![
                format!("Could not start: {program}"),
                "Check that the file exists and can be executed".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreError { path, .. } => vec![
                format!("Inspect or remove the record file: {}", path.display()),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMissingOrInvalid { .. } => ErrorCategory::Configuration,
            Self::DuplicateName { .. }
            | Self::AlreadyExists { .. }
            | Self::NoProjectFileFound { .. }
            | Self::CompileFirst { .. } => ErrorCategory::Validation,
            Self::NotFound { .. } | Self::LauncherMissing { .. } => ErrorCategory::NotFound,
            Self::ProcessFailed { .. }
            | Self::ProcessLaunch { .. }
            | Self::FilesystemError { .. }
            | Self::StoreError { .. }
            | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
