//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `uepm-adapters` crate provides implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    EngineAssociations, GlobalConfig, ProjectEntry, ProjectRecord, ProjectStructure,
    RenderContext,
};
use crate::error::UepmResult;

/// Port for the persisted registry: the global config, one record per
/// project and the engine association list.
///
/// Implemented by:
/// - `uepm_adapters::config_store::JsonConfigStore` (production)
/// - `uepm_adapters::config_store::MemoryConfigStore` (testing)
///
/// ## Contract
///
/// - A save either fully replaces the previous record or fails without
///   touching it.
/// - Nothing here touches the project directories a record points at.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    /// Read the global config. Fails with `ConfigMissingOrInvalid` when the
    /// record is absent or cannot be parsed.
    fn load_global(&self) -> UepmResult<GlobalConfig>;

    /// Overwrite the global config.
    fn save_global(&self, config: &GlobalConfig) -> UepmResult<()>;

    /// Whether a project record with this name exists.
    fn project_exists(&self, name: &str) -> bool;

    /// Read a project record. Fails with `NotFound` when absent.
    fn load_project(&self, name: &str) -> UepmResult<ProjectRecord>;

    /// Write or overwrite the record named after `record.name`.
    fn save_project(&self, record: &ProjectRecord) -> UepmResult<()>;

    /// Remove a project record. Fails with `NotFound` when absent.
    fn delete_project(&self, name: &str) -> UepmResult<()>;

    /// All project records, in storage enumeration order.
    fn list_projects(&self) -> UepmResult<Vec<ProjectEntry>>;

    /// The engine association list; empty when none were ever saved.
    fn load_engines(&self) -> UepmResult<EngineAssociations>;

    /// Overwrite the engine association list.
    fn save_engines(&self, engines: &EngineAssociations) -> UepmResult<()>;
}

/// Port for filesystem operations on project trees.
///
/// Implemented by:
/// - `uepm_adapters::filesystem::LocalFilesystem` (production)
/// - `uepm_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> UepmResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> UepmResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> UepmResult<String>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> UepmResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Files directly inside `dir` (not recursive), sorted by path.
    fn list_files(&self, dir: &Path) -> UepmResult<Vec<PathBuf>>;
}

/// Port for expanding the built-in project templates.
///
/// Implemented by `uepm_adapters::renderer::UnrealRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait ProjectRenderer: Send + Sync {
    /// Every directory and file of a brand-new project.
    fn render_project(&self, context: &RenderContext, root: &Path)
    -> UepmResult<ProjectStructure>;

    /// Only the four launcher scripts.
    fn render_launchers(
        &self,
        context: &RenderContext,
        root: &Path,
    ) -> UepmResult<ProjectStructure>;
}

/// What to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessRequest {
    /// A generated launcher script, run from its own directory.
    Script { path: PathBuf },
    /// A native executable, run from its own directory.
    Executable { path: PathBuf },
    /// Show a directory in the platform file browser.
    OpenDirectory { path: PathBuf },
}

impl ProcessRequest {
    pub fn path(&self) -> &Path {
        match self {
            Self::Script { path } | Self::Executable { path } | Self::OpenDirectory { path } => {
                path
            }
        }
    }

    /// Short name for messages, e.g. `Build.bat`.
    pub fn program_name(&self) -> String {
        self.path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path().display().to_string())
    }
}

impl fmt::Display for ProcessRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Script { path } => write!(f, "script {}", path.display()),
            Self::Executable { path } => write!(f, "executable {}", path.display()),
            Self::OpenDirectory { path } => write!(f, "file browser at {}", path.display()),
        }
    }
}

/// Result of a blocking process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Everything the process wrote to stdout.
    pub output: String,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Port for starting external processes.
///
/// Implemented by:
/// - `uepm_adapters::process::SystemProcessRunner` (production)
/// - `uepm_adapters::process::RecordingProcessRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    /// Run to completion, echoing and capturing stdout. There is no timeout.
    fn run(&self, request: &ProcessRequest) -> UepmResult<ProcessOutcome>;

    /// Start detached and return immediately.
    fn spawn(&self, request: &ProcessRequest) -> UepmResult<()>;
}
