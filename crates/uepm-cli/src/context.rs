//! Wiring: the resolved registry directory and the services built on it.

use std::path::{Path, PathBuf};

use tracing::debug;
use uepm_adapters::{JsonConfigStore, LocalFilesystem, SystemProcessRunner, UnrealRenderer};
use uepm_core::application::{EngineService, ProjectService, RegistryService, ScaffoldService};

use crate::{
    cli::GlobalArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Folder under the home directory used when nothing else is configured.
pub const DEFAULT_APP_DIR_NAME: &str = ".uepme";

/// Everything a verb handler needs to reach the registry.
#[derive(Debug, Clone)]
pub struct AppContext {
    app_dir: PathBuf,
}

impl AppContext {
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
        }
    }

    /// `--app-dir` / `UEPM_APP_DIR`, then settings, then `~/.uepme`.
    pub fn resolve(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let app_dir = match (global.app_dir.as_deref(), config.app_dir()) {
            (Some(flag), _) => flag.to_path_buf(),
            (None, Some(setting)) => setting.to_path_buf(),
            (None, None) => default_app_dir()?,
        };
        debug!(app_dir = %app_dir.display(), "Registry directory resolved");
        Ok(Self::new(app_dir))
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn registry(&self) -> RegistryService {
        RegistryService::new(Box::new(JsonConfigStore::new(&self.app_dir)))
    }

    pub fn engines(&self) -> EngineService {
        EngineService::new(self.registry(), Box::new(LocalFilesystem::new()))
    }

    pub fn scaffolder(&self) -> ScaffoldService {
        ScaffoldService::new(
            self.registry(),
            Box::new(UnrealRenderer::new()),
            Box::new(LocalFilesystem::new()),
            Box::new(SystemProcessRunner::new()),
        )
    }

    pub fn projects(&self) -> ProjectService {
        ProjectService::new(
            self.registry(),
            Box::new(LocalFilesystem::new()),
            Box::new(SystemProcessRunner::new()),
        )
    }
}

fn default_app_dir() -> CliResult<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(DEFAULT_APP_DIR_NAME))
        .ok_or_else(|| CliError::ConfigError {
            message: "could not determine the home directory".into(),
            source: None,
        })
}
