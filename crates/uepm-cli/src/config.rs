//! Tool settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.
//! These are settings of the `uepm` binary itself; the registry records
//! (engine path, projects folder, projects, engines) live in the application
//! directory and are handled by the core.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `UEPM_*` environment variables (`__` separates nested keys,
//!    e.g. `UEPM_LAUNCH__OPEN_EDITOR=false`)
//! 3. Settings file (`--config <FILE>` or the platform config dir)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// Tool settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the registry directory (`~/.uepme`).
    pub app_dir: Option<PathBuf>,
    pub output: OutputConfig,
    pub launch: LaunchConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

/// What `uepm new` does after writing the project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub initial_build: bool,
    pub open_editor: bool,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            initial_build: true,
            open_editor: true,
        }
    }
}

impl AppConfig {
    /// Load settings, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path()).required(false),
        };
        let env = Environment::with_prefix("UEPM")
            .prefix_separator("_")
            .separator("__");
        Self::load_from(file, env)
    }

    fn load_from(
        file: File<config::FileSourceFile, config::FileFormat>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("launch.initial_build", defaults.launch.initial_build)?
            .set_default("launch.open_editor", defaults.launch.open_editor)?
            .add_source(file)
            .add_source(env.try_parsing(true))
            .build()
            .context("Failed to read settings")?;

        settings
            .try_deserialize()
            .context("Settings have an unexpected shape")
    }

    /// Path to the default settings file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.uepm.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "uepm", "uepm")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".uepm.toml"))
    }

    /// Registry directory from settings, if one was configured.
    pub fn app_dir(&self) -> Option<&Path> {
        self.app_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn no_env() -> Environment {
        // A prefix nothing in the test environment uses.
        Environment::with_prefix("UEPM_SETTINGS_TEST_UNSET")
            .prefix_separator("_")
            .separator("__")
    }

    #[test]
    fn defaults_build_and_open_editor() {
        let cfg = AppConfig::default();
        assert!(cfg.launch.initial_build);
        assert!(cfg.launch.open_editor);
        assert!(!cfg.output.no_color);
        assert!(cfg.app_dir().is_none());
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::from(dir.path().join("absent.toml").as_path()).required(false);

        let cfg = AppConfig::load_from(file, no_env()).unwrap();
        assert!(cfg.launch.initial_build);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uepm.toml");
        fs::write(
            &path,
            "app_dir = \"/srv/uepm\"\n\n[launch]\ninitial_build = false\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(File::from(path.as_path()).required(true), no_env()).unwrap();

        assert_eq!(cfg.app_dir(), Some(Path::new("/srv/uepm")));
        assert!(!cfg.launch.initial_build);
        assert!(cfg.launch.open_editor);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/uepm.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
