//! JSON record files under the application directory.
//!
//! ```text
//! <app_dir>/
//! ├── UnrealSettuper.config.json   global config
//! ├── Engines.config.json          engine associations
//! └── Projects/
//!     └── <name>.config.json       one per project
//! ```

use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};
use uepm_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{
        DomainValidator as validator, EngineAssociation, EngineAssociations, GlobalConfig,
        ProjectEntry, ProjectRecord,
    },
    error::UepmResult,
};
use walkdir::WalkDir;

pub const GLOBAL_CONFIG_FILE: &str = "UnrealSettuper.config.json";
pub const ENGINES_FILE: &str = "Engines.config.json";
pub const PROJECTS_DIR: &str = "Projects";
pub const RECORD_SUFFIX: &str = ".config.json";

/// Production [`ConfigStore`] backed by JSON files.
///
/// Writes go to a sibling `.tmp` file that is renamed over the target, so a
/// record is always either its old or its new content.
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    app_dir: PathBuf,
}

impl JsonConfigStore {
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
        }
    }

    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    pub fn global_path(&self) -> PathBuf {
        self.app_dir.join(GLOBAL_CONFIG_FILE)
    }

    pub fn engines_path(&self) -> PathBuf {
        self.app_dir.join(ENGINES_FILE)
    }

    pub fn projects_dir(&self) -> PathBuf {
        self.app_dir.join(PROJECTS_DIR)
    }

    pub fn project_path(&self, name: &str) -> PathBuf {
        self.projects_dir().join(format!("{name}{RECORD_SUFFIX}"))
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> UepmResult<()> {
        let store_error = |reason: String| ApplicationError::StoreError {
            path: path.to_path_buf(),
            reason,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| store_error(format!("Failed to create directory: {e}")))?;
        }

        let json = serde_json::to_string_pretty(value)
            .map_err(|e| store_error(format!("Failed to serialize: {e}")))?;

        let tmp = temp_path(path);
        std::fs::write(&tmp, json).map_err(|e| store_error(format!("Failed to write: {e}")))?;
        std::fs::rename(&tmp, path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp);
            store_error(format!("Failed to replace: {e}"))
        })?;

        debug!(path = %path.display(), "Record written");
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T, String> {
        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

impl ConfigStore for JsonConfigStore {
    #[instrument(skip(self))]
    fn load_global(&self) -> UepmResult<GlobalConfig> {
        let path = self.global_path();
        let missing = |reason: String| ApplicationError::ConfigMissingOrInvalid {
            path: path.clone(),
            reason,
        };

        if !path.exists() {
            return Err(missing("file not found".into()).into());
        }

        let config: GlobalConfig = self.read_json(&path).map_err(missing)?;
        validator::validate_global_config(&config).map_err(|e| missing(e.to_string()))?;
        Ok(config)
    }

    fn save_global(&self, config: &GlobalConfig) -> UepmResult<()> {
        self.write_json(&self.global_path(), config)
    }

    fn project_exists(&self, name: &str) -> bool {
        self.project_path(name).is_file()
    }

    fn load_project(&self, name: &str) -> UepmResult<ProjectRecord> {
        let path = self.project_path(name);
        if !path.is_file() {
            return Err(ApplicationError::project_not_found(name).into());
        }

        self.read_json(&path).map_err(|reason| {
            ApplicationError::StoreError {
                path: path.clone(),
                reason,
            }
            .into()
        })
    }

    fn save_project(&self, record: &ProjectRecord) -> UepmResult<()> {
        validator::validate_project_record(record)?;
        self.write_json(&self.project_path(&record.name), record)
    }

    fn delete_project(&self, name: &str) -> UepmResult<()> {
        let path = self.project_path(name);
        if !path.is_file() {
            return Err(ApplicationError::project_not_found(name).into());
        }

        std::fs::remove_file(&path).map_err(|e| {
            ApplicationError::StoreError {
                path: path.clone(),
                reason: format!("Failed to remove: {e}"),
            }
            .into()
        })
    }

    fn list_projects(&self) -> UepmResult<Vec<ProjectEntry>> {
        let dir = self.projects_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::StoreError {
                path: dir.clone(),
                reason: format!("Failed to list records: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let Some(name) = file_name.strip_suffix(RECORD_SUFFIX) else {
                continue;
            };

            let modified = match entry.metadata().ok().and_then(|m| m.modified().ok()) {
                Some(modified) => modified,
                None => {
                    warn!(path = %entry.path().display(), "No modification time; skipping");
                    continue;
                }
            };

            entries.push(ProjectEntry {
                name: name.to_string(),
                modified,
            });
        }

        Ok(entries)
    }

    fn load_engines(&self) -> UepmResult<EngineAssociations> {
        let path = self.engines_path();
        if !path.exists() {
            return Ok(EngineAssociations::new());
        }

        let list: Vec<EngineAssociation> =
            self.read_json(&path)
                .map_err(|reason| ApplicationError::StoreError {
                    path: path.clone(),
                    reason,
                })?;
        Ok(list.into())
    }

    fn save_engines(&self, engines: &EngineAssociations) -> UepmResult<()> {
        self.write_json(&self.engines_path(), engines)
    }
}

#[cfg(test)]
mod tests {
    use uepm_core::domain::EngineVersion;

    use super::*;

    #[test]
    fn missing_global_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path());

        let err = store.load_global().unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::ConfigMissingOrInvalid { .. })
        ));
    }

    #[test]
    fn global_config_uses_legacy_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path());
        store
            .save_global(&GlobalConfig::new("C:\\Engine", "C:\\Projects"))
            .unwrap();

        let raw = std::fs::read_to_string(dir.path().join(GLOBAL_CONFIG_FILE)).unwrap();
        assert!(raw.contains("\"UnrealDir\""));
        assert!(raw.contains("\"ProjectsDir\""));
        assert!(!dir.path().join("UnrealSettuper.config.json.tmp").exists());
    }

    #[test]
    fn global_config_missing_field_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(GLOBAL_CONFIG_FILE),
            r#"{"UnrealDir":"C:\\Engine"}"#,
        )
        .unwrap();

        let err = JsonConfigStore::new(dir.path()).load_global().unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::ConfigMissingOrInvalid { .. })
        ));
    }

    #[test]
    fn reads_record_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(PROJECTS_DIR)).unwrap();
        std::fs::write(
            dir.path().join(PROJECTS_DIR).join("Foo.config.json"),
            r#"{"Name":"Foo","ProjectDir":"C:\\Projects\\Foo"}"#,
        )
        .unwrap();

        let store = JsonConfigStore::new(dir.path());
        let record = store.load_project("Foo").unwrap();
        assert_eq!(record.project_dir, PathBuf::from("C:\\Projects\\Foo"));
    }

    #[test]
    fn list_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path());
        store
            .save_project(&ProjectRecord::new("Foo", "/p/Foo"))
            .unwrap();
        std::fs::write(store.projects_dir().join("notes.txt"), "").unwrap();

        let names: Vec<_> = store
            .list_projects()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Foo"]);
    }

    #[test]
    fn engines_file_round_trips_versions() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonConfigStore::new(dir.path());
        let engines: EngineAssociations = vec![
            EngineAssociation::new("ue5", "/opt/ue5")
                .with_version(Some(EngineVersion::new(5, 3, 2)))
                .with_default(true),
        ]
        .into();

        store.save_engines(&engines).unwrap();

        let raw = std::fs::read_to_string(store.engines_path()).unwrap();
        assert!(raw.contains("\"Version\": \"5.3.2\""));
        assert!(raw.contains("\"IsDefault\": true"));
        assert_eq!(store.load_engines().unwrap(), engines);
    }

    #[test]
    fn no_engines_file_means_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        assert!(
            JsonConfigStore::new(dir.path())
                .load_engines()
                .unwrap()
                .is_empty()
        );
    }
}
