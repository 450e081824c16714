//! Persisted registry records.
//!
//! The serde field names match the JSON written by earlier releases of the
//! tool, so existing application directories keep working.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Singleton record locating the engine and the projects root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(rename = "UnrealDir")]
    pub engine_path: String,
    #[serde(rename = "ProjectsDir")]
    pub projects_root_path: String,
}

impl GlobalConfig {
    pub fn new(engine_path: impl Into<String>, projects_root_path: impl Into<String>) -> Self {
        Self {
            engine_path: engine_path.into(),
            projects_root_path: projects_root_path.into(),
        }
    }

    /// Both paths must be present and free of quote characters.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_path_field("engine path", &self.engine_path)?;
        validate_path_field("projects path", &self.projects_root_path)
    }

    pub fn engine_path(&self) -> &Path {
        Path::new(&self.engine_path)
    }

    pub fn projects_root(&self) -> &Path {
        Path::new(&self.projects_root_path)
    }

    /// Where a new project called `name` lives.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.projects_root().join(name)
    }
}

fn validate_path_field(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid_input(field, "path cannot be empty"));
    }
    if value.contains('"') {
        return Err(DomainError::invalid_input(
            field,
            "path must not contain quote characters",
        ));
    }
    Ok(())
}

/// One registered project.
///
/// `name` doubles as the record's file stem (`<name>.config.json`) and never
/// changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ProjectDir")]
    pub project_dir: PathBuf,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            project_dir: project_dir.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Name" });
        }
        if self.name.contains(['/', '\\', '"']) {
            return Err(DomainError::InvalidProjectName {
                name: self.name.clone(),
                reason: "name is used as a file name and cannot contain '/', '\\' or quotes"
                    .into(),
            });
        }
        if self.project_dir.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "ProjectDir",
            });
        }
        Ok(())
    }
}

/// A row of `uepm list`: the record name plus when its file last changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntry {
    pub name: String,
    pub modified: SystemTime,
}
