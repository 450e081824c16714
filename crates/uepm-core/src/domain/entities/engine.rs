//! Engine associations: named pointers to installed engine roots.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::EngineVersion};

/// A registered engine installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EngineAssociation {
    /// Name of the engine, e.g. `ue5-main`.
    pub name: String,
    /// Engine root; the folder that contains `Engine/`.
    pub path: PathBuf,
    /// `None` when no `Build.version` could be read.
    pub version: Option<EngineVersion>,
    pub is_default: bool,
}

impl EngineAssociation {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version: None,
            is_default: false,
        }
    }

    pub fn with_version(mut self, version: Option<EngineVersion>) -> Self {
        self.version = version;
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Name" });
        }
        if self.path.as_os_str().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "Path" });
        }
        Ok(())
    }
}

/// Result of [`EngineAssociations::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
}

/// The aggregate engine store, keyed by name, kept in insertion order.
///
/// Invariant: at most one association has `is_default` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngineAssociations(Vec<EngineAssociation>);

impl EngineAssociations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace by name.
    ///
    /// Setting `is_default` clears the flag on every other association.
    /// Replacing without `is_default` keeps the replaced record's flag.
    pub fn upsert(&mut self, mut association: EngineAssociation) -> Upsert {
        if association.is_default {
            for other in &mut self.0 {
                other.is_default = false;
            }
        }

        match self.0.iter_mut().find(|a| a.name == association.name) {
            Some(existing) => {
                association.is_default |= existing.is_default;
                *existing = association;
                Upsert::Updated
            }
            None => {
                self.0.push(association);
                Upsert::Added
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&EngineAssociation> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn default_engine(&self) -> Option<&EngineAssociation> {
        self.0.iter().find(|a| a.is_default)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EngineAssociation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<EngineAssociation>> for EngineAssociations {
    fn from(list: Vec<EngineAssociation>) -> Self {
        let mut engines = Self::new();
        for association in list {
            engines.upsert(association);
        }
        engines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(name: &str, is_default: bool) -> EngineAssociation {
        EngineAssociation::new(name, format!("/engines/{name}")).with_default(is_default)
    }

    #[test]
    fn upsert_adds_then_updates() {
        let mut engines = EngineAssociations::new();
        assert_eq!(engines.upsert(engine("ue5", false)), Upsert::Added);
        let moved = EngineAssociation::new("ue5", "/elsewhere");
        assert_eq!(engines.upsert(moved), Upsert::Updated);
        assert_eq!(engines.len(), 1);
        assert_eq!(engines.get("ue5").unwrap().path, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn new_default_clears_previous_default() {
        let mut engines = EngineAssociations::new();
        engines.upsert(engine("ue4", true));
        engines.upsert(engine("ue5", true));

        assert_eq!(engines.default_engine().unwrap().name, "ue5");
        assert_eq!(engines.iter().filter(|a| a.is_default).count(), 1);
    }

    #[test]
    fn update_without_flag_keeps_existing_default() {
        let mut engines = EngineAssociations::new();
        engines.upsert(engine("ue5", true));
        engines.upsert(engine("ue5", false));
        assert!(engines.get("ue5").unwrap().is_default);
    }

    #[test]
    fn adding_non_default_leaves_default_alone() {
        let mut engines = EngineAssociations::new();
        engines.upsert(engine("ue4", true));
        engines.upsert(engine("ue5", false));
        assert_eq!(engines.default_engine().unwrap().name, "ue4");
    }

    #[test]
    fn from_vec_repairs_multiple_defaults() {
        let engines = EngineAssociations::from(vec![engine("a", true), engine("b", true)]);
        assert_eq!(engines.iter().filter(|a| a.is_default).count(), 1);
        assert_eq!(engines.default_engine().unwrap().name, "b");
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut engines = EngineAssociations::new();
        engines.upsert(engine("ue5", true).with_version(Some(EngineVersion::new(5, 3, 2))));
        let json = serde_json::to_string(&engines).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"IsDefault\":true"));
        assert!(json.contains("\"Version\":\"5.3.2\""));
    }
}
