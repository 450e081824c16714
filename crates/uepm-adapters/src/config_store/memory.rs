//! In-memory record store for testing.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
    time::SystemTime,
};

use uepm_core::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{
        DomainValidator as validator, EngineAssociations, GlobalConfig, ProjectEntry,
        ProjectRecord,
    },
    error::UepmResult,
};

/// Thread-safe in-memory [`ConfigStore`]. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    global: Option<GlobalConfig>,
    projects: BTreeMap<String, (ProjectRecord, SystemTime)>,
    engines: EngineAssociations,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds a global config.
    pub fn with_global(config: GlobalConfig) -> Self {
        let store = Self::new();
        if let Ok(mut inner) = store.inner.write() {
            inner.global = Some(config);
        }
        store
    }

    pub fn project_count(&self) -> usize {
        self.inner.read().map(|i| i.projects.len()).unwrap_or(0)
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load_global(&self) -> UepmResult<GlobalConfig> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.global.clone().ok_or_else(|| {
            ApplicationError::ConfigMissingOrInvalid {
                path: "<memory>".into(),
                reason: "not configured".into(),
            }
            .into()
        })
    }

    fn save_global(&self, config: &GlobalConfig) -> UepmResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.global = Some(config.clone());
        Ok(())
    }

    fn project_exists(&self, name: &str) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.projects.contains_key(name))
    }

    fn load_project(&self, name: &str) -> UepmResult<ProjectRecord> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .projects
            .get(name)
            .map(|(record, _)| record.clone())
            .ok_or_else(|| ApplicationError::project_not_found(name).into())
    }

    fn save_project(&self, record: &ProjectRecord) -> UepmResult<()> {
        validator::validate_project_record(record)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner
            .projects
            .insert(record.name.clone(), (record.clone(), SystemTime::now()));
        Ok(())
    }

    fn delete_project(&self, name: &str) -> UepmResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .projects
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ApplicationError::project_not_found(name).into())
    }

    fn list_projects(&self) -> UepmResult<Vec<ProjectEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .projects
            .iter()
            .map(|(name, (_, modified))| ProjectEntry {
                name: name.clone(),
                modified: *modified,
            })
            .collect())
    }

    fn load_engines(&self) -> UepmResult<EngineAssociations> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.engines.clone())
    }

    fn save_engines(&self, engines: &EngineAssociations) -> UepmResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.engines = engines.clone();
        Ok(())
    }
}
