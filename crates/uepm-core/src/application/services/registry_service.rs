//! Registry Service - project and engine records.
//!
//! Wraps a [`ConfigStore`] and enforces the registry rules: names are
//! unique, lookups of unknown names fail with `NotFound`, and removing a
//! record never touches the project directory it points at.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::ConfigStore},
    domain::{
        DomainValidator as validator, EngineAssociation, EngineAssociations, GlobalConfig,
        ProjectEntry, ProjectName, ProjectRecord, Upsert,
    },
    error::UepmResult,
};

/// Service for registry record operations.
pub struct RegistryService {
    store: Box<dyn ConfigStore>,
}

impl RegistryService {
    pub fn new(store: Box<dyn ConfigStore>) -> Self {
        Self { store }
    }

    // -------------------------------------------------------------------------
    // Global configuration
    // -------------------------------------------------------------------------

    /// The stored global configuration.
    pub fn global_config(&self) -> UepmResult<GlobalConfig> {
        self.store.load_global()
    }

    /// Validate and overwrite the global configuration.
    #[instrument(skip(self))]
    pub fn configure(&self, engine_path: &str, projects_root: &str) -> UepmResult<GlobalConfig> {
        let config = GlobalConfig::new(engine_path, projects_root);
        validator::validate_global_config(&config)?;
        self.store.save_global(&config)?;
        info!("Global configuration saved");
        Ok(config)
    }

    // -------------------------------------------------------------------------
    // Projects
    // -------------------------------------------------------------------------

    pub fn project_exists(&self, name: &str) -> bool {
        self.store.project_exists(name)
    }

    /// Persist a new record. A second registration under the same name fails
    /// and leaves the first record untouched.
    #[instrument(skip_all, fields(project = %record.name))]
    pub fn register(&self, record: &ProjectRecord) -> UepmResult<()> {
        validator::validate_project_record(record)?;

        if self.store.project_exists(&record.name) {
            return Err(ApplicationError::DuplicateName {
                name: record.name.clone(),
            }
            .into());
        }

        self.store.save_project(record)?;
        info!(dir = %record.project_dir.display(), "Project registered");
        Ok(())
    }

    /// Remove the record only; project files stay where they are.
    #[instrument(skip(self))]
    pub fn unregister(&self, name: &str) -> UepmResult<()> {
        ProjectName::parse(name)?;
        if !self.store.project_exists(name) {
            return Err(ApplicationError::project_not_found(name).into());
        }
        self.store.delete_project(name)?;
        info!("Project unregistered");
        Ok(())
    }

    /// Look up a registered project.
    ///
    /// Names that could not have been registered are rejected before the
    /// store is consulted, so they never reach a file path.
    pub fn resolve(&self, name: &str) -> UepmResult<ProjectRecord> {
        ProjectName::parse(name)?;
        if !self.store.project_exists(name) {
            return Err(ApplicationError::project_not_found(name).into());
        }
        let record = self.store.load_project(name)?;
        debug!(project = %record.name, dir = %record.project_dir.display(), "Resolved project");
        Ok(record)
    }

    pub fn list_projects(&self) -> UepmResult<Vec<ProjectEntry>> {
        self.store.list_projects()
    }

    // -------------------------------------------------------------------------
    // Engines
    // -------------------------------------------------------------------------

    pub fn engines(&self) -> UepmResult<EngineAssociations> {
        self.store.load_engines()
    }

    /// Look up a registered engine.
    pub fn engine(&self, name: &str) -> UepmResult<EngineAssociation> {
        self.store
            .load_engines()?
            .get(name)
            .cloned()
            .ok_or_else(|| ApplicationError::engine_not_found(name).into())
    }

    /// Insert or replace an engine association by name.
    ///
    /// See [`EngineAssociations::upsert`] for the default-flag policy.
    #[instrument(skip_all, fields(engine = %association.name))]
    pub fn save_engine(&self, association: EngineAssociation) -> UepmResult<Upsert> {
        validator::validate_engine(&association)?;

        let mut engines = self.store.load_engines()?;
        let outcome = engines.upsert(association);
        self.store.save_engines(&engines)?;

        info!(?outcome, count = engines.len(), "Engine associations saved");
        Ok(outcome)
    }
}
