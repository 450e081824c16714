//! Engine Service - registering engine installs.
//!
//! The only checks made against an install are file-presence checks; the
//! toolchain itself is never run here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ports::Filesystem, services::RegistryService},
    domain::{DomainError, EngineAssociation, EngineAssociations, EngineVersion, Upsert},
    error::UepmResult,
};

/// Relative location of the version stamp inside an engine root.
pub const BUILD_VERSION_FILE: &str = "Engine/Build/Build.version";

/// Outcome of [`EngineService::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineReport {
    pub association: EngineAssociation,
    pub outcome: Upsert,
    /// Non-fatal findings about the install, for display.
    pub warnings: Vec<String>,
}

/// Read the engine version stamp below `engine_root`.
///
/// Returns a human-readable reason when it cannot be determined.
pub fn detect_engine_version(
    filesystem: &dyn Filesystem,
    engine_root: &Path,
) -> Result<EngineVersion, String> {
    let stamp = engine_root.join(BUILD_VERSION_FILE);
    if !filesystem.exists(&stamp) {
        return Err(format!("{} not found", stamp.display()));
    }
    let content = filesystem
        .read_to_string(&stamp)
        .map_err(|e| e.to_string())?;
    EngineVersion::from_build_version(&content).map_err(|e| e.to_string())
}

/// Service for engine association operations.
pub struct EngineService {
    registry: RegistryService,
    filesystem: Box<dyn Filesystem>,
}

impl EngineService {
    pub fn new(registry: RegistryService, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            registry,
            filesystem,
        }
    }

    /// Register or update an engine install.
    ///
    /// `path` must be an existing directory. A missing `Engine` folder or an
    /// unreadable version stamp only produce warnings.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn add(
        &self,
        name: &str,
        path: impl AsRef<Path>,
        is_default: bool,
    ) -> UepmResult<EngineReport> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let mut warnings = Vec::new();

        if !self.filesystem.is_dir(&path) {
            return Err(DomainError::invalid_input(
                "engine path",
                format!("'{}' is not an existing directory", path.display()),
            )
            .into());
        }

        if !self.filesystem.is_dir(&path.join("Engine")) {
            warn!("No Engine folder below the given path");
            warnings.push(format!(
                "'{}' has no Engine folder; is this an engine root?",
                path.display()
            ));
        }

        let version = match detect_engine_version(self.filesystem.as_ref(), &path) {
            Ok(version) => {
                debug!(%version, "Detected engine version");
                Some(version)
            }
            Err(reason) => {
                warn!(%reason, "Engine version unknown");
                warnings.push(format!("Engine version unknown: {reason}"));
                None
            }
        };

        let association = EngineAssociation::new(name, path)
            .with_version(version)
            .with_default(is_default);
        let outcome = self.registry.save_engine(association)?;

        // Re-read so the reported flag reflects the kept default.
        let association = self.registry.engine(name)?;
        info!(?outcome, default = association.is_default, "Engine registered");

        Ok(EngineReport {
            association,
            outcome,
            warnings,
        })
    }

    pub fn list(&self) -> UepmResult<EngineAssociations> {
        self.registry.engines()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::application::ports::{MockConfigStore, MockFilesystem};
    use crate::error::UepmError;

    /// A store mock that keeps the engine list in memory.
    fn engine_store(initial: EngineAssociations) -> MockConfigStore {
        let state = Arc::new(Mutex::new(initial));
        let mut store = MockConfigStore::new();

        let read = Arc::clone(&state);
        store
            .expect_load_engines()
            .returning(move || Ok(read.lock().unwrap().clone()));
        let write = Arc::clone(&state);
        store.expect_save_engines().returning(move |engines| {
            *write.lock().unwrap() = engines.clone();
            Ok(())
        });
        store
    }

    fn engine_tree(version_json: Option<&'static str>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists()
            .returning(move |p| p.ends_with(BUILD_VERSION_FILE) && version_json.is_some());
        fs.expect_read_to_string()
            .returning(move |_| Ok(version_json.unwrap_or_default().to_string()));
        fs
    }

    #[test]
    fn add_reads_version_stamp() {
        let json = r#"{"MajorVersion":5,"MinorVersion":3,"PatchVersion":2}"#;
        let service = EngineService::new(
            RegistryService::new(Box::new(engine_store(EngineAssociations::new()))),
            Box::new(engine_tree(Some(json))),
        );

        let report = service.add("ue5", "/opt/ue5", false).unwrap();

        assert_eq!(report.outcome, Upsert::Added);
        assert_eq!(report.association.version, Some(EngineVersion::new(5, 3, 2)));
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn add_without_stamp_warns_and_keeps_version_unknown() {
        let service = EngineService::new(
            RegistryService::new(Box::new(engine_store(EngineAssociations::new()))),
            Box::new(engine_tree(None)),
        );

        let report = service.add("ue5", "/opt/ue5", true).unwrap();

        assert_eq!(report.association.version, None);
        assert!(report.association.is_default);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn re_adding_keeps_previous_default_flag() {
        let existing: EngineAssociations =
            vec![EngineAssociation::new("ue5", "/old").with_default(true)].into();
        let service = EngineService::new(
            RegistryService::new(Box::new(engine_store(existing))),
            Box::new(engine_tree(None)),
        );

        let report = service.add("ue5", "/new", false).unwrap();

        assert_eq!(report.outcome, Upsert::Updated);
        assert_eq!(report.association.path, PathBuf::from("/new"));
        assert!(report.association.is_default);
    }

    #[test]
    fn add_rejects_missing_directory() {
        let mut store = MockConfigStore::new();
        store.expect_save_engines().never();
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);

        let service = EngineService::new(RegistryService::new(Box::new(store)), Box::new(fs));
        let err = service.add("ue5", "/nowhere", false).unwrap_err();

        assert!(matches!(err, UepmError::Domain(DomainError::InvalidInput { .. })));
    }
}
