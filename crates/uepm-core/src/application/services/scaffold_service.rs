//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the two ways a project enters the registry:
//!
//! - `create_project`: render the built-in templates into a fresh directory,
//!   register it, run the initial build and open the editor
//! - `link_project`: adopt an existing project folder, generating launcher
//!   scripts only when they are missing
//!
//! Every precondition is checked before the first filesystem write.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProcessOutcome, ProcessRequest, ProcessRunner, ProjectRenderer},
        services::{RegistryService, engine_service::detect_engine_version},
    },
    domain::{
        DomainValidator as validator, EngineVersion, FsEntry, LauncherKind, ProjectLayout,
        ProjectName, ProjectRecord, ProjectStructure, RenderContext, is_descriptor,
    },
    error::UepmResult,
};

/// Knobs for [`ScaffoldService::create_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Registered engine whose path the launcher scripts should use.
    /// `None` means the global engine path.
    pub engine: Option<String>,
    /// Run `Build.bat` once the tree is written.
    pub initial_build: bool,
    /// Start `Editor.bat` detached afterwards.
    pub open_editor: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            engine: None,
            initial_build: true,
            open_editor: true,
        }
    }
}

/// Everything `create_project` would do, computed without side effects.
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub record: ProjectRecord,
    pub structure: ProjectStructure,
    /// Engine root the launcher scripts point at.
    pub engine_path: PathBuf,
}

/// Outcome of [`ScaffoldService::create_project`].
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    pub record: ProjectRecord,
    pub files_written: usize,
    /// `None` when the initial build was skipped.
    pub build: Option<ProcessOutcome>,
    pub editor_launched: bool,
}

/// Outcome of [`ScaffoldService::link_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
    pub record: ProjectRecord,
    pub descriptor: PathBuf,
    /// Whether launcher scripts had to be written.
    pub generated_launchers: bool,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    registry: RegistryService,
    renderer: Box<dyn ProjectRenderer>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        registry: RegistryService,
        renderer: Box<dyn ProjectRenderer>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            registry,
            renderer,
            filesystem,
            runner,
        }
    }

    /// Validate a new project and render its tree without writing anything.
    ///
    /// Fails with `DuplicateName` when the name is registered, with
    /// `ConfigMissingOrInvalid` when the projects folder is missing and with
    /// `AlreadyExists` when the target directory is present, in that order.
    #[instrument(skip(self, options), fields(engine = ?options.engine))]
    pub fn plan(&self, name: &str, options: &ScaffoldOptions) -> UepmResult<ScaffoldPlan> {
        let name = ProjectName::parse(name)?;
        let config = self.registry.global_config()?;

        if self.registry.project_exists(name.as_str()) {
            return Err(ApplicationError::DuplicateName {
                name: name.into_string(),
            }
            .into());
        }

        if !self.filesystem.is_dir(config.projects_root()) {
            return Err(ApplicationError::ConfigMissingOrInvalid {
                path: config.projects_root().to_path_buf(),
                reason: "the projects folder does not exist".into(),
            }
            .into());
        }

        let root = config.project_dir(name.as_str());
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::AlreadyExists { path: root }.into());
        }

        let (engine_path, version) = match &options.engine {
            Some(engine) => {
                let association = self.registry.engine(engine)?;
                (association.path, association.version)
            }
            None => {
                let path = config.engine_path().to_path_buf();
                let version = self.detect_version(&path);
                (path, version)
            }
        };

        let context = RenderContext::new(name.as_str(), &engine_path, version);
        let structure = self.renderer.render_project(&context, &root)?;
        validator::validate_project_structure(&structure)?;

        debug!(
            files = structure.file_count(),
            directories = structure.directory_count(),
            "Project rendered"
        );

        Ok(ScaffoldPlan {
            record: ProjectRecord::new(name.into_string(), root),
            structure,
            engine_path,
        })
    }

    /// Create, register, build and open a new project.
    ///
    /// A failure while writing leaves whatever was already written in place.
    #[instrument(skip(self, options))]
    pub fn create_project(&self, name: &str, options: &ScaffoldOptions) -> UepmResult<ScaffoldReport> {
        let plan = self.plan(name, options)?;
        info!(dir = %plan.record.project_dir.display(), "Creating project");

        if let Err(e) = self.write_structure(&plan.structure) {
            warn!(
                error = %e,
                path = %plan.structure.root().display(),
                "Write failed; partially created files were left in place"
            );
            return Err(e);
        }

        self.registry.register(&plan.record)?;

        let layout = ProjectLayout::new(&plan.record.name);
        let root = &plan.record.project_dir;

        let build = if options.initial_build {
            let request = ProcessRequest::Script {
                path: root.join(layout.launcher(LauncherKind::Build)),
            };
            info!("Running initial build");
            let outcome = self.runner.run(&request)?;
            if !outcome.success() {
                warn!(exit_code = ?outcome.exit_code, "Initial build failed");
            }
            Some(outcome)
        } else {
            None
        };

        // Opened whatever the build outcome.
        let editor_launched = options.open_editor;
        if editor_launched {
            self.runner.spawn(&ProcessRequest::Script {
                path: root.join(layout.launcher(LauncherKind::Editor)),
            })?;
            info!("Editor launched");
        }

        Ok(ScaffoldReport {
            files_written: plan.structure.file_count(),
            record: plan.record,
            build,
            editor_launched,
        })
    }

    /// Register an existing project folder.
    ///
    /// The name comes from the descriptor's file stem. Launcher scripts are
    /// written only when `Build.bat` is missing.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn link_project(&self, path: impl AsRef<Path>) -> UepmResult<LinkReport> {
        let path = path.as_ref();
        let config = self.registry.global_config()?;

        let descriptor = self.find_descriptor(path)?;
        let stem = descriptor
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = ProjectName::parse(stem)?;

        if self.registry.project_exists(name.as_str()) {
            return Err(ApplicationError::DuplicateName {
                name: name.into_string(),
            }
            .into());
        }

        let layout = ProjectLayout::new(name.as_str());
        let generated_launchers = !self
            .filesystem
            .exists(&path.join(layout.launcher(LauncherKind::Build)));

        if generated_launchers {
            let engine_path = config.engine_path();
            let context =
                RenderContext::new(name.as_str(), engine_path, self.detect_version(engine_path));
            let launchers = self.renderer.render_launchers(&context, path)?;
            self.write_structure(&launchers)?;
            info!(count = launchers.file_count(), "Launcher scripts generated");
        } else {
            debug!("Launcher scripts already present");
        }

        let record = ProjectRecord::new(name.into_string(), path);
        self.registry.register(&record)?;

        Ok(LinkReport {
            record,
            descriptor,
            generated_launchers,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn find_descriptor(&self, dir: &Path) -> UepmResult<PathBuf> {
        let not_found = || ApplicationError::NoProjectFileFound {
            path: dir.to_path_buf(),
        };

        if !self.filesystem.is_dir(dir) {
            return Err(not_found().into());
        }

        let mut descriptors: Vec<PathBuf> = self
            .filesystem
            .list_files(dir)?
            .into_iter()
            .filter(|p| is_descriptor(p))
            .collect();
        descriptors.sort();

        if descriptors.len() > 1 {
            warn!(
                count = descriptors.len(),
                using = %descriptors[0].display(),
                "Several project descriptors found"
            );
        }

        descriptors.into_iter().next().ok_or_else(|| not_found().into())
    }

    fn detect_version(&self, engine_path: &Path) -> Option<EngineVersion> {
        detect_engine_version(self.filesystem.as_ref(), engine_path)
            .inspect_err(|reason| debug!(%reason, "Engine version unknown"))
            .ok()
    }

    /// Write every entry below the structure root. No rollback.
    fn write_structure(&self, structure: &ProjectStructure) -> UepmResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }
}
