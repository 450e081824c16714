//! Project Service - verbs that act on a registered project.
//!
//! Launching scripts, running the standalone build, opening the folder and
//! removing the registry entry.

use std::path::PathBuf;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProcessOutcome, ProcessRequest, ProcessRunner},
        services::RegistryService,
    },
    domain::{LauncherKind, ProjectLayout, ProjectRecord},
    error::UepmResult,
};

/// Outcome of [`ProjectService::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub record: ProjectRecord,
    /// The project directory was already gone when the record was removed.
    pub directory_missing: bool,
}

pub struct ProjectService {
    registry: RegistryService,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ProcessRunner>,
}

impl ProjectService {
    pub fn new(
        registry: RegistryService,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ProcessRunner>,
    ) -> Self {
        Self {
            registry,
            filesystem,
            runner,
        }
    }

    pub fn resolve(&self, name: &str) -> UepmResult<ProjectRecord> {
        self.registry.resolve(name)
    }

    /// Run one of the generated launcher scripts and wait for it.
    ///
    /// Output is streamed by the runner. A non-zero exit is an error.
    #[instrument(skip(self))]
    pub fn launch(&self, name: &str, kind: LauncherKind) -> UepmResult<ProcessOutcome> {
        let record = self.registry.resolve(name)?;
        let script = record
            .project_dir
            .join(ProjectLayout::new(&record.name).launcher(kind));

        if !self.filesystem.exists(&script) {
            return Err(ApplicationError::LauncherMissing { path: script }.into());
        }

        let request = ProcessRequest::Script { path: script };
        info!(%request, "Launching");
        let outcome = self.runner.run(&request)?;

        if !outcome.success() {
            return Err(ApplicationError::ProcessFailed {
                program: request.program_name(),
                exit_code: outcome.exit_code,
            }
            .into());
        }

        Ok(outcome)
    }

    /// Start the standalone build detached.
    ///
    /// Fails with `CompileFirst`, starting nothing, when it was never built.
    #[instrument(skip(self))]
    pub fn run_standalone(&self, name: &str) -> UepmResult<PathBuf> {
        let record = self.registry.resolve(name)?;
        let executable = record
            .project_dir
            .join(ProjectLayout::new(&record.name).standalone_executable());

        if !self.filesystem.exists(&executable) {
            return Err(ApplicationError::CompileFirst { executable }.into());
        }

        self.runner.spawn(&ProcessRequest::Executable {
            path: executable.clone(),
        })?;
        info!(path = %executable.display(), "Standalone build started");
        Ok(executable)
    }

    /// Show the project directory in the platform file browser.
    #[instrument(skip(self))]
    pub fn open_folder(&self, name: &str) -> UepmResult<PathBuf> {
        let record = self.registry.resolve(name)?;

        if !self.filesystem.is_dir(&record.project_dir) {
            return Err(ApplicationError::FilesystemError {
                path: record.project_dir,
                reason: "project directory no longer exists".into(),
            }
            .into());
        }

        self.runner.spawn(&ProcessRequest::OpenDirectory {
            path: record.project_dir.clone(),
        })?;
        Ok(record.project_dir)
    }

    /// Remove the registry entry. Project files are never touched.
    #[instrument(skip(self))]
    pub fn delete(&self, name: &str) -> UepmResult<DeleteReport> {
        let record = self.registry.resolve(name)?;
        let directory_missing = !self.filesystem.is_dir(&record.project_dir);
        if directory_missing {
            warn!(dir = %record.project_dir.display(), "Project directory is already gone");
        }

        self.registry.unregister(&record.name)?;

        Ok(DeleteReport {
            record,
            directory_missing,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mockall::predicate::*;

    use super::*;
    use crate::application::ports::{MockConfigStore, MockFilesystem, MockProcessRunner};

    fn store_with_foo() -> MockConfigStore {
        let mut store = MockConfigStore::new();
        store.expect_project_exists().returning(|n| n == "Foo");
        store
            .expect_load_project()
            .returning(|_| Ok(ProjectRecord::new("Foo", "/p/Foo")));
        store
    }

    #[test]
    fn run_before_build_is_compile_first_and_spawns_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/p/Foo/Binaries/Win64/Foo.exe")))
            .returning(|_| false);
        let mut runner = MockProcessRunner::new();
        runner.expect_spawn().never();
        runner.expect_run().never();

        let service = ProjectService::new(
            RegistryService::new(Box::new(store_with_foo())),
            Box::new(fs),
            Box::new(runner),
        );

        let err = service.run_standalone("Foo").unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::CompileFirst { .. })
        ));
    }

    #[test]
    fn run_spawns_built_executable() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        let mut runner = MockProcessRunner::new();
        runner
            .expect_spawn()
            .withf(|r| matches!(r, ProcessRequest::Executable { .. }))
            .times(1)
            .returning(|_| Ok(()));

        let service = ProjectService::new(
            RegistryService::new(Box::new(store_with_foo())),
            Box::new(fs),
            Box::new(runner),
        );

        let exe = service.run_standalone("Foo").unwrap();
        assert!(exe.ends_with("Binaries/Win64/Foo.exe"));
    }

    #[test]
    fn launch_reports_non_zero_exit() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|r| r.path() == Path::new("/p/Foo/Cook.bat"))
            .returning(|_| {
                Ok(ProcessOutcome {
                    exit_code: Some(25),
                    output: String::new(),
                })
            });

        let service = ProjectService::new(
            RegistryService::new(Box::new(store_with_foo())),
            Box::new(fs),
            Box::new(runner),
        );

        let err = service.launch("Foo", LauncherKind::Cook).unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::ProcessFailed { program, exit_code: Some(25) }) if program == "Cook.bat"
        ));
    }

    #[test]
    fn launch_with_missing_script_runs_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        let mut runner = MockProcessRunner::new();
        runner.expect_run().never();

        let service = ProjectService::new(
            RegistryService::new(Box::new(store_with_foo())),
            Box::new(fs),
            Box::new(runner),
        );

        let err = service.launch("Foo", LauncherKind::Build).unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::LauncherMissing { .. })
        ));
    }

    #[test]
    fn delete_proceeds_when_directory_is_gone() {
        let mut store = store_with_foo();
        store
            .expect_delete_project()
            .with(eq("Foo"))
            .times(1)
            .returning(|_| Ok(()));
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);

        let service = ProjectService::new(
            RegistryService::new(Box::new(store)),
            Box::new(fs),
            Box::new(MockProcessRunner::new()),
        );

        let report = service.delete("Foo").unwrap();
        assert!(report.directory_missing);
        assert_eq!(report.record.name, "Foo");
    }

    #[test]
    fn unknown_project_is_not_found() {
        let service = ProjectService::new(
            RegistryService::new(Box::new(store_with_foo())),
            Box::new(MockFilesystem::new()),
            Box::new(MockProcessRunner::new()),
        );

        assert!(service.open_folder("Bar").is_err());
    }
}
