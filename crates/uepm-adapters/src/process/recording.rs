//! Process runner that records requests instead of starting anything.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use uepm_core::{
    application::{
        ApplicationError,
        ports::{ProcessOutcome, ProcessRequest, ProcessRunner},
    },
    error::UepmResult,
};

/// How a request reached the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(ProcessRequest),
    Spawn(ProcessRequest),
}

/// Fake [`ProcessRunner`] for tests. Clones share the same log.
///
/// Every `run` succeeds with exit code 0 unless an exit code was set for
/// the program's file name.
#[derive(Debug, Clone, Default)]
pub struct RecordingProcessRunner {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    invocations: Vec<Invocation>,
    exit_codes: HashMap<String, i32>,
}

impl RecordingProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `run` of `program` (e.g. `Build.bat`) exit with `code`.
    pub fn with_exit_code(self, program: impl Into<String>, code: i32) -> Self {
        self.set_exit_code(program, code);
        self
    }

    pub fn set_exit_code(&self, program: impl Into<String>, code: i32) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.exit_codes.insert(program.into(), code);
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner
            .lock()
            .map(|inner| inner.invocations.clone())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations().is_empty()
    }
}

impl ProcessRunner for RecordingProcessRunner {
    fn run(&self, request: &ProcessRequest) -> UepmResult<ProcessOutcome> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.invocations.push(Invocation::Run(request.clone()));

        let code = inner
            .exit_codes
            .get(&request.program_name())
            .copied()
            .unwrap_or(0);
        Ok(ProcessOutcome {
            exit_code: Some(code),
            output: format!("{}\n", request.program_name()),
        })
    }

    fn spawn(&self, request: &ProcessRequest) -> UepmResult<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.invocations.push(Invocation::Spawn(request.clone()));
        Ok(())
    }
}
