//! Process runner backed by `std::process`.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};
use uepm_core::{
    application::{
        ApplicationError,
        ports::{ProcessOutcome, ProcessRequest, ProcessRunner},
    },
    error::{UepmError, UepmResult},
};

/// Production [`ProcessRunner`].
///
/// Launcher scripts go through `cmd /C` on Windows and `sh` elsewhere.
/// Blocking runs echo the child's stdout line by line while capturing it;
/// stderr is inherited.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(request: &ProcessRequest) -> Command {
        match request {
            ProcessRequest::Script { path } => {
                let mut cmd = script_command(path);
                if let Some(dir) = path.parent() {
                    cmd.current_dir(dir);
                }
                cmd
            }
            ProcessRequest::Executable { path } => {
                let mut cmd = Command::new(path);
                if let Some(dir) = path.parent() {
                    cmd.current_dir(dir);
                }
                cmd
            }
            ProcessRequest::OpenDirectory { path } => {
                let mut cmd = Command::new(file_browser());
                cmd.arg(path);
                cmd
            }
        }
    }
}

#[cfg(windows)]
fn script_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(path);
    cmd
}

#[cfg(not(windows))]
fn script_command(path: &Path) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg(path);
    cmd
}

fn file_browser() -> &'static str {
    if cfg!(windows) {
        "explorer.exe"
    } else if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

fn launch_error(request: &ProcessRequest, e: impl std::fmt::Display) -> UepmError {
    ApplicationError::ProcessLaunch {
        program: request.program_name(),
        reason: e.to_string(),
    }
    .into()
}

impl ProcessRunner for SystemProcessRunner {
    #[instrument(skip(self), fields(request = %request))]
    fn run(&self, request: &ProcessRequest) -> UepmResult<ProcessOutcome> {
        let mut child = Self::command(request)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| launch_error(request, e))?;

        let mut output = String::new();
        if let Some(stdout) = child.stdout.take() {
            let mut echo = std::io::stdout().lock();
            for line in BufReader::new(stdout).lines() {
                let line = line.map_err(|e| launch_error(request, e))?;
                // Echo failures (closed pipe) must not abort the child.
                let _ = writeln!(echo, "{line}");
                output.push_str(&line);
                output.push('\n');
            }
        }

        let status = child.wait().map_err(|e| launch_error(request, e))?;
        debug!(code = ?status.code(), "Process exited");

        Ok(ProcessOutcome {
            exit_code: status.code(),
            output,
        })
    }

    #[instrument(skip(self), fields(request = %request))]
    fn spawn(&self, request: &ProcessRequest) -> UepmResult<()> {
        let child = Self::command(request)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| launch_error(request, e))?;
        debug!(pid = child.id(), "Process detached");
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn run_captures_output_and_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("Build.bat");
        std::fs::write(&script, "echo building\nexit 3\n").unwrap();

        let outcome = SystemProcessRunner::new()
            .run(&ProcessRequest::Script { path: script })
            .unwrap();

        assert_eq!(outcome.exit_code, Some(3));
        assert_eq!(outcome.output, "building\n");
        assert!(!outcome.success());
    }

    #[test]
    fn missing_executable_is_launch_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SystemProcessRunner::new()
            .spawn(&ProcessRequest::Executable {
                path: dir.path().join("Game.exe"),
            })
            .unwrap_err();
        assert!(matches!(
            err.as_application(),
            Some(ApplicationError::ProcessLaunch { program, .. }) if program == "Game.exe"
        ));
    }
}
