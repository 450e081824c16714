//! Integration tests for the `uepm` binary against a throwaway registry.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temporary registry plus a projects folder next to it.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
        }
    }

    fn app_dir(&self) -> PathBuf {
        self.root.path().join("registry")
    }

    fn projects_dir(&self) -> PathBuf {
        self.root.path().join("Projects")
    }

    fn path(&self, rel: &str) -> PathBuf {
        self.root.path().join(rel)
    }

    fn uepm(&self) -> Command {
        let mut cmd = uepm();
        cmd.env_remove("UEPM_APP_DIR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--app-dir")
            .arg(self.app_dir());
        cmd
    }

    fn configured() -> Self {
        let sandbox = Self::new();
        fs::create_dir_all(sandbox.projects_dir()).unwrap();
        sandbox
            .uepm()
            .args(["config", "--engine-path"])
            .arg(sandbox.path("UE_5.3"))
            .arg("--projects-dir")
            .arg(sandbox.projects_dir())
            .assert()
            .success();
        sandbox
    }

    fn new_project(&self, name: &str) {
        self.uepm()
            .args(["new", "--name", name, "--skip-build"])
            .assert()
            .success();
    }
}

fn uepm() -> Command {
    Command::cargo_bin("uepm").unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn help_lists_the_verbs() {
    uepm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("link"))
        .stdout(predicate::str::contains("engines"))
        .stdout(predicate::str::contains("--app-dir"));
}

#[test]
fn version_flag() {
    uepm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_without_config_is_a_configuration_error() {
    let sandbox = Sandbox::new();

    sandbox
        .uepm()
        .args(["new", "--name", "Foo", "--skip-build"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("uepm config"));

    assert!(!sandbox.projects_dir().join("Foo").exists());
}

#[test]
fn config_flags_are_stored_and_shown() {
    let sandbox = Sandbox::configured();

    assert!(sandbox.app_dir().join("UnrealSettuper.config.json").is_file());
    sandbox
        .uepm()
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(arg(&sandbox.projects_dir())));
}

#[test]
fn relative_config_paths_are_stored_absolute() {
    let sandbox = Sandbox::new();

    sandbox
        .uepm()
        .current_dir(sandbox.root.path())
        .args(["config", "--engine-path", "UE_5.3", "--projects-dir", "Projects"])
        .assert()
        .success();

    let stored = fs::read_to_string(sandbox.app_dir().join("UnrealSettuper.config.json")).unwrap();
    let config: serde_json::Value = serde_json::from_str(&stored).unwrap();
    for key in ["UnrealDir", "ProjectsDir"] {
        let path = Path::new(config[key].as_str().unwrap());
        assert!(path.is_absolute(), "{key} stored as {}", path.display());
    }
    assert!(Path::new(config["ProjectsDir"].as_str().unwrap()).ends_with("Projects"));
}

#[test]
fn new_into_missing_projects_folder_is_a_configuration_error() {
    let sandbox = Sandbox::new();
    sandbox
        .uepm()
        .args(["config", "--engine-path"])
        .arg(sandbox.path("UE_5.3"))
        .arg("--projects-dir")
        .arg(sandbox.projects_dir())
        .assert()
        .success();

    sandbox
        .uepm()
        .args(["new", "--name", "Foo", "--skip-build"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("projects folder does not exist"));

    assert!(!sandbox.projects_dir().exists());
}

#[test]
fn project_names_cannot_escape_the_registry() {
    let sandbox = Sandbox::configured();

    sandbox
        .uepm()
        .args(["open", "--name", "../UnrealSettuper"])
        .assert()
        .code(2);
}

#[test]
fn quoted_config_path_is_rejected() {
    let sandbox = Sandbox::new();

    sandbox
        .uepm()
        .args(["config", "--engine-path", "\"C:\\UE\"", "--projects-dir"])
        .arg(sandbox.projects_dir())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("quote"));

    assert!(!sandbox.app_dir().join("UnrealSettuper.config.json").exists());
}

#[test]
fn new_project_is_written_and_listed() {
    let sandbox = Sandbox::configured();
    sandbox.new_project("Foo");

    let root = sandbox.projects_dir().join("Foo");
    assert!(root.join("Foo.uproject").is_file());
    assert!(root.join("Build.bat").is_file());
    assert!(root.join("Source").join("FooCore").join("Public").is_dir());
    assert!(sandbox.app_dir().join("Projects").join("Foo.config.json").is_file());

    sandbox
        .uepm()
        .args(["list", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1\tFoo\t"));
}

#[test]
fn second_new_with_same_name_is_rejected() {
    let sandbox = Sandbox::configured();
    sandbox.new_project("Foo");

    sandbox
        .uepm()
        .args(["new", "--name", "Foo", "--skip-build"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already registered"));
}

#[test]
fn dry_run_writes_nothing() {
    let sandbox = Sandbox::configured();

    sandbox
        .uepm()
        .args(["new", "--name", "Foo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Foo.uproject"));

    assert!(!sandbox.projects_dir().join("Foo").exists());
    assert!(!sandbox.app_dir().join("Projects").join("Foo.config.json").exists());
}

#[test]
fn run_before_compile_asks_to_compile_first() {
    let sandbox = Sandbox::configured();
    sandbox.new_project("Foo");

    sandbox
        .uepm()
        .args(["run", "--name", "Foo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("compile"));
}

#[test]
fn unknown_project_is_not_found() {
    let sandbox = Sandbox::configured();

    sandbox
        .uepm()
        .args(["open", "--name", "Nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("There is no project named 'Nope'"));
}

#[test]
fn delete_with_yes_keeps_the_project_folder() {
    let sandbox = Sandbox::configured();
    sandbox.new_project("x");

    sandbox
        .uepm()
        .args(["delete", "--name", "x", "--yes"])
        .assert()
        .success();

    assert!(sandbox.projects_dir().join("x").is_dir());
    sandbox
        .uepm()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn declined_delete_keeps_the_record() {
    let sandbox = Sandbox::configured();
    sandbox.new_project("Foo");

    sandbox
        .uepm()
        .args(["delete", "--name", "Foo"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cancelled"));

    assert!(sandbox.app_dir().join("Projects").join("Foo.config.json").is_file());
}

#[test]
fn link_without_descriptor_fails() {
    let sandbox = Sandbox::configured();
    let dir = sandbox.path("Loose");
    fs::create_dir_all(&dir).unwrap();

    sandbox
        .uepm()
        .args(["link", "--path"])
        .arg(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains(".uproject"));
}

#[test]
fn link_registers_and_generates_launchers() {
    let sandbox = Sandbox::configured();
    let dir = sandbox.path("Game");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("Game.uproject"), "{}").unwrap();

    sandbox
        .uepm()
        .args(["link", "--path"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked 'Game'"));

    assert!(dir.join("Build.bat").is_file());
    assert!(dir.join("Cook.bat").is_file());
    assert!(sandbox.app_dir().join("Projects").join("Game.config.json").is_file());
}

#[test]
fn added_engine_is_listed_as_default() {
    let sandbox = Sandbox::new();
    let engine = sandbox.path("UE_5.3");
    fs::create_dir_all(engine.join("Engine").join("Build")).unwrap();
    fs::write(
        engine.join("Engine").join("Build").join("Build.version"),
        r#"{"MajorVersion":5,"MinorVersion":3,"PatchVersion":2}"#,
    )
    .unwrap();

    sandbox
        .uepm()
        .args(["add", "ue53"])
        .arg(&engine)
        .arg("--isDefault")
        .assert()
        .success()
        .stdout(predicate::str::contains("5.3.2"));

    let listing = sandbox
        .uepm()
        .args(["engines", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let engines: serde_json::Value = serde_json::from_slice(&listing).unwrap();
    assert_eq!(engines[0]["Name"], "ue53");
    assert_eq!(engines[0]["IsDefault"], true);
    assert_eq!(engines[0]["Version"], "5.3.2");
}

#[test]
fn add_rejects_missing_engine_folder() {
    let sandbox = Sandbox::new();

    sandbox
        .uepm()
        .args(["add", "ghost"])
        .arg(sandbox.path("nowhere"))
        .assert()
        .code(2);
}

#[test]
fn completions_mention_the_binary() {
    uepm()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("uepm"));
}
