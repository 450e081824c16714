//! Domain value objects: ProjectName, EngineVersion, LauncherKind, BuildTarget.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! Parsing is the only place validation happens; once a `ProjectName`
//! exists it is known to be usable as a file stem and a C++ identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated project name.
///
/// The name becomes the descriptor file stem, the game target name and the
/// prefix of the core module (`<name>Core`), so it must be a valid C++
/// identifier: an ASCII letter followed by letters, digits or underscores.
/// Linked projects are checked against the same rules using their
/// descriptor's file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let name = raw.into();
        let invalid = |reason: &str| DomainError::InvalidProjectName {
            name: name.clone(),
            reason: reason.into(),
        };

        let Some(first) = name.chars().next() else {
            return Err(invalid("name cannot be empty"));
        };
        if !first.is_ascii_alphabetic() {
            return Err(invalid("name must start with a letter"));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(invalid(&format!("character '{bad}' is not allowed")));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the primary game module, e.g. `ShooterCore`.
    pub fn module_name(&self) -> String {
        format!("{}Core", self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── EngineVersion ─────────────────────────────────────────────────────────────

/// Semantic version of an engine installation.
///
/// Persisted as a `major.minor.patch` string. Parsing also accepts the
/// short `major.minor` form used by engine association keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EngineVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

/// Shape of `Engine/Build/Build.version` inside an engine installation.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct BuildVersionFile {
    major_version: u32,
    minor_version: u32,
    #[serde(default)]
    patch_version: u32,
}

impl EngineVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse the JSON content of an engine's `Build.version` file.
    pub fn from_build_version(json: &str) -> Result<Self, DomainError> {
        let file: BuildVersionFile =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidEngineVersion {
                value: "Build.version".into(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(
            file.major_version,
            file.minor_version,
            file.patch_version,
        ))
    }

    pub const fn major(&self) -> u32 {
        self.major
    }

    pub const fn minor(&self) -> u32 {
        self.minor
    }

    pub const fn patch(&self) -> u32 {
        self.patch
    }

    /// Key written to the `EngineAssociation` field of a project descriptor.
    pub fn association_key(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// Engine 5 renamed the editor binaries from `UE4Editor*` to `UnrealEditor*`.
    pub const fn uses_unreal_editor_binaries(&self) -> bool {
        self.major >= 5
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for EngineVersion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidEngineVersion {
            value: s.into(),
            reason: reason.into(),
        };

        let parts: Vec<&str> = s.trim().split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid("expected major.minor or major.minor.patch"));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| invalid(&format!("'{part}' is not a number")))?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}

impl TryFrom<String> for EngineVersion {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EngineVersion> for String {
    fn from(version: EngineVersion) -> Self {
        version.to_string()
    }
}

// ── LauncherKind ──────────────────────────────────────────────────────────────

/// The four generated launcher scripts that wrap the engine toolchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LauncherKind {
    Build,
    Compile,
    Cook,
    Editor,
}

impl LauncherKind {
    pub const ALL: [LauncherKind; 4] = [Self::Build, Self::Compile, Self::Cook, Self::Editor];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "Build",
            Self::Compile => "Compile",
            Self::Cook => "Cook",
            Self::Editor => "Editor",
        }
    }

    /// File name of the script inside the project root.
    pub fn file_name(&self) -> String {
        format!("{}.bat", self.as_str())
    }

    /// What the script does, for progress messages.
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Build => "building editor binaries",
            Self::Compile => "compiling standalone game",
            Self::Cook => "cooking content",
            Self::Editor => "launching editor",
        }
    }
}

impl fmt::Display for LauncherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── BuildTarget ───────────────────────────────────────────────────────────────

/// Build-target descriptor variants generated for every new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTarget {
    Game,
    Editor,
}

impl BuildTarget {
    pub const ALL: [BuildTarget; 2] = [Self::Game, Self::Editor];

    /// `TargetType` value written into the descriptor.
    pub const fn target_type(&self) -> &'static str {
        match self {
            Self::Game => "Game",
            Self::Editor => "Editor",
        }
    }

    /// Target name for a project, e.g. `Shooter` / `ShooterEditor`.
    pub fn target_name(&self, project: &str) -> String {
        match self {
            Self::Game => project.to_string(),
            Self::Editor => format!("{project}Editor"),
        }
    }

    pub fn file_name(&self, project: &str) -> String {
        format!("{}.Target.cs", self.target_name(project))
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_name_accepts_identifiers() {
        for name in ["Foo", "MyGame", "Shooter_01", "a"] {
            assert!(ProjectName::parse(name).is_ok(), "rejected {name}");
        }
    }

    #[test]
    fn project_name_rejects_bad_input() {
        for name in ["", "1Game", "_Game", "My Game", "my-game", "Bad\"Name", "a/b"] {
            assert!(
                matches!(
                    ProjectName::parse(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted {name}"
            );
        }
    }

    #[test]
    fn module_name_appends_core() {
        let name = ProjectName::parse("Shooter").unwrap();
        assert_eq!(name.module_name(), "ShooterCore");
    }

    #[test]
    fn engine_version_parses_short_and_long_forms() {
        assert_eq!("5.3".parse::<EngineVersion>().unwrap(), EngineVersion::new(5, 3, 0));
        assert_eq!(
            "4.27.2".parse::<EngineVersion>().unwrap(),
            EngineVersion::new(4, 27, 2)
        );
        assert!("5".parse::<EngineVersion>().is_err());
        assert!("5.x".parse::<EngineVersion>().is_err());
        assert!("5.3.1.9".parse::<EngineVersion>().is_err());
    }

    #[test]
    fn engine_version_reads_build_version_file() {
        let json = r#"{
            "MajorVersion": 5,
            "MinorVersion": 4,
            "PatchVersion": 1,
            "Changelist": 0,
            "BranchName": "++UE5+Release-5.4"
        }"#;
        let version = EngineVersion::from_build_version(json).unwrap();
        assert_eq!(version, EngineVersion::new(5, 4, 1));
        assert_eq!(version.association_key(), "5.4");
        assert!(version.uses_unreal_editor_binaries());
    }

    #[test]
    fn engine_version_serializes_as_string() {
        let json = serde_json::to_string(&EngineVersion::new(4, 27, 2)).unwrap();
        assert_eq!(json, "\"4.27.2\"");
        let back: EngineVersion = serde_json::from_str(&json).unwrap();
        assert!(!back.uses_unreal_editor_binaries());
    }

    #[test]
    fn launcher_file_names() {
        let names: Vec<String> = LauncherKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names, ["Build.bat", "Compile.bat", "Cook.bat", "Editor.bat"]);
    }

    #[test]
    fn build_target_file_names() {
        assert_eq!(BuildTarget::Game.file_name("Foo"), "Foo.Target.cs");
        assert_eq!(BuildTarget::Editor.file_name("Foo"), "FooEditor.Target.cs");
    }
}
