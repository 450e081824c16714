//! Fixed on-disk layout of an engine project.
//!
//! ```text
//! <root>/
//! ├── <name>.uproject
//! ├── Build.bat  Compile.bat  Cook.bat  Editor.bat
//! ├── Config/DefaultEngine.ini
//! └── Source/
//!     ├── <name>.Target.cs
//!     ├── <name>Editor.Target.cs
//!     └── <name>Core/
//!         ├── <name>Core.Build.cs
//!         ├── Public/{<name>Core.h, ActorTest.h}
//!         └── Private/{<name>Core.cpp, Log.h, Log.cpp, ActorTest.cpp}
//! ```
//!
//! All paths returned here are relative to the project root.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildTarget, LauncherKind};

/// File extension of a project descriptor.
pub const DESCRIPTOR_EXTENSION: &str = "uproject";

/// Where a standalone build puts the game executable.
const STANDALONE_BINARIES: &str = "Binaries/Win64";

/// Relative paths of every directory and file a project is made of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    name: String,
}

impl ProjectLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module_name(&self) -> String {
        format!("{}Core", self.name)
    }

    pub fn descriptor(&self) -> PathBuf {
        PathBuf::from(format!("{}.{DESCRIPTOR_EXTENSION}", self.name))
    }

    pub fn source_dir(&self) -> PathBuf {
        PathBuf::from("Source")
    }

    pub fn module_dir(&self) -> PathBuf {
        self.source_dir().join(self.module_name())
    }

    pub fn public_dir(&self) -> PathBuf {
        self.module_dir().join("Public")
    }

    pub fn private_dir(&self) -> PathBuf {
        self.module_dir().join("Private")
    }

    pub fn config_dir(&self) -> PathBuf {
        PathBuf::from("Config")
    }

    /// Directories in creation order, parents first.
    pub fn directories(&self) -> Vec<PathBuf> {
        vec![
            self.source_dir(),
            self.module_dir(),
            self.private_dir(),
            self.public_dir(),
            self.config_dir(),
        ]
    }

    pub fn target_rules(&self, target: BuildTarget) -> PathBuf {
        self.source_dir().join(target.file_name(&self.name))
    }

    pub fn module_rules(&self) -> PathBuf {
        self.module_dir()
            .join(format!("{}.Build.cs", self.module_name()))
    }

    pub fn module_header(&self) -> PathBuf {
        self.public_dir().join(format!("{}.h", self.module_name()))
    }

    pub fn module_source(&self) -> PathBuf {
        self.private_dir().join(format!("{}.cpp", self.module_name()))
    }

    pub fn actor_header(&self) -> PathBuf {
        self.public_dir().join("ActorTest.h")
    }

    pub fn actor_source(&self) -> PathBuf {
        self.private_dir().join("ActorTest.cpp")
    }

    pub fn log_header(&self) -> PathBuf {
        self.private_dir().join("Log.h")
    }

    pub fn log_source(&self) -> PathBuf {
        self.private_dir().join("Log.cpp")
    }

    pub fn engine_ini(&self) -> PathBuf {
        self.config_dir().join("DefaultEngine.ini")
    }

    pub fn launcher(&self, kind: LauncherKind) -> PathBuf {
        PathBuf::from(kind.file_name())
    }

    pub fn standalone_executable(&self) -> PathBuf {
        Path::new(STANDALONE_BINARIES).join(format!("{}.exe", self.name))
    }
}

/// Whether `path` names a project descriptor file.
pub fn is_descriptor(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DESCRIPTOR_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_paths_use_core_suffix() {
        let layout = ProjectLayout::new("Foo");
        assert_eq!(layout.module_dir(), Path::new("Source").join("FooCore"));
        assert_eq!(
            layout.module_rules(),
            Path::new("Source/FooCore/FooCore.Build.cs")
        );
        assert_eq!(
            layout.module_header(),
            Path::new("Source/FooCore/Public/FooCore.h")
        );
    }

    #[test]
    fn directories_list_parents_first() {
        let dirs = ProjectLayout::new("Foo").directories();
        let module = dirs.iter().position(|d| d.ends_with("FooCore")).unwrap();
        let private = dirs.iter().position(|d| d.ends_with("Private")).unwrap();
        assert!(module < private);
        assert_eq!(dirs.len(), 5);
    }

    #[test]
    fn descriptor_and_executable() {
        let layout = ProjectLayout::new("Foo");
        assert_eq!(layout.descriptor(), Path::new("Foo.uproject"));
        assert_eq!(
            layout.standalone_executable(),
            Path::new("Binaries/Win64/Foo.exe")
        );
    }

    #[test]
    fn descriptor_detection_is_extension_based() {
        assert!(is_descriptor(Path::new("/p/Foo.uproject")));
        assert!(is_descriptor(Path::new("Foo.UPROJECT")));
        assert!(!is_descriptor(Path::new("Foo.uproject.bak")));
        assert!(!is_descriptor(Path::new("uproject")));
    }
}
