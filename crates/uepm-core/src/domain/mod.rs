// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for uepm.
//!
//! This module contains pure business logic: registry records, the engine
//! association aggregate, the fixed project layout and validation rules.
//! All I/O (record files, project trees, external processes) is reached
//! through the ports defined in the application layer.
//!
//! - **No async**: the tool runs one verb to completion and exits
//! - **No I/O**: no filesystem, process or console calls
//! - **Immutable records**: all domain objects are Clone + PartialEq
pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    DirectoryToCreate, EngineAssociation, EngineAssociations, FileToWrite, FsEntry, GlobalConfig,
    ProjectEntry, ProjectLayout, ProjectRecord, ProjectStructure, RenderContext, Upsert,
    common::Permissions,
    layout::{DESCRIPTOR_EXTENSION, is_descriptor},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{BuildTarget, EngineVersion, LauncherKind, ProjectName};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // ========================================================================
    // Cross-entity Tests
    // ========================================================================

    #[test]
    fn new_project_record_points_below_projects_root() {
        let cfg = GlobalConfig::new("C:\\Engine", "/work/projects");
        let name = ProjectName::parse("Foo").unwrap();
        let record = ProjectRecord::new(name.as_str(), cfg.project_dir(name.as_str()));

        assert!(DomainValidator::validate_project_record(&record).is_ok());
        assert!(record.project_dir.starts_with(cfg.projects_root()));
        assert!(record.project_dir.ends_with("Foo"));
    }

    #[test]
    fn layout_module_matches_project_name_module() {
        let name = ProjectName::parse("Shooter").unwrap();
        let layout = ProjectLayout::new(name.as_str());
        assert_eq!(layout.module_name(), name.module_name());
    }

    #[test]
    fn context_and_layout_agree_on_module_name() {
        let ctx = RenderContext::new("Shooter", Path::new("/engine"), None);
        let layout = ProjectLayout::new("Shooter");
        assert_eq!(ctx.get("MODULE_NAME"), Some(layout.module_name().as_str()));
    }

    #[test]
    fn validation_errors_are_user_errors() {
        let err = ProjectName::parse("").unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }
}
