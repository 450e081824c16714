//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a project" or "run the cook script".

pub mod engine_service;
pub mod project_service;
pub mod registry_service;
pub mod scaffold_service;

pub use engine_service::{BUILD_VERSION_FILE, EngineReport, EngineService, detect_engine_version};
pub use project_service::{DeleteReport, ProjectService};
pub use registry_service::RegistryService;
pub use scaffold_service::{
    LinkReport, ScaffoldOptions, ScaffoldPlan, ScaffoldReport, ScaffoldService,
};
