//! Application layer for uepm.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (registry, engines, scaffolding, launching)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DeleteReport, EngineReport, EngineService, LinkReport, ProjectService, RegistryService,
    ScaffoldOptions, ScaffoldPlan, ScaffoldReport, ScaffoldService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{
    ConfigStore, Filesystem, ProcessOutcome, ProcessRequest, ProcessRunner, ProjectRenderer,
};

pub use error::{ApplicationError, RecordKind};
