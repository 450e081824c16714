//! uepm Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for uepm, the
//! Unreal Engine project manager, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             uepm-cli (CLI)              │
//! │      (one handler per verb)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Registry, Engine, Scaffold, Project)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (ConfigStore, Filesystem, Renderer,     │
//! │  ProcessRunner)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     uepm-adapters (Infrastructure)      │
//! │ (JsonConfigStore, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (records, ProjectLayout, RenderContext) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uepm_core::application::{RegistryService, ScaffoldOptions, ScaffoldService};
//! # fn adapters() -> (
//! #     Box<dyn uepm_core::application::ConfigStore>,
//! #     Box<dyn uepm_core::application::ProjectRenderer>,
//! #     Box<dyn uepm_core::application::Filesystem>,
//! #     Box<dyn uepm_core::application::ProcessRunner>,
//! # ) { unimplemented!() }
//!
//! let (store, renderer, filesystem, runner) = adapters();
//! let service = ScaffoldService::new(RegistryService::new(store), renderer, filesystem, runner);
//! let report = service.create_project("Shooter", &ScaffoldOptions::default()).unwrap();
//! println!("created {}", report.record.project_dir.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        EngineService, ProjectService, RegistryService, ScaffoldOptions, ScaffoldService,
        ports::{ConfigStore, Filesystem, ProcessRequest, ProcessRunner, ProjectRenderer},
    };
    pub use crate::domain::{
        EngineAssociation, EngineVersion, GlobalConfig, LauncherKind, ProjectEntry,
        ProjectLayout, ProjectName, ProjectRecord, ProjectStructure, RenderContext,
    };
    pub use crate::error::{UepmError, UepmResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
