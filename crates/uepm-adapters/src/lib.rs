//! Infrastructure adapters for uepm.
//!
//! This crate implements the ports defined in `uepm-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod config_store;
pub mod filesystem;
pub mod process;
pub mod renderer;

// Re-export commonly used adapters
pub use config_store::{JsonConfigStore, MemoryConfigStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{Invocation, RecordingProcessRunner, SystemProcessRunner};
pub use renderer::UnrealRenderer;
