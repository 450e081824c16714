//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `uepm-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ConfigStore`: Registry record persistence
//!   - `Filesystem`: Project tree operations
//!   - `ProjectRenderer`: Template expansion
//!   - `ProcessRunner`: External scripts, executables and the file browser
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    ConfigStore, Filesystem, ProcessOutcome, ProcessRequest, ProcessRunner, ProjectRenderer,
};

#[cfg(test)]
pub use output::{MockConfigStore, MockFilesystem, MockProcessRunner, MockProjectRenderer};
