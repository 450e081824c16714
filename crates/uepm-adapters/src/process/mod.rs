//! External process adapters.

mod recording;
mod system;

pub use recording::{Invocation, RecordingProcessRunner};
pub use system::SystemProcessRunner;
