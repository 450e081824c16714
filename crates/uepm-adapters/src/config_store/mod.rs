//! Registry record stores.

mod json;
mod memory;

pub use json::{ENGINES_FILE, GLOBAL_CONFIG_FILE, JsonConfigStore, PROJECTS_DIR, RECORD_SUFFIX};
pub use memory::MemoryConfigStore;
