pub mod common;
pub mod engine;
pub mod layout;
pub mod project_structure;
pub mod records;
pub mod render_context;

pub use engine::{EngineAssociation, EngineAssociations, Upsert};
pub use layout::ProjectLayout;
pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use records::{GlobalConfig, ProjectEntry, ProjectRecord};
pub use render_context::RenderContext;
