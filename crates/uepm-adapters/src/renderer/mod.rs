//! Template renderers.

mod unreal;

pub use unreal::UnrealRenderer;
