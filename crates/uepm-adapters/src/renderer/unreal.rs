//! Expands the built-in templates into a [`ProjectStructure`].

use std::path::Path;

use tracing::{debug, instrument};
use uepm_core::{
    application::ports::ProjectRenderer,
    domain::{
        BuildTarget, DomainValidator as validator, LauncherKind, Permissions, ProjectLayout,
        ProjectStructure, RenderContext,
    },
    error::UepmResult,
};

use crate::builtin_templates;

/// Renderer for the fixed engine project layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrealRenderer;

impl UnrealRenderer {
    pub fn new() -> Self {
        Self
    }

    fn add_launchers(
        structure: &mut ProjectStructure,
        layout: &ProjectLayout,
        context: &RenderContext,
    ) {
        for kind in LauncherKind::ALL {
            structure.add_file(
                layout.launcher(kind),
                context.render(builtin_templates::launcher(kind)),
                Permissions::executable(),
            );
        }
    }
}

impl ProjectRenderer for UnrealRenderer {
    #[instrument(skip_all, fields(project = %context.project_name()))]
    fn render_project(
        &self,
        context: &RenderContext,
        root: &Path,
    ) -> UepmResult<ProjectStructure> {
        let layout = ProjectLayout::new(context.project_name());
        let mut structure = ProjectStructure::new(root);

        for dir in layout.directories() {
            structure.add_directory(dir);
        }

        for target in BuildTarget::ALL {
            let target_context = context
                .clone()
                .with_variable("TARGET_NAME", target.target_name(layout.name()))
                .with_variable("TARGET_TYPE", target.target_type());
            structure.add_file(
                layout.target_rules(target),
                target_context.render(builtin_templates::TARGET_RULES),
                Permissions::read_write(),
            );
        }

        for (path, template) in builtin_templates::source_files(&layout) {
            structure.add_file(path, context.render(template), Permissions::read_write());
        }

        Self::add_launchers(&mut structure, &layout, context);

        validator::validate_project_structure(&structure)?;
        debug!(files = structure.file_count(), "Rendered project");
        Ok(structure)
    }

    #[instrument(skip_all, fields(project = %context.project_name()))]
    fn render_launchers(
        &self,
        context: &RenderContext,
        root: &Path,
    ) -> UepmResult<ProjectStructure> {
        let layout = ProjectLayout::new(context.project_name());
        let mut structure = ProjectStructure::new(root);
        Self::add_launchers(&mut structure, &layout, context);

        validator::validate_project_structure(&structure)?;
        Ok(structure)
    }
}
