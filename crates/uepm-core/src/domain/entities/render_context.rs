//! Variables available to project templates.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::value_objects::EngineVersion;

/// Context for template rendering.
///
/// A **Value Object** containing all data needed to expand a template.
/// Built once per project; `render` only reads it.
///
/// ## Built-in Variables
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `PROJECT_NAME` | `Shooter` | User input / descriptor stem |
/// | `MODULE_NAME` | `ShooterCore` | Computed |
/// | `MODULE_API` | `SHOOTERCORE_API` | Computed |
/// | `ENGINE_PATH` | `C:\Epic\UE_5.3` | Global config or engine association |
/// | `ENGINE_ASSOCIATION` | `5.3` | Engine version, empty when unknown |
/// | `EDITOR_BINARY` | `UnrealEditor` | Engine version |
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(
        project_name: impl Into<String>,
        engine_path: &Path,
        engine_version: Option<EngineVersion>,
    ) -> Self {
        let name = project_name.into();
        let module = format!("{name}Core");
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert(
            "MODULE_API".to_string(),
            format!("{}_API", module.to_ascii_uppercase()),
        );
        vars.insert("MODULE_NAME".to_string(), module);
        vars.insert(
            "ENGINE_PATH".to_string(),
            engine_path
                .display()
                .to_string()
                .trim_end_matches(['/', '\\'])
                .to_string(),
        );
        vars.insert(
            "ENGINE_ASSOCIATION".to_string(),
            engine_version
                .map(|v| v.association_key())
                .unwrap_or_default(),
        );
        // Unknown versions are assumed to be engine 5 or later.
        let editor = match engine_version {
            Some(v) if !v.uses_unreal_editor_binaries() => "UE4Editor",
            _ => "UnrealEditor",
        };
        vars.insert("EDITOR_BINARY".to_string(), editor.to_string());

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Add a custom variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
