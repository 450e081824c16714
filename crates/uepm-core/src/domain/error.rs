// ============================================================================
// domain/error.rs - VALIDATION ERRORS FOR RECORDS AND BLUEPRINTS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the CLI renders them after the service has returned)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// User-supplied text that cannot be accepted as-is (quotes in a path,
    /// an unreadable confirmation answer, ...).
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid engine version '{value}': {reason}")]
    InvalidEngineVersion { value: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Blueprint Errors
    // ========================================================================
    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Shorthand for [`DomainError::InvalidInput`].
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { field, .. } if field.contains("path") => vec![
                "Enter paths without surrounding quotes".into(),
                "Paths with spaces are fine as long as they are not quoted".into(),
            ],
            Self::InvalidInput { field, .. } if *field == "confirmation" => {
                vec!["Answer with 'yes' or 'no' (or just 'y' / 'n')".into()]
            }
            Self::InvalidProjectName { .. } => vec![
                "Start the name with a letter".into(),
                "Use only letters, digits and underscores".into(),
                "Examples: MyGame, Shooter_01, Sandbox".into(),
            ],
            Self::InvalidEngineVersion { .. } => vec![
                "Versions look like 5.3 or 5.3.2".into(),
                "Check Engine/Build/Build.version inside the engine folder".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("'{field}' must not be empty"),
                "Run: uepm config".into(),
            ],
            _ => vec!["This looks like a bug in the project blueprint, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. }
            | Self::InvalidProjectName { .. }
            | Self::InvalidEngineVersion { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
