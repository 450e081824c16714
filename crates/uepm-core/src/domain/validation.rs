use crate::domain::{
    entities::{EngineAssociation, GlobalConfig, ProjectRecord, ProjectStructure},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_global_config(config: &GlobalConfig) -> Result<(), DomainError> {
        config.validate()
    }

    pub fn validate_project_record(record: &ProjectRecord) -> Result<(), DomainError> {
        record.validate()
    }

    pub fn validate_engine(association: &EngineAssociation) -> Result<(), DomainError> {
        association.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }

    /// Interpret a yes/no answer.
    ///
    /// Anything starting with `y` confirms, anything starting with `n`
    /// declines; every other answer is rejected.
    pub fn parse_confirmation(answer: &str) -> Result<bool, DomainError> {
        let answer = answer.trim().to_ascii_lowercase();
        if answer.starts_with('y') {
            Ok(true)
        } else if answer.starts_with('n') {
            Ok(false)
        } else {
            Err(DomainError::invalid_input(
                "confirmation",
                format!("expected yes or no, got '{answer}'"),
            ))
        }
    }
}
