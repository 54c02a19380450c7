//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    /// Schema file missing or not valid schema JSON
    #[error("CONFIG/{0}")]
    Configuration(String),

    /// Input file missing or not valid JSON
    #[error("PARSE/{0}")]
    InputParse(String),

    /// Input is valid JSON but violates the input schema
    #[error("VALIDATE_IN/{0}")]
    InputValidation(String),

    /// Freshly produced report violates the output schema.
    /// This is an internal-consistency bug, not a user error.
    #[error("VALIDATE_OUT/{0}")]
    OutputValidation(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),

    /// Report could not be written to the requested destination
    #[error("IO/{0}")]
    Io(String),
}
