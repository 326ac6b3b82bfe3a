//! Error types for the clinic core.

use thiserror::Error;

use crate::validate::ValidationReport;

/// Errors that can occur in clinic operations.
#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Invalid appointment: {0}")]
    Validation(ValidationReport),

    #[error("Invalid month '{0}'. Expected YYYY-MM")]
    InvalidMonth(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for clinic operations.
pub type ClinicResult<T> = Result<T, ClinicError>;
