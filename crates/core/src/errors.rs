//! Core error types for the fundlens tools.
//!
//! File-level failures halt the current operation and surface to the caller;
//! field-level parse failures never do (see the tolerant parsing helpers in
//! the contributions module).

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::contributions::LoadError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fundlens tools.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load contribution register: {0}")]
    Load(#[from] LoadError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Report export failed: {0}")]
    Report(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
