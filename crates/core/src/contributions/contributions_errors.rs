use thiserror::Error;

/// Errors raised while loading the contribution register.
///
/// Every variant is terminal for the load; none is retried. Individual bad
/// cells inside an otherwise valid row are not errors (they fall back to
/// zero or null during record building).
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Register file not found: {0}")]
    NotFound(String),

    #[error("Failed to read register file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Register file contains no data rows")]
    Empty,

    #[error("Register file needs at least 9 columns, found {found}")]
    InsufficientColumns { found: usize },

    #[error("No valid contribution rows found in register file")]
    NoValidRows,

    #[error("Failed to parse register file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Register cache lock poisoned: {0}")]
    Cache(String),
}
