/// Error types for the job finder content
use thiserror::Error;

/// Main error type for catalog lookups and fixture parsing
#[derive(Error, Debug)]
pub enum ContentError {
    /// Sector id is not part of the catalog
    #[error("Sector not found: {0}")]
    UnknownSector(String),

    /// Anchor is not one of the page sections
    #[error("Section anchor not found: {0}")]
    UnknownAnchor(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Type alias for Results using ContentError
pub type Result<T> = std::result::Result<T, ContentError>;
