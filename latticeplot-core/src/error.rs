//! Error types for latticeplot

use thiserror::Error;

/// Main error type for latticeplot operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    
    #[error("Encoding error: {0}")]
    Encode(String),
}

impl Error {
    /// Shorthand for a parse failure on a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse { line, message: message.into() }
    }
}

/// Result type alias for latticeplot operations
pub type Result<T> = std::result::Result<T, Error>;
