use thiserror::Error;

/// Main error type for Erdeval
#[derive(Error, Debug)]
pub enum ErdEvalError {
    /// The qrel and result mappings share no query id; nothing can be scored
    #[error("Query mismatch between qrel and result file: no query id in common")]
    QueryMismatch,

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Convenient Result type using ErdEvalError
pub type Result<T> = std::result::Result<T, ErdEvalError>;
