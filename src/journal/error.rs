//! Journal error types

use thiserror::Error;

/// Errors raised while loading or looking up journal entries
#[derive(Error, Debug)]
pub enum JournalError {
    /// Reading an entries file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Entries JSON was malformed
    #[error("Parse error: {0}")]
    Parse(String),

    /// No entry with this 1-based number
    #[error("Entry not found: {0}")]
    EntryNotFound(usize),
}

impl From<serde_json::Error> for JournalError {
    fn from(err: serde_json::Error) -> Self {
        JournalError::Parse(err.to_string())
    }
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JournalError::EntryNotFound(11);
        assert_eq!(err.to_string(), "Entry not found: 11");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: JournalError = io_err.into();
        assert!(matches!(err, JournalError::Io(_)));
    }
}
