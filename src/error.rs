//! Error types for Afinidad operations.
//!
//! Errors arise only at the I/O boundary (loading and saving tabular
//! ratings data). The similarity engine itself resolves every degenerate
//! input to a defined numeric fallback and never fails.

use std::fmt;

/// Main error type for Afinidad operations.
///
/// # Examples
///
/// ```
/// use afinidad::error::AfinidadError;
///
/// let err = AfinidadError::CsvParse {
///     line: 3,
///     message: "invalid rating 'abc'".to_string(),
/// };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug)]
pub enum AfinidadError {
    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Malformed row or cell in a tabular ratings file.
    CsvParse {
        /// 1-based line number in the source file
        line: usize,
        /// What went wrong
        message: String,
    },

    /// A requested column is missing from a tabular file header.
    MissingColumn {
        /// Column name that was expected
        column: String,
        /// What was actually available
        hint: String,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AfinidadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AfinidadError::Io(e) => write!(f, "I/O error: {e}"),
            AfinidadError::CsvParse { line, message } => {
                write!(f, "CSV parse error at line {line}: {message}")
            }
            AfinidadError::MissingColumn { column, hint } => {
                write!(f, "Missing column '{column}': {hint}")
            }
            AfinidadError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AfinidadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AfinidadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AfinidadError {
    fn from(err: std::io::Error) -> Self {
        AfinidadError::Io(err)
    }
}

impl From<&str> for AfinidadError {
    fn from(msg: &str) -> Self {
        AfinidadError::Other(msg.to_string())
    }
}

impl From<String> for AfinidadError {
    fn from(msg: String) -> Self {
        AfinidadError::Other(msg)
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AfinidadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_parse_display() {
        let err = AfinidadError::CsvParse {
            line: 7,
            message: "expected a number, got 'five'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("'five'"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = AfinidadError::MissingColumn {
            column: "Sam".to_string(),
            hint: "available: movie, William, Julia".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'Sam'"));
        assert!(msg.contains("William"));
    }

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AfinidadError::Io(io_err);
        let msg = err.to_string();
        assert!(msg.contains("I/O error") || msg.contains("file not found"));
    }

    #[test]
    fn test_from_str() {
        let err: AfinidadError = "test error".into();
        assert!(matches!(err, AfinidadError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: AfinidadError = "test error".to_string().into();
        assert!(matches!(err, AfinidadError::Other(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: AfinidadError = io_err.into();
        assert!(matches!(err, AfinidadError::Io(_)));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AfinidadError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = AfinidadError::Other("test".to_string());
        assert!(err.source().is_none());
    }
}
