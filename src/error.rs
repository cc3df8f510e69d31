//! Error types for matriz operations.
//!
//! Provides explicit failure reporting for dimension mismatches and
//! text-format parsing.

use std::fmt;

/// Main error type for matriz operations.
///
/// Dimension checks are always on: an operation invoked with mismatched
/// shapes returns [`Error::DimensionMismatch`] instead of reading out of
/// bounds, in release builds as well as debug builds.
///
/// # Examples
///
/// ```
/// use matriz::error::Error;
///
/// let err = Error::DimensionMismatch {
///     expected: "3 rows".to_string(),
///     actual: "2 rows".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum Error {
    /// Matrix dimensions don't match the operation's precondition.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Malformed or truncated text-format input.
    Parse {
        /// What went wrong
        message: String,
    },

    /// I/O error from the stream read/write forms.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            Error::Parse { message } => write!(f, "matrix parse error: {message}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl Error {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = Error::dimension_mismatch("2x3", "2x2");
        assert_eq!(
            err.to_string(),
            "matrix dimension mismatch: expected 2x3, got 2x2"
        );
    }

    #[test]
    fn test_parse_display() {
        let err = Error::parse("missing column count in header");
        assert_eq!(
            err.to_string(),
            "matrix parse error: missing column count in header"
        );
    }

    #[test]
    fn test_io_source() {
        use std::error::Error as _;
        let err = Error::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("boom"));
    }
}
