//! Error types for pagers.

use std::fmt;

/// Errors that can occur while reading from a paginated record source.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying record source failed to produce a result.
    ///
    /// Source failures are propagated unchanged; the reader performs no
    /// retries and leaves its own state untouched.
    Source(Box<dyn std::error::Error + Send + Sync>),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// An attempted write through a read-only view.
    ReadOnly {
        /// The rejected operation.
        operation: &'static str,
        /// The position the write was aimed at.
        position: u64,
    },
}

impl ReadError {
    /// Wraps a source-side failure.
    pub fn source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ReadError::Source(Box::new(err))
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Source(e) => write!(f, "record source error: {}", e),
            ReadError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
            ReadError::ReadOnly {
                operation,
                position,
            } => {
                write!(
                    f,
                    "cannot {} position {} on a read-only reader",
                    operation, position
                )
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Source(e) => Some(&**e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        ReadError::Source(Box::new(e))
    }
}
