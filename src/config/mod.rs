//! Configuration for reader behavior.
//!
//! This module provides [`ReaderConfig`], the explicit configuration value
//! a caller resolves once and hands to a reader at construction time. The
//! reader never consults ambient or global state for its defaults.
//!
//! # Example
//!
//! ```
//! use pagers::ReaderConfig;
//!
//! // Custom default chunk size
//! let config = ReaderConfig::new(250)?;
//!
//! // Builder pattern
//! let config = ReaderConfig::default().with_default_chunk_size(500);
//!
//! # Ok::<(), pagers::ReadError>(())
//! ```

use crate::error::ReadError;

/// Default number of records fetched per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Configuration for chunked reading behavior.
///
/// `ReaderConfig` carries the default chunk size applied to readers that
/// are constructed without an explicit one. The chunk size bounds the
/// reader's memory use: at most one chunk of records is ever resident.
///
/// # Constraints
///
/// The chunk size must be non-zero. A zero chunk size would make the
/// chunk addressing arithmetic (integer division by the chunk size)
/// undefined, so it is rejected at construction.
///
/// # Example
///
/// ```
/// use pagers::ReaderConfig;
///
/// // Use the default configuration
/// let config = ReaderConfig::default();
///
/// // Custom configuration
/// let config = ReaderConfig::new(250)?;
/// assert_eq!(config.default_chunk_size(), 250);
/// # Ok::<(), pagers::ReadError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReaderConfig {
    /// Number of records fetched per chunk.
    default_chunk_size: usize,
}

impl ReaderConfig {
    /// Creates a new configuration with the given default chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidConfig`] if `default_chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::ReaderConfig;
    ///
    /// let config = ReaderConfig::new(100)?;
    /// assert_eq!(config.default_chunk_size(), 100);
    /// # Ok::<(), pagers::ReadError>(())
    /// ```
    pub fn new(default_chunk_size: usize) -> Result<Self, ReadError> {
        if default_chunk_size == 0 {
            return Err(ReadError::InvalidConfig {
                message: "chunk size must be non-zero",
            });
        }

        Ok(Self { default_chunk_size })
    }

    /// Sets the default chunk size.
    ///
    /// Note: This does not validate the configuration. Use
    /// [`ReaderConfig::validate`] to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::ReaderConfig;
    ///
    /// let config = ReaderConfig::default().with_default_chunk_size(500);
    /// assert_eq!(config.default_chunk_size(), 500);
    /// ```
    pub fn with_default_chunk_size(mut self, size: usize) -> Self {
        self.default_chunk_size = size;
        self
    }

    /// Returns the default chunk size.
    pub fn default_chunk_size(&self) -> usize {
        self.default_chunk_size
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::ReaderConfig;
    ///
    /// let config = ReaderConfig::default().with_default_chunk_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ReadError> {
        Self::new(self.default_chunk_size).map(|_| ())
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            default_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
