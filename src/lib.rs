//! pagers
//!
//! Lazy, chunked reading of paginated record sources.
//!
//! `pagers` turns any paged record store into a randomly-addressable,
//! iterable sequence that holds a single page ("chunk") of records in
//! memory at a time, re-fetching pages on demand as access patterns
//! require. It is designed as a small, composable primitive for:
//!
//! - walking large query results without materializing them
//! - exports and batch jobs over paginated APIs or stores
//! - random access into ordered result sets by global position
//!
//! The crate intentionally:
//! - does NOT cache beyond the currently loaded chunk
//! - does NOT write through to the source (the view is read-only)
//! - does NOT prefetch upcoming chunks
//! - does NOT synchronize concurrent use of one reader
//!
//! It only does one thing: **paged records in → lazy sequence out**
//!
//! # Iterating
//!
//! ```
//! use pagers::{ChunkedReader, Cursor, MemorySource};
//!
//! fn main() -> Result<(), pagers::ReadError> {
//!     let source = MemorySource::new((0..10).collect::<Vec<i64>>());
//!     let reader = ChunkedReader::with_chunk_size(&source, 3)?;
//!
//!     for record in reader.records() {
//!         println!("{}", record?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Random access
//!
//! ```
//! use pagers::{ChunkedReader, MemorySource};
//!
//! # fn main() -> Result<(), pagers::ReadError> {
//! let source = MemorySource::new(vec!["a", "b", "c", "d", "e"]);
//! let mut reader = ChunkedReader::with_chunk_size(&source, 2)?;
//!
//! // Loads the chunk covering position 3, replacing whatever was loaded.
//! assert_eq!(reader.get(3)?, Some(&"d"));
//!
//! // Past the end is absent, not an error.
//! assert_eq!(reader.get(10)?, None);
//! # Ok(())
//! # }
//! ```
//!
//! # Mapping
//!
//! ```
//! use pagers::{ChunkedReader, Cursor, MemorySource};
//!
//! # fn main() -> Result<(), pagers::ReadError> {
//! let source = MemorySource::new(vec!["a", "b", "c"]);
//! let upper = ChunkedReader::new(&source).map(str::to_uppercase);
//!
//! let records: Result<Vec<_>, _> = upper.records().collect();
//! assert_eq!(records?, vec!["A", "B", "C"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod config;
mod error;
mod reader;
mod source;

//
// Public surface (intentionally tiny)
//

pub use chunk::Chunk;
pub use config::{DEFAULT_CHUNK_SIZE, ReaderConfig};
pub use error::ReadError;
pub use reader::{ChunkedReader, Cursor, MappedReader, Records};
pub use source::{MemorySource, RecordSource};
