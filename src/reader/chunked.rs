//! Core chunked reader - lazy paged access over a record source.
//!
//! This module implements the chunked-access state machine. It provides
//! one main type:
//!
//! - [`ChunkedReader`] - iterates, indexes, counts and maps a paginated
//!   record set while holding a single chunk of records in memory
//!
//! # Example
//!
//! ```
//! use pagers::{ChunkedReader, Cursor, MemorySource};
//!
//! let source = MemorySource::new(vec!["a", "b", "c", "d", "e"]);
//! let reader = ChunkedReader::with_chunk_size(&source, 3)?;
//!
//! for record in reader.records() {
//!     println!("{}", record?);
//! }
//! # Ok::<(), pagers::ReadError>(())
//! ```

use std::fmt;

use log::trace;

use crate::chunk::Chunk;
use crate::config::ReaderConfig;
use crate::error::ReadError;
use crate::source::RecordSource;

use super::cursor::Cursor;
use super::iter::Records;

/// A lazy, randomly-addressable reader over a paginated record source.
///
/// `ChunkedReader` lets a consumer iterate, index, count and transform a
/// potentially large result set while fetching only one bounded page
/// ("chunk") of records into memory at a time. Whichever chunk covers the
/// requested position is loaded on demand, wholesale replacing the
/// previously loaded one; memory use is bounded by one chunk of records.
///
/// The reader borrows its source for its whole lifetime and never mutates
/// or closes it. It is a read-only view: positional writes are refused
/// with [`ReadError::ReadOnly`].
///
/// # Protocol
///
/// The reader implements the [`Cursor`](crate::Cursor) protocol
/// (`rewind` → `valid` → `current`/`key` → `advance`) as well as direct
/// random access via [`ChunkedReader::get`]. Before the first access the
/// reader is *unbooted*: no chunk is loaded and no fetch has happened.
/// Any access that needs records boots the reader by loading chunk 0.
///
/// End of sequence is discovered from chunk shape: only a chunk shorter
/// than the chunk size can terminate the sequence, so iterating a source
/// whose length is an exact multiple of the chunk size costs one extra,
/// empty page fetch.
///
/// # Concurrency
///
/// Every chunk load is a blocking round trip to the source. A reader is
/// single-threaded state; `&mut self` on all loading operations makes
/// unsynchronized sharing a compile error rather than a data race.
///
/// # Example
///
/// ```
/// use pagers::{ChunkedReader, MemorySource};
///
/// let source = MemorySource::new((0..10).collect::<Vec<i64>>());
/// let mut reader = ChunkedReader::with_chunk_size(&source, 4)?;
///
/// // Random access loads the covering chunk on demand.
/// assert_eq!(reader.get(7)?, Some(&7));
/// assert_eq!(reader.chunk_index(), Some(1));
///
/// // Positions past the end are absent, not errors.
/// assert_eq!(reader.get(42)?, None);
/// # Ok::<(), pagers::ReadError>(())
/// ```
pub struct ChunkedReader<'a, S: RecordSource> {
    source: &'a S,
    chunk_size: usize,
    /// `None` is the unbooted state: nothing fetched since construction
    /// or the last rewind.
    loaded: Option<Chunk<S::Record>>,
    /// Position within the loaded chunk. Global position is
    /// `chunk.start(chunk_size) + cursor`.
    cursor: usize,
}

impl<'a, S: RecordSource> ChunkedReader<'a, S> {
    /// Creates a reader over `source` with the default chunk size.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::{ChunkedReader, MemorySource, DEFAULT_CHUNK_SIZE};
    ///
    /// let source = MemorySource::new(vec![1, 2, 3]);
    /// let reader = ChunkedReader::new(&source);
    /// assert_eq!(reader.chunk_size(), DEFAULT_CHUNK_SIZE);
    /// ```
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            chunk_size: ReaderConfig::default().default_chunk_size(),
            loaded: None,
            cursor: 0,
        }
    }

    /// Creates a reader with the chunk size taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidConfig`] if the configured chunk size
    /// is zero.
    pub fn with_config(source: &'a S, config: ReaderConfig) -> Result<Self, ReadError> {
        config.validate()?;
        Ok(Self {
            source,
            chunk_size: config.default_chunk_size(),
            loaded: None,
            cursor: 0,
        })
    }

    /// Creates a reader with an explicit chunk size.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::InvalidConfig`] if `chunk_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::{ChunkedReader, MemorySource};
    ///
    /// let source = MemorySource::new(vec![1, 2, 3]);
    /// let reader = ChunkedReader::with_chunk_size(&source, 2)?;
    /// assert_eq!(reader.chunk_size(), 2);
    /// # Ok::<(), pagers::ReadError>(())
    /// ```
    pub fn with_chunk_size(source: &'a S, chunk_size: usize) -> Result<Self, ReadError> {
        Self::with_config(source, ReaderConfig::new(chunk_size)?)
    }

    /// Resets the reader to the unbooted state.
    ///
    /// Drops the loaded chunk and moves the position back to 0; the next
    /// access fetches chunk 0 again. Idempotent.
    pub fn rewind(&mut self) {
        self.loaded = None;
        self.cursor = 0;
    }

    /// Returns false exactly when the end of the source has been reached.
    ///
    /// Boots when called on a fresh or rewound reader: whether a source
    /// is empty cannot be known without fetching its first page. An empty
    /// source is invalid after exactly that one fetch.
    pub fn valid(&mut self) -> Result<bool, ReadError> {
        self.boot_if_unbooted()?;
        Ok(!self.reached_end())
    }

    /// Returns the record at the current position, or `None` past the
    /// end, booting and loading chunks as needed.
    pub fn current(&mut self) -> Result<Option<&S::Record>, ReadError> {
        let position = self.key();
        self.get(position)
    }

    /// Returns the current global position.
    ///
    /// Never fetches; before the first access the position is 0.
    pub fn key(&self) -> u64 {
        let chunk_start = self
            .loaded
            .as_ref()
            .map_or(0, |chunk| chunk.start(self.chunk_size));
        chunk_start + self.cursor as u64
    }

    /// Moves one position forward.
    ///
    /// Boots when no chunk has been loaded yet (the first step lands on
    /// position 0, not 1); loads the next chunk when the step would cross
    /// the chunk boundary; otherwise bumps the cursor in place. Once the
    /// end has been reached, advancing is a no-op.
    pub fn advance(&mut self) -> Result<(), ReadError> {
        if self.loaded.is_none() {
            return self.load_next_chunk();
        }
        if self.reached_end() {
            return Ok(());
        }
        if self.cursor + 1 == self.chunk_size {
            self.load_next_chunk()
        } else {
            self.cursor += 1;
            Ok(())
        }
    }

    /// Returns the record at global `position`, loading its covering
    /// chunk on demand.
    ///
    /// Random access repositions the reader: loading a different chunk
    /// resets the in-chunk cursor to that chunk's first record. Positions
    /// past the end of the source yield `None`, not an error.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::{ChunkedReader, MemorySource};
    ///
    /// let source = MemorySource::new(vec!["a", "b", "c", "d", "e"]);
    /// let mut reader = ChunkedReader::with_chunk_size(&source, 3)?;
    ///
    /// assert_eq!(reader.get(3)?, Some(&"d"));
    /// assert_eq!(reader.get(10)?, None);
    /// # Ok::<(), pagers::ReadError>(())
    /// ```
    pub fn get(&mut self, position: u64) -> Result<Option<&S::Record>, ReadError> {
        self.boot_if_unbooted()?;

        let target = position / self.chunk_size as u64;
        self.load_chunk(target)?;

        let offset = (position % self.chunk_size as u64) as usize;
        Ok(self.loaded.as_ref().and_then(|chunk| chunk.get(offset)))
    }

    /// Returns the record at `position`, or `default` when the position
    /// falls past the end of the source.
    pub fn get_or<'r>(
        &'r mut self,
        position: u64,
        default: &'r S::Record,
    ) -> Result<&'r S::Record, ReadError> {
        Ok(self.get(position)?.unwrap_or(default))
    }

    /// Reports whether `position` lies in the visited span of the loaded
    /// chunk.
    ///
    /// The span is bounded by the cursor, not by the chunk length:
    /// positions in the loaded chunk that the cursor has not passed yet
    /// report false. Always false on an unbooted reader.
    pub fn is_loaded(&self, position: u64) -> bool {
        match &self.loaded {
            Some(chunk) => {
                let start = chunk.start(self.chunk_size);
                position >= start && position <= start + self.cursor as u64
            }
            None => false,
        }
    }

    /// Returns the loaded chunk, booting if nothing is loaded yet.
    pub fn chunk(&mut self) -> Result<&Chunk<S::Record>, ReadError> {
        self.boot_if_unbooted()?;
        Ok(self
            .loaded
            .as_ref()
            .expect("reader holds a chunk once booted"))
    }

    /// Returns the index of the loaded chunk, `None` before the first
    /// load.
    pub fn chunk_index(&self) -> Option<u64> {
        self.loaded.as_ref().map(Chunk::index)
    }

    /// Returns the chunk size fixed at construction.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the total number of records in the source.
    ///
    /// Always a fresh query against the source, never cached.
    pub fn count(&self) -> Result<u64, ReadError> {
        self.source.total_count()
    }

    /// Returns every record of the source at once, bypassing chunking.
    pub fn all(&self) -> Result<Vec<S::Record>, ReadError> {
        self.source.all()
    }

    /// Alias for [`ChunkedReader::all`].
    pub fn to_vec(&self) -> Result<Vec<S::Record>, ReadError> {
        self.all()
    }

    /// Returns the first record of the source.
    pub fn first(&self) -> Result<Option<S::Record>, ReadError> {
        self.source.first(&[])
    }

    /// Returns the first record with only `columns` selected.
    pub fn first_columns(&self, columns: &[&str]) -> Result<Option<S::Record>, ReadError> {
        self.source.first(columns)
    }

    /// Indexed existence check.
    ///
    /// True when the position has been visited in the loaded chunk, or
    /// when it lies within the source's total count.
    pub fn contains(&self, position: u64) -> Result<bool, ReadError> {
        Ok(self.is_loaded(position) || position < self.count()?)
    }

    /// Rejects an indexed write: the reader is a read-only view.
    ///
    /// Always returns [`ReadError::ReadOnly`] and leaves the loaded chunk
    /// and cursor untouched.
    pub fn set(&mut self, position: u64, _record: S::Record) -> Result<(), ReadError> {
        Err(ReadError::ReadOnly {
            operation: "set",
            position,
        })
    }

    /// Rejects an indexed delete: the reader is a read-only view.
    ///
    /// Always returns [`ReadError::ReadOnly`] and leaves the loaded chunk
    /// and cursor untouched.
    pub fn remove(&mut self, position: u64) -> Result<(), ReadError> {
        Err(ReadError::ReadOnly {
            operation: "remove",
            position,
        })
    }

    /// End detection: only a short (or empty) final chunk terminates the
    /// sequence. A full chunk says nothing about what follows; the next
    /// load discovers whether the source is exhausted.
    fn reached_end(&self) -> bool {
        match &self.loaded {
            Some(chunk) => chunk.len() < self.chunk_size && self.cursor >= chunk.len(),
            None => false,
        }
    }

    /// Loads chunk `index`, a no-op when that chunk is already loaded.
    ///
    /// State is only touched after a successful fetch: a failed page
    /// fetch leaves the previously loaded chunk and cursor intact.
    fn load_chunk(&mut self, index: u64) -> Result<(), ReadError> {
        let already_loaded = matches!(&self.loaded, Some(chunk) if chunk.index() == index);
        if already_loaded {
            return Ok(());
        }

        // The source speaks 1-based pages.
        let records = self.source.page(index + 1, self.chunk_size)?;
        trace!(
            "loaded chunk {} ({} records, page size {})",
            index,
            records.len(),
            self.chunk_size
        );

        self.loaded = Some(Chunk::new(index, records));
        self.cursor = 0;
        Ok(())
    }

    /// Loads the chunk after the loaded one, or chunk 0 when unbooted.
    fn load_next_chunk(&mut self) -> Result<(), ReadError> {
        let next = self.loaded.as_ref().map_or(0, |chunk| chunk.index() + 1);
        self.load_chunk(next)
    }

    /// Boots (loads chunk 0) when nothing has been loaded yet.
    fn boot_if_unbooted(&mut self) -> Result<(), ReadError> {
        if self.loaded.is_none() {
            self.load_next_chunk()
        } else {
            Ok(())
        }
    }
}

impl<S: RecordSource> fmt::Debug for ChunkedReader<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkedReader")
            .field("chunk_size", &self.chunk_size)
            .field("chunk_index", &self.chunk_index())
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl<S> Cursor for ChunkedReader<'_, S>
where
    S: RecordSource,
    S::Record: Clone,
{
    type Item = S::Record;

    fn rewind(&mut self) {
        ChunkedReader::rewind(self);
    }

    fn valid(&mut self) -> Result<bool, ReadError> {
        ChunkedReader::valid(self)
    }

    fn current(&mut self) -> Result<Option<S::Record>, ReadError> {
        Ok(ChunkedReader::current(self)?.cloned())
    }

    fn key(&self) -> u64 {
        ChunkedReader::key(self)
    }

    fn advance(&mut self) -> Result<(), ReadError> {
        ChunkedReader::advance(self)
    }
}

impl<'a, S> IntoIterator for ChunkedReader<'a, S>
where
    S: RecordSource,
    S::Record: Clone,
{
    type Item = Result<S::Record, ReadError>;
    type IntoIter = Records<Self>;

    fn into_iter(self) -> Self::IntoIter {
        self.records()
    }
}
