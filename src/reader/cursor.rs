//! External-iteration protocol for lazily loaded sequences.

use crate::error::ReadError;

use super::iter::Records;
use super::mapped::MappedReader;

/// External-iteration protocol over a lazily loaded sequence.
///
/// A cursor is driven through `rewind` → `valid` → `current`/`key` →
/// `advance`, repeated until `valid` reports the end. Implementors may
/// fetch data inside `valid`, `current` and `advance` (which is why those
/// take `&mut self` and return `Result`); `rewind` and `key` never touch
/// the underlying source.
///
/// The trait also carries the combinators: [`Cursor::map`] layers a
/// transform over any cursor, and [`Cursor::records`] adapts any cursor
/// into a standard iterator. Wrappers hold their inner cursor by value,
/// so combinator chains of arbitrary depth compose without inheritance.
pub trait Cursor {
    /// The value produced at each position.
    type Item;

    /// Resets the cursor to the pre-boot state.
    ///
    /// The next access starts the sequence over from position 0.
    /// Idempotent.
    fn rewind(&mut self);

    /// Returns false exactly when the end of the sequence has been
    /// reached.
    ///
    /// May fetch from the underlying source: end-of-sequence on an empty
    /// source cannot be discovered without at least one fetch.
    fn valid(&mut self) -> Result<bool, ReadError>;

    /// Returns the value at the current position, or `None` past the end.
    fn current(&mut self) -> Result<Option<Self::Item>, ReadError>;

    /// Returns the current global position.
    fn key(&self) -> u64;

    /// Moves one position forward, fetching as needed.
    fn advance(&mut self) -> Result<(), ReadError>;

    /// Returns a cursor that applies `transform` to every value.
    ///
    /// Navigation is delegated to `self` untouched; only the value
    /// produced by `current` is decorated. The transform is re-applied on
    /// every `current` call and its result is never cached, so it should
    /// be pure. Mapped cursors nest: the outermost transform runs last.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::{ChunkedReader, Cursor, MemorySource};
    ///
    /// let source = MemorySource::new(vec![1_i64, 2, 3]);
    /// let doubled = ChunkedReader::new(&source).map(|n| n * 2);
    ///
    /// let values: Result<Vec<_>, _> = doubled.records().collect();
    /// assert_eq!(values?, vec![2, 4, 6]);
    /// # Ok::<(), pagers::ReadError>(())
    /// ```
    fn map<F, T>(self, transform: F) -> MappedReader<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> T,
    {
        MappedReader::new(self, transform)
    }

    /// Adapts this cursor into a standard iterator over every value.
    ///
    /// The iterator rewinds before the first value and yields
    /// `Result<Item, ReadError>`; it fuses after the end or the first
    /// error.
    ///
    /// # Example
    ///
    /// ```
    /// use pagers::{ChunkedReader, Cursor, MemorySource};
    ///
    /// let source = MemorySource::new(vec!["a", "b", "c"]);
    /// let reader = ChunkedReader::with_chunk_size(&source, 2)?;
    ///
    /// let records: Result<Vec<_>, _> = reader.records().collect();
    /// assert_eq!(records?, vec!["a", "b", "c"]);
    /// # Ok::<(), pagers::ReadError>(())
    /// ```
    fn records(self) -> Records<Self>
    where
        Self: Sized,
    {
        Records::new(self)
    }
}
