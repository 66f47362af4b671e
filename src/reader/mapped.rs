//! Lazy mapping view over a cursor.

use crate::error::ReadError;

use super::cursor::Cursor;

/// A cursor that applies a transform to every value of an inner cursor.
///
/// `MappedReader` forwards all navigational state to the cursor it wraps:
/// it holds no position of its own and triggers no loads beyond the inner
/// cursor's. Only the value produced by `current` is decorated, and the
/// transformed value is recomputed on every call rather than cached, so
/// the transform should be pure and cheap (or at least idempotent).
///
/// Because `MappedReader` itself implements [`Cursor`], mapping views
/// nest to arbitrary depth; the outermost transform is applied last, to
/// the result of the inner transforms.
///
/// # Example
///
/// ```
/// use pagers::{ChunkedReader, Cursor, MappedReader, MemorySource};
///
/// let source = MemorySource::new(vec!["a", "b", "c"]);
/// let reader = ChunkedReader::with_chunk_size(&source, 2)?;
/// let upper = MappedReader::new(reader, str::to_uppercase);
///
/// let records: Result<Vec<_>, _> = upper.records().collect();
/// assert_eq!(records?, vec!["A", "B", "C"]);
/// # Ok::<(), pagers::ReadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MappedReader<C, F> {
    inner: C,
    transform: F,
}

impl<C, F> MappedReader<C, F> {
    /// Wraps `inner`, decorating every value it produces with
    /// `transform`.
    ///
    /// Equivalent to [`Cursor::map`].
    pub fn new(inner: C, transform: F) -> Self {
        Self { inner, transform }
    }

    /// Returns a reference to the wrapped cursor.
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Consumes the view and returns the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C, F, T> Cursor for MappedReader<C, F>
where
    C: Cursor,
    F: FnMut(C::Item) -> T,
{
    type Item = T;

    fn rewind(&mut self) {
        self.inner.rewind();
    }

    fn valid(&mut self) -> Result<bool, ReadError> {
        self.inner.valid()
    }

    fn current(&mut self) -> Result<Option<T>, ReadError> {
        Ok(self.inner.current()?.map(&mut self.transform))
    }

    fn key(&self) -> u64 {
        self.inner.key()
    }

    fn advance(&mut self) -> Result<(), ReadError> {
        self.inner.advance()
    }
}
