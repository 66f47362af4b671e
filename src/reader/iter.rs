//! Iterator adapter for cursors.

use crate::error::ReadError;

use super::cursor::Cursor;

/// An iterator that drives a [`Cursor`] through its full sequence.
///
/// `Records` rewinds the cursor before the first value and then walks the
/// protocol (`valid` → `current` → `advance`), yielding
/// `Result<Item, ReadError>` so that source failures surface mid-stream
/// instead of being swallowed. The iterator is fused: after the end or
/// the first error it keeps returning `None`.
///
/// # Example
///
/// ```
/// use pagers::{ChunkedReader, Cursor, MemorySource};
///
/// let source = MemorySource::new((0..5).collect::<Vec<i64>>());
/// let reader = ChunkedReader::with_chunk_size(&source, 2)?;
///
/// let records: Result<Vec<_>, _> = reader.records().collect();
/// assert_eq!(records?, vec![0, 1, 2, 3, 4]);
/// # Ok::<(), pagers::ReadError>(())
/// ```
#[derive(Debug)]
pub struct Records<C> {
    cursor: C,
    started: bool,
    finished: bool,
}

impl<C> Records<C> {
    /// Creates the adapter; the cursor is rewound on the first
    /// [`Iterator::next`] call.
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor,
            started: false,
            finished: false,
        }
    }

    /// Consumes the adapter and returns the underlying cursor.
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C: Cursor> Iterator for Records<C> {
    type Item = Result<C::Item, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.started {
            self.cursor.rewind();
            self.started = true;
        } else if let Err(e) = self.cursor.advance() {
            self.finished = true;
            return Some(Err(e));
        }

        match self.cursor.valid() {
            Ok(true) => {}
            Ok(false) => {
                self.finished = true;
                return None;
            }
            Err(e) => {
                self.finished = true;
                return Some(Err(e));
            }
        }

        match self.cursor.current() {
            Ok(Some(item)) => Some(Ok(item)),
            // A source that shrank between fetches can leave a valid
            // cursor with no record; treat that as the end.
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
