//! Record source capability contract and the in-memory implementation.
//!
//! - [`RecordSource`] - paged access to an ordered record set
//! - [`MemorySource`] - `Vec`-backed source for tests, benches and demos

mod memory;

pub use memory::MemorySource;

use crate::error::ReadError;

/// Paged access to an ordered, countable record set.
///
/// This is the capability contract a reader consumes. Implementors expose
/// an ordered record set four ways: page by page, counted, first-record,
/// and in full. The ordering must be stable across calls: the reader
/// addresses records by global position and re-fetches pages on demand,
/// so a source whose order shifts between fetches yields incoherent
/// sequences.
///
/// The reader only ever reads; implementors are never mutated or closed
/// through this trait.
pub trait RecordSource {
    /// The record type this source yields.
    type Record;

    /// Returns up to `page_size` records of the 1-based `page_number`.
    ///
    /// The final page may hold fewer than `page_size` records; pages past
    /// the end of the set are empty.
    fn page(&self, page_number: u64, page_size: usize) -> Result<Vec<Self::Record>, ReadError>;

    /// Returns the count of all records, independent of paging.
    fn total_count(&self) -> Result<u64, ReadError>;

    /// Returns the first record under this source's ordering, with only
    /// `columns` selected.
    ///
    /// An empty `columns` slice selects every column. Sources whose
    /// records are opaque values may ignore the projection.
    fn first(&self, columns: &[&str]) -> Result<Option<Self::Record>, ReadError>;

    /// Returns the full, unpaged result set.
    fn all(&self) -> Result<Vec<Self::Record>, ReadError>;
}
