//! Reader family - the chunked reader, the cursor protocol, the mapping
//! view, and the iterator adapter.
//!
//! - [`ChunkedReader`] - lazy paged reader over a record source
//! - [`Cursor`] - external-iteration protocol with `map`/`records` combinators
//! - [`MappedReader`] - transform-on-read wrapper over any cursor
//! - [`Records`] - adapter from the cursor protocol to `std::iter::Iterator`

mod chunked;
mod cursor;
mod iter;
mod mapped;

pub use chunked::ChunkedReader;
pub use cursor::Cursor;
pub use iter::Records;
pub use mapped::MappedReader;
