//! Transforming records lazily while iterating.
//!
//! Run with:
//!     cargo run --example mapped

use pagers::{ChunkedReader, Cursor, MemorySource, ReadError};

fn main() -> Result<(), ReadError> {
    let source = MemorySource::new(vec![
        "ada".to_string(),
        "grace".to_string(),
        "edsger".to_string(),
        "barbara".to_string(),
        "tony".to_string(),
    ]);

    let reader = ChunkedReader::with_chunk_size(&source, 2)?;

    // Each transform runs as the record is yielded; nothing is cached.
    let greetings = reader
        .map(|name| name.to_uppercase())
        .map(|name| format!("hello, {}", name));

    for greeting in greetings.records() {
        println!("{}", greeting?);
    }

    Ok(())
}
