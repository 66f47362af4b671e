//! Basic chunked iteration over an in-memory source.
//!
//! Run with:
//!     cargo run --example basic

use pagers::{ChunkedReader, Cursor, MemorySource, ReadError};

fn main() -> Result<(), ReadError> {
    // Pretend this is a large query result living in an external store.
    let rows: Vec<(u32, String)> = (0..10_000)
        .map(|id| (id, format!("record-{:05}", id)))
        .collect();
    let source = MemorySource::new(rows);

    let mut reader = ChunkedReader::with_chunk_size(&source, 500)?;

    println!(
        "Reading {} records in chunks of {}...\n",
        reader.count()?,
        reader.chunk_size()
    );

    // Random access loads only the covering chunk.
    if let Some((id, name)) = reader.get(7_531)? {
        println!("Position 7531 -> id={} name={}", id, name);
    }
    println!("Loaded chunk: {:?}\n", reader.chunk_index());

    // Full iteration holds one chunk in memory at a time.
    let mut total = 0usize;
    for record in reader.records() {
        let (_id, _name) = record?;
        total += 1;
    }

    println!("Iterated {} records", total);
    Ok(())
}
