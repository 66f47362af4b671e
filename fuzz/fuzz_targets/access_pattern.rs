#![no_main]

use libfuzzer_sys::fuzz_target;
use pagers::{ChunkedReader, MemorySource};

// Replays an arbitrary interleaving of protocol and random-access calls
// against a Vec oracle. The first two bytes pick the shape (chunk size,
// record count); the rest drive operations.
fuzz_target!(|data: &[u8]| {
    let [shape_a, shape_b, ops @ ..] = data else {
        return;
    };

    let chunk_size = (*shape_a as usize % 16) + 1;
    let n = *shape_b as i64 % 100;

    let records: Vec<i64> = (0..n).collect();
    let source = MemorySource::new(records.clone());
    let mut reader = ChunkedReader::with_chunk_size(&source, chunk_size).unwrap();

    for &op in ops {
        match op % 4 {
            0 => {
                // Random access must agree with the oracle at any point.
                let position = (op / 4) as u64;
                let expected = records.get(position as usize);
                assert_eq!(
                    reader.get(position).unwrap(),
                    expected,
                    "get({}) diverged from the oracle",
                    position
                );
            }
            1 => {
                reader.advance().unwrap();
                // The cursor never points outside the loaded chunk's
                // position range plus the one-past-end slot.
                if let Some(chunk) = reader.chunk_index() {
                    let key = reader.key();
                    let start = chunk * chunk_size as u64;
                    assert!(key >= start);
                    assert!(key <= start + chunk_size as u64);
                }
            }
            2 => {
                let valid = reader.valid().unwrap();
                let key = reader.key();
                if valid {
                    assert!(
                        key < records.len() as u64,
                        "a valid cursor must sit on a real position"
                    );
                    assert_eq!(reader.current().unwrap(), records.get(key as usize));
                }
            }
            _ => {
                reader.rewind();
                assert_eq!(reader.key(), 0);
                assert_eq!(reader.chunk_index(), None);
            }
        }

        // Bounded memory: the loaded chunk never exceeds the chunk size.
        if reader.chunk_index().is_some() {
            assert!(reader.chunk().unwrap().len() <= chunk_size);
        }
    }
});
