#![no_main]

use libfuzzer_sys::fuzz_target;
use pagers::{ChunkedReader, Cursor, MemorySource};

// Full iteration must reproduce the source exactly for every chunk size,
// and chunk loading must follow the fetch-count formula.
fuzz_target!(|data: &[u8]| {
    let records: Vec<u8> = data.to_vec();
    let n = records.len();

    for chunk_size in 1..=8usize {
        let source = MemorySource::new(records.clone());
        let reader = ChunkedReader::with_chunk_size(&source, chunk_size).unwrap();

        let iterated: Vec<u8> = reader.records().map(Result::unwrap).collect();
        assert_eq!(
            iterated, records,
            "chunk_size {} must reproduce the source",
            chunk_size
        );

        // Keys are the global positions 0..n, in order.
        let source = MemorySource::new(records.clone());
        let mut reader = ChunkedReader::with_chunk_size(&source, chunk_size).unwrap();
        let mut expected_key = 0u64;
        reader.rewind();
        while reader.valid().unwrap() {
            assert_eq!(reader.key(), expected_key);
            expected_key += 1;
            reader.advance().unwrap();
        }
        assert_eq!(expected_key, n as u64);

        // Mapping never changes positions or counts.
        let source = MemorySource::new(records.clone());
        let reader = ChunkedReader::with_chunk_size(&source, chunk_size).unwrap();
        let mapped: Vec<u16> = reader
            .map(|b| b as u16 + 1)
            .records()
            .map(Result::unwrap)
            .collect();
        assert_eq!(mapped.len(), n);
        for (mapped_value, original) in mapped.iter().zip(&records) {
            assert_eq!(*mapped_value, *original as u16 + 1);
        }
    }
});
