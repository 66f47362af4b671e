//! Chunk types.
//!
//! - [`Chunk`] - one loaded page of records with its chunk index

mod data;

pub use data::Chunk;
