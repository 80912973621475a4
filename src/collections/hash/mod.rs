//! Hash-based collections.

pub mod hash_table;

pub use hash_table::{HashTable, DEFAULT_SIZE, MAX_HASHED_CHARS};
