//! Vector-based storage.
//!
//! `DenseVec` is the contiguous store the heaps lay their implicit trees over.

pub mod dense_vec;

pub use dense_vec::DenseVec;
