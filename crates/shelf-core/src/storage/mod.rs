//! Storage layer: book types, the storage engine trait, and its backends.
//!
//! - **types**: book record and builder
//! - **traits**: `StorageEngine` load/save boundary
//! - **json_file**: pretty-printed JSON file with atomic replace
//! - **memory**: in-process backend for tests and embedding

pub mod json_file;
pub mod memory;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use traits::StorageEngine;
pub use types::{
    is_valid_publication_year, Book, BookId, NewBook, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR,
};
