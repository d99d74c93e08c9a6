//! # Shelf Core
//!
//! Core library for Shelf - a personal library catalog kept in a single JSON file.
//!
//! This crate provides the book store, persistence, and query logic
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: book types, `StorageEngine` trait, JSON file and in-memory backends
//! - **library**: the in-memory `Library` and the persisting `Catalog` session
//! - **query**: search filters, sorting, statistics
//! - **command**: dispatch table for the five catalog actions
//! - **fs**: atomic file replacement

pub mod command;
pub mod error;
pub mod fs;
pub mod library;
pub mod query;
pub mod storage;

pub use command::{Action, Command, Outcome};
pub use error::{Result, ShelfError};
pub use library::{Catalog, Library};
pub use query::{GenreFilter, ReadFilter, SearchQuery, SortKey, Statistics};
pub use storage::{Book, BookId, JsonFileStorage, MemoryStorage, NewBook, StorageEngine};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
