//! Storage engine trait definition.
//!
//! The `StorageEngine` trait is the load/save boundary between the in-memory
//! library and wherever it is persisted. The catalog only talks to this trait,
//! so the JSON file backend and the in-memory backend are interchangeable.

use crate::error::Result;
use crate::library::Library;

/// Storage backend for a library.
///
/// Implementations must ensure:
/// - `save` replaces the previously stored library as a whole
/// - `load` after `save` reproduces the same books in the same order
/// - the id counter survives a save/load cycle
pub trait StorageEngine: Send + Sync {
    /// Load the stored library.
    ///
    /// A backend with nothing stored yet returns an empty library.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Corrupt` if stored data cannot be parsed and
    /// `ShelfError::Storage` if it cannot be read.
    fn load(&self) -> Result<Library>;

    /// Persist the full library, overwriting what was stored before.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the write fails. The previously stored
    /// library is left intact in that case.
    fn save(&self, library: &Library) -> Result<()>;
}
