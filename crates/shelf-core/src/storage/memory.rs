//! In-memory storage backend.

use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, ShelfError};
use crate::library::Library;
use crate::storage::traits::StorageEngine;

struct MemoryState {
    library: Library,
    saves: usize,
}

/// Keeps the last saved library in memory and counts saves.
pub struct MemoryStorage {
    state: Mutex<MemoryState>,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState {
                library: Library::new(),
                saves: 0,
            }),
        }
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| ShelfError::Storage("Memory storage poisoned".to_string()))
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.lock_state().map(|state| state.saves).unwrap_or(0)
    }

    /// Copy of the currently stored library.
    pub fn snapshot(&self) -> Result<Library> {
        Ok(self.lock_state()?.library.clone())
    }
}

impl StorageEngine for MemoryStorage {
    fn load(&self) -> Result<Library> {
        self.snapshot()
    }

    fn save(&self, library: &Library) -> Result<()> {
        let mut state = self.lock_state()?;
        state.library = library.clone();
        state.saves += 1;
        Ok(())
    }
}
