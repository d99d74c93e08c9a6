//! Application-level utilities for the Shelf CLI.
//!
//! This module provides:
//! - Path resolution for config and library files
//! - Settings loading
//! - The `AppContext` handed to every command handler

mod context;
mod resolver;
mod settings;

// Re-export public API
pub use context::{AppContext, FileCatalog};
