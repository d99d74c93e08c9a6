//! Application context for the Shelf CLI.
//!
//! Bundles CLI arguments with lazily-loaded settings and opens the catalog
//! that command handlers operate on.

use std::path::Path;

use once_cell::unsync::OnceCell;

use shelf_core::{Catalog, JsonFileStorage};

use crate::cli::Cli;
use crate::ui::{OutputFormat, UiContext};

use super::settings::{load_settings, Settings};

/// The catalog type every handler works with.
pub type FileCatalog = Catalog<JsonFileStorage>;

/// Application context that bundles CLI args with settings.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    settings: OnceCell<Settings>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            settings: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the settings, loading them lazily if needed.
    pub fn settings(&self) -> anyhow::Result<&Settings> {
        self.settings.get_or_try_init(|| load_settings(self.cli))
    }

    /// Resolved path of the library file.
    pub fn library_path(&self) -> anyhow::Result<&Path> {
        Ok(self.settings()?.library_path.as_path())
    }

    /// Load the library file into a catalog for this session.
    pub fn open_catalog(&self) -> anyhow::Result<FileCatalog> {
        let path = self.library_path()?;
        Ok(Catalog::open(JsonFileStorage::new(path))?)
    }

    /// Build a UI context honoring CLI flags and config.
    ///
    /// Falls back to the bare CLI flags if settings cannot be loaded, so that
    /// errors about the config itself can still be rendered.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        let (no_color, ascii) = match self.settings() {
            Ok(settings) => (settings.no_color, settings.ascii),
            Err(_) => (self.cli.no_color, self.cli.ascii),
        };
        UiContext::from_env(json, format, no_color, ascii)
    }
}
