//! Runtime settings assembled from CLI flags and the config file.

use std::path::PathBuf;

use log::debug;

use crate::cli::Cli;
use crate::config::{read_config, ShelfConfig};
use crate::errors::CliError;

use super::resolver::{missing_config_hint, resolve_config_path, resolve_library_path};

/// Settings the command handlers run with.
pub struct Settings {
    pub library_path: PathBuf,
    pub ascii: bool,
    pub no_color: bool,
}

/// Load settings. A missing config file at the default location is fine; a
/// missing file named by SHELF_CONFIG or an unparseable one is an error.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let location = resolve_config_path()?;
    let config = if location.path.exists() {
        read_config(&location.path)?
    } else if location.explicit {
        return Err(CliError::not_found(
            format!("Config file not found at {}", location.path.display()),
            missing_config_hint(),
        )
        .into());
    } else {
        ShelfConfig::default()
    };

    let library_path = resolve_library_path(cli.library.as_deref(), &config)?;
    debug!(
        "event=settings_loaded config={} config_found={} library={}",
        location.path.display(),
        location.path.exists(),
        library_path.display()
    );

    Ok(Settings {
        library_path,
        ascii: cli.ascii || config.ui.ascii,
        no_color: cli.no_color || config.ui.no_color,
    })
}
