//! Path resolution for config and library files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_library_path, ShelfConfig};
use crate::constants::CONFIG_ENV;

/// Where the config file lives and whether the location was set explicitly.
pub struct ConfigLocation {
    pub path: PathBuf,
    pub explicit: bool,
}

/// Resolve the config file path, checking SHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<ConfigLocation> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(ConfigLocation {
                path: PathBuf::from(value),
                explicit: true,
            });
        }
    }
    Ok(ConfigLocation {
        path: default_config_path()?,
        explicit: false,
    })
}

/// Resolve the library file path: CLI flag / SHELF_PATH, then config, then
/// the XDG data directory.
pub fn resolve_library_path(
    cli_library: Option<&str>,
    config: &ShelfConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli_library.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.library.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_library_path()
}

/// Error hint when the configured config file is missing.
pub fn missing_config_hint() -> String {
    format!(
        "Create the file, or unset {} to use the default location.",
        CONFIG_ENV
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LibrarySection;

    #[test]
    fn test_cli_path_wins() {
        let config = ShelfConfig {
            library: LibrarySection {
                path: Some("/from/config.json".to_string()),
            },
            ..Default::default()
        };
        let path = resolve_library_path(Some("/from/flag.json"), &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_config_path_used_without_flag() {
        let config = ShelfConfig {
            library: LibrarySection {
                path: Some("/from/config.json".to_string()),
            },
            ..Default::default()
        };
        let path = resolve_library_path(None, &config).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_missing_config_hint_names_env() {
        assert!(missing_config_hint().contains(CONFIG_ENV));
    }
}
