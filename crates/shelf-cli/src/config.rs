use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub library: LibrarySection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct LibrarySection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub ascii: bool,
    #[serde(default)]
    pub no_color: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_library_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("library.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("shelf"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("shelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_config_full() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[library]\npath = \"/tmp/books.json\"\n\n[ui]\nascii = true\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.library.path.as_deref(), Some("/tmp/books.json"));
        assert!(config.ui.ascii);
        assert!(!config.ui.no_color);
    }

    #[test]
    fn test_read_config_sections_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = read_config(&path).unwrap();
        assert!(config.library.path.is_none());
        assert!(!config.ui.ascii);
    }

    #[test]
    fn test_read_config_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[library\npath = 3").unwrap();

        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
