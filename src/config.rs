use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub scroll: ScrollConfig,
    pub loader: LoaderConfig,
    pub catalog: CatalogConfig,
    pub contact: ContactConfig,
    pub window: WindowConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Header show/hide thresholds (in points of scroll offset)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ScrollConfig {
    /// Offsets below this count as the top of the page
    pub top_threshold: f32,
    /// Scroll deltas this small never change direction
    pub dead_zone: f32,
    /// The header only hides once scrolled past this
    pub hide_after: f32,
}

/// Page loader splash timings
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LoaderConfig {
    pub initial_ms: u64,
    pub route_change_ms: u64,
}

/// Listing catalog location
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file with the listing documents; defaults to the data directory
    pub path: Option<PathBuf>,
    /// Directory relative image paths resolve against; defaults to the catalog's directory
    pub assets_dir: Option<PathBuf>,
    /// Reload the catalog when the file changes
    pub watch: bool,
}

/// Contact form delivery
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ContactConfig {
    /// JSON-lines file submissions are appended to
    pub outbox: Option<PathBuf>,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "light".to_string(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            top_threshold: 50.0,
            dead_zone: 10.0,
            hide_after: 100.0,
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            initial_ms: 1000,
            route_change_ms: 1100,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            path: None,
            assets_dir: None,
            watch: true,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 1240.0,
            height: 800.0,
        }
    }
}

impl LoaderConfig {
    pub fn initial(&self) -> Duration {
        Duration::from_millis(self.initial_ms)
    }

    pub fn route_change(&self) -> Duration {
        Duration::from_millis(self.route_change_ms)
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "homefront")
}

fn data_file(name: &str) -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(name))
        .unwrap_or_else(|| PathBuf::from(name))
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }),
            _ => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(Error::NoConfigDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
                tracing::info!(path = %path.display(), "wrote default configuration");
            }
        }
        Ok(())
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .path
            .clone()
            .unwrap_or_else(|| data_file("listings.json"))
    }

    pub fn assets_dir(&self) -> PathBuf {
        if let Some(dir) = &self.catalog.assets_dir {
            return dir.clone();
        }
        self.catalog_path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    pub fn outbox_path(&self) -> PathBuf {
        self.contact
            .outbox
            .clone()
            .unwrap_or_else(|| data_file("contact-outbox.jsonl"))
    }

    pub fn is_dark(&self) -> bool {
        self.theme.mode.eq_ignore_ascii_case("dark")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "light");
        assert_eq!(config.scroll.top_threshold, 50.0);
        assert_eq!(config.scroll.dead_zone, 10.0);
        assert_eq!(config.scroll.hide_after, 100.0);
        assert_eq!(config.loader.initial(), Duration::from_millis(1000));
        assert_eq!(config.loader.route_change(), Duration::from_millis(1100));
        assert!(config.catalog.watch);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(config.scroll.hide_after, deserialized.scroll.hide_after);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[scroll]\nhide_after = 240.0\n").expect("parse");
        assert_eq!(config.scroll.hide_after, 240.0);
        assert_eq!(config.scroll.top_threshold, 50.0);
        assert_eq!(config.window.width, 1240.0);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.theme.mode = "dark".to_string();
        config.catalog.path = Some(dir.path().join("listings.json"));
        config.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert!(loaded.is_dark());
        assert_eq!(loaded.catalog_path(), dir.path().join("listings.json"));
        assert_eq!(loaded.assets_dir(), dir.path().to_path_buf());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "scroll = 12").expect("write");
        assert!(matches!(Config::load_from(&path), Err(Error::TomlDe(_))));
    }
}
