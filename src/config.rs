//! Start-up configuration.
//!
//! The configuration is a small JSON document. Every field is optional; anything missing
//! falls back to [`Config::default`]. Lookup order is the path in `PRACTICE3D_CONFIG`,
//! then `practice3d.json` in the working directory, then `practice3d/config.json` inside the
//! platform config directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const CONFIG_ENV: &str = "PRACTICE3D_CONFIG";
const LOCAL_CONFIG: &str = "practice3d.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Practice".to_string(),
            width: 800,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    pub diffuse: PathBuf,
    pub normal_map: PathBuf,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            diffuse: PathBuf::from("textures/green_grass.jpg"),
            normal_map: PathBuf::from("textures/green_grass_normalmap.png"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub textures: TextureConfig,
    /// Name of the most verbose level that gets logged (`error` .. `trace`).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            textures: TextureConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json(path: &Path, s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Reads a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &contents)
    }

    /// Returns the first config file that exists, if any.
    pub fn locate() -> Option<PathBuf> {
        Self::candidates().into_iter().find(|p| p.is_file())
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            paths.push(PathBuf::from(path));
        }
        paths.push(PathBuf::from(LOCAL_CONFIG));
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("practice3d").join("config.json"));
        }
        paths
    }

    /// The configured log level, falling back to `Info` for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "window": { "width": 1024 }, "log_level": "debug" }"#;
        let config = Config::from_json(Path::new("test.json"), json).unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.title, "Practice");
        assert_eq!(config.textures, TextureConfig::default());
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = Config::from_json(Path::new("test.json"), "{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_json_reports_path() {
        let err = Config::from_json(Path::new("broken.json"), "{ nope").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
