//! Optional TOML configuration.
//!
//! ```toml
//! [strip]
//! radius = 1.2
//! width = 0.4
//! resolution = 200
//!
//! [display]
//! color_map = "plasma"
//! show_grid = false
//! auto_rotate = true
//! theme = "light"
//!
//! [export]
//! path = "band.obj"
//! ```
//!
//! Every table and key is optional.

use anyhow::{Context, Result};
use mobius::StripParams;
use mobius_ir::DisplaySettings;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "mobius.toml";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strip: StripParams,
    pub display: DisplaySettings,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where the viewer writes the mesh on export.
    pub path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(mobius::export::obj::DEFAULT_FILE_NAME),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load `path` if given (it must exist), else `mobius.toml` if present,
    /// else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    log::debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config =
            Self::from_toml(&text).with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobius_ir::{ColorMap, Theme};

    #[test]
    fn empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.strip, StripParams::new(1.0, 0.3, 300));
        assert_eq!(config.export.path, PathBuf::from("mobius_strip.obj"));
    }

    #[test]
    fn full_config() {
        let config = Config::from_toml(
            r#"
            [strip]
            radius = 1.2
            width = 0.4
            resolution = 200

            [display]
            color_map = "plasma"
            show_grid = false
            auto_rotate = true
            theme = "light"

            [export]
            path = "band.obj"
            "#,
        )
        .unwrap();
        assert_eq!(config.strip, StripParams::new(1.2, 0.4, 200));
        assert_eq!(config.display.color_map, ColorMap::Plasma);
        assert!(!config.display.show_grid);
        assert!(config.display.auto_rotate);
        assert_eq!(config.display.theme, Theme::Light);
        assert_eq!(config.export.path, PathBuf::from("band.obj"));
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let config = Config::from_toml("[strip]\nwidth = 0.5\n\n[display]\ntheme = \"light\"\n")
            .unwrap();
        assert_eq!(config.strip.radius, 1.0);
        assert_eq!(config.strip.width, 0.5);
        assert_eq!(config.strip.resolution, 300);
        assert!(config.display.show_grid);
        assert_eq!(config.display.theme, Theme::Light);
    }

    #[test]
    fn rejects_unknown_color_map() {
        assert!(Config::from_toml("[display]\ncolor_map = \"jet\"\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("mobius_no_such_config.toml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn load_explicit_file() {
        let path = std::env::temp_dir().join("mobius_test_config.toml");
        std::fs::write(&path, "[strip]\nresolution = 150\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.strip.resolution, 150);
        let _ = std::fs::remove_file(path);
    }
}
