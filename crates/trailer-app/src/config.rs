//! Configuration management for trailer-load
//!
//! Config stored at: ~/.config/trailer-load/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trailer_render::RenderOptions;
use trailer_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (table, json)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Bar footprint along the length axis, as a fraction of the zone
    #[serde(default = "default_bar_fill_length")]
    pub bar_fill_length: f64,

    /// Bar footprint across the width axis, as a fraction of the zone
    #[serde(default = "default_bar_fill_width")]
    pub bar_fill_width: f64,

    /// Open the viewer after printing the summary
    #[serde(default)]
    pub visualize: bool,
}

fn default_bar_fill_length() -> f64 {
    RenderOptions::default().bar_fill_length
}

fn default_bar_fill_width() -> f64 {
    RenderOptions::default().bar_fill_width
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            bar_fill_length: default_bar_fill_length(),
            bar_fill_width: default_bar_fill_width(),
            visualize: false,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("trailer-load");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Bar footprint fractions must lie in (0, 1]
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("bar_fill_length", self.bar_fill_length),
            ("bar_fill_width", self.bar_fill_width),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                ))
                .into());
            }
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            bar_fill_length: self.bar_fill_length,
            bar_fill_width: self.bar_fill_width,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Trailer Load Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(f, "Bar fill length:  {:.2}", self.bar_fill_length)?;
        writeln!(f, "Bar fill width:   {:.2}", self.bar_fill_width)?;
        writeln!(f, "Visualize:        {}", self.visualize)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use trailer_types::Error;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.bar_fill_length, 0.98);
        assert_eq!(config.bar_fill_width, 0.95);
        assert!(!config.visualize);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            bar_fill_length: 0.9,
            bar_fill_width: 0.9,
            visualize: true,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.bar_fill_width, 0.95);
    }

    #[test]
    fn test_rejects_out_of_range_fill() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"bar_fill_width": 1.5}"#).unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_render_options_follow_config() {
        let config = Config {
            bar_fill_length: 0.8,
            ..Config::default()
        };
        assert_eq!(config.render_options().bar_fill_length, 0.8);
    }
}
