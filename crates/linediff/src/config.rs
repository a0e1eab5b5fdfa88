//! Configuration file handling

use crate::cli::Args;
use anyhow::{Context, Result};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Unified,
    Split,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view: ViewMode,
    pub context: usize,
    pub color: ColorMode,
    /// Total width of the split view
    pub width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view: ViewMode::Unified,
            context: 3,
            color: ColorMode::Auto,
            width: 120,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config file")
    }

    /// Command-line flags win over file values
    pub fn apply_args(mut self, args: &Args) -> Self {
        if let Some(view) = args.view {
            self.view = view;
        }
        if let Some(context) = args.context {
            self.context = context;
        }
        if let Some(color) = args.color {
            self.color = color;
        }
        if let Some(width) = args.width {
            self.width = width;
        }
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linediff").join("config.toml"))
}

/// Load the config from an explicit path, or from the default location.
/// A missing default file falls back to defaults; a missing explicit one is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            None => {
                debug!("No config directory available, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = Config::from_toml(&content)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.view, ViewMode::Unified);
        assert_eq!(config.context, 3);
        assert_eq!(config.color, ColorMode::Auto);
        assert_eq!(config.width, 120);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml("view = \"split\"\ncontext = 1\n").unwrap();
        assert_eq!(config.view, ViewMode::Split);
        assert_eq!(config.context, 1);
        assert_eq!(config.color, ColorMode::Auto);
    }

    #[test]
    fn test_invalid_toml_value() {
        assert!(Config::from_toml("view = \"sideways\"").is_err());
        assert!(Config::from_toml("context = -1").is_err());
    }

    #[test]
    fn test_args_override_config() {
        let args =
            Args::try_parse_from(["linediff", "a", "b", "--view", "split", "--width", "80"])
                .unwrap();
        let config = Config::from_toml("view = \"unified\"\ncolor = \"never\"")
            .unwrap()
            .apply_args(&args);

        assert_eq!(config.view, ViewMode::Split);
        assert_eq!(config.width, 80);
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.context, 3);
    }

    #[test]
    fn test_color_mode_fixed_values() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }

    #[test]
    fn test_load_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "width = 60\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.width, 60);
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
