//! HelmView configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use helmview_common::{
    CstConfig, DimensionConfig, LoggingConfig, Result, ZenohConfig, clamp_speed, load_config,
};

/// Name of the configuration file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "helmview.json5";

/// Initial window size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    900.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Light or dark palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelmConfig {
    /// Zenoh connection settings.
    #[serde(default)]
    pub zenoh: ZenohConfig,

    /// CST value channel.
    #[serde(default)]
    pub cst: CstConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Initial window size.
    #[serde(default)]
    pub window: WindowConfig,

    /// Telegraph height tokens.
    #[serde(default)]
    pub dimensions: DimensionConfig,

    /// Commanded speed before CST reports one.
    #[serde(default = "default_initial_speed")]
    pub initial_speed: f32,

    #[serde(default)]
    pub theme: ThemeChoice,
}

fn default_initial_speed() -> f32 {
    30.0
}

impl Default for HelmConfig {
    fn default() -> Self {
        Self {
            zenoh: ZenohConfig::default(),
            cst: CstConfig::default(),
            logging: LoggingConfig::default(),
            window: WindowConfig::default(),
            dimensions: DimensionConfig::default(),
            initial_speed: default_initial_speed(),
            theme: ThemeChoice::default(),
        }
    }
}

impl HelmConfig {
    /// Load configuration from a JSON5 file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut config: Self = load_config(path)?;
        config.initial_speed = clamp_speed(config.initial_speed);
        Ok(config)
    }

    /// Load an explicitly requested file, or the default file when present.
    ///
    /// A missing default file is not an error; the built-in defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }

        match default_config_path() {
            Some(path) if path.exists() => Ok((Self::load_from_file(&path)?, Some(path))),
            _ => Ok((Self::default(), None)),
        }
    }
}

/// `<config dir>/helmview/helmview.json5`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("helmview").join(CONFIG_FILE_NAME))
}
