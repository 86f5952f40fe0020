use crate::{
    error::{ConfigError, TrellisError},
    layout::LayoutEngine,
};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Styling and canvas options for a diagram render.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Outline color for class boxes (any CSS color string)
    pub outline_color: String,

    /// Outline width for class boxes, in pixels
    pub outline_width: u32,

    /// Canvas width in pixels
    pub canvas_width: u32,

    /// Canvas height in pixels
    pub canvas_height: u32,

    /// Font size in points for all text
    pub font_size: u16,

    /// Placement policy for class boxes
    pub layout: LayoutEngine,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            outline_color: "black".to_string(),
            outline_width: 1,
            canvas_width: 1200,
            canvas_height: 800,
            font_size: 12,
            layout: LayoutEngine::default(),
        }
    }
}

/// Application configuration loaded from a TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render options section
    #[serde(default)]
    pub render: RenderOptions,

    #[serde(skip)]
    config_file_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TrellisError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(TrellisError::Config(ConfigError::MissingFile(
                path.to_path_buf(),
            )));
        }

        let content = fs::read_to_string(path)?;

        let mut config: AppConfig = toml::from_str(&content)
            .map_err(ConfigError::from)
            .map_err(TrellisError::Config)?;

        config.config_file_path = Some(path.to_path_buf());

        Ok(config)
    }
}
