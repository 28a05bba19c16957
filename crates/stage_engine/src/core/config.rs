//! # Stage Configuration
//!
//! Top-level settings for a stage host: the window the host opens, where
//! assets and the resource catalog live, and engine behavior such as the
//! initial scene and logging.
//!
//! All types are serializable through the [`Config`] trait, so a host can
//! keep them in either TOML or RON.

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// # Window Configuration
///
/// The host owns the window; these values are advisory for it and are used
/// by the engine only for logging and validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Stage".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// # Asset Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Base directory asset filenames are resolved against
    pub assets_dir: String,
    /// RON resource catalog; the builtin catalog is used when absent
    pub catalog_path: Option<String>,
}

impl AssetConfig {
    /// Set assets directory
    pub fn with_assets_dir(mut self, dir: impl Into<String>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the catalog file
    pub fn with_catalog(mut self, path: impl Into<String>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            assets_dir: "resources".to_string(),
            catalog_path: None,
        }
    }
}

/// # Engine Configuration
///
/// Core behavior: logging, which scene to enter first, and the audio
/// volume increment used by the volume actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
    /// Scene entered by `Stage::start`
    pub start_scene: String,
    /// Volume change per `volume_up` / `volume_down`
    pub volume_step: f32,
}

impl EngineConfig {
    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the initial scene
    pub fn with_start_scene(mut self, scene: impl Into<String>) -> Self {
        self.start_scene = scene.into();
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            start_scene: "MainMenuScene".to_string(),
            volume_step: 0.1,
        }
    }
}

/// # Complete Stage Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Asset locations
    pub assets: AssetConfig,
    /// Engine behavior
    pub engine: EngineConfig,
}

impl StageConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.title.is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        if self.engine.start_scene.is_empty() {
            return Err(ConfigError::Invalid("start scene cannot be empty".to_string()));
        }
        if !(self.engine.volume_step > 0.0 && self.engine.volume_step <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "volume step must be in (0, 1], got {}",
                self.engine.volume_step
            )));
        }
        Ok(())
    }
}

impl Config for StageConfig {}
