//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default sun surface map, an equirectangular full-disk mosaic.
pub const DEFAULT_SUN_TEXTURE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/9/99/Map_of_the_full_sun.jpg/1280px-Map_of_the_full_sun.jpg";

/// Default earth surface map.
pub const DEFAULT_EARTH_TEXTURE_URL: &str =
    "https://live.staticflickr.com/2521/3884071286_edb50f8137_b.jpg";

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Scene and animation settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
    /// Window title.
    pub title: String,
}

/// Scene and animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Orbit-angle increment per frame while spinning, radians.
    pub orbit_step: f32,
    /// Spin-angle increment per frame while spinning, radians.
    pub spin_step: f32,
    /// Sun surface map URL.
    pub sun_texture_url: String,
    /// Earth surface map URL.
    pub earth_texture_url: String,
    /// Fetch the surface maps at startup (bodies render untextured if off
    /// or if a fetch fails).
    pub fetch_textures: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
            title: "Orrery".to_string(),
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            orbit_step: 0.01,
            spin_step: 0.02,
            sun_texture_url: DEFAULT_SUN_TEXTURE_URL.to_string(),
            earth_texture_url: DEFAULT_EARTH_TEXTURE_URL.to_string(),
            fetch_textures: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Name of the config file inside the config directory.
const CONFIG_FILE: &str = "config.ron";

impl Config {
    /// Load `config.ron` from `config_dir`. A missing file is not an error:
    /// the defaults are written out and returned.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            let defaults = Self::default();
            defaults.save(config_dir)?;
            log::info!("Wrote default configuration to {}", path.display());
            return Ok(defaults);
        }

        let text = std::fs::read_to_string(&path).map_err(ConfigError::Read)?;
        let loaded = ron::from_str(&text).map_err(ConfigError::Parse)?;
        log::info!("Configuration loaded from {}", path.display());
        Ok(loaded)
    }

    /// Persist this config as pretty-printed RON in `config_dir`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::Write)?;

        let rendered = ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::new().depth_limit(2),
        )
        .map_err(ConfigError::Serialize)?;

        std::fs::write(config_dir.join(CONFIG_FILE), rendered).map_err(ConfigError::Write)
    }
}
