use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::{ModtacError, ModtacResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub intro: IntroConfig,
}

/// Scattered image field placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub seed: u32,
    /// Initial section height, in percent of the viewport height.
    pub height_vh: f64,
    /// Lower bound for the base canvas, in whole viewports.
    pub min_canvas_viewports: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            seed: 1337,
            height_vh: 600.0,
            min_canvas_viewports: 4.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Runway growth per extension, in percent of the viewport height.
    pub extend_by_vh: f64,
    pub extend_threshold_viewports: f64,
    pub extend_cooldown_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            extend_by_vh: 400.0,
            extend_threshold_viewports: 2.2,
            extend_cooldown_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub min_cols: usize,
    pub max_cols: usize,
    pub min_tile_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            min_cols: 4,
            max_cols: 12,
            min_tile_px: 170.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub dir: PathBuf,
    pub url_prefix: String,
    pub bind: SocketAddr,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public/media/gallery"),
            url_prefix: "/media/gallery".to_string(),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub items: Vec<String>,
    pub typing_ms_per_char: u64,
    pub deleting_ms_per_char: u64,
    pub hold_ms: u64,
    pub between_ms: u64,
    pub cursor_blink_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            items: [
                "Video Production",
                "Still Photography",
                "Campaign Strategy",
                "Marketing Consulting",
                "Paid Social",
                "Digital Assets",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            typing_ms_per_char: 55,
            deleting_ms_per_char: 32,
            hold_ms: 900,
            between_ms: 250,
            cursor_blink_ms: 520,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub min_show_ms: u64,
    pub max_show_ms: u64,
    pub reduced_motion: bool,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            min_show_ms: 950,
            max_show_ms: 2200,
            reduced_motion: false,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/modtac/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("modtac/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("modtac\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> ModtacResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ModtacError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
