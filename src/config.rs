//! Client configuration
//!
//! Route names, countdown length and panel styling, read from a JSON file.
//! Every field has a default, so a partial file (or no file at all) is fine.
//!
//! Default location: `<config dir>/modal_stack/config.json`, e.g.
//! `~/.config/modal_stack/config.json` on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Appearance of the modal panel, colours as RGB triples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    pub width: u32,
    pub height: u32,

    /// Backdrop darkness (0-255, higher = darker)
    pub overlay_alpha: u8,

    pub background: [u8; 3],
    pub border: [u8; 3],
    pub text: [u8; 3],
    pub control: [u8; 3],
    pub control_text: [u8; 3],
}

impl Default for PanelStyle {
    fn default() -> Self {
        PanelStyle {
            width: 420,
            height: 200,
            overlay_alpha: 180,
            background: [30, 30, 40],
            border: [100, 100, 120],
            text: [220, 220, 240],
            control: [80, 100, 140],
            control_text: [255, 255, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Route on which gameplay input may flow
    pub active_route: String,

    /// Route the client opens on
    pub start_route: String,

    /// Length of the start-game countdown
    pub countdown_seconds: u64,

    pub panel: PanelStyle,
}

impl Default for ModalConfig {
    fn default() -> Self {
        ModalConfig {
            active_route: "game".to_string(),
            start_route: "lobby".to_string(),
            countdown_seconds: 5,
            panel: PanelStyle::default(),
        }
    }
}

impl ModalConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config file path, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("modal_stack").join("config.json"))
    }

    /// Load from `path`, falling back to defaults when it's missing or broken
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("no config directory, using default config");
            return ModalConfig::default();
        };

        if !path.exists() {
            log::info!("{} not found, using default config", path.display());
            return ModalConfig::default();
        }

        match ModalConfig::load_from_file(path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{}, using default config", err);
                ModalConfig::default()
            }
        }
    }
}
