//! Player settings persisted as JSON (`tileplay.json`)
//!
//! Settings are loaded once and handed to the player explicitly; nothing
//! reads them from global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub use crate::paths::{PathConfig, config_file, data_file, ensure_dirs};

pub const SETTINGS_FILE: &str = "tileplay.json";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Minimum delay between autoplay frames
    pub frame_delay_ms: u64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self { frame_delay_ms: 100 }
    }
}

impl PlayerSettings {
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Load from `path`; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings: {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("Malformed settings: {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write settings: {}", path.display()))?;
        log::info!("Saved settings to {}", path.display());
        Ok(())
    }
}
