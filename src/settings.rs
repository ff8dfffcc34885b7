//! Game settings and preferences
//!
//! Read once at startup from an optional JSON block embedded in the page.
//! Nothing is written back; a reload always starts from the page's config.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Rendering ===
    /// Draw "NN%" over damaged blocks
    pub life_labels: bool,
    /// Draw the faint outline around each block
    pub block_borders: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sounds
    pub muted: bool,

    // === Physics ===
    /// Simulation constants
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            life_labels: true,
            block_borders: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Id of the `<script type="application/json">` element holding overrides
    pub const ELEMENT_ID: &'static str = "block-hop-settings";

    /// Parse settings JSON. Missing fields take defaults; invalid JSON yields
    /// the defaults with a warning.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Invalid settings JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Clamp volumes and repair tuning values
    pub fn sanitized(mut self) -> Self {
        self.master_volume = sanitize_volume(self.master_volume);
        self.sfx_volume = sanitize_volume(self.sfx_volume);
        self.tuning = self.tuning.sanitized();
        self
    }

    /// Effective sound effect volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded settings from #{}", Self::ELEMENT_ID);
                Self::from_json(&json)
            }
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native: settings JSON path from the first CLI argument, if any
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Some(path) = std::env::args().nth(1) else {
            log::info!("Using default settings");
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path);
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read settings {} ({}), using defaults", path, e);
                Self::default()
            }
        }
    }
}

fn sanitize_volume(vol: f32) -> f32 {
    if vol.is_finite() { vol.clamp(0.0, 1.0) } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"muted": true, "tuning": {"jump_force": 12}}"#);
        assert!(settings.muted);
        assert!(settings.life_labels);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.tuning.jump_force, 12.0);
        assert_eq!(settings.tuning.gravity, 0.5);
    }

    #[test]
    fn test_invalid_json_uses_defaults() {
        assert_eq!(Settings::from_json("{not json"), Settings::default());
        assert_eq!(Settings::from_json(r#"{"muted": "yes"}"#), Settings::default());
    }

    #[test]
    fn test_volume_is_clamped() {
        let settings = Settings::from_json(r#"{"master_volume": 3.0, "sfx_volume": -1}"#);
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.sfx_volume, 0.0);
    }

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.8).abs() < f32::EPSILON);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }
}
