//! Game settings
//!
//! Built once at startup and handed to states and the simulation by reference.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Rgb;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};
use crate::platform::InputKind;

/// Process-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub screen_width: f32,
    /// Playfield height in pixels (ball is lost past this line)
    pub screen_height: f32,
    /// Fixed tick rate the outer loop runs at
    pub fps: u32,

    // === Palette ===
    pub background: Rgb,
    pub text: Rgb,
    pub accent: Rgb,

    // === Gameplay ===
    /// Score multiplier lifetime in seconds
    pub multiplier_duration_secs: u32,
    /// Maximum number of commands kept for undo/redo
    pub history_limit: usize,
    /// Input device the playing state starts with
    pub input: InputKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: TICK_RATE,

            background: [0, 0, 30],
            text: [255, 255, 255],
            accent: [100, 200, 255],

            multiplier_duration_secs: 5,
            history_limit: 50,
            input: InputKind::Keyboard,
        }
    }
}

impl Settings {
    /// Multiplier lifetime expressed in ticks
    pub fn multiplier_ticks(&self) -> u32 {
        self.multiplier_duration_secs * self.fps
    }

    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_ticks() {
        let settings = Settings::default();
        assert_eq!(settings.multiplier_ticks(), 300);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "fps": 30, "input": "Mouse" }"#).unwrap();
        assert_eq!(settings.fps, 30);
        assert_eq!(settings.input, InputKind::Mouse);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
        assert_eq!(settings.multiplier_ticks(), 150);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            history_limit: 10,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load_from(Path::new("/nonexistent/squash-settings.json"));
        assert_eq!(settings, Settings::default());
    }
}
