//! Player preferences and round configuration
//!
//! Persisted in LocalStorage on the web; round state itself is never stored.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_TOYS, DEFAULT_ROUND_SECS};
use crate::sim::RoundConfig;

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Round duration in seconds
    pub round_secs: u32,
    /// Number of toys kept on screen
    pub max_toys: usize,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Mute all audio
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round_secs: DEFAULT_ROUND_SECS,
            max_toys: DEFAULT_MAX_TOYS,
            master_volume: 0.8,
            muted: false,
        }
    }
}

impl Settings {
    /// Round configuration for the sim core
    pub fn round_config(&self) -> RoundConfig {
        RoundConfig {
            round_secs: self.round_secs.max(1),
            max_toys: self.max_toys.max(1),
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "toy_dive_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_game() {
        let s = Settings::default();
        assert_eq!(s.round_secs, 60);
        assert_eq!(s.max_toys, 5);
    }

    #[test]
    fn test_round_config_floors_at_one() {
        let s = Settings {
            round_secs: 0,
            max_toys: 0,
            ..Settings::default()
        };
        let cfg = s.round_config();
        assert_eq!(cfg.round_secs, 1);
        assert_eq!(cfg.max_toys, 1);
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let s = Settings {
            round_secs: 90,
            max_toys: 8,
            master_volume: 0.5,
            muted: true,
        };
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.round_secs, 90);
        assert_eq!(back.max_toys, 8);
        assert!(back.muted);
    }
}
