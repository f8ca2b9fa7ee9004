//! Tunables and preferences
//!
//! Persisted in LocalStorage on the web build; the simulation itself is
//! never persisted.

use serde::{Deserialize, Serialize};

use crate::consts::{DAMPENING, GRAVITY};

/// User-tunable settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity damping factor, clamped to (0, 1] on load
    pub dampening: f32,
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            dampening: DAMPENING,
            show_fps: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    const STORAGE_KEY: &'static str = "jar_drop_settings";

    /// Clamp loaded values into their valid ranges
    pub fn sanitized(mut self) -> Self {
        if !self.dampening.is_finite() || self.dampening <= 0.0 {
            self.dampening = DAMPENING;
        }
        self.dampening = self.dampening.min(1.0);
        if !self.gravity.is_finite() {
            self.gravity = GRAVITY;
        }
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str::<Settings>(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings.sanitized();
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
