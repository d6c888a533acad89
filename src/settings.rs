//! Sketch settings
//!
//! Persisted in LocalStorage on the web, read from a JSON file on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::palette::Color;

/// Tunable parameters for layout and animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Layout ===
    /// Wheels requested per layout (fewer may fit)
    pub circle_count: usize,
    /// Wheel diameter range
    pub min_size: f32,
    pub max_size: f32,
    /// Edge margin as a fraction of wheel size
    pub edge_margin_factor: f32,
    /// Minimum center distance as a fraction of summed radii
    pub overlap_factor: f32,
    /// Position redraws before a wheel is dropped
    pub max_placement_tries: u32,

    // === Particles ===
    pub particle_count: usize,
    pub particle_min_speed: f32,
    pub particle_max_speed: f32,

    // === Animation ===
    /// Degrees per tick
    pub spin_speed: f32,
    /// Reveal phase advance per tick
    pub reveal_increment: f32,
    pub breath_base: f32,
    pub breath_speeds: [f64; 3],
    pub breath_amplitudes: [f32; 3],

    // === Presentation ===
    /// Background as a hex string
    pub background: String,
    /// Key that regenerates the layout
    pub regenerate_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            circle_count: CIRCLE_COUNT,
            min_size: MIN_WHEEL_SIZE,
            max_size: MAX_WHEEL_SIZE,
            edge_margin_factor: EDGE_MARGIN_FACTOR,
            overlap_factor: OVERLAP_FACTOR,
            max_placement_tries: MAX_PLACEMENT_TRIES,

            particle_count: PARTICLE_COUNT,
            particle_min_speed: PARTICLE_MIN_SPEED,
            particle_max_speed: PARTICLE_MAX_SPEED,

            spin_speed: SPIN_SPEED,
            reveal_increment: REVEAL_INCREMENT,
            breath_base: BREATH_BASE,
            breath_speeds: BREATH_SPEEDS,
            breath_amplitudes: BREATH_AMPLITUDES,

            background: BACKGROUND_HEX.to_string(),
            regenerate_key: " ".to_string(),
        }
    }
}

impl Settings {
    /// Sanitize values that would break sampling (inverted or negative ranges)
    pub fn validated(mut self) -> Self {
        if self.min_size > self.max_size {
            std::mem::swap(&mut self.min_size, &mut self.max_size);
        }
        self.min_size = self.min_size.max(1.0);
        self.max_size = self.max_size.max(self.min_size);

        if self.particle_min_speed > self.particle_max_speed {
            std::mem::swap(&mut self.particle_min_speed, &mut self.particle_max_speed);
        }
        self.particle_min_speed = self.particle_min_speed.max(0.0);
        self.particle_max_speed = self.particle_max_speed.max(self.particle_min_speed);

        self.edge_margin_factor = self.edge_margin_factor.max(0.0);
        self.overlap_factor = self.overlap_factor.max(0.0);
        self.reveal_increment = self.reveal_increment.clamp(0.0, 1.0);

        if Color::parse_hex(&self.background).is_none() {
            log::warn!("Invalid background color {:?}, using default", self.background);
            self.background = BACKGROUND_HEX.to_string();
        }
        self
    }

    /// Parsed background color
    pub fn background_color(&self) -> Color {
        Color::parse_hex(&self.background)
            .or_else(|| Color::parse_hex(BACKGROUND_HEX))
            .unwrap_or(Color::BLACK)
    }

    /// Parse settings from JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.validated(),
            Err(e) => {
                log::warn!("Failed to parse settings: {}", e);
                Self::default()
            }
        }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "wheel_garden_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    ///
    /// Written back after every load so the stored copy is always a
    /// complete, validated document the user can edit.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match serde_json::to_string(self) {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                        log::warn!("LocalStorage rejected settings write");
                    } else {
                        log::debug!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Failed to serialize settings: {}", e),
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Failed to read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
