//! Quiz settings
//!
//! Handed over by the host as JSON; any missing field takes its default.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ORBIT_RADIUS, DEFAULT_ORBIT_SPEED};

/// Quiz configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizSettings {
    /// Fixed seed for question order (None = caller supplies entropy)
    pub seed: Option<u64>,

    // === Orbit ===
    /// Radius the Moon is snapped to when placed
    pub orbit_radius: f32,
    /// Orbital speed to restore when a session ends
    pub default_orbit_speed: f32,

    // === HUD ===
    /// Show per-answer feedback messages
    pub feedback_enabled: bool,
    /// Show the state summary line
    pub show_debug_overlay: bool,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            seed: None,

            orbit_radius: DEFAULT_ORBIT_RADIUS,
            default_orbit_speed: DEFAULT_ORBIT_SPEED,

            feedback_enabled: true,
            show_debug_overlay: false,
        }
    }
}

impl QuizSettings {
    /// Parse settings from JSON, falling back to defaults on bad input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => {
                log::info!("Loaded quiz settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid quiz settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Seed to use: the configured one, else `fallback`
    pub fn effective_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Orbit radius, guarded against zero or negative values
    pub fn effective_orbit_radius(&self) -> f32 {
        if self.orbit_radius > 0.0 {
            self.orbit_radius
        } else {
            DEFAULT_ORBIT_RADIUS
        }
    }
}
