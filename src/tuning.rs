//! Data-driven game balance
//!
//! Everything that shapes how the game feels (playfield size, sun orbit,
//! emission cadence, particle speeds) lives here so it can be tweaked from
//! JSON without touching the simulation. Speeds are in pixels per second.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::{Error, Result};

/// Game tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Sun ===
    /// Radius of the sun's disc
    pub sun_radius: f32,
    /// Distance from screen center to the sun's center
    pub orbit_radius: f32,
    /// Angular speed of the orbit (radians per second, sign is direction)
    pub orbit_speed: f32,

    // === Emission ===
    /// Shortest wait between emissions (seconds)
    pub emission_min_secs: f32,
    /// Longest wait between emissions (seconds)
    pub emission_max_secs: f32,
    /// Speed of freshly emitted particles
    pub emission_speed: f32,

    // === Byproducts ===
    /// Speed of fire born from repulsion
    pub fire_speed: f32,
    /// Speed of radioactive particles released at the sun
    pub radioactive_speed: f32,
    /// Max deviation (degrees) either side of the outward heading
    pub radioactive_spread_deg: f32,

    // === Throttle ===
    pub neutral_speed_min: f32,
    pub neutral_speed_max: f32,
    pub neutral_speed_step: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            sun_radius: 650.0,
            orbit_radius: 1220.0,
            orbit_speed: 0.005,

            emission_min_secs: 2.0,
            emission_max_secs: 5.0,
            emission_speed: 60.0,

            fire_speed: 30.0,
            radioactive_speed: 24.0,
            radioactive_spread_deg: 30.0,

            neutral_speed_min: 30.0,
            neutral_speed_max: 300.0,
            neutral_speed_step: 6.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!(
            "Loaded tuning ({}x{} playfield)",
            tuning.screen_width,
            tuning.screen_height
        );
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("sun_radius", self.sun_radius),
            ("emission_min_secs", self.emission_min_secs),
            ("emission_speed", self.emission_speed),
            ("fire_speed", self.fire_speed),
            ("radioactive_speed", self.radioactive_speed),
            ("neutral_speed_min", self.neutral_speed_min),
            ("neutral_speed_step", self.neutral_speed_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidTuning(format!(
                    "{name} must be finite and > 0 (got {value})"
                )));
            }
        }
        if !self.orbit_radius.is_finite() || self.orbit_radius < 0.0 {
            return Err(Error::InvalidTuning("orbit_radius must be >= 0".into()));
        }
        if !self.orbit_speed.is_finite() {
            return Err(Error::InvalidTuning("orbit_speed must be finite".into()));
        }
        if self.emission_max_secs < self.emission_min_secs {
            return Err(Error::InvalidTuning(
                "emission_max_secs must be >= emission_min_secs".into(),
            ));
        }
        if self.neutral_speed_max < self.neutral_speed_min {
            return Err(Error::InvalidTuning(
                "neutral_speed_max must be >= neutral_speed_min".into(),
            ));
        }
        if !(0.0..=180.0).contains(&self.radioactive_spread_deg) {
            return Err(Error::InvalidTuning(
                "radioactive_spread_deg must be within [0, 180]".into(),
            ));
        }
        Ok(())
    }
}
