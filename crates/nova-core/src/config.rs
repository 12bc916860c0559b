//! Tunable game rules.
//!
//! Defaults reproduce [`crate::constants`] exactly. A JSON document may
//! override any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::geometry::Point;

/// All tunable parameters of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub width: f64,
    pub height: f64,
    pub threat_speed_min: f64,
    pub threat_speed_max: f64,
    pub threat_speed_step: f64,
    pub impact_tolerance: f64,
    pub interceptor_speed: f64,
    pub blast_max_radius: f64,
    pub blast_duration_ms: f64,
    pub win_score: u32,
    pub points_per_threat: u32,
    pub points_per_unused_round: u32,
    pub wave_threats_base: u32,
    pub wave_threats_increment: u32,
    pub spawn_interval_base_ms: f64,
    pub spawn_interval_step_ms: f64,
    pub spawn_interval_min_ms: f64,
    pub turret_max_ammo: u32,
    pub turrets: Vec<Point>,
    pub cities: Vec<Point>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            width: GAME_WIDTH,
            height: GAME_HEIGHT,
            threat_speed_min: THREAT_SPEED_MIN,
            threat_speed_max: THREAT_SPEED_MAX,
            threat_speed_step: THREAT_SPEED_STEP_PER_WAVE,
            impact_tolerance: IMPACT_TOLERANCE,
            interceptor_speed: INTERCEPTOR_SPEED,
            blast_max_radius: BLAST_MAX_RADIUS,
            blast_duration_ms: BLAST_DURATION_MS,
            win_score: WIN_SCORE,
            points_per_threat: POINTS_PER_THREAT,
            points_per_unused_round: POINTS_PER_UNUSED_ROUND,
            wave_threats_base: WAVE_THREATS_BASE,
            wave_threats_increment: WAVE_THREATS_INCREMENT,
            spawn_interval_base_ms: SPAWN_INTERVAL_BASE_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
            spawn_interval_min_ms: SPAWN_INTERVAL_MIN_MS,
            turret_max_ammo: TURRET_MAX_AMMO,
            turrets: TURRET_POSITIONS
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
            cities: CITY_POSITIONS
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
        }
    }
}

impl Rules {
    /// Parse rules from JSON, filling unspecified fields with defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Number of threats in a wave (waves are 1-based).
    pub fn threats_in_wave(&self, wave: u32) -> u32 {
        self.wave_threats_base + wave.saturating_sub(1) * self.wave_threats_increment
    }

    /// Milliseconds between threat spawns in a wave.
    pub fn spawn_interval_ms(&self, wave: u32) -> f64 {
        let reduction = wave.saturating_sub(1) as f64 * self.spawn_interval_step_ms;
        (self.spawn_interval_base_ms - reduction).max(self.spawn_interval_min_ms)
    }

    /// Threat speed multiplier for a wave.
    pub fn threat_speed_multiplier(&self, wave: u32) -> f64 {
        1.0 + wave.saturating_sub(1) as f64 * self.threat_speed_step
    }
}
