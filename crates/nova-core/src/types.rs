//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Current location of an entity in playfield units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Point);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point::new(x, y))
    }

    pub fn point(&self) -> Point {
        self.0
    }
}

/// Simulation time tracking. Time only advances while a game is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of frames simulated so far.
    pub frame: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one frame of `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += delta_ms;
    }
}
