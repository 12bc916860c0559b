//! Player commands sent from an input source to the simulation.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new game, or restart after a win or loss.
    StartGame,
    /// Fire an interceptor toward a playfield point.
    ///
    /// Out-of-range points are accepted as-is.
    Launch { x: f64, y: f64 },
}
