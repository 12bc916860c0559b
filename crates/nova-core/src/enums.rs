//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game status.
///
/// `Start -> Playing -> {Won | Lost}`. Won and Lost are terminal until the
/// session is restarted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Start,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Kind of defended structure. Both kinds are valid threat targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StructureKind {
    Turret,
    City,
}

impl StructureKind {
    /// Single-letter prefix used in structure labels (`t1`, `c3`).
    pub fn prefix(self) -> char {
        match self {
            StructureKind::Turret => 't',
            StructureKind::City => 'c',
        }
    }
}
