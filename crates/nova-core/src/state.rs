//! Game state snapshot: the complete visible state handed to a renderer each frame.

use serde::{Deserialize, Serialize};

use crate::components::StructureRef;
use crate::enums::GameStatus;
use crate::events::GameEvent;
use crate::geometry::Point;
use crate::types::SimTime;

/// Complete game state published after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub status: GameStatus,
    pub wave: u32,
    pub score: u32,
    pub threats: Vec<ThreatView>,
    pub interceptors: Vec<InterceptorView>,
    pub blasts: Vec<BlastView>,
    pub turrets: Vec<TurretView>,
    pub cities: Vec<CityView>,
    /// Events fired since the previous snapshot.
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatView {
    pub id: u32,
    pub position: Point,
    pub origin: Point,
    pub target: Point,
    pub progress: f64,
    /// Progress per reference frame, used to draw heading and by input helpers.
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: u32,
    pub position: Point,
    pub launch: Point,
    pub target: Point,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastView {
    pub id: u32,
    pub center: Point,
    pub radius: f64,
    pub max_radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub structure: StructureRef,
    pub label: String,
    pub position: Point,
    pub ammo: u32,
    pub max_ammo: u32,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub structure: StructureRef,
    pub label: String,
    pub position: Point,
    pub destroyed: bool,
}
