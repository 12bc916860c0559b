//! Events emitted by the simulation for the session controller and UI feedback.

use serde::{Deserialize, Serialize};

use crate::components::StructureRef;
use crate::geometry::Point;

/// Something that happened during a tick or a launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new threat entered the playfield.
    ThreatSpawned { threat: u32, target: StructureRef },
    /// An interceptor left a turret.
    InterceptorLaunched {
        interceptor: u32,
        turret: StructureRef,
        target: Point,
    },
    /// A threat was caught in a blast. `points` is the score delta.
    ThreatIntercepted {
        threat: u32,
        position: Point,
        points: u32,
    },
    /// A threat completed its path. `struck` is the structure it hit, if any.
    ThreatLanded {
        threat: u32,
        position: Point,
        struck: Option<StructureRef>,
    },
    /// A structure was flagged destroyed.
    StructureDestroyed { structure: StructureRef },
    /// Every threat of the wave has been spawned and resolved.
    WaveCleared { wave: u32 },
    /// All turrets or all cities are gone.
    Defeat,
}
