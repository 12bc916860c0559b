//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//! Every moving or placed entity also carries a [`crate::types::Position`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::StructureKind;
use crate::geometry::Point;

/// A descending projectile aimed at a turret or city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    pub id: u32,
    /// Spawn point on the top edge of the playfield.
    pub origin: Point,
    /// Impact point (the targeted structure's position).
    pub target: Point,
    /// Structure this threat was aimed at when spawned.
    pub aimed_at: StructureRef,
    /// Progress per reference frame.
    pub speed: f64,
    /// Path completion in [0, 1]. Never decreases.
    pub progress: f64,
}

/// A player-launched projectile that detonates at its target point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interceptor {
    pub id: u32,
    /// Turret this interceptor was fired from.
    pub turret: StructureRef,
    pub launch: Point,
    pub target: Point,
    /// Progress per reference frame.
    pub speed: f64,
    pub progress: f64,
    /// Set once the detonation blast has been spawned.
    pub exploded: bool,
}

/// An expanding-then-contracting destructive radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blast {
    pub id: u32,
    pub radius: f64,
    pub max_radius: f64,
    /// Total lifetime in ms.
    pub duration: f64,
    /// Time alive in ms.
    pub elapsed: f64,
}

/// A defended structure: either a turret or a city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Structure {
    pub kind: StructureKind,
    /// 1-based, unique per kind.
    pub id: u32,
    /// Set permanently once a threat lands on this structure.
    pub destroyed: bool,
}

/// Interceptor stock held by a turret.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Magazine {
    pub ammo: u32,
    pub max_ammo: u32,
}

/// Reference to a structure by kind and id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StructureRef {
    pub kind: StructureKind,
    pub id: u32,
}

impl fmt::Display for StructureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.id)
    }
}
