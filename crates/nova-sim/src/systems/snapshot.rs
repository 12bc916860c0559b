//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use nova_core::components::*;
use nova_core::enums::{GameStatus, StructureKind};
use nova_core::events::GameEvent;
use nova_core::state::*;
use nova_core::types::{Position, SimTime};

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    status: GameStatus,
    wave: u32,
    score: u32,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        status,
        wave,
        score,
        threats: build_threats(world),
        interceptors: build_interceptors(world),
        blasts: build_blasts(world),
        turrets: build_turrets(world),
        cities: build_cities(world),
        events,
    }
}

fn build_threats(world: &World) -> Vec<ThreatView> {
    let mut threats: Vec<ThreatView> = world
        .query::<(&Threat, &Position)>()
        .iter()
        .map(|(_, (threat, pos))| ThreatView {
            id: threat.id,
            position: pos.point(),
            origin: threat.origin,
            target: threat.target,
            progress: threat.progress,
            speed: threat.speed,
        })
        .collect();

    threats.sort_by_key(|t| t.id);
    threats
}

fn build_interceptors(world: &World) -> Vec<InterceptorView> {
    let mut interceptors: Vec<InterceptorView> = world
        .query::<(&Interceptor, &Position)>()
        .iter()
        .map(|(_, (interceptor, pos))| InterceptorView {
            id: interceptor.id,
            position: pos.point(),
            launch: interceptor.launch,
            target: interceptor.target,
            progress: interceptor.progress,
        })
        .collect();

    interceptors.sort_by_key(|i| i.id);
    interceptors
}

fn build_blasts(world: &World) -> Vec<BlastView> {
    let mut blasts: Vec<BlastView> = world
        .query::<(&Blast, &Position)>()
        .iter()
        .map(|(_, (blast, pos))| BlastView {
            id: blast.id,
            center: pos.point(),
            radius: blast.radius,
            max_radius: blast.max_radius,
        })
        .collect();

    blasts.sort_by_key(|b| b.id);
    blasts
}

fn build_turrets(world: &World) -> Vec<TurretView> {
    let mut turrets: Vec<TurretView> = world
        .query::<(&Structure, &Position, &Magazine)>()
        .iter()
        .filter(|(_, (structure, _, _))| structure.kind == StructureKind::Turret)
        .map(|(_, (structure, pos, magazine))| {
            let structure_ref = StructureRef {
                kind: structure.kind,
                id: structure.id,
            };
            TurretView {
                structure: structure_ref,
                label: structure_ref.to_string(),
                position: pos.point(),
                ammo: magazine.ammo,
                max_ammo: magazine.max_ammo,
                destroyed: structure.destroyed,
            }
        })
        .collect();

    turrets.sort_by_key(|t| t.structure);
    turrets
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut cities: Vec<CityView> = world
        .query::<(&Structure, &Position)>()
        .iter()
        .filter(|(_, (structure, _))| structure.kind == StructureKind::City)
        .map(|(_, (structure, pos))| {
            let structure_ref = StructureRef {
                kind: structure.kind,
                id: structure.id,
            };
            CityView {
                structure: structure_ref,
                label: structure_ref.to_string(),
                position: pos.point(),
                destroyed: structure.destroyed,
            }
        })
        .collect();

    cities.sort_by_key(|c| c.structure);
    cities
}
