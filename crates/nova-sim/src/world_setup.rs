//! Entity spawn factories for setting up the simulation world.
//!
//! Creates turrets, cities, threats, interceptors and blasts with
//! appropriate component bundles.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nova_core::components::*;
use nova_core::config::Rules;
use nova_core::enums::StructureKind;
use nova_core::geometry::Point;
use nova_core::types::Position;

/// Per-kind identity counters. Ids start at 1 and only ever increase.
#[derive(Debug, Clone, Default)]
pub struct EntityIds {
    threats: u32,
    interceptors: u32,
    blasts: u32,
}

impl EntityIds {
    pub fn next_threat(&mut self) -> u32 {
        self.threats += 1;
        self.threats
    }

    pub fn next_interceptor(&mut self) -> u32 {
        self.interceptors += 1;
        self.interceptors
    }

    pub fn next_blast(&mut self) -> u32 {
        self.blasts += 1;
        self.blasts
    }
}

/// Spawn the defended structures: turrets with full magazines, then cities.
pub fn setup_defenses(world: &mut World, rules: &Rules) {
    for (i, &position) in rules.turrets.iter().enumerate() {
        world.spawn((
            Structure {
                kind: StructureKind::Turret,
                id: i as u32 + 1,
                destroyed: false,
            },
            Position(position),
            Magazine {
                ammo: rules.turret_max_ammo,
                max_ammo: rules.turret_max_ammo,
            },
        ));
    }

    for (i, &position) in rules.cities.iter().enumerate() {
        world.spawn((
            Structure {
                kind: StructureKind::City,
                id: i as u32 + 1,
                destroyed: false,
            },
            Position(position),
        ));
    }
}

/// All standing structures, turrets first, each kind in id order.
pub fn standing_structures(world: &World) -> Vec<(StructureRef, Point)> {
    let mut standing: Vec<(StructureRef, Point)> = world
        .query::<(&Structure, &Position)>()
        .iter()
        .filter(|(_, (structure, _))| !structure.destroyed)
        .map(|(_, (structure, pos))| {
            (
                StructureRef {
                    kind: structure.kind,
                    id: structure.id,
                },
                pos.point(),
            )
        })
        .collect();

    standing.sort_by_key(|(structure, _)| *structure);
    standing
}

/// Spawn one threat at a random point on the top edge, aimed at a random
/// standing structure. Returns `None` when nothing is left to aim at.
pub fn spawn_threat(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut EntityIds,
    rules: &Rules,
    wave: u32,
) -> Option<(u32, StructureRef)> {
    let targets = standing_structures(world);
    if targets.is_empty() {
        return None;
    }

    let origin = Point::new(rng.gen::<f64>() * rules.width, 0.0);
    let (aimed_at, target) = targets[rng.gen_range(0..targets.len())];
    let base_speed =
        rules.threat_speed_min + rng.gen::<f64>() * (rules.threat_speed_max - rules.threat_speed_min);
    let speed = base_speed * rules.threat_speed_multiplier(wave);

    let id = ids.next_threat();
    spawn_threat_at(world, id, origin, target, aimed_at, speed);
    Some((id, aimed_at))
}

/// Spawn a threat with fully specified parameters.
pub fn spawn_threat_at(
    world: &mut World,
    id: u32,
    origin: Point,
    target: Point,
    aimed_at: StructureRef,
    speed: f64,
) -> Entity {
    world.spawn((
        Threat {
            id,
            origin,
            target,
            aimed_at,
            speed,
            progress: 0.0,
        },
        Position(origin),
    ))
}

/// Spawn an interceptor leaving `turret` at `launch`, heading for `target`.
pub fn spawn_interceptor(
    world: &mut World,
    ids: &mut EntityIds,
    rules: &Rules,
    turret: StructureRef,
    launch: Point,
    target: Point,
) -> u32 {
    let id = ids.next_interceptor();
    world.spawn((
        Interceptor {
            id,
            turret,
            launch,
            target,
            speed: rules.interceptor_speed,
            progress: 0.0,
            exploded: false,
        },
        Position(launch),
    ));
    id
}

/// Spawn a fresh blast (radius 0) centered on `center`.
pub fn spawn_blast(world: &mut World, ids: &mut EntityIds, rules: &Rules, center: Point) -> u32 {
    let id = ids.next_blast();
    world.spawn((
        Blast {
            id,
            radius: 0.0,
            max_radius: rules.blast_max_radius,
            duration: rules.blast_duration_ms,
            elapsed: 0.0,
        },
        Position(center),
    ));
    id
}
