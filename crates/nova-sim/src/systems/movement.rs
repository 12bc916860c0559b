//! Path integration for threats and interceptors.
//!
//! Both kinds advance a normalized progress value by
//! `speed * delta_ms / REFERENCE_FRAME_MS` and derive their position by
//! interpolating along a fixed start/end segment.

use hecs::{Entity, World};

use nova_core::components::{Interceptor, Structure, StructureRef, Threat};
use nova_core::config::Rules;
use nova_core::constants::REFERENCE_FRAME_MS;
use nova_core::events::GameEvent;
use nova_core::geometry::{lerp_point, within_box, Point};
use nova_core::types::Position;

use crate::world_setup::{self, EntityIds};

/// Progress gained over `delta_ms` at `speed` progress per reference frame.
pub fn progress_step(speed: f64, delta_ms: f64) -> f64 {
    speed * (delta_ms / REFERENCE_FRAME_MS)
}

/// Move every threat toward its target and resolve the ones that arrived.
///
/// An arriving threat flags each structure within the impact tolerance box as
/// destroyed, leaves a blast at the impact point and is removed.
pub fn run_threats(
    world: &mut World,
    ids: &mut EntityIds,
    rules: &Rules,
    delta_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();
    let mut impacts: Vec<(u32, Point)> = Vec::new();

    for (entity, (threat, pos)) in world.query_mut::<(&mut Threat, &mut Position)>() {
        threat.progress += progress_step(threat.speed, delta_ms);
        pos.0 = lerp_point(threat.origin, threat.target, threat.progress.min(1.0));

        if threat.progress >= 1.0 {
            impacts.push((threat.id, threat.target));
            despawn_buffer.push(entity);
        }
    }

    for (threat, impact_point) in impacts {
        let struck = strike_structures(world, rules, impact_point, events);
        world_setup::spawn_blast(world, ids, rules, impact_point);
        log::debug!("threat {threat} landed at {impact_point} (struck: {struck:?})");
        events.push(GameEvent::ThreatLanded {
            threat,
            position: impact_point,
            struck,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Flag every structure inside the tolerance box around `impact_point`.
/// Returns the first structure hit, in id order.
fn strike_structures(
    world: &mut World,
    rules: &Rules,
    impact_point: Point,
    events: &mut Vec<GameEvent>,
) -> Option<StructureRef> {
    let mut struck: Vec<StructureRef> = Vec::new();

    for (_entity, (structure, pos)) in world.query_mut::<(&mut Structure, &Position)>() {
        if !within_box(pos.point(), impact_point, rules.impact_tolerance) {
            continue;
        }
        let structure_ref = StructureRef {
            kind: structure.kind,
            id: structure.id,
        };
        if !structure.destroyed {
            structure.destroyed = true;
            events.push(GameEvent::StructureDestroyed {
                structure: structure_ref,
            });
        }
        struck.push(structure_ref);
    }

    struck.into_iter().min()
}

/// Move every interceptor toward its aim point. On arrival an interceptor
/// detonates once (guarded by `exploded`) and is removed.
pub fn run_interceptors(
    world: &mut World,
    ids: &mut EntityIds,
    rules: &Rules,
    delta_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut detonations: Vec<Point> = Vec::new();

    for (entity, (interceptor, pos)) in world.query_mut::<(&mut Interceptor, &mut Position)>() {
        interceptor.progress += progress_step(interceptor.speed, delta_ms);
        pos.0 = lerp_point(
            interceptor.launch,
            interceptor.target,
            interceptor.progress.min(1.0),
        );

        if interceptor.progress >= 1.0 {
            if !interceptor.exploded {
                interceptor.exploded = true;
                detonations.push(interceptor.target);
            }
            despawn_buffer.push(entity);
        }
    }

    for center in detonations {
        world_setup::spawn_blast(world, ids, rules, center);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
