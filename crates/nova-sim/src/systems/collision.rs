//! Blast/threat collision: circular radius test with chain reactions.

use hecs::{Entity, World};

use nova_core::components::{Blast, Threat};
use nova_core::config::Rules;
use nova_core::events::GameEvent;
use nova_core::geometry::{distance, Point};
use nova_core::types::Position;

use crate::world_setup::{self, EntityIds};

/// Destroy every threat strictly inside a blast radius.
///
/// Blasts are checked in id order. A destroyed threat is removed from further
/// checks, scores `points_per_threat` and leaves a secondary blast at its
/// position. Secondary blasts start at radius 0 and begin to grow next tick.
pub fn run(
    world: &mut World,
    ids: &mut EntityIds,
    rules: &Rules,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    let mut blasts: Vec<(u32, Point, f64)> = world
        .query::<(&Blast, &Position)>()
        .iter()
        .filter(|(_, (blast, _))| blast.radius > 0.0)
        .map(|(_, (blast, pos))| (blast.id, pos.point(), blast.radius))
        .collect();
    blasts.sort_by_key(|&(id, _, _)| id);

    let mut threats: Vec<(Entity, u32, Point)> = world
        .query::<(&Threat, &Position)>()
        .iter()
        .map(|(entity, (threat, pos))| (entity, threat.id, pos.point()))
        .collect();
    threats.sort_by_key(|&(_, id, _)| id);

    let mut destroyed: Vec<(u32, Point)> = Vec::new();
    for &(_blast_id, center, radius) in &blasts {
        threats.retain(|&(entity, threat_id, position)| {
            if distance(position, center) < radius {
                despawn_buffer.push(entity);
                destroyed.push((threat_id, position));
                false
            } else {
                true
            }
        });
    }

    for (threat, position) in destroyed {
        world_setup::spawn_blast(world, ids, rules, position);
        events.push(GameEvent::ThreatIntercepted {
            threat,
            position,
            points: rules.points_per_threat,
        });
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
