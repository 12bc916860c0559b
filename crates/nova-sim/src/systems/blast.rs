//! Blast lifecycle: triangular radius profile and expiry.

use hecs::{Entity, World};

use nova_core::components::Blast;

/// Radius of a blast `elapsed` ms into its life.
///
/// Rises linearly from 0 to `max_radius` over the first half of `duration`,
/// falls linearly back to 0 over the second half, clamped to `[0, max_radius]`.
/// A blast with no positive size or lifetime never has a radius.
pub fn radius_at(max_radius: f64, duration: f64, elapsed: f64) -> f64 {
    if duration.is_nan() || duration <= 0.0 || max_radius.is_nan() || max_radius <= 0.0 {
        return 0.0;
    }
    let p = elapsed / duration;
    let radius = if p < 0.5 {
        max_radius * (p * 2.0)
    } else {
        max_radius * (1.0 - (p - 0.5) * 2.0)
    };
    radius.clamp(0.0, max_radius)
}

/// Age every blast by `delta_ms`, update its radius and remove expired ones.
pub fn run(world: &mut World, delta_ms: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, blast) in world.query_mut::<&mut Blast>() {
        blast.elapsed += delta_ms;
        blast.radius = radius_at(blast.max_radius, blast.duration, blast.elapsed);
        if blast.elapsed >= blast.duration {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
