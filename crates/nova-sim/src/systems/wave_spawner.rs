//! Wave spawning system: releases the wave's threats one at a time.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use nova_core::config::Rules;
use nova_core::events::GameEvent;

use crate::world_setup::{self, EntityIds};

/// Spawn bookkeeping for the wave in progress.
#[derive(Debug, Clone, Default)]
pub struct WaveProgress {
    /// 1-based wave number.
    pub number: u32,
    /// Threats still to be spawned this wave.
    pub remaining: u32,
    /// Time accumulated toward the next spawn (ms).
    pub spawn_timer_ms: f64,
    /// Cleared when the wave-complete event fires.
    pub in_progress: bool,
}

impl WaveProgress {
    /// Arm a new wave.
    pub fn begin(rules: &Rules, number: u32) -> Self {
        Self {
            number,
            remaining: rules.threats_in_wave(number),
            spawn_timer_ms: 0.0,
            in_progress: true,
        }
    }
}

/// Advance the spawn timer and release a threat when the interval elapses.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ids: &mut EntityIds,
    rules: &Rules,
    wave: &mut WaveProgress,
    delta_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    if wave.remaining == 0 {
        return;
    }

    wave.spawn_timer_ms += delta_ms;
    if wave.spawn_timer_ms <= rules.spawn_interval_ms(wave.number) {
        return;
    }
    wave.spawn_timer_ms = 0.0;
    wave.remaining -= 1;

    // With no standing structures the defense is already lost; the slot is consumed anyway.
    match world_setup::spawn_threat(world, rng, ids, rules, wave.number) {
        Some((threat, target)) => events.push(GameEvent::ThreatSpawned { threat, target }),
        None => log::debug!("wave {}: no standing targets, spawn skipped", wave.number),
    }
}
