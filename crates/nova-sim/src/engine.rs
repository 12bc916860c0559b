//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world (threats, interceptors, blasts
//! and the turret/city roster), advances it by an elapsed-time delta and
//! reports what happened as `GameEvent`s. Completely headless, enabling
//! deterministic testing.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use nova_core::components::{Magazine, Structure, StructureRef};
use nova_core::config::Rules;
use nova_core::enums::{GameStatus, StructureKind};
use nova_core::events::GameEvent;
use nova_core::geometry::Point;
use nova_core::state::GameStateSnapshot;
use nova_core::types::{Position, SimTime};

use crate::systems;
use crate::systems::wave_spawner::WaveProgress;
use crate::world_setup::{self, EntityIds};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub rules: Rules,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            rules: Rules::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all transient sim state.
pub struct SimulationEngine {
    world: World,
    rules: Rules,
    time: SimTime,
    status: GameStatus,
    rng: ChaCha8Rng,
    ids: EntityIds,
    wave: WaveProgress,
    despawn_buffer: Vec<Entity>,
    /// Events raised outside `tick` (launches), delivered with the next tick.
    pending_events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            rules: config.rules,
            time: SimTime::default(),
            status: GameStatus::Start,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ids: EntityIds::default(),
            wave: WaveProgress::default(),
            despawn_buffer: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Reset to the initial layout, arm wave 1 and enter `Playing`.
    pub fn start(&mut self) {
        self.world.clear();
        self.ids = EntityIds::default();
        self.time = SimTime::default();
        self.pending_events.clear();
        world_setup::setup_defenses(&mut self.world, &self.rules);
        self.status = GameStatus::Playing;
        self.begin_wave(1);
    }

    /// Arm wave `number`: reset its spawn counter and mark it in progress.
    pub fn begin_wave(&mut self, number: u32) {
        self.wave = WaveProgress::begin(&self.rules, number);
        log::info!(
            "wave {number} begins: {} threats, one every {} ms",
            self.wave.remaining,
            self.rules.spawn_interval_ms(number)
        );
    }

    /// Advance the world by `delta_ms` and return the events raised since the
    /// previous call.
    ///
    /// Only simulates while `Playing`. Zero, negative or non-finite deltas are
    /// skipped without advancing time.
    pub fn tick(&mut self, delta_ms: f64) -> Vec<GameEvent> {
        let mut events = std::mem::take(&mut self.pending_events);

        if self.status != GameStatus::Playing {
            return events;
        }
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            log::debug!("skipping frame with delta {delta_ms}");
            return events;
        }

        self.run_systems(delta_ms, &mut events);
        self.time.advance(delta_ms);

        if systems::wave_status::is_defeated(&self.world) {
            log::info!("defenses lost at frame {}", self.time.frame);
            self.status = GameStatus::Lost;
            events.push(GameEvent::Defeat);
        }

        events
    }

    /// Fire an interceptor at `target` from the best available turret.
    ///
    /// The turret is the standing one with ammunition whose horizontal
    /// distance to the target is smallest; ties go to the lowest id. Returns
    /// the interceptor id, or `None` if the command was ignored.
    pub fn launch(&mut self, target: Point) -> Option<u32> {
        if self.status != GameStatus::Playing {
            log::debug!("launch ignored: status is {:?}", self.status);
            return None;
        }

        let Some((entity, turret, launch)) = self.select_turret(target) else {
            log::debug!("launch ignored: no turret can fire at {target}");
            return None;
        };

        if let Ok(mut magazine) = self.world.get::<&mut Magazine>(entity) {
            magazine.ammo -= 1;
        }

        let interceptor = world_setup::spawn_interceptor(
            &mut self.world,
            &mut self.ids,
            &self.rules,
            turret,
            launch,
            target,
        );
        log::debug!("interceptor {interceptor} away from {turret} toward {target}");
        self.pending_events.push(GameEvent::InterceptorLaunched {
            interceptor,
            turret,
            target,
        });
        Some(interceptor)
    }

    /// Refill the magazine of every standing turret.
    pub fn replenish_magazines(&mut self) {
        for (_entity, (structure, magazine)) in
            self.world.query_mut::<(&Structure, &mut Magazine)>()
        {
            if !structure.destroyed {
                magazine.ammo = magazine.max_ammo;
            }
        }
    }

    /// Rounds left in all standing turrets.
    pub fn unused_ammunition(&self) -> u32 {
        self.world
            .query::<(&Structure, &Magazine)>()
            .iter()
            .filter(|(_, (structure, _))| !structure.destroyed)
            .map(|(_, (_, magazine))| magazine.ammo)
            .sum()
    }

    /// End the game with a terminal outcome. Ignored unless `Playing`.
    pub fn conclude(&mut self, outcome: GameStatus) {
        if self.status == GameStatus::Playing && outcome.is_terminal() {
            self.status = outcome;
        }
    }

    /// Build a snapshot of the world for a renderer.
    pub fn snapshot(&self, wave: u32, score: u32, events: Vec<GameEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, self.status, wave, score, events)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Wave currently armed in the spawner.
    pub fn wave(&self) -> u32 {
        self.wave.number
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a threat with explicit parameters (for tests).
    #[cfg(test)]
    pub fn spawn_test_threat(&mut self, origin: Point, target: Point, speed: f64) -> u32 {
        let id = self.ids.next_threat();
        let aimed_at = world_setup::standing_structures(&self.world)
            .into_iter()
            .find(|&(_, position)| position == target)
            .map(|(structure, _)| structure)
            .unwrap_or(StructureRef {
                kind: StructureKind::City,
                id: 0,
            });
        world_setup::spawn_threat_at(&mut self.world, id, origin, target, aimed_at, speed);
        id
    }

    /// Spawn a blast that has already been alive for `elapsed` ms (for tests).
    #[cfg(test)]
    pub fn spawn_test_blast(&mut self, center: Point, elapsed: f64) -> u32 {
        let id = world_setup::spawn_blast(&mut self.world, &mut self.ids, &self.rules, center);
        for (_entity, blast) in self.world.query_mut::<&mut nova_core::components::Blast>() {
            if blast.id == id {
                blast.elapsed = elapsed;
                blast.radius =
                    systems::blast::radius_at(blast.max_radius, blast.duration, elapsed);
            }
        }
        id
    }

    /// Override the number of threats left to spawn this wave (for tests).
    #[cfg(test)]
    pub fn set_spawn_remaining(&mut self, remaining: u32) {
        self.wave.remaining = remaining;
    }

    /// Choose the turret for a launch: (entity, reference, position).
    fn select_turret(&self, target: Point) -> Option<(Entity, StructureRef, Point)> {
        let mut candidates: Vec<(Entity, StructureRef, Point)> = self
            .world
            .query::<(&Structure, &Position, &Magazine)>()
            .iter()
            .filter(|(_, (structure, _, magazine))| {
                structure.kind == StructureKind::Turret && !structure.destroyed && magazine.ammo > 0
            })
            .map(|(entity, (structure, pos, _))| {
                (
                    entity,
                    StructureRef {
                        kind: structure.kind,
                        id: structure.id,
                    },
                    pos.point(),
                )
            })
            .collect();
        candidates.sort_by_key(|&(_, turret, _)| turret);

        // min_by keeps the first of equal elements.
        candidates.into_iter().min_by(|a, b| {
            let da = (a.2.x - target.x).abs();
            let db = (b.2.x - target.x).abs();
            da.total_cmp(&db)
        })
    }

    /// Run all systems in order.
    fn run_systems(&mut self, delta_ms: f64, events: &mut Vec<GameEvent>) {
        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.ids,
            &self.rules,
            &mut self.wave,
            delta_ms,
            events,
        );
        // 2. Threat motion and impacts
        systems::movement::run_threats(
            &mut self.world,
            &mut self.ids,
            &self.rules,
            delta_ms,
            &mut self.despawn_buffer,
            events,
        );
        // 3. Interceptor motion and detonation
        systems::movement::run_interceptors(
            &mut self.world,
            &mut self.ids,
            &self.rules,
            delta_ms,
            &mut self.despawn_buffer,
        );
        // 4. Blast growth, decay and expiry
        systems::blast::run(&mut self.world, delta_ms, &mut self.despawn_buffer);
        // 5. Blast/threat collisions
        systems::collision::run(
            &mut self.world,
            &mut self.ids,
            &self.rules,
            &mut self.despawn_buffer,
            events,
        );
        // 6. Wave completion
        systems::wave_status::check_wave_complete(&self.world, &mut self.wave, events);
    }
}
