//! Session controller: score, wave number and game status around one engine.
//!
//! The engine is the single owner of entity state and game status. The session
//! folds the engine's events into score and wave number and issues intents
//! back to it (refill magazines, arm the next wave, conclude the game).

use nova_core::commands::PlayerCommand;
use nova_core::enums::GameStatus;
use nova_core::events::GameEvent;
use nova_core::geometry::Point;
use nova_core::state::GameStateSnapshot;

use crate::engine::{SimConfig, SimulationEngine};

pub struct Session {
    engine: SimulationEngine,
    score: u32,
    wave: u32,
}

impl Session {
    pub fn new(config: SimConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config),
            score: 0,
            wave: 1,
        }
    }

    /// Start a fresh game. Also used to restart after a win or a loss.
    pub fn start(&mut self) {
        self.score = 0;
        self.wave = 1;
        self.engine.start();
        log::info!("session started");
    }

    /// Apply a player command between ticks.
    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if self.status() != GameStatus::Playing {
                    self.start();
                }
            }
            PlayerCommand::Launch { x, y } => {
                self.launch(Point::new(x, y));
            }
        }
    }

    /// Fire an interceptor toward `target`. Ignored unless `Playing`.
    pub fn launch(&mut self, target: Point) -> Option<u32> {
        self.engine.launch(target)
    }

    /// Advance one frame and return the resulting snapshot, including every
    /// event raised during the frame.
    ///
    /// A defeat is settled by the engine inside its tick, so it outranks a win
    /// credited while folding the same frame. Events after a win are dropped.
    pub fn tick(&mut self, delta_ms: f64) -> GameStateSnapshot {
        let events = self.engine.tick(delta_ms);

        for event in &events {
            if self.status() == GameStatus::Won {
                break;
            }
            self.apply_event(event);
        }

        self.engine.snapshot(self.wave, self.score, events)
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.engine.snapshot(self.wave, self.score, Vec::new())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    #[cfg(test)]
    pub fn engine_mut(&mut self) -> &mut SimulationEngine {
        &mut self.engine
    }

    fn apply_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::ThreatIntercepted { points, .. } => self.credit(*points),
            GameEvent::WaveCleared { wave } => self.complete_wave(*wave),
            GameEvent::Defeat => {
                log::info!("defeat on wave {} with score {}", self.wave, self.score);
            }
            GameEvent::ThreatSpawned { .. }
            | GameEvent::InterceptorLaunched { .. }
            | GameEvent::ThreatLanded { .. }
            | GameEvent::StructureDestroyed { .. } => {}
        }
    }

    /// Credit the unused-ammunition bonus, refill magazines and arm the next wave.
    fn complete_wave(&mut self, wave: u32) {
        let rules = self.engine.rules();
        let bonus = self.engine.unused_ammunition() * rules.points_per_unused_round;
        log::info!("wave {wave} cleared, bonus {bonus}");

        self.credit(bonus);
        if self.status() != GameStatus::Playing {
            return;
        }

        self.engine.replenish_magazines();
        self.wave += 1;
        self.engine.begin_wave(self.wave);
    }

    fn credit(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
        if self.status() == GameStatus::Playing && self.score >= self.engine.rules().win_score {
            log::info!("victory with score {}", self.score);
            self.engine.conclude(GameStatus::Won);
        }
    }
}
