//! Simulation engine for Nova Defense.
//!
//! Owns the hecs ECS world, advances it by elapsed-time deltas,
//! and produces GameStateSnapshots for a renderer. The session
//! controller layers score, waves and win/loss status on top.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use nova_core as core;
pub use session::Session;
