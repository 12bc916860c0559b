//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod blast;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod wave_spawner;
pub mod wave_status;
