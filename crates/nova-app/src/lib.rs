//! Nova Defense application driver.
//!
//! Wires a simulation session to a real-time game loop thread, maps pointer
//! input into the playfield and supplies a demo autopilot for the headless
//! binary.

pub mod autopilot;
pub mod config;
pub mod frame_clock;
pub mod game_loop;
pub mod state;
pub mod viewport;

pub use nova_core as core;
