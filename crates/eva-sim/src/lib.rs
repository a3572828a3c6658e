//! Simulation engine for the EVA training missions.
//!
//! Owns the hecs ECS world, advances it with variable time steps,
//! and produces MissionSnapshots for the frontend.

pub mod audio;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{MissionConfig, MissionEngine};
pub use eva_core as core;
