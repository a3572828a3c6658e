//! EVA training mission host.
//!
//! This crate wires the simulation engine to a host shell: a runner thread
//! that ticks the engine at display rate and publishes snapshots, plus
//! keyboard/pointer translation, coarse status polling, and audio cue
//! playback.

pub mod audio;
pub mod input;
pub mod runner;
pub mod status;

pub use eva_core as core;
