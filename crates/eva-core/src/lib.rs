//! Core types and definitions for the EVA trainer simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, layouts, and constants.
//! It has no dependency on any rendering or windowing framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod content;
pub mod enums;
pub mod events;
pub mod layout;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
