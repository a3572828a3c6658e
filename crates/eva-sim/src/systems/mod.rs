//! Systems that advance the mission world each tick.
//!
//! Systems are free functions over `&mut World` plus whatever engine
//! state they need. All persistent state lives in components or on the
//! engine — systems own nothing between ticks.

pub mod bubbles;
pub mod cleanup;
pub mod physics;
pub mod snapshot;
pub mod thrust;
pub mod zones;
