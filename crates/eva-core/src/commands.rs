//! Input commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, so a tick
//! always observes the latest input state with no partial updates.

use serde::{Deserialize, Serialize};

use crate::enums::ThrustDirection;

/// All possible host/user actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MissionCommand {
    /// Spawn the mission world and begin ticking.
    Start,

    // --- Keyboard (Mission 1) ---
    /// A direction key went down (`active: true`) or up (`active: false`).
    SetThrust {
        direction: ThrustDirection,
        active: bool,
    },

    // --- Pointer (Mission 2) ---
    /// Pointer pressed at field-relative coordinates. Begins a drag if a
    /// tool is within pick distance; otherwise silently ignored.
    PointerDown { x: f64, y: f64 },
    /// Pointer moved. Only meaningful during a drag.
    PointerMove { x: f64, y: f64 },
    /// Pointer released; the dragged tool keeps its residual velocity.
    PointerUp,

    // --- Mission control ---
    /// Finalize the mission. Rejected with an alert while any zone is
    /// unsatisfied.
    CompleteMission,
}
