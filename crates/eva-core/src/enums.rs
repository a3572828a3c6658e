//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which training mission an engine instance is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    /// Mission 1: neutral-buoyancy pool training (diver, thrusters, bubbles).
    #[default]
    NeutralBuoyancy,
    /// Mission 2: microgravity tool handling (drifting tools, drag to dock).
    Microgravity,
}

/// Mission lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    /// Engine created, world not yet spawned.
    #[default]
    NotStarted,
    /// Ticking; at least one zone unsatisfied.
    InProgress,
    /// Every zone currently satisfied; "Complete Mission" is unlocked.
    /// Under the live policy this can fall back to InProgress.
    AllZonesSatisfied,
    /// User finalized the mission. Terminal.
    Completed,
}

/// How a zone treats threshold crossings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePolicy {
    /// First crossing latches `completed` permanently (Mission 1).
    Sticky,
    /// Satisfaction is `dwell >= threshold`, recomputed every tick (Mission 2).
    Live,
}

/// Zone category. Affects messaging and render styling only, never physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    /// Hatch operation (entry/exit).
    Hatch,
    /// Equipment repair station.
    #[default]
    Repair,
}

/// Render tag for a simulated body. Never consulted by physics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    #[default]
    Diver,
    Wrench,
    Multimeter,
    TorqueDriver,
}

/// Thrust direction mapped from a held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrustDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Named sound effects. Each has its own cooldown in the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CueId {
    /// Thruster burst while any direction key is held (Mission 1).
    ThrustHiss,
    /// Tool being dragged (Mission 2).
    DragWhoosh,
    /// Zone completed under the sticky policy (Mission 1).
    CompletionClank,
    /// Dock crossed its threshold under the live policy (Mission 2).
    StabilizeChime,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
