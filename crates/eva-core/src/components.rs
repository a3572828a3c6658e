//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Simulation logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Identity and render tag shared by every simulated body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub kind: BodyKind,
    /// Display label ("Diver", "Wrench", "Multimeter", ...).
    pub label: String,
}

/// Static zone definition (never mutated after spawn).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Index in the mission layout. Under the live policy this also pairs
    /// the zone with the tool of the same index.
    pub index: usize,
    pub center: Position,
    pub radius: f64,
    pub kind: ZoneKind,
    pub label: String,
    /// Dwell seconds required to satisfy the zone.
    pub threshold_secs: f64,
    pub policy: ZonePolicy,
}

/// Mutable zone tracking state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Dwell {
    /// Accumulated in-zone time, clamped to [0, threshold].
    pub seconds: f64,
    /// `dwell >= threshold` as of the last tick.
    pub satisfied: bool,
    /// Latched true on first satisfaction. Only meaningful under Sticky.
    pub completed: bool,
}

/// Decorative bubble particle attributes (size px, opacity 0..1).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bubble {
    pub size: f64,
    pub opacity: f64,
}

/// Remaining normalized life of a short-lived entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifetime {
    pub remaining: f64,
}

/// Decorative station handrail (render only, no physics).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Handrail {
    pub start: Position,
    pub length: f64,
    pub angle_degrees: f64,
}

/// Marks the player-controlled diver (Mission 1).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Diver;

/// Marks a floating tool (Mission 2) and records its layout index.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tool {
    pub index: usize,
}

// Position and Velocity are defined in types.rs and attached as
// components alongside the above.
