//! Mission state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, AudioCue, MissionEvent};
use crate::types::{Position, SimTime, Velocity};

/// Complete mission state handed to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionSnapshot {
    pub time: SimTime,
    pub mission: MissionKind,
    pub phase: MissionPhase,
    pub bodies: Vec<BodyView>,
    pub zones: Vec<ZoneView>,
    pub bubbles: Vec<BubbleView>,
    pub handrails: Vec<HandrailView>,
    /// Zones currently counting toward the aggregate (sticky: ever
    /// completed; live: satisfied right now).
    pub completed_zones: u32,
    pub zone_total: u32,
    /// The "Complete Mission" gate.
    pub all_satisfied: bool,
    /// Task line shown in the HUD (Mission 1).
    pub current_task: String,
    pub alerts: Vec<Alert>,
    pub events: Vec<MissionEvent>,
    pub audio_cues: Vec<AudioCue>,
}

/// A simulated body (diver or tool) for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyView {
    pub kind: BodyKind,
    pub label: String,
    pub position: Position,
    pub velocity: Velocity,
    /// Speed magnitude, px/s (drives sprite rotation in the renderer).
    pub speed: f64,
}

/// A zone with its live tracking state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneView {
    pub index: usize,
    pub kind: ZoneKind,
    pub label: String,
    pub center: Position,
    pub radius: f64,
    /// Accumulated dwell seconds, clamped to [0, threshold].
    pub dwell_secs: f64,
    pub threshold_secs: f64,
    /// `dwell >= threshold` this tick.
    pub satisfied: bool,
    /// Sticky completion latch (always false under the live policy).
    pub completed: bool,
    /// dwell / threshold, for progress rings and "x.x / 6s" readouts.
    pub progress: f64,
}

/// A decorative bubble for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BubbleView {
    pub position: Position,
    pub size: f64,
    pub opacity: f64,
    /// Remaining normalized life; the renderer fades alpha by this.
    pub life: f64,
}

/// A decorative handrail segment for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandrailView {
    pub start: Position,
    pub length: f64,
    pub angle_degrees: f64,
}
