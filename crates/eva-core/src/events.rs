//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A sound effect that passed the cooldown gate this tick.
/// The host plays it fire-and-forget; playback failure is swallowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AudioCue {
    pub cue: CueId,
    pub volume: f32,
}

/// One-shot mission events for the hosting view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MissionEvent {
    /// A sticky zone completed (fires at most once per zone).
    ZoneCompleted {
        zone_index: usize,
        label: String,
        kind: ZoneKind,
    },
    /// A live zone crossed its threshold upward (may re-fire after decay).
    ZoneStabilized { zone_index: usize, label: String },
    /// All live zones satisfied for the first time; the host shows the
    /// debrief popup. Never re-fires, even if satisfaction later decays.
    DebriefReady,
    /// The user finalized the mission. Fires exactly once per engine.
    MissionCompleted,
}

/// Alert for the UI message queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
