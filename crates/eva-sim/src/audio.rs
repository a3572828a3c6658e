//! Cooldown gating for audio cues.
//!
//! Systems request a cue every tick the triggering condition holds; the
//! dispatcher passes a request through only when the per-cue cooldown has
//! elapsed, so a held thrust key produces a steady pulse of hisses instead
//! of one per tick. One-shot cues (clank, chime) have no cooldown and are
//! edge-triggered by their callers.

use std::collections::HashMap;

use eva_core::constants::{
    COMPLETION_CUE_VOLUME, HISS_COOLDOWN_SECS, MOVEMENT_CUE_VOLUME, WHOOSH_COOLDOWN_SECS,
};
use eva_core::enums::CueId;
use eva_core::events::AudioCue;

/// Per-engine cue gate. State is keyed on elapsed simulation time, so
/// two engines fed the same commands stay in lockstep.
#[derive(Debug, Default)]
pub struct CueDispatcher {
    last_fired: HashMap<CueId, f64>,
}

impl CueDispatcher {
    /// Request a cue at simulation time `now`. Returns the cue to play if
    /// at least the cooldown has passed since it last fired, else None.
    pub fn request(&mut self, cue: CueId, now: f64) -> Option<AudioCue> {
        if let Some(&last) = self.last_fired.get(&cue) {
            if now - last < cooldown_secs(cue) {
                return None;
            }
        }
        self.last_fired.insert(cue, now);
        Some(AudioCue {
            cue,
            volume: volume_for(cue),
        })
    }
}

/// Minimum seconds between repeats of a cue.
fn cooldown_secs(cue: CueId) -> f64 {
    match cue {
        CueId::ThrustHiss => HISS_COOLDOWN_SECS,
        CueId::DragWhoosh => WHOOSH_COOLDOWN_SECS,
        CueId::CompletionClank | CueId::StabilizeChime => 0.0,
    }
}

/// Playback volume for a cue.
fn volume_for(cue: CueId) -> f32 {
    match cue {
        CueId::ThrustHiss | CueId::DragWhoosh => MOVEMENT_CUE_VOLUME,
        CueId::CompletionClank | CueId::StabilizeChime => COMPLETION_CUE_VOLUME,
    }
}
