//! Audio cue playback sinks.
//!
//! Cues arrive already gated by the engine's cooldown dispatcher. Playback
//! is fire-and-forget: the runner logs a failed `play` and moves on, and
//! the simulation never observes the outcome.

use eva_core::events::AudioCue;

/// Plays the audio cues emitted on each snapshot.
///
/// Implementations run on the runner thread, so they must be `Send` and
/// should return quickly (hand off to a mixer rather than block).
pub trait CueSink: Send {
    fn play(&mut self, cue: AudioCue) -> Result<(), String>;
}

/// Discards every cue. The default for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl CueSink for NullSink {
    fn play(&mut self, _cue: AudioCue) -> Result<(), String> {
        Ok(())
    }
}

/// Writes cues to stderr. A stand-in for shells without an audio device.
#[derive(Debug, Default)]
pub struct LogSink;

impl CueSink for LogSink {
    fn play(&mut self, cue: AudioCue) -> Result<(), String> {
        eprintln!("cue {:?} at volume {:.1}", cue.cue, cue.volume);
        Ok(())
    }
}
