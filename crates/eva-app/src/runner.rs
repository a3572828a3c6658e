//! Mission runner thread — ticks the engine at display rate and publishes
//! snapshots.
//!
//! The engine is created inside the loop thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Each tick stores the
//! snapshot in shared state for synchronous polling, plays the gated audio
//! cues, refreshes the status line on a coarse cadence, and fires the
//! host's completion callback when the mission-completed event arrives.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use eva_core::commands::MissionCommand;
use eva_core::constants::MAX_TICK_STEP_SECS;
use eva_core::content;
use eva_core::events::MissionEvent;
use eva_core::state::MissionSnapshot;
use eva_sim::engine::{MissionConfig, MissionEngine};

use crate::audio::CueSink;
use crate::status::StatusBoard;

/// Nominal duration of one frame at display rate.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Commands sent from the host to the runner thread.
#[derive(Debug)]
pub enum RunnerCommand {
    /// A mission command to forward to the simulation engine.
    Mission(MissionCommand),
    /// Shut down the runner thread gracefully.
    Shutdown,
}

/// Completion callback, invoked at most once.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// Measures wall-clock frame deltas for variable-step ticking.
///
/// Deltas are clamped to the engine's maximum step, so a stalled thread
/// (debugger, suspended machine) resumes smoothly instead of teleporting
/// the simulation forward.
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call, clamped to `MAX_TICK_STEP_SECS`.
    pub fn step(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt.min(MAX_TICK_STEP_SECS)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the runner thread for one mission: the command channel, the shared
/// snapshot and status cells, and a stop flag joined on `stop()` or drop.
pub struct MissionRunner {
    command_tx: mpsc::Sender<RunnerCommand>,
    stop_flag: Arc<AtomicBool>,
    latest_snapshot: Arc<Mutex<Option<MissionSnapshot>>>,
    status: Arc<Mutex<String>>,
    handle: Option<JoinHandle<()>>,
}

impl MissionRunner {
    /// Spawns the runner thread.
    ///
    /// `sink` receives the gated audio cues. `on_complete` fires once, on
    /// the engine's mission-completed event, never on the status poll.
    pub fn spawn(
        config: MissionConfig,
        sink: Box<dyn CueSink>,
        on_complete: Option<CompletionCallback>,
    ) -> Self {
        let mission = config.mission;
        let (command_tx, command_rx) = mpsc::channel::<RunnerCommand>();
        let stop_flag = Arc::new(AtomicBool::new(false));
        let latest_snapshot: Arc<Mutex<Option<MissionSnapshot>>> = Arc::new(Mutex::new(None));
        let status = Arc::new(Mutex::new(content::initial_status(mission).to_string()));

        let loop_stop = stop_flag.clone();
        let loop_snapshot = latest_snapshot.clone();
        let loop_status = status.clone();
        let handle = std::thread::Builder::new()
            .name("eva-mission-runner".into())
            .spawn(move || {
                run_loop(
                    config,
                    command_rx,
                    &loop_stop,
                    &loop_snapshot,
                    &loop_status,
                    sink,
                    on_complete,
                );
            })
            .expect("Failed to spawn mission runner thread");

        Self {
            command_tx,
            stop_flag,
            latest_snapshot,
            status,
            handle: Some(handle),
        }
    }

    /// Forwards a mission command to the engine. Fails once the runner
    /// has stopped.
    pub fn send(&self, command: MissionCommand) -> Result<(), String> {
        self.command_tx
            .send(RunnerCommand::Mission(command))
            .map_err(|e| format!("Failed to send command: {}", e))
    }

    /// Latest snapshot, for synchronous polling. `None` until the first
    /// tick has run.
    pub fn latest_snapshot(&self) -> Result<Option<MissionSnapshot>, String> {
        let lock = self.latest_snapshot.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Current coarse status line.
    pub fn status_text(&self) -> Result<String, String> {
        let lock = self.status.lock().map_err(|e| e.to_string())?;
        Ok(lock.clone())
    }

    /// Stops the runner thread and joins it. Idempotent; after this,
    /// nothing mutates the simulation.
    pub fn stop(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        let _ = self.command_tx.send(RunnerCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for MissionRunner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The runner loop. Runs until Shutdown, the stop flag, or channel
/// disconnect.
fn run_loop(
    config: MissionConfig,
    command_rx: mpsc::Receiver<RunnerCommand>,
    stop_flag: &AtomicBool,
    latest_snapshot: &Mutex<Option<MissionSnapshot>>,
    status: &Mutex<String>,
    mut sink: Box<dyn CueSink>,
    mut on_complete: Option<CompletionCallback>,
) {
    let mission = config.mission;
    let mut engine = MissionEngine::new(config);
    let mut board = StatusBoard::new(mission);
    let mut clock = FrameClock::new();
    let mut next_frame_time = Instant::now();

    loop {
        if stop_flag.load(Ordering::Relaxed) {
            return;
        }

        // 1. Drain all pending commands
        loop {
            match command_rx.try_recv() {
                Ok(RunnerCommand::Mission(command)) => {
                    engine.queue_command(command);
                }
                Ok(RunnerCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one variable-step tick
        let snapshot = engine.tick(clock.step());

        // 3. Play this tick's audio cues, fire-and-forget
        for cue in &snapshot.audio_cues {
            if let Err(e) = sink.play(*cue) {
                eprintln!("cue playback failed: {}", e);
            }
        }

        // 4. Completion callback, driven by the event rather than the poll
        fire_completion(&snapshot.events, &mut on_complete);

        // 5. Coarse status poll
        if board.poll(&snapshot) {
            if let Ok(mut lock) = status.lock() {
                *lock = board.line().to_string();
            }
        }

        // 6. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 7. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

/// Runs the callback when this tick carries the mission-completed event.
/// Taking it out of the option caps it at one invocation.
fn fire_completion(events: &[MissionEvent], on_complete: &mut Option<CompletionCallback>) {
    let completed = events
        .iter()
        .any(|event| matches!(event, MissionEvent::MissionCompleted));
    if completed {
        if let Some(callback) = on_complete.take() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullSink;
    use eva_core::enums::{MissionKind, MissionPhase, ThrustDirection};
    use std::sync::atomic::AtomicU32;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<RunnerCommand>();

        tx.send(RunnerCommand::Mission(MissionCommand::Start))
            .unwrap();
        tx.send(RunnerCommand::Mission(MissionCommand::SetThrust {
            direction: ThrustDirection::Up,
            active: true,
        }))
        .unwrap();
        tx.send(RunnerCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            RunnerCommand::Mission(MissionCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            RunnerCommand::Mission(MissionCommand::SetThrust {
                direction: ThrustDirection::Up,
                active: true,
            })
        ));
        assert!(matches!(commands[2], RunnerCommand::Shutdown));
    }

    #[test]
    fn test_frame_clock_clamps_long_gaps() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(80));
        assert_eq!(clock.step(), MAX_TICK_STEP_SECS);

        // An immediate second step measures almost nothing.
        assert!(clock.step() < 0.01);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = MissionEngine::new(MissionConfig::default());
        engine.queue_command(MissionCommand::Start);
        engine.queue_command(MissionCommand::SetThrust {
            direction: ThrustDirection::Right,
            active: true,
        });

        // Run enough ticks to populate bodies, zones, and bubbles.
        for _ in 0..120 {
            engine.tick(1.0 / 60.0);
        }

        let snapshot = engine.tick(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_completion_fires_at_most_once() {
        let count = Arc::new(AtomicU32::new(0));
        let seen = count.clone();
        let mut on_complete: Option<CompletionCallback> = Some(Box::new(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        fire_completion(&[], &mut on_complete);
        assert_eq!(count.load(Ordering::SeqCst), 0);

        fire_completion(&[MissionEvent::MissionCompleted], &mut on_complete);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // A duplicate event finds the callback already consumed.
        fire_completion(&[MissionEvent::MissionCompleted], &mut on_complete);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(on_complete.is_none());
    }

    #[test]
    fn test_runner_lifecycle() {
        let mut runner = MissionRunner::spawn(MissionConfig::default(), Box::new(NullSink), None);

        assert!(runner.send(MissionCommand::Start).is_ok());
        std::thread::sleep(Duration::from_millis(250));

        let snapshot = runner
            .latest_snapshot()
            .unwrap()
            .expect("runner should have ticked by now");
        assert_eq!(snapshot.mission, MissionKind::NeutralBuoyancy);
        assert_eq!(snapshot.phase, MissionPhase::InProgress);
        assert!(snapshot.time.elapsed_secs > 0.0);

        // No progress yet, so the status line is still the briefing.
        let status = runner.status_text().unwrap();
        assert!(status.starts_with("Enter the hatch"));

        runner.stop();
        runner.stop(); // idempotent

        // The loop thread is gone; sends now fail.
        assert!(runner.send(MissionCommand::PointerUp).is_err());
    }
}
