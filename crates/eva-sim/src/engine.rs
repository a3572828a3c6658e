//! Mission engine — the core of the trainer.
//!
//! `MissionEngine` owns the hecs ECS world, processes queued commands at
//! tick boundaries, runs all systems, and produces `MissionSnapshot`s.
//! Completely headless (no UI dependency), enabling deterministic testing:
//! the same seed and command sequence always yield the same snapshots.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use eva_core::commands::MissionCommand;
use eva_core::components::{Dwell, Tool, Zone};
use eva_core::constants::{DRAG_NUDGE_GAIN, MAX_TICK_STEP_SECS, TOOL_PICK_EXTENT};
use eva_core::content;
use eva_core::enums::{AlertLevel, CueId, MissionKind, MissionPhase, ThrustDirection, ZonePolicy};
use eva_core::events::{Alert, AudioCue, MissionEvent};
use eva_core::layout::MissionLayout;
use eva_core::state::MissionSnapshot;
use eva_core::types::{Position, SimTime, Velocity};

use crate::audio::CueDispatcher;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new mission.
pub struct MissionConfig {
    /// Which mission to run.
    pub mission: MissionKind,
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            mission: MissionKind::NeutralBuoyancy,
            seed: 42,
        }
    }
}

/// Held thrust input, updated by SetThrust commands and read by the
/// thrust and physics systems each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    /// Whether any thrust direction is held.
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

/// The mission engine. Owns the ECS world and all sim state.
pub struct MissionEngine {
    world: World,
    time: SimTime,
    phase: MissionPhase,
    layout: &'static MissionLayout,
    rng: ChaCha8Rng,
    command_queue: VecDeque<MissionCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    input: InputState,
    /// Tool currently held by the pointer, with the pointer's grab
    /// offset from the tool's center.
    drag: Option<(hecs::Entity, DVec2)>,
    dispatcher: CueDispatcher,
    last_bubble_spawn: Option<f64>,
    current_task: String,
    debrief_shown: bool,
    audio_cues: Vec<AudioCue>,
    alerts: Vec<Alert>,
    events: Vec<MissionEvent>,
}

impl MissionEngine {
    /// Create a new mission engine with the given config.
    pub fn new(config: MissionConfig) -> Self {
        let current_task = match config.mission {
            MissionKind::NeutralBuoyancy => content::INITIAL_TASK.to_string(),
            MissionKind::Microgravity => String::new(),
        };

        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MissionPhase::default(),
            layout: MissionLayout::of(config.mission),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            input: InputState::default(),
            drag: None,
            dispatcher: CueDispatcher::default(),
            last_bubble_spawn: None,
            current_task,
            debrief_shown: false,
            audio_cues: Vec::new(),
            alerts: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MissionCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MissionCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Steps are capped at `MAX_TICK_STEP_SECS` so a stalled
    /// frame cannot tunnel bodies through walls or zones.
    pub fn tick(&mut self, dt: f64) -> MissionSnapshot {
        let dt = dt.clamp(0.0, MAX_TICK_STEP_SECS);

        self.process_commands();

        if self.running() {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let alerts = std::mem::take(&mut self.alerts);
        let events = std::mem::take(&mut self.events);
        let audio_cues = std::mem::take(&mut self.audio_cues);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.layout,
            self.phase,
            &self.current_task,
            alerts,
            events,
            audio_cues,
        )
    }

    /// Get the current mission phase.
    pub fn phase(&self) -> MissionPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the mission this engine is running.
    pub fn mission(&self) -> MissionKind {
        self.layout.kind
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Teleport a body (for tests that need a body inside a zone).
    #[cfg(test)]
    pub fn place_body(&mut self, label: &str, x: f64, y: f64) {
        for (_entity, (body, position)) in self
            .world
            .query_mut::<(&eva_core::components::Body, &mut Position)>()
        {
            if body.label == label {
                position.0 = DVec2::new(x, y);
            }
        }
    }

    /// Overwrite a body's velocity (for tests).
    #[cfg(test)]
    pub fn set_body_velocity(&mut self, label: &str, vx: f64, vy: f64) {
        for (_entity, (body, velocity)) in self
            .world
            .query_mut::<(&eva_core::components::Body, &mut Velocity)>()
        {
            if body.label == label {
                velocity.0 = DVec2::new(vx, vy);
            }
        }
    }

    /// Get the dwell state of a zone by layout index (for tests).
    #[cfg(test)]
    pub fn zone_dwell(&self, index: usize) -> Option<Dwell> {
        self.world
            .query::<(&Zone, &Dwell)>()
            .iter()
            .find(|(_, (zone, _))| zone.index == index)
            .map(|(_, (_, dwell))| *dwell)
    }

    /// Whether systems should run this tick.
    fn running(&self) -> bool {
        matches!(
            self.phase,
            MissionPhase::InProgress | MissionPhase::AllZonesSatisfied
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: MissionCommand) {
        match command {
            MissionCommand::Start => {
                if self.phase == MissionPhase::NotStarted {
                    world_setup::setup_mission(&mut self.world, self.layout);
                    self.phase = MissionPhase::InProgress;
                    self.time = SimTime::default();
                }
            }
            MissionCommand::SetThrust { direction, active } => match direction {
                ThrustDirection::Left => self.input.left = active,
                ThrustDirection::Right => self.input.right = active,
                ThrustDirection::Up => self.input.up = active,
                ThrustDirection::Down => self.input.down = active,
            },
            MissionCommand::PointerDown { x, y } => {
                if self.running() {
                    let pointer = DVec2::new(x, y);
                    self.drag = self
                        .pick_tool(x, y)
                        .map(|(entity, center)| (entity, pointer - center));
                }
            }
            MissionCommand::PointerMove { x, y } => {
                if self.running() {
                    if let Some((entity, grab_offset)) = self.drag {
                        // Keep the grabbed point under the pointer rather
                        // than snapping the tool's center to it.
                        let target = DVec2::new(x, y) - grab_offset;
                        if let Ok(mut position) = self.world.get::<&mut Position>(entity) {
                            if let Ok(mut velocity) = self.world.get::<&mut Velocity>(entity) {
                                // Small impulse toward the target so the tool
                                // keeps drifting that way on release, then snap.
                                velocity.0 += (target - position.0) * DRAG_NUDGE_GAIN;
                                position.0 = target;
                            }
                        }
                        if let Some(cue) = self
                            .dispatcher
                            .request(CueId::DragWhoosh, self.time.elapsed_secs)
                        {
                            self.audio_cues.push(cue);
                        }
                    }
                }
            }
            MissionCommand::PointerUp => {
                self.drag = None;
            }
            MissionCommand::CompleteMission => match self.phase {
                MissionPhase::AllZonesSatisfied => {
                    self.phase = MissionPhase::Completed;
                    self.events.push(MissionEvent::MissionCompleted);
                }
                MissionPhase::InProgress => {
                    let (completed, total) = self.zone_progress();
                    self.alerts.push(Alert {
                        level: AlertLevel::Warning,
                        message: content::rejection_message(self.layout.kind, completed, total),
                        tick: self.time.tick,
                    });
                }
                _ => {}
            },
        }
    }

    /// Find the tool under the pointer, lowest layout index first.
    /// The hit test is a square of half-extent TOOL_PICK_EXTENT.
    /// Returns the tool and its center at pick time.
    fn pick_tool(&self, x: f64, y: f64) -> Option<(hecs::Entity, DVec2)> {
        let mut picked: Option<(usize, hecs::Entity, DVec2)> = None;
        let mut query = self.world.query::<(&Tool, &Position)>();
        for (entity, (tool, position)) in query.iter() {
            let hit = (x - position.x()).abs() < TOOL_PICK_EXTENT
                && (y - position.y()).abs() < TOOL_PICK_EXTENT;
            if hit && picked.map_or(true, |(best, _, _)| tool.index < best) {
                picked = Some((tool.index, entity, position.0));
            }
        }
        picked.map(|(_, entity, center)| (entity, center))
    }

    /// Count zones currently counting toward completion.
    fn zone_progress(&self) -> (u32, u32) {
        let mut query = self.world.query::<(&Zone, &Dwell)>();
        let completed = query
            .iter()
            .filter(|(_, (zone, dwell))| match zone.policy {
                ZonePolicy::Sticky => dwell.completed,
                ZonePolicy::Live => dwell.satisfied,
            })
            .count() as u32;
        (completed, self.layout.zones.len() as u32)
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Keyboard thrust
        systems::thrust::run(
            &mut self.world,
            &self.input,
            dt,
            self.time.elapsed_secs,
            &mut self.dispatcher,
            &mut self.audio_cues,
        );
        // 2. Body physics (forces, damping, integration, bounds)
        systems::physics::run(&mut self.world, self.layout, &self.input, dt);
        // 3. Dwell zones (accrual, decay, completion)
        let all_satisfied = systems::zones::run(
            &mut self.world,
            dt,
            self.time,
            &mut self.dispatcher,
            &mut self.audio_cues,
            &mut self.events,
            &mut self.alerts,
            &mut self.current_task,
        );
        self.apply_zone_outcome(all_satisfied);
        // 4. Bubble trail
        systems::bubbles::run(
            &mut self.world,
            &mut self.rng,
            &mut self.last_bubble_spawn,
            self.time.elapsed_secs,
            dt,
        );
        // 5. Cleanup expired particles
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Phase transitions driven by zone satisfaction.
    fn apply_zone_outcome(&mut self, all_satisfied: bool) {
        match self.phase {
            MissionPhase::InProgress if all_satisfied => {
                self.phase = MissionPhase::AllZonesSatisfied;
                if self.layout.kind == MissionKind::Microgravity && !self.debrief_shown {
                    self.debrief_shown = true;
                    self.events.push(MissionEvent::DebriefReady);
                }
            }
            MissionPhase::AllZonesSatisfied if !all_satisfied => {
                // Only live zones can lapse; sticky satisfaction is latched.
                self.phase = MissionPhase::InProgress;
            }
            _ => {}
        }
    }
}
