//! Simulation constants and tuning parameters.

/// Largest delta-time a single tick may integrate (seconds).
/// Longer gaps (host stall, backgrounded tab) are clamped to this.
pub const MAX_TICK_STEP_SECS: f64 = 0.05;

/// Interval for the coarse status-text poll (seconds). Display latency
/// only; completion correctness never depends on it.
pub const STATUS_POLL_INTERVAL_SECS: f64 = 0.3;

// --- Diver physics (pool training) ---

/// Constant upward buoyant acceleration (px/s²).
pub const BUOYANCY: f64 = 30.0;

/// Diver mass, divides the buoyant force.
pub const DIVER_MASS: f64 = 1.0;

/// Exponential drag base per reference frame (< 1.0, higher = less drag).
pub const DIVER_DRAG: f64 = 0.92;

/// Thrust acceleration per active direction key (px/s²).
pub const THRUST_POWER: f64 = 130.0;

/// Extra upward drift applied while coasting (px/s²), the idle buoyant rise.
pub const PASSIVE_DRIFT: f64 = 12.0;

/// Passive drift only applies below this vertical speed magnitude (px/s).
pub const PASSIVE_DRIFT_MAX_VSPEED: f64 = 20.0;

/// Reference rate for the frame-independent damping idiom:
/// `v *= base^(dt * DRAG_REFERENCE_HZ)` damps like `v *= base` per frame
/// would at this frame rate.
pub const DRAG_REFERENCE_HZ: f64 = 60.0;

// --- Tool physics (microgravity handling) ---

/// Exponential damping base for drifting tools (very light).
pub const TOOL_DAMPING: f64 = 0.999;

/// Half-extent of the pointer pick box around a tool's center (px).
pub const TOOL_PICK_EXTENT: f64 = 20.0;

/// Velocity gain per pointer-move displacement during a drag.
/// Small by design: a drag leaves a gentle residual push, not a throw.
pub const DRAG_NUDGE_GAIN: f64 = 0.003;

// --- Zones ---

/// Dwell decays at this fraction of the accrual rate while outside.
pub const DWELL_DECAY_FACTOR: f64 = 0.5;

// --- Bubbles ---

/// Minimum diver speed for bubble emission (px/s).
pub const BUBBLE_MIN_SPEED: f64 = 20.0;

/// Minimum interval between spawn bursts (seconds).
pub const BUBBLE_SPAWN_COOLDOWN_SECS: f64 = 0.1;

/// Burst size is `floor(speed / this)`.
pub const BUBBLE_COUNT_SPEED_DIVISOR: f64 = 15.0;

/// Full width of the random angular jitter around the diver heading (radians).
pub const BUBBLE_ANGLE_JITTER: f64 = 0.5;

/// Full width of the random spawn offset around the diver, per axis (px).
pub const BUBBLE_SPAWN_SPREAD: f64 = 15.0;

/// Base ejection speed (px/s).
pub const BUBBLE_BASE_SPEED: f64 = 20.0;

/// Random addition to ejection speed (px/s).
pub const BUBBLE_SPEED_VARIATION: f64 = 30.0;

/// Fixed upward bias added to bubble velocity (px/s).
pub const BUBBLE_RISE_BIAS: f64 = 40.0;

/// Bubble radius range: min + random * variation (px).
pub const BUBBLE_MIN_SIZE: f64 = 2.0;
pub const BUBBLE_SIZE_VARIATION: f64 = 4.0;

/// Bubble opacity range: min + random * variation.
pub const BUBBLE_MIN_OPACITY: f64 = 0.6;
pub const BUBBLE_OPACITY_VARIATION: f64 = 0.4;

/// Normalized life at spawn.
pub const BUBBLE_INITIAL_LIFE: f64 = 1.0;

/// Life lost per second.
pub const BUBBLE_LIFE_DECAY: f64 = 0.5;

// --- Audio cues ---

/// Minimum interval between thrust hiss cues (seconds).
pub const HISS_COOLDOWN_SECS: f64 = 0.3;

/// Minimum interval between drag whoosh cues (seconds).
pub const WHOOSH_COOLDOWN_SECS: f64 = 0.5;

/// Playback volume for the sustained movement cues (hiss, whoosh).
pub const MOVEMENT_CUE_VOLUME: f32 = 0.3;

/// Playback volume for the one-shot completion cues (clank, chime).
pub const COMPLETION_CUE_VOLUME: f32 = 0.4;
