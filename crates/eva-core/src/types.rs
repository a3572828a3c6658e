//! Fundamental geometric and simulation types.
//!
//! Positions and velocities live in the canvas frame of the rendering
//! surface: origin at the top-left corner, x increasing rightward,
//! y increasing downward, units are logical pixels. "Up" is therefore
//! negative y everywhere in the physics.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position in field space (logical pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec2);

/// 2D velocity in field space (logical pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Distance to another position in logical pixels.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Speed magnitude (pixels per second).
    pub fn speed(&self) -> f64 {
        self.0.length()
    }

    /// Direction of travel in radians (0 = rightward, positive = clockwise
    /// in the y-down canvas frame). Returns 0 for a zero velocity.
    pub fn heading(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }
}

impl SimTime {
    /// Advance by one variable-length tick.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
