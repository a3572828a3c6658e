//! Body physics: forces, damping, integration, and field bounds.
//!
//! The diver gets buoyancy, passive drift, and water drag, then a hard
//! position clamp at the pool walls. Tools get station-air damping and
//! elastic wall reflection. Drag factors are per-frame constants tuned
//! at 60 Hz, raised to `dt * 60` so variable steps decay identically.

use hecs::World;

use eva_core::components::{Diver, Tool};
use eva_core::constants::*;
use eva_core::layout::MissionLayout;
use eva_core::types::{Position, Velocity};

use crate::engine::InputState;

pub fn run(world: &mut World, layout: &MissionLayout, input: &InputState, dt: f64) {
    run_diver(world, layout, input, dt);
    run_tools(world, layout, dt);
}

/// Diver physics (Mission 1).
fn run_diver(world: &mut World, layout: &MissionLayout, input: &InputState, dt: f64) {
    let drag = DIVER_DRAG.powf(dt * DRAG_REFERENCE_HZ);

    for (_entity, (_diver, position, velocity)) in
        world.query_mut::<(&Diver, &mut Position, &mut Velocity)>()
    {
        // Buoyancy acts upward (negative y in the canvas frame).
        velocity.0.y -= (BUOYANCY / DIVER_MASS) * dt;

        // Gentle upward drift while the diver is idle and slow.
        if !input.any() && velocity.0.y.abs() < PASSIVE_DRIFT_MAX_VSPEED {
            velocity.0.y -= PASSIVE_DRIFT * dt;
        }

        velocity.0 *= drag;
        position.0 += velocity.0 * dt;
        position.0 = layout.bounds.clamp(position.0);
    }
}

/// Tool physics (Mission 2). Walls reflect the offending velocity
/// component and the position is clamped back inside, so a drag release
/// at the edge settles instead of jittering through the wall.
fn run_tools(world: &mut World, layout: &MissionLayout, dt: f64) {
    let damping = TOOL_DAMPING.powf(dt * DRAG_REFERENCE_HZ);
    let bounds = layout.bounds;

    for (_entity, (_tool, position, velocity)) in
        world.query_mut::<(&Tool, &mut Position, &mut Velocity)>()
    {
        velocity.0 *= damping;
        position.0 += velocity.0 * dt;

        if position.0.x < bounds.min.x || position.0.x > bounds.max.x {
            velocity.0.x = -velocity.0.x;
        }
        if position.0.y < bounds.min.y || position.0.y > bounds.max.y {
            velocity.0.y = -velocity.0.y;
        }
        position.0 = bounds.clamp(position.0);
    }
}
