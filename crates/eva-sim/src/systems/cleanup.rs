//! Cleanup system: removes expired bubble particles.

use hecs::{Entity, World};

use eva_core::components::{Bubble, Lifetime};
use eva_core::types::Position;

/// Remove bubbles that have faded out or reached the water surface.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_bubble, position, lifetime)) in
        world.query_mut::<(&Bubble, &Position, &Lifetime)>()
    {
        if lifetime.remaining <= 0.0 || position.y() <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
