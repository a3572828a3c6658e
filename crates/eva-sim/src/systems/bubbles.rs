//! Bubble trail behind a moving diver.
//!
//! Fast movement sheds a burst of bubbles roughly along the movement
//! heading, with an upward rise bias. Bubbles fade over about two
//! seconds; expired ones are removed by the cleanup system.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use eva_core::components::{Bubble, Diver, Lifetime};
use eva_core::constants::*;
use eva_core::types::{Position, Velocity};

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    last_spawn: &mut Option<f64>,
    now: f64,
    dt: f64,
) {
    spawn_trail(world, rng, last_spawn, now);
    age_bubbles(world, dt);
}

/// Spawn a burst sized by diver speed, at most once per cooldown.
fn spawn_trail(world: &mut World, rng: &mut ChaCha8Rng, last_spawn: &mut Option<f64>, now: f64) {
    let diver = world
        .query::<(&Diver, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (_, position, velocity))| (*position, *velocity));

    if let Some((position, velocity)) = diver {
        let speed = velocity.speed();
        let due = last_spawn.map_or(true, |t| now - t >= BUBBLE_SPAWN_COOLDOWN_SECS);
        if speed <= BUBBLE_MIN_SPEED || !due {
            return;
        }
        *last_spawn = Some(now);

        let heading = velocity.heading();
        let count = (speed / BUBBLE_COUNT_SPEED_DIVISOR).floor() as usize;
        for _ in 0..count {
            let angle = heading + rng.gen_range(-0.5..0.5) * BUBBLE_ANGLE_JITTER;
            let offset_x = rng.gen_range(-0.5..0.5) * BUBBLE_SPAWN_SPREAD;
            let offset_y = rng.gen_range(-0.5..0.5) * BUBBLE_SPAWN_SPREAD;
            let speed_x = BUBBLE_BASE_SPEED + rng.gen_range(0.0..BUBBLE_SPEED_VARIATION);
            let speed_y = BUBBLE_BASE_SPEED + rng.gen_range(0.0..BUBBLE_SPEED_VARIATION);

            world.spawn((
                Bubble {
                    size: BUBBLE_MIN_SIZE + rng.gen_range(0.0..BUBBLE_SIZE_VARIATION),
                    opacity: BUBBLE_MIN_OPACITY + rng.gen_range(0.0..BUBBLE_OPACITY_VARIATION),
                },
                Position::new(position.x() + offset_x, position.y() + offset_y),
                // Rise bias pulls every bubble toward the surface.
                Velocity::new(
                    angle.cos() * speed_x,
                    angle.sin() * speed_y - BUBBLE_RISE_BIAS,
                ),
                Lifetime {
                    remaining: BUBBLE_INITIAL_LIFE,
                },
            ));
        }
    }
}

/// Integrate and fade existing bubbles.
fn age_bubbles(world: &mut World, dt: f64) {
    for (_entity, (_bubble, position, velocity, lifetime)) in
        world.query_mut::<(&Bubble, &mut Position, &Velocity, &mut Lifetime)>()
    {
        position.0 += velocity.0 * dt;
        lifetime.remaining -= dt * BUBBLE_LIFE_DECAY;
    }
}
