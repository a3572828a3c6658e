//! Keyboard thrust for the diver (Mission 1).
//!
//! Held directions add acceleration along their axis; opposite keys
//! cancel. A thruster hiss is requested every tick input is active and
//! the cooldown gate turns that into a steady pulse.

use hecs::World;

use eva_core::components::Diver;
use eva_core::constants::THRUST_POWER;
use eva_core::enums::CueId;
use eva_core::events::AudioCue;
use eva_core::types::Velocity;

use crate::audio::CueDispatcher;
use crate::engine::InputState;

pub fn run(
    world: &mut World,
    input: &InputState,
    dt: f64,
    now: f64,
    dispatcher: &mut CueDispatcher,
    audio_cues: &mut Vec<AudioCue>,
) {
    if !input.any() {
        return;
    }

    let mut thrusting = false;
    for (_entity, (_diver, velocity)) in world.query_mut::<(&Diver, &mut Velocity)>() {
        thrusting = true;
        if input.left {
            velocity.0.x -= THRUST_POWER * dt;
        }
        if input.right {
            velocity.0.x += THRUST_POWER * dt;
        }
        // Canvas frame: up is negative y.
        if input.up {
            velocity.0.y -= THRUST_POWER * dt;
        }
        if input.down {
            velocity.0.y += THRUST_POWER * dt;
        }
    }

    if thrusting {
        if let Some(cue) = dispatcher.request(CueId::ThrustHiss, now) {
            audio_cues.push(cue);
        }
    }
}
