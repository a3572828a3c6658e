//! Entity spawn factories for setting up the mission world.
//!
//! Everything comes from the mission layout tables: bodies (the diver or
//! the floating tools), dwell zones, and decorative handrails.

use hecs::World;

use eva_core::components::*;
use eva_core::enums::BodyKind;
use eva_core::layout::MissionLayout;
use eva_core::types::{Position, Velocity};

/// Set up the initial world for a mission.
pub fn setup_mission(world: &mut World, layout: &MissionLayout) {
    spawn_bodies(world, layout);
    spawn_zones(world, layout);
    spawn_handrails(world, layout);
}

/// Spawn the mission's bodies with their start positions and velocities.
/// The diver gets a `Diver` marker; tools get a `Tool` marker carrying
/// their layout index, which pairs each tool with its dock zone.
pub fn spawn_bodies(world: &mut World, layout: &MissionLayout) {
    for (index, spec) in layout.bodies.iter().enumerate() {
        let body = Body {
            kind: spec.kind,
            label: spec.label.to_string(),
        };
        let position = Position::new(spec.x, spec.y);
        let velocity = Velocity::new(spec.vx, spec.vy);

        match spec.kind {
            BodyKind::Diver => {
                world.spawn((Diver, body, position, velocity));
            }
            _ => {
                world.spawn((Tool { index }, body, position, velocity));
            }
        }
    }
}

/// Spawn one zone entity per layout zone, with a fresh dwell tracker.
pub fn spawn_zones(world: &mut World, layout: &MissionLayout) {
    for (index, spec) in layout.zones.iter().enumerate() {
        let zone = Zone {
            index,
            center: Position::new(spec.x, spec.y),
            radius: spec.radius,
            kind: spec.kind,
            label: spec.label.to_string(),
            threshold_secs: layout.dwell_threshold_secs,
            policy: layout.zone_policy,
        };
        world.spawn((zone, Dwell::default()));
    }
}

/// Spawn decorative handrail entities (render only).
pub fn spawn_handrails(world: &mut World, layout: &MissionLayout) {
    for spec in layout.handrails {
        world.spawn((Handrail {
            start: Position::new(spec.x, spec.y),
            length: spec.length,
            angle_degrees: spec.angle_degrees,
        },));
    }
}
