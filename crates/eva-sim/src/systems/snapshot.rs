//! Snapshot system: queries the ECS world and builds a complete MissionSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use eva_core::components::*;
use eva_core::enums::{MissionPhase, ZonePolicy};
use eva_core::events::{Alert, AudioCue, MissionEvent};
use eva_core::layout::MissionLayout;
use eva_core::state::*;
use eva_core::types::{Position, SimTime, Velocity};

/// Build a complete MissionSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    layout: &MissionLayout,
    phase: MissionPhase,
    current_task: &str,
    alerts: Vec<Alert>,
    events: Vec<MissionEvent>,
    audio_cues: Vec<AudioCue>,
) -> MissionSnapshot {
    let zones = build_zones(world);
    let completed_zones = zones
        .iter()
        .filter(|zone| match layout.zone_policy {
            ZonePolicy::Sticky => zone.completed,
            ZonePolicy::Live => zone.satisfied,
        })
        .count() as u32;
    let all_satisfied = !zones.is_empty() && zones.iter().all(|zone| zone.satisfied);

    MissionSnapshot {
        time: *time,
        mission: layout.kind,
        phase,
        bodies: build_bodies(world),
        zones,
        bubbles: build_bubbles(world),
        handrails: build_handrails(world),
        completed_zones,
        zone_total: layout.zones.len() as u32,
        all_satisfied,
        current_task: current_task.to_string(),
        alerts,
        events,
        audio_cues,
    }
}

/// Build BodyView list in layout order (diver first, tools by index).
fn build_bodies(world: &World) -> Vec<BodyView> {
    let mut bodies: Vec<(usize, BodyView)> = world
        .query::<(&Body, &Position, &Velocity, Option<&Tool>)>()
        .iter()
        .map(|(_, (body, position, velocity, tool))| {
            let view = BodyView {
                kind: body.kind,
                label: body.label.clone(),
                position: *position,
                velocity: *velocity,
                speed: velocity.speed(),
            };
            (tool.map_or(0, |t| t.index), view)
        })
        .collect();

    bodies.sort_by_key(|(index, _)| *index);
    bodies.into_iter().map(|(_, view)| view).collect()
}

/// Build ZoneView list sorted by layout index.
fn build_zones(world: &World) -> Vec<ZoneView> {
    let mut zones: Vec<ZoneView> = world
        .query::<(&Zone, &Dwell)>()
        .iter()
        .map(|(_, (zone, dwell))| ZoneView {
            index: zone.index,
            kind: zone.kind,
            label: zone.label.clone(),
            center: zone.center,
            radius: zone.radius,
            dwell_secs: dwell.seconds,
            threshold_secs: zone.threshold_secs,
            satisfied: dwell.satisfied,
            completed: dwell.completed,
            progress: (dwell.seconds / zone.threshold_secs).clamp(0.0, 1.0),
        })
        .collect();

    zones.sort_by_key(|zone| zone.index);
    zones
}

/// Build BubbleView list for the particle layer.
fn build_bubbles(world: &World) -> Vec<BubbleView> {
    world
        .query::<(&Bubble, &Position, &Lifetime)>()
        .iter()
        .map(|(_, (bubble, position, lifetime))| BubbleView {
            position: *position,
            size: bubble.size,
            opacity: bubble.opacity,
            life: lifetime.remaining,
        })
        .collect()
}

/// Build HandrailView list (spawn order matches the layout table).
fn build_handrails(world: &World) -> Vec<HandrailView> {
    world
        .query::<&Handrail>()
        .iter()
        .map(|(_, handrail)| HandrailView {
            start: handrail.start,
            length: handrail.length,
            angle_degrees: handrail.angle_degrees,
        })
        .collect()
}
