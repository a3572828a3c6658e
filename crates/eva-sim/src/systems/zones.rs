//! Dwell zone tracking: accrual, decay, and completion.
//!
//! A zone is occupied when its body is strictly inside the radius. Dwell
//! accrues at real rate while occupied and decays at half rate while
//! not, clamped to [0, threshold]. Sticky zones latch on first
//! satisfaction (pool tasks); live zones re-evaluate every tick (tool
//! docking), so satisfaction can lapse as dwell decays.
//!
//! In the pool mission every zone is evaluated against the diver. In the
//! microgravity mission zone `i` is evaluated against tool `i`.
//!
//! Returns whether every zone is currently satisfied.

use std::collections::HashMap;

use hecs::World;

use eva_core::components::{Diver, Dwell, Tool, Zone};
use eva_core::constants::DWELL_DECAY_FACTOR;
use eva_core::content;
use eva_core::enums::{AlertLevel, CueId, ZonePolicy};
use eva_core::events::{Alert, AudioCue, MissionEvent};
use eva_core::types::{Position, SimTime};

use crate::audio::CueDispatcher;

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    dt: f64,
    time: SimTime,
    dispatcher: &mut CueDispatcher,
    audio_cues: &mut Vec<AudioCue>,
    events: &mut Vec<MissionEvent>,
    alerts: &mut Vec<Alert>,
    current_task: &mut String,
) -> bool {
    let diver_position = world
        .query::<(&Diver, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, position))| *position);

    let tool_positions: HashMap<usize, Position> = world
        .query::<(&Tool, &Position)>()
        .iter()
        .map(|(_, (tool, position))| (tool.index, *position))
        .collect();

    let now = time.elapsed_secs;
    let mut any_zone = false;
    let mut all_satisfied = true;

    for (_entity, (zone, dwell)) in world.query_mut::<(&Zone, &mut Dwell)>() {
        any_zone = true;

        let occupant = diver_position.or_else(|| tool_positions.get(&zone.index).copied());
        let inside = occupant
            .map(|position| position.distance_to(&zone.center) < zone.radius)
            .unwrap_or(false);

        match zone.policy {
            ZonePolicy::Sticky => {
                if !dwell.completed {
                    if inside {
                        dwell.seconds = (dwell.seconds + dt).min(zone.threshold_secs);
                        if dwell.seconds >= zone.threshold_secs {
                            dwell.completed = true;
                            dwell.satisfied = true;
                            events.push(MissionEvent::ZoneCompleted {
                                zone_index: zone.index,
                                label: zone.label.clone(),
                                kind: zone.kind,
                            });
                            if let Some(cue) = dispatcher.request(CueId::CompletionClank, now) {
                                audio_cues.push(cue);
                            }
                            *current_task =
                                content::completion_task_message(zone.kind, &zone.label);
                            if let Some(insight) = content::zone_insight(&zone.label) {
                                alerts.push(Alert {
                                    level: AlertLevel::Info,
                                    message: insight.to_string(),
                                    tick: time.tick,
                                });
                            }
                        }
                    } else {
                        dwell.seconds = (dwell.seconds - dt * DWELL_DECAY_FACTOR).max(0.0);
                    }
                }
            }
            ZonePolicy::Live => {
                if inside {
                    dwell.seconds = (dwell.seconds + dt).min(zone.threshold_secs);
                } else {
                    dwell.seconds = (dwell.seconds - dt * DWELL_DECAY_FACTOR).max(0.0);
                }

                let satisfied = dwell.seconds >= zone.threshold_secs;
                if satisfied && !dwell.satisfied {
                    events.push(MissionEvent::ZoneStabilized {
                        zone_index: zone.index,
                        label: zone.label.clone(),
                    });
                    if let Some(cue) = dispatcher.request(CueId::StabilizeChime, now) {
                        audio_cues.push(cue);
                    }
                }
                dwell.satisfied = satisfied;
            }
        }

        if !dwell.satisfied {
            all_satisfied = false;
        }
    }

    any_zone && all_satisfied
}
