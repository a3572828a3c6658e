//! User-facing text: status lines, task messages, and the educational
//! popup content. Centralized so the engine and the host shells agree
//! on wording.

use crate::enums::{MissionKind, ZoneKind};

/// Initial status line shown before any progress.
pub fn initial_status(mission: MissionKind) -> &'static str {
    match mission {
        MissionKind::NeutralBuoyancy => {
            "Enter the hatch, complete repair tasks, and exit through the airlock. \
             Use arrow keys or WASD to move."
        }
        MissionKind::Microgravity => {
            "Move along handles to reach tools. Complete repairs by stabilizing \
             tools in docking zones."
        }
    }
}

/// Initial "current task" HUD line (Mission 1).
pub const INITIAL_TASK: &str = "Approach the hatch to begin";

/// Status line for the coarse poll. `None` means "keep whatever is
/// currently displayed" (the poll never downgrades the text).
pub fn status_line(
    mission: MissionKind,
    completed: u32,
    total: u32,
    all_satisfied: bool,
) -> Option<String> {
    match mission {
        MissionKind::NeutralBuoyancy => {
            if all_satisfied {
                Some(format!(
                    "Excellent! You completed all {total} target zones. \
                     Click Complete to record mission success."
                ))
            } else if completed > 0 {
                Some(format!(
                    "Good progress! {completed} of {total} zones completed. Keep going!"
                ))
            } else {
                None
            }
        }
        MissionKind::Microgravity => {
            if all_satisfied {
                Some("Stabilized! Click Complete to record mission success.".to_string())
            } else {
                None
            }
        }
    }
}

/// HUD task message on zone completion (Mission 1).
pub fn completion_task_message(kind: ZoneKind, label: &str) -> String {
    match kind {
        ZoneKind::Hatch => {
            if label == "Hatch Entry" {
                "Hatch secured! Proceed to repair tasks.".to_string()
            } else {
                "Airlock sealed! Mission complete.".to_string()
            }
        }
        ZoneKind::Repair => format!("{label} completed! Move to next task."),
    }
}

/// Message for a rejected premature "Complete Mission".
pub fn rejection_message(mission: MissionKind, completed: u32, total: u32) -> String {
    match mission {
        MissionKind::NeutralBuoyancy => format!(
            "Complete all zones first. You have {completed} of {total} zones completed."
        ),
        MissionKind::Microgravity => "Stabilize all objects first.".to_string(),
    }
}

/// Insight popup content keyed by zone label (Mission 1).
pub fn zone_insight(label: &str) -> Option<&'static str> {
    match label {
        "Hatch Entry" => Some(
            "Did you know? ISS hatches are designed to be operated with one hand \
             for efficiency during spacewalks!",
        ),
        "Panel Repair" => Some(
            "Insight: The ISS has eight solar array wings that generate power \
             equivalent to that used by 40 homes on Earth!",
        ),
        "Bolt Tighten" => Some(
            "Interesting: In zero gravity, astronauts use specialized tools to \
             prevent bolts from floating away during repairs!",
        ),
        "Cable Check" => Some(
            "Did you know? The ISS has over 8 miles of wire connecting its \
             electrical systems!",
        ),
        "Sensor Cal" => Some(
            "Insight: Sensors on the ISS continuously monitor radiation levels \
             to keep astronauts safe!",
        ),
        "Airlock Exit" => Some(
            "Cool: The Quest airlock on the ISS is used for U.S. spacewalks and \
             can support two astronauts at once!",
        ),
        _ => None,
    }
}

/// Debrief popup facts (Mission 2, shown once after first stabilization).
pub const DEBRIEF_FACTS: [&str; 5] = [
    "Space communications power telemedicine, precision navigation, and disaster \
     coordination—saving lives and connecting communities.",
    "Robotics and remote operations developed for the ISS improve surgical tools, \
     industrial automation, and safer work in hazardous environments.",
    "Earth‑observation satellites enhance weather forecasts, wildfire tracking, \
     crop planning, and emergency response across continents.",
    "Microgravity research advances fluid and material science, informing cleaner \
     fuels, efficient 3D printing, and targeted drug delivery systems.",
    "EVA training and safety protocols shape standards for underwater rescue, \
     offshore maintenance, and other high‑risk professions.",
];
