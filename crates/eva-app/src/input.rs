//! Keyboard and pointer translation into mission commands.
//!
//! The host shell forwards raw input events here; the resulting commands
//! are queued on the engine and drained at the next tick boundary.

use eva_core::commands::MissionCommand;
use eva_core::enums::ThrustDirection;

/// Maps a key name to a thrust command.
///
/// Both the arrow keys and WASD steer; any other key maps to `None` and
/// is ignored. `pressed` distinguishes key-down from key-up.
pub fn key_command(key: &str, pressed: bool) -> Option<MissionCommand> {
    let direction = match key {
        "ArrowLeft" | "a" => ThrustDirection::Left,
        "ArrowRight" | "d" => ThrustDirection::Right,
        "ArrowUp" | "w" => ThrustDirection::Up,
        "ArrowDown" | "s" => ThrustDirection::Down,
        _ => return None,
    };
    Some(MissionCommand::SetThrust {
        direction,
        active: pressed,
    })
}

/// Pointer event phases as delivered by the host shell.
///
/// Coordinates are field-relative logical pixels, origin at the surface's
/// top-left corner (`field_position` converts from client space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
}

/// Maps a pointer event to its mission command.
pub fn pointer_command(event: PointerEvent) -> MissionCommand {
    match event {
        PointerEvent::Down { x, y } => MissionCommand::PointerDown { x, y },
        PointerEvent::Move { x, y } => MissionCommand::PointerMove { x, y },
        PointerEvent::Up => MissionCommand::PointerUp,
    }
}

/// Converts client coordinates to field coordinates, given the surface's
/// top-left corner in client space.
pub fn field_position(client_x: f64, client_y: f64, origin_x: f64, origin_y: f64) -> (f64, f64) {
    (client_x - origin_x, client_y - origin_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_key_sets_steer() {
        let pairs = [
            ("ArrowLeft", ThrustDirection::Left),
            ("a", ThrustDirection::Left),
            ("ArrowRight", ThrustDirection::Right),
            ("d", ThrustDirection::Right),
            ("ArrowUp", ThrustDirection::Up),
            ("w", ThrustDirection::Up),
            ("ArrowDown", ThrustDirection::Down),
            ("s", ThrustDirection::Down),
        ];

        for (key, expected) in pairs {
            match key_command(key, true) {
                Some(MissionCommand::SetThrust { direction, active }) => {
                    assert_eq!(direction, expected, "key {}", key);
                    assert!(active);
                }
                other => panic!("key {} mapped to {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_key_release_clears_thrust() {
        assert!(matches!(
            key_command("ArrowUp", false),
            Some(MissionCommand::SetThrust {
                direction: ThrustDirection::Up,
                active: false,
            })
        ));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        for key in ["Enter", "Escape", "A", "W", "q", " ", ""] {
            assert!(key_command(key, true).is_none(), "key {:?}", key);
        }
    }

    #[test]
    fn test_pointer_commands() {
        assert!(matches!(
            pointer_command(PointerEvent::Down { x: 120.0, y: 40.0 }),
            MissionCommand::PointerDown { x, y } if x == 120.0 && y == 40.0
        ));
        assert!(matches!(
            pointer_command(PointerEvent::Move { x: 130.0, y: 45.0 }),
            MissionCommand::PointerMove { x, y } if x == 130.0 && y == 45.0
        ));
        assert!(matches!(
            pointer_command(PointerEvent::Up),
            MissionCommand::PointerUp
        ));
    }

    #[test]
    fn test_field_position_subtracts_origin() {
        let (x, y) = field_position(105.0, 62.5, 5.0, 12.5);
        assert_eq!(x, 100.0);
        assert_eq!(y, 50.0);
    }
}
