//! Coarse status line maintenance.
//!
//! The status line is display-only. It refreshes on a slow poll so the
//! text can lag the simulation by a poll interval; completion correctness
//! is carried by engine events, never by this board.

use eva_core::constants::STATUS_POLL_INTERVAL_SECS;
use eva_core::content;
use eva_core::enums::MissionKind;
use eva_core::state::MissionSnapshot;

/// Holds the current status line and the poll cadence.
pub struct StatusBoard {
    line: String,
    last_poll: Option<f64>,
}

impl StatusBoard {
    pub fn new(mission: MissionKind) -> Self {
        Self {
            line: content::initial_status(mission).to_string(),
            last_poll: None,
        }
    }

    /// Polls at most once per `STATUS_POLL_INTERVAL_SECS` of mission time.
    /// Returns true when the line changed.
    pub fn poll(&mut self, snapshot: &MissionSnapshot) -> bool {
        let now = snapshot.time.elapsed_secs;
        let due = self
            .last_poll
            .map_or(true, |t| now - t >= STATUS_POLL_INTERVAL_SECS);
        if !due {
            return false;
        }
        self.last_poll = Some(now);
        self.apply(snapshot)
    }

    /// Unconditional refresh. Keeps the current line when the mission has
    /// nothing better to report, so the text never downgrades.
    pub fn apply(&mut self, snapshot: &MissionSnapshot) -> bool {
        let next = content::status_line(
            snapshot.mission,
            snapshot.completed_zones,
            snapshot.zone_total,
            snapshot.all_satisfied,
        );
        match next {
            Some(line) if line != self.line => {
                self.line = line;
                true
            }
            _ => false,
        }
    }

    pub fn line(&self) -> &str {
        &self.line
    }
}
