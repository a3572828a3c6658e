//! Fixed mission layouts: field geometry, entity start states, zone
//! placements, and decorative fixtures.
//!
//! Coordinates are in the canvas frame (origin top-left, y down).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BodyKind, MissionKind, ZoneKind, ZonePolicy};

/// Logical size of the rendering surface for a mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSpec {
    pub logical_width: u32,
    pub logical_height: u32,
}

impl SurfaceSpec {
    /// Backing-store pixel size for a given device pixel ratio.
    /// The renderer scales its context by the same ratio so draw calls
    /// stay in logical coordinates.
    pub fn backing_size(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let w = (self.logical_width as f64 * device_pixel_ratio).round() as u32;
        let h = (self.logical_height as f64 * device_pixel_ratio).round() as u32;
        (w, h)
    }
}

/// Axis-aligned play-field bounds entities are held inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl FieldBounds {
    /// Clamp a point into the bounds.
    pub fn clamp(&self, p: DVec2) -> DVec2 {
        p.clamp(self.min, self.max)
    }

    /// Whether a point lies inside the bounds (inclusive).
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// A zone placement in a mission layout.
#[derive(Debug, Clone, Copy)]
pub struct ZoneSpec {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub kind: ZoneKind,
    pub label: &'static str,
}

/// A body (diver or tool) start state in a mission layout.
#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub kind: BodyKind,
    pub label: &'static str,
}

/// A decorative handrail segment (Mission 2).
#[derive(Debug, Clone, Copy)]
pub struct HandrailSpec {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub angle_degrees: f64,
}

/// Everything fixed about a mission: surface, bounds, zone policy, and
/// the spawn tables.
#[derive(Debug, Clone, Copy)]
pub struct MissionLayout {
    pub kind: MissionKind,
    pub surface: SurfaceSpec,
    pub bounds: FieldBounds,
    pub zone_policy: ZonePolicy,
    /// Dwell seconds required to satisfy a zone.
    pub dwell_threshold_secs: f64,
    pub bodies: &'static [BodySpec],
    pub zones: &'static [ZoneSpec],
    pub handrails: &'static [HandrailSpec],
}

impl MissionLayout {
    pub fn of(kind: MissionKind) -> &'static MissionLayout {
        match kind {
            MissionKind::NeutralBuoyancy => &NEUTRAL_BUOYANCY,
            MissionKind::Microgravity => &MICROGRAVITY,
        }
    }
}

/// Mission 1 — neutral-buoyancy pool training.
pub const NEUTRAL_BUOYANCY: MissionLayout = MissionLayout {
    kind: MissionKind::NeutralBuoyancy,
    surface: SurfaceSpec {
        logical_width: 800,
        logical_height: 420,
    },
    bounds: FieldBounds {
        min: DVec2::new(20.0, 20.0),
        max: DVec2::new(780.0, 380.0),
    },
    zone_policy: ZonePolicy::Sticky,
    dwell_threshold_secs: 5.0,
    bodies: &[BodySpec {
        x: 200.0,
        y: 180.0,
        vx: 0.0,
        vy: 0.0,
        kind: BodyKind::Diver,
        label: "Diver",
    }],
    zones: &[
        ZoneSpec {
            x: 420.0,
            y: 160.0,
            radius: 40.0,
            kind: ZoneKind::Hatch,
            label: "Hatch Entry",
        },
        ZoneSpec {
            x: 200.0,
            y: 280.0,
            radius: 40.0,
            kind: ZoneKind::Repair,
            label: "Panel Repair",
        },
        ZoneSpec {
            x: 600.0,
            y: 280.0,
            radius: 40.0,
            kind: ZoneKind::Repair,
            label: "Bolt Tighten",
        },
        ZoneSpec {
            x: 300.0,
            y: 120.0,
            radius: 40.0,
            kind: ZoneKind::Repair,
            label: "Cable Check",
        },
        ZoneSpec {
            x: 540.0,
            y: 120.0,
            radius: 40.0,
            kind: ZoneKind::Repair,
            label: "Sensor Cal",
        },
        ZoneSpec {
            x: 400.0,
            y: 320.0,
            radius: 40.0,
            kind: ZoneKind::Hatch,
            label: "Airlock Exit",
        },
    ],
    handrails: &[],
};

/// Mission 2 — microgravity tool handling. Dock zone `i` is evaluated
/// against tool `i`.
pub const MICROGRAVITY: MissionLayout = MissionLayout {
    kind: MissionKind::Microgravity,
    surface: SurfaceSpec {
        logical_width: 780,
        logical_height: 420,
    },
    bounds: FieldBounds {
        min: DVec2::new(20.0, 20.0),
        max: DVec2::new(760.0, 380.0),
    },
    zone_policy: ZonePolicy::Live,
    dwell_threshold_secs: 6.0,
    bodies: &[
        BodySpec {
            x: 200.0,
            y: 140.0,
            vx: 20.0,
            vy: -10.0,
            kind: BodyKind::Wrench,
            label: "Wrench",
        },
        BodySpec {
            x: 320.0,
            y: 240.0,
            vx: 5.0,
            vy: 5.0,
            kind: BodyKind::Multimeter,
            label: "Multimeter",
        },
        BodySpec {
            x: 460.0,
            y: 120.0,
            vx: -8.0,
            vy: 8.0,
            kind: BodyKind::TorqueDriver,
            label: "Torque Driver",
        },
    ],
    zones: &[
        ZoneSpec {
            x: 120.0,
            y: 330.0,
            radius: 40.0,
            kind: ZoneKind::Repair,
            label: "Panel A",
        },
        ZoneSpec {
            x: 400.0,
            y: 330.0,
            radius: 40.0,
            kind: ZoneKind::Repair,
            label: "Circuit B",
        },
        ZoneSpec {
            x: 680.0,
            y: 330.0,
            radius: 40.0,
            kind: ZoneKind::Repair,
            label: "Bolt C",
        },
    ],
    handrails: &[
        HandrailSpec {
            x: 100.0,
            y: 100.0,
            length: 200.0,
            angle_degrees: 0.0,
        },
        HandrailSpec {
            x: 300.0,
            y: 80.0,
            length: 150.0,
            angle_degrees: 45.0,
        },
        HandrailSpec {
            x: 500.0,
            y: 120.0,
            length: 180.0,
            angle_degrees: -30.0,
        },
        HandrailSpec {
            x: 200.0,
            y: 250.0,
            length: 120.0,
            angle_degrees: 90.0,
        },
        HandrailSpec {
            x: 400.0,
            y: 280.0,
            length: 160.0,
            angle_degrees: -45.0,
        },
    ],
};
