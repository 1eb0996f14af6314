// src/domain/rotation.rs
use std::fmt;

/// Which side of a two-sided card faces the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Face::Front => write!(f, "front"),
            Face::Back => write!(f, "back"),
        }
    }
}

/// Derive the visible face from an unbounded rotation angle in degrees.
///
/// The back is visible while the angle, normalized into `[0, 360)`, lies in
/// `[90, 270]`; the front otherwise. Rotation may span multiple full turns in
/// either direction.
pub fn visible_face(rotation: f64) -> Face {
    let normalized = ((rotation % 360.0) + 360.0) % 360.0;
    if (90.0..=270.0).contains(&normalized) {
        Face::Back
    } else {
        Face::Front
    }
}

/// Nearest stable resting angle: the closest multiple of 180 degrees.
///
/// Closed form over the full f64 range, so many accumulated turns still
/// settle correctly. An exact half-distance tie resolves toward the candidate
/// nearer zero.
pub fn settle_target(rotation: f64) -> f64 {
    let turns = rotation / 180.0;
    let nearest = if (turns - turns.trunc()).abs() == 0.5 {
        turns.trunc()
    } else {
        turns.round()
    };
    nearest * 180.0
}

/// Cubic ease-out over a `[0, 1]` progress value; out-of-range input clamps.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
