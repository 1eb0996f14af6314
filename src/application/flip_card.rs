// src/application/flip_card.rs
use crate::constants::{DRAG_SENSITIVITY, SETTLE_DURATION};
use crate::domain::rotation::{ease_out_cubic, settle_target, visible_face};
use crate::domain::Face;
use std::time::Duration;
use tracing::debug;

/// Coarse interaction state, exposed for hosts that gate controls on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipState {
    Idle,
    Dragging,
    Settling,
}

/// Handle for one settle animation.
///
/// Tickets from superseded animations are ignored by `tick`, so a driver
/// loop can never resurrect a settle that a new gesture cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleTicket {
    generation: u64,
}

enum State {
    Idle,
    Dragging,
    Settling {
        from: f64,
        target: f64,
        elapsed: Duration,
    },
}

/// Drag-to-rotate state machine for a two-sided postcard.
///
/// Horizontal drag deltas accumulate into an unbounded rotation angle; on
/// release the card settles to the nearest multiple of 180° with a cubic
/// ease-out. The visible face is derived from the continuous angle, and an
/// optional observer fires on every face change (edge-triggered).
pub struct FlipCard {
    rotation: f64,
    state: State,
    generation: u64,
    sensitivity: f64,
    settle_duration: Duration,
    last_face: Face,
    on_face_change: Option<Box<dyn FnMut(Face)>>,
}

impl FlipCard {
    pub fn new() -> Self {
        Self::with_tuning(DRAG_SENSITIVITY, SETTLE_DURATION)
    }

    pub fn with_tuning(sensitivity: f64, settle_duration: Duration) -> Self {
        Self {
            rotation: 0.0,
            state: State::Idle,
            generation: 0,
            sensitivity,
            settle_duration,
            last_face: visible_face(0.0),
            on_face_change: None,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn face(&self) -> Face {
        visible_face(self.rotation)
    }

    pub fn state(&self) -> FlipState {
        match self.state {
            State::Idle => FlipState::Idle,
            State::Dragging => FlipState::Dragging,
            State::Settling { .. } => FlipState::Settling,
        }
    }

    /// Register the observer fired whenever the visible face changes value.
    pub fn on_face_change(&mut self, observer: impl FnMut(Face) + 'static) {
        self.on_face_change = Some(Box::new(observer));
    }

    /// Start a gesture. Cancels any in-flight settle and takes over the
    /// rotation at its current, possibly mid-animation, value.
    pub fn begin_drag(&mut self) {
        if let State::Settling { .. } = self.state {
            debug!(rotation = self.rotation, "New gesture cancels settle");
        }
        self.generation += 1;
        self.state = State::Dragging;
    }

    /// Apply a horizontal move delta in pixels. Ignored outside a gesture.
    pub fn drag(&mut self, delta_x: f64) {
        if !matches!(self.state, State::Dragging) {
            debug!(delta_x, "Drag delta outside a gesture, ignoring");
            return;
        }
        self.rotation += delta_x * self.sensitivity;
        self.emit_face_change();
    }

    /// End the gesture. Returns a ticket for the settle animation, or `None`
    /// when the card already rests on a stable angle.
    pub fn end_drag(&mut self) -> Option<SettleTicket> {
        if !matches!(self.state, State::Dragging) {
            return None;
        }

        let target = settle_target(self.rotation);
        if (target - self.rotation).abs() < f64::EPSILON {
            self.rotation = target;
            self.state = State::Idle;
            return None;
        }

        debug!(from = self.rotation, to = target, "Settling");
        self.state = State::Settling {
            from: self.rotation,
            target,
            elapsed: Duration::ZERO,
        };
        Some(SettleTicket {
            generation: self.generation,
        })
    }

    /// Advance the settle animation by `dt`. Returns `true` while further
    /// frames are needed. A stale ticket is a no-op reporting completion.
    pub fn tick(&mut self, ticket: SettleTicket, dt: Duration) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        let (from, target, elapsed) = match &mut self.state {
            State::Settling {
                from,
                target,
                elapsed,
            } => {
                *elapsed += dt;
                (*from, *target, *elapsed)
            }
            _ => return false,
        };

        if self.settle_duration.is_zero()
            || elapsed.as_secs_f64() >= self.settle_duration.as_secs_f64()
        {
            self.rotation = target;
            self.state = State::Idle;
        } else {
            let progress = elapsed.as_secs_f64() / self.settle_duration.as_secs_f64();
            self.rotation = from + (target - from) * ease_out_cubic(progress);
        }

        self.emit_face_change();
        matches!(self.state, State::Settling { .. })
    }

    fn emit_face_change(&mut self) {
        let face = visible_face(self.rotation);
        if face == self.last_face {
            return;
        }
        self.last_face = face;
        debug!(%face, rotation = self.rotation, "Visible face changed");
        if let Some(observer) = self.on_face_change.as_mut() {
            observer(face);
        }
    }
}

impl Default for FlipCard {
    fn default() -> Self {
        Self::new()
    }
}
