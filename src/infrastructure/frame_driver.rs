// src/infrastructure/frame_driver.rs
use crate::application::{FlipCard, SettleTicket};
use crate::constants::FRAME_INTERVAL;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Cooperative fixed-interval driver for settle animations.
///
/// Stands in for the host UI's per-frame callback: advance the animation by
/// one frame, sleep, repeat until the card reports it is done. A ticket from
/// a cancelled settle makes the first tick report completion, so the loop
/// exits immediately.
#[derive(Debug, Clone, Copy)]
pub struct FrameDriver {
    frame: Duration,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self {
            frame: FRAME_INTERVAL,
        }
    }

    pub fn with_frame(frame: Duration) -> Self {
        Self { frame }
    }

    /// Drive `card` until the settle animation behind `ticket` finishes.
    pub fn drive(&self, card: &mut FlipCard, ticket: SettleTicket) {
        let mut frames = 0u32;
        while card.tick(ticket, self.frame) {
            frames += 1;
            thread::sleep(self.frame);
        }
        debug!(frames, rotation = card.rotation(), "Settle animation finished");
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Face;

    #[test]
    fn given_released_card_when_driving_then_card_ends_idle_on_target() {
        let mut card = FlipCard::new();
        card.begin_drag();
        card.drag(130.0);
        let ticket = card.end_drag().expect("should settle");

        // One-millisecond frames keep the test fast.
        FrameDriver::with_frame(Duration::from_millis(1)).drive(&mut card, ticket);

        assert_eq!(card.rotation(), 180.0);
        assert_eq!(card.face(), Face::Back);
    }

    #[test]
    fn given_cancelled_settle_when_driving_then_returns_without_moving() {
        let mut card = FlipCard::new();
        card.begin_drag();
        card.drag(130.0);
        let stale = card.end_drag().expect("should settle");
        card.begin_drag();
        let rotation = card.rotation();

        FrameDriver::with_frame(Duration::from_millis(1)).drive(&mut card, stale);

        assert_eq!(card.rotation(), rotation);
    }
}
