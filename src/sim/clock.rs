//! Round countdown
//!
//! Counts down in f64 so that thousands of f32 frame steps summing to the
//! round length actually reach zero on the last frame.

use serde::{Deserialize, Serialize};

use crate::format_clock;

/// Leftover time below this counts as expired (seconds)
const EXPIRY_EPSILON: f64 = 1e-4;

/// Time left in the round, `0 <= remaining <= total`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundClock {
    total: f32,
    remaining: f64,
}

impl RoundClock {
    pub fn new(total: f32) -> Self {
        let total = total.max(0.0);
        Self {
            total,
            remaining: total as f64,
        }
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.total
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining as f32
    }

    /// Jump the countdown, clamped to `[0, total]`
    pub fn set_remaining(&mut self, secs: f32) {
        self.remaining = (secs as f64).clamp(0.0, self.total as f64);
    }

    /// Count down by `dt` (clamped at zero). Returns true once time is up.
    pub fn advance(&mut self, dt: f32) -> bool {
        let left = self.remaining - dt.max(0.0) as f64;
        self.remaining = if left <= EXPIRY_EPSILON { 0.0 } else { left };
        self.is_expired()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Remaining fraction for a time bar
    pub fn fraction(&self) -> f32 {
        if self.total > 0.0 {
            (self.remaining / self.total as f64) as f32
        } else {
            0.0
        }
    }

    /// `M:SS`, rounded up
    pub fn label(&self) -> String {
        format_clock(self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_clamps_at_zero() {
        let mut clock = RoundClock::new(1.0);
        assert!(!clock.advance(0.4));
        assert!((clock.remaining() - 0.6).abs() < 1e-6);
        assert!(clock.advance(5.0));
        assert_eq!(clock.remaining(), 0.0);
        assert!(clock.advance(1.0));
        assert_eq!(clock.remaining(), 0.0);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = RoundClock::new(10.0);
        clock.advance(-3.0);
        assert_eq!(clock.remaining(), 10.0);
    }

    #[test]
    fn test_label_and_fraction() {
        let mut clock = RoundClock::new(60.0);
        assert_eq!(clock.label(), "1:00");
        clock.advance(30.5);
        assert_eq!(clock.label(), "0:30");
        assert!((clock.fraction() - 29.5 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_remaining_clamped() {
        let mut clock = RoundClock::new(60.0);
        clock.set_remaining(90.0);
        assert_eq!(clock.remaining(), 60.0);
        clock.set_remaining(-1.0);
        assert!(clock.is_expired());
    }

    #[test]
    fn test_frame_steps_expire_on_last_frame() {
        for hz in [30u32, 60, 120, 144] {
            let dt = 1.0 / hz as f32;
            let mut clock = RoundClock::new(60.0);
            let frames = 60 * hz;
            for frame in 1..frames {
                assert!(!clock.advance(dt), "{} Hz expired early at frame {}", hz, frame);
            }
            assert!(clock.advance(dt), "{} Hz still running after 60 s", hz);
        }
    }
}
