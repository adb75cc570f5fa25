// SPDX-License-Identifier: MPL-2.0
//! Smooth scroll animation toward a section.
//!
//! The animation is sampled on every tick; the view layer turns each sample
//! into a snap operation on the page scrollable.

use std::time::{Duration, Instant};

/// Ease-out cubic: fast start, gentle landing. `t` is clamped to `0.0..=1.0`.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// An in-flight scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Fraction of the duration elapsed at `now`, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Offset to display at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        let eased = ease_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn easing_is_ahead_of_linear() {
        for step in 1..10 {
            let t = step as f32 / 10.0;
            assert!(ease_out_cubic(t) > t);
        }
    }

    #[test]
    fn animation_interpolates_between_offsets() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(0.0, 1000.0, start, Duration::from_millis(400));

        assert_eq!(animation.offset_at(start), 0.0);
        let halfway = animation.offset_at(start + Duration::from_millis(200));
        assert!(halfway > 500.0 && halfway < 1000.0);
        assert_eq!(animation.offset_at(start + Duration::from_millis(400)), 1000.0);
        assert!(animation.is_finished(start + Duration::from_millis(500)));
    }

    #[test]
    fn animation_can_scroll_upward() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(2000.0, 800.0, start, Duration::from_millis(100));
        let mid = animation.offset_at(start + Duration::from_millis(50));
        assert!(mid < 2000.0 && mid > 800.0);
        assert_eq!(animation.offset_at(start + Duration::from_secs(1)), 800.0);
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let start = Instant::now();
        let animation = ScrollAnimation::new(0.0, 300.0, start, Duration::ZERO);
        assert!(animation.is_finished(start));
        assert_eq!(animation.offset_at(start), 300.0);
    }
}
