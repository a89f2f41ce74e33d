// SPDX-License-Identifier: MPL-2.0
//! Slide animation between two horizontal offsets.
//!
//! Offsets are in logical pixels relative to the resting position of the
//! current item: negative values reveal the next item, positive values the
//! previous one. Time is supplied by the caller so the animation is fully
//! deterministic under test.

use std::time::Duration;

/// Ease-out cubic: fast start, gentle settle.
#[must_use]
pub fn ease_out_cubic(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Applies edge resistance to a drag that pushes past a boundary.
///
/// `resistance` of 1.0 leaves the offset untouched, 0.0 pins it.
#[must_use]
pub fn rubber_band(offset: f32, resistance: f32) -> f32 {
    if !offset.is_finite() {
        return 0.0;
    }
    offset * resistance.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideAnimation {
    from: f32,
    to: f32,
    started_at: Duration,
    duration: Duration,
}

impl SlideAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Duration, duration: Duration) -> Self {
        Self {
            from: if from.is_finite() { from } else { 0.0 },
            to,
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn ends_at(&self) -> Duration {
        self.started_at + self.duration
    }

    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.ends_at()
    }

    /// Progress in `[0, 1]` at `now`. A zero-length animation is done immediately.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn offset_at(&self, now: Duration) -> f32 {
        let eased = ease_out_cubic(self.progress(now));
        self.from + (self.to - self.from) * eased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn easing_endpoints() {
        assert_abs_diff_eq!(ease_out_cubic(0.0), 0.0);
        assert_abs_diff_eq!(ease_out_cubic(1.0), 1.0);
        assert_abs_diff_eq!(ease_out_cubic(2.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn animation_runs_from_start_to_target() {
        let slide = SlideAnimation::new(-40.0, -400.0, ms(1000), ms(300));
        assert_abs_diff_eq!(slide.offset_at(ms(1000)), -40.0);
        assert_abs_diff_eq!(slide.offset_at(ms(1300)), -400.0);
        assert_abs_diff_eq!(slide.offset_at(ms(5000)), -400.0);
        assert!(!slide.is_finished(ms(1299)));
        assert!(slide.is_finished(ms(1300)));
    }

    #[test]
    fn offset_is_monotonic() {
        let slide = SlideAnimation::new(0.0, 400.0, ms(0), ms(300));
        let mut previous = slide.offset_at(ms(0));
        for step in 1..=30 {
            let current = slide.offset_at(ms(step * 10));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let slide = SlideAnimation::new(10.0, 0.0, ms(50), Duration::ZERO);
        assert!(slide.is_finished(ms(50)));
        assert_abs_diff_eq!(slide.offset_at(ms(50)), 0.0);
    }

    #[test]
    fn rubber_band_scales_and_sanitizes() {
        assert_abs_diff_eq!(rubber_band(100.0, 0.35), 35.0);
        assert_abs_diff_eq!(rubber_band(-100.0, 2.0), -100.0);
        assert_abs_diff_eq!(rubber_band(f32::INFINITY, 0.5), 0.0);
    }
}
