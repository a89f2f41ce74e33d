// SPDX-License-Identifier: MPL-2.0
//! Turns a completed gesture session into exactly one [`GestureEvent`].
//!
//! Rules are evaluated in priority order, first match wins:
//!
//! 1. long-press: one contact, held longer than `long_press`, within the tap slop
//! 2. double-tap: a tap whose contact started within `double_tap_window` of the
//!    previous tap's release
//! 3. tap: within the tap slop and released before `tap_max`
//! 4. swipe: one axis beyond `min_swipe_distance_px`; horizontal only when
//!    `|dx| > |dy|`, ties go vertical
//! 5. otherwise no gesture
//!
//! Sessions that saw two contacts classify as a pinch; malformed or
//! overflowed sessions classify as no gesture.

use super::session::GestureSession;
use crate::config::GestureConfig;
use crate::domain::gesture::{GestureEvent, SwipeDirection};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GestureClassifier {
    config: GestureConfig,
    /// Release time of the last tap, kept across sessions for double-tap.
    last_tap_time: Option<Duration>,
}

impl GestureClassifier {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            last_tap_time: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    #[must_use]
    pub fn last_tap_time(&self) -> Option<Duration> {
        self.last_tap_time
    }

    /// Forgets the pending tap so the next tap cannot pair with it.
    pub fn clear_tap_memory(&mut self) {
        self.last_tap_time = None;
    }

    /// Live drag offset for an in-progress session.
    ///
    /// Carries no semantic commitment; the release classification supersedes it.
    #[must_use]
    pub fn drag_offset(&self, dx: f32) -> f32 {
        if dx.is_finite() {
            dx * self.config.swipe_damping
        } else {
            0.0
        }
    }

    /// Whether a contact starting at `start` would pair with the remembered tap.
    #[must_use]
    pub fn within_double_tap_window(&self, start: Duration) -> bool {
        self.last_tap_time
            .and_then(|last| start.checked_sub(last))
            .is_some_and(|gap| gap < self.config.double_tap_window)
    }

    /// Classifies a completed session.
    ///
    /// `committed_scale` is the pinch scale after the session, reported for
    /// two-contact sessions.
    pub fn classify(&mut self, session: &GestureSession, committed_scale: f32) -> GestureEvent {
        let event = self.evaluate(session, committed_scale);
        log::debug!(
            "classified session ({:?}, {} samples) as {:?}",
            session.duration(),
            session.move_samples,
            event
        );
        event
    }

    fn evaluate(&mut self, session: &GestureSession, committed_scale: f32) -> GestureEvent {
        if session.malformed || session.overflowed() {
            return GestureEvent::None;
        }
        if session.was_pinch() {
            return GestureEvent::Pinch {
                scale: committed_scale,
            };
        }

        let (dx, dy) = session.displacement();
        if !dx.is_finite() || !dy.is_finite() {
            return GestureEvent::None;
        }
        let duration = session.duration();
        let slop = self.config.tap_slop_px;
        let stationary = dx.abs() < slop && dy.abs() < slop;

        if stationary && duration > self.config.long_press {
            return GestureEvent::LongPress;
        }

        if stationary && duration < self.config.tap_max {
            if self.within_double_tap_window(session.start_time) {
                self.last_tap_time = None;
                return GestureEvent::DoubleTap;
            }
            self.last_tap_time = Some(session.last_time);
            return GestureEvent::Tap;
        }

        let min = self.config.min_swipe_distance_px;
        if dx.abs() > min || dy.abs() > min {
            return if dx.abs() > dy.abs() {
                GestureEvent::Swipe {
                    direction: if dx < 0.0 {
                        SwipeDirection::Left
                    } else {
                        SwipeDirection::Right
                    },
                    distance: dx.abs(),
                }
            } else {
                GestureEvent::Swipe {
                    direction: if dy < 0.0 {
                        SwipeDirection::Up
                    } else {
                        SwipeDirection::Down
                    },
                    distance: dy.abs(),
                }
            };
        }

        GestureEvent::None
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gesture::ContactPoint;

    fn session(dx: f32, dy: f32, start_ms: u64, end_ms: u64) -> GestureSession {
        let start = ContactPoint::new(200.0, 200.0, Duration::from_millis(start_ms));
        let mut session = GestureSession::begin(start);
        session.move_primary(ContactPoint::new(
            200.0 + dx,
            200.0 + dy,
            Duration::from_millis(end_ms),
        ));
        session
    }

    #[test]
    fn short_stationary_contact_is_tap() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify(&session(2.0, -3.0, 0, 100), 1.0),
            GestureEvent::Tap
        );
        assert_eq!(classifier.last_tap_time(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn long_stationary_contact_is_long_press() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify(&session(4.0, 4.0, 0, 650), 1.0),
            GestureEvent::LongPress
        );
    }

    #[test]
    fn long_press_wins_over_pending_tap() {
        let mut classifier = GestureClassifier::default();
        classifier.classify(&session(0.0, 0.0, 0, 50), 1.0);
        assert_eq!(
            classifier.classify(&session(0.0, 0.0, 100, 700), 1.0),
            GestureEvent::LongPress
        );
        assert_eq!(classifier.last_tap_time(), Some(Duration::from_millis(50)));
    }

    #[test]
    fn tap_memory_survives_intervening_swipe() {
        let mut classifier = GestureClassifier::default();
        classifier.classify(&session(0.0, 0.0, 0, 50), 1.0);
        assert!(classifier
            .classify(&session(-100.0, 0.0, 60, 150), 1.0)
            .swipe_direction()
            .is_some());
        assert_eq!(
            classifier.classify(&session(0.0, 0.0, 200, 230), 1.0),
            GestureEvent::DoubleTap
        );
    }

    #[test]
    fn two_quick_taps_make_double_tap() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify(&session(0.0, 0.0, 0, 50), 1.0),
            GestureEvent::Tap
        );
        assert_eq!(
            classifier.classify(&session(1.0, 1.0, 250, 300), 1.0),
            GestureEvent::DoubleTap
        );
        assert_eq!(classifier.last_tap_time(), None);
    }

    #[test]
    fn slow_second_tap_is_independent() {
        let mut classifier = GestureClassifier::default();
        classifier.classify(&session(0.0, 0.0, 0, 50), 1.0);
        assert_eq!(
            classifier.classify(&session(0.0, 0.0, 350, 400), 1.0),
            GestureEvent::Tap
        );
    }

    #[test]
    fn third_tap_after_double_starts_over() {
        let mut classifier = GestureClassifier::default();
        classifier.classify(&session(0.0, 0.0, 0, 50), 1.0);
        classifier.classify(&session(0.0, 0.0, 100, 150), 1.0);
        assert_eq!(
            classifier.classify(&session(0.0, 0.0, 200, 250), 1.0),
            GestureEvent::Tap
        );
    }

    #[test]
    fn horizontal_swipes() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify(&session(-120.0, 20.0, 0, 200), 1.0),
            GestureEvent::Swipe {
                direction: SwipeDirection::Left,
                distance: 120.0
            }
        );
        assert_eq!(
            classifier
                .classify(&session(80.0, -10.0, 0, 200), 1.0)
                .swipe_direction(),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn vertical_swipes_and_tie_break() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(
            classifier
                .classify(&session(10.0, 90.0, 0, 200), 1.0)
                .swipe_direction(),
            Some(SwipeDirection::Down)
        );
        assert_eq!(
            classifier
                .classify(&session(70.0, -70.0, 0, 200), 1.0)
                .swipe_direction(),
            Some(SwipeDirection::Up)
        );
    }

    #[test]
    fn below_swipe_threshold_is_none() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify(&session(49.0, 0.0, 0, 200), 1.0),
            GestureEvent::None
        );
        assert_eq!(
            classifier.classify(&session(50.0, 0.0, 0, 200), 1.0),
            GestureEvent::None
        );
    }

    #[test]
    fn stationary_mid_duration_is_none() {
        let mut classifier = GestureClassifier::default();
        assert_eq!(
            classifier.classify(&session(0.0, 0.0, 0, 400), 1.0),
            GestureEvent::None
        );
    }

    #[test]
    fn pinch_session_reports_scale() {
        let mut classifier = GestureClassifier::default();
        let mut pinch = session(0.0, 0.0, 0, 200);
        pinch.add_contact();
        assert_eq!(
            classifier.classify(&pinch, 2.5),
            GestureEvent::Pinch { scale: 2.5 }
        );
    }

    #[test]
    fn malformed_and_overflowed_sessions_are_none() {
        let mut classifier = GestureClassifier::default();
        let mut malformed = session(-200.0, 0.0, 0, 100);
        malformed.malformed = true;
        assert_eq!(classifier.classify(&malformed, 1.0), GestureEvent::None);

        let mut crowded = session(-200.0, 0.0, 0, 100);
        crowded.add_contact();
        crowded.add_contact();
        assert_eq!(classifier.classify(&crowded, 1.0), GestureEvent::None);
    }

    #[test]
    fn drag_offset_is_damped() {
        let classifier = GestureClassifier::default();
        assert_eq!(classifier.drag_offset(-100.0), -80.0);
        assert_eq!(classifier.drag_offset(f32::NAN), 0.0);
    }
}
