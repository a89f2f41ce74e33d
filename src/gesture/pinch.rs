// SPDX-License-Identifier: MPL-2.0
//! Two-contact pinch-zoom tracking.
//!
//! The scale during a pinch is `(distance / distance_at_start) * scale_at_start`,
//! clamped into the configured [`ScaleRange`]. Lifting a finger commits the
//! current scale as the baseline for the next pinch.

use crate::config::MIN_PINCH_DISTANCE_PX;
use crate::domain::gesture::{ContactPoint, Scale, ScaleRange};

#[derive(Debug, Clone)]
pub struct PinchZoomController {
    scale: Scale,
    /// Scale committed when the current (or last) pinch started.
    baseline: f32,
    /// Finger distance at pinch start; `None` when no pinch is active.
    initial_distance: Option<f32>,
}

impl PinchZoomController {
    #[must_use]
    pub fn new(range: ScaleRange) -> Self {
        let scale = Scale::unzoomed(range);
        Self {
            scale,
            baseline: scale.value(),
            initial_distance: None,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.initial_distance.is_some()
    }

    /// Horizontal paging is only allowed at the unzoomed scale.
    #[must_use]
    pub fn paging_enabled(&self) -> bool {
        !self.scale.is_zoomed()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale.is_zoomed()
    }

    /// Records the pinch baseline when a second contact lands.
    pub fn begin(&mut self, first: ContactPoint, second: ContactPoint) {
        self.baseline = self.scale.value();
        let distance = first.distance_to(&second);
        self.initial_distance = Some(if distance.is_finite() { distance } else { 0.0 });
        log::debug!(
            "pinch started at distance {distance} from scale {}",
            self.baseline
        );
    }

    /// Updates the scale from the current finger positions.
    ///
    /// Returns the new scale when it changed.
    pub fn update(&mut self, first: ContactPoint, second: ContactPoint) -> Option<f32> {
        let initial = self.initial_distance?;
        let distance = first.distance_to(&second);
        if !distance.is_finite() {
            return None;
        }
        if initial < MIN_PINCH_DISTANCE_PX {
            // fingers started on top of each other: adopt the first usable
            // distance as the baseline instead of dividing by ~0
            if distance >= MIN_PINCH_DISTANCE_PX {
                self.initial_distance = Some(distance);
                self.baseline = self.scale.value();
            }
            return None;
        }

        let next = self.scale.with_value(distance / initial * self.baseline);
        if (next.value() - self.scale.value()).abs() > f32::EPSILON {
            self.scale = next;
            Some(next.value())
        } else {
            None
        }
    }

    /// Commits the current scale as the baseline for the next pinch.
    pub fn end(&mut self) -> f32 {
        if self.initial_distance.take().is_some() {
            self.baseline = self.scale.value();
            log::debug!("pinch committed at scale {}", self.baseline);
        }
        self.scale.value()
    }

    /// Returns to the unzoomed scale. Returns `true` if the scale changed.
    pub fn reset(&mut self) -> bool {
        let was_zoomed = self.scale.is_zoomed();
        let range = self.scale.range();
        self.scale = Scale::unzoomed(range);
        self.baseline = self.scale.value();
        self.initial_distance = None;
        was_zoomed
    }
}

impl Default for PinchZoomController {
    fn default() -> Self {
        Self::new(ScaleRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn pair(distance: f32) -> (ContactPoint, ContactPoint) {
        (
            ContactPoint::new(0.0, 0.0, Duration::ZERO),
            ContactPoint::new(distance, 0.0, Duration::ZERO),
        )
    }

    fn pinch_to(controller: &mut PinchZoomController, from: f32, to: f32) -> f32 {
        let (a, b) = pair(from);
        controller.begin(a, b);
        let (a, b) = pair(to);
        controller.update(a, b);
        controller.end()
    }

    #[test]
    fn starts_unzoomed_with_paging() {
        let controller = PinchZoomController::default();
        assert_eq!(controller.scale(), 1.0);
        assert!(controller.paging_enabled());
        assert!(!controller.is_active());
    }

    #[test]
    fn spreading_fingers_zooms_in() {
        let mut controller = PinchZoomController::default();
        assert_abs_diff_eq!(pinch_to(&mut controller, 100.0, 250.0), 2.5, epsilon = 1e-5);
        assert!(!controller.paging_enabled());
    }

    #[test]
    fn scale_is_clamped_to_range() {
        let mut controller = PinchZoomController::default();
        assert_eq!(pinch_to(&mut controller, 100.0, 1_000.0), 4.0);
        assert_eq!(pinch_to(&mut controller, 100.0, 1.0), 1.0);
    }

    #[test]
    fn second_pinch_uses_committed_baseline() {
        let mut controller = PinchZoomController::default();
        assert_abs_diff_eq!(pinch_to(&mut controller, 100.0, 300.0), 3.0, epsilon = 1e-5);
        assert_abs_diff_eq!(pinch_to(&mut controller, 200.0, 100.0), 1.5, epsilon = 1e-5);
    }

    #[test]
    fn degenerate_initial_distance_rebaselines() {
        let mut controller = PinchZoomController::default();
        let (a, b) = pair(0.0);
        controller.begin(a, b);
        let (a, b) = pair(80.0);
        assert_eq!(controller.update(a, b), None);
        let (a, b) = pair(160.0);
        let scale = controller.update(a, b).expect("scale should change");
        assert_abs_diff_eq!(scale, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn update_without_begin_is_ignored() {
        let mut controller = PinchZoomController::default();
        let (a, b) = pair(500.0);
        assert_eq!(controller.update(a, b), None);
        assert_eq!(controller.scale(), 1.0);
    }

    #[test]
    fn returning_to_min_reenables_paging() {
        let mut controller = PinchZoomController::default();
        pinch_to(&mut controller, 100.0, 200.0);
        assert!(!controller.paging_enabled());
        pinch_to(&mut controller, 200.0, 50.0);
        assert!(controller.paging_enabled());
    }

    #[test]
    fn reset_reports_change() {
        let mut controller = PinchZoomController::default();
        assert!(!controller.reset());
        pinch_to(&mut controller, 100.0, 200.0);
        assert!(controller.reset());
        assert_eq!(controller.scale(), 1.0);
    }
}
