// SPDX-License-Identifier: MPL-2.0
//! The record of one continuous contact-to-release interaction.

use crate::domain::gesture::ContactPoint;
use std::time::Duration;

/// Phase of the sampler's session state machine.
///
/// `Idle → Tracking1 → {Tracking2 → Tracking1 → …} → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    /// One contact down.
    Tracking1,
    /// Two contacts down; pinch-zoom owns the session.
    Tracking2,
}

/// Mutable record of a gesture session, from first contact to release.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub start_point: ContactPoint,
    pub current_point: ContactPoint,
    pub start_time: Duration,
    /// Timestamp of the latest accepted sample (the release, once completed).
    pub last_time: Duration,
    /// Contacts currently down, including any beyond the tracked two.
    pub active_pointer_count: u8,
    /// Highest number of simultaneous contacts seen.
    pub max_pointer_count: u8,
    /// Finger distance when the second contact landed.
    pub pinch_start_distance: Option<f32>,
    /// Number of accepted move samples of the primary contact.
    pub move_samples: u32,
    /// A non-finite coordinate was sampled.
    pub malformed: bool,
}

impl GestureSession {
    /// Starts a session at the first contact.
    #[must_use]
    pub fn begin(point: ContactPoint) -> Self {
        Self {
            start_point: point,
            current_point: point,
            start_time: point.t,
            last_time: point.t,
            active_pointer_count: 1,
            max_pointer_count: 1,
            pinch_start_distance: None,
            move_samples: 0,
            malformed: !point.is_finite(),
        }
    }

    /// Displacement of the primary contact since the start.
    #[must_use]
    pub fn displacement(&self) -> (f32, f32) {
        (
            self.current_point.x - self.start_point.x,
            self.current_point.y - self.start_point.y,
        )
    }

    /// Time elapsed between the first contact and the latest sample.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.last_time.saturating_sub(self.start_time)
    }

    /// Whether a second contact ever joined this session.
    #[must_use]
    pub fn was_pinch(&self) -> bool {
        self.max_pointer_count >= 2
    }

    /// More than two simultaneous contacts were seen.
    #[must_use]
    pub fn overflowed(&self) -> bool {
        self.max_pointer_count > 2
    }

    pub(crate) fn touch(&mut self, t: Duration) {
        if t > self.last_time {
            self.last_time = t;
        }
    }

    pub(crate) fn move_primary(&mut self, point: ContactPoint) {
        if !point.is_finite() {
            self.malformed = true;
            return;
        }
        self.current_point = point;
        self.move_samples += 1;
        self.touch(point.t);
    }

    pub(crate) fn add_contact(&mut self) {
        self.active_pointer_count = self.active_pointer_count.saturating_add(1);
        self.max_pointer_count = self.max_pointer_count.max(self.active_pointer_count);
    }

    pub(crate) fn remove_contact(&mut self) {
        self.active_pointer_count = self.active_pointer_count.saturating_sub(1);
    }
}
