// SPDX-License-Identifier: MPL-2.0
//! Contact samples, pointer notifications and classified gesture events.

use std::time::Duration;

/// One sampled contact position.
///
/// `t` is a monotonic timestamp relative to an epoch chosen by the host
/// (application start, first event, ...). Only differences are meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactPoint {
    pub x: f32,
    pub y: f32,
    pub t: Duration,
}

impl ContactPoint {
    #[must_use]
    pub fn new(x: f32, y: f32, t: Duration) -> Self {
        Self { x, y, t }
    }

    /// Euclidean distance to another contact, ignoring time.
    #[must_use]
    pub fn distance_to(&self, other: &ContactPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Returns true when both coordinates are finite numbers.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Identifier of a finger or pointer, stable for the duration of one contact.
///
/// Mouse input uses [`PointerId::MOUSE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    pub const MOUSE: PointerId = PointerId(0);
}

/// Phase of a native pointer/touch notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A raw notification from the host UI runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    pub phase: TouchPhase,
    pub x: f32,
    pub y: f32,
    pub t: Duration,
}

impl PointerEvent {
    #[must_use]
    pub fn new(pointer: PointerId, phase: TouchPhase, x: f32, y: f32, t: Duration) -> Self {
        Self {
            pointer,
            phase,
            x,
            y,
            t,
        }
    }

    /// Convenience constructor for single-pointer input at time `ms`.
    #[must_use]
    pub fn at_ms(phase: TouchPhase, x: f32, y: f32, ms: u64) -> Self {
        Self::new(PointerId::MOUSE, phase, x, y, Duration::from_millis(ms))
    }

    #[must_use]
    pub fn contact(&self) -> ContactPoint {
        ContactPoint::new(self.x, self.y, self.t)
    }
}

/// Direction of a committed swipe, named after finger travel.
///
/// `Left` means the finger moved toward negative x, which pages forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, SwipeDirection::Left | SwipeDirection::Right)
    }
}

/// Outcome of one completed gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureEvent {
    #[default]
    None,
    Tap,
    DoubleTap,
    LongPress,
    Swipe {
        direction: SwipeDirection,
        /// Displacement along the dominant axis, in pixels.
        distance: f32,
    },
    Pinch {
        scale: f32,
    },
}

impl GestureEvent {
    #[must_use]
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        match self {
            GestureEvent::Swipe { direction, .. } => Some(*direction),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, GestureEvent::None)
    }
}
