// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gesture**: Tap, long-press, double-tap and swipe thresholds
//! - **Zoom**: Pinch scale bounds
//! - **Carousel**: Slide transition, autoplay and edge resistance
//! - **Viewer**: Transient acknowledgment timing

use crate::domain::gesture::newtypes::scale_bounds;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Maximum displacement (per axis) for a contact to still count as a tap.
pub const DEFAULT_TAP_SLOP_PX: f32 = 10.0;

/// Displacement a contact must exceed on one axis to count as a swipe.
pub const DEFAULT_MIN_SWIPE_DISTANCE_PX: f32 = 50.0;

/// Hold duration after which a stationary contact is a long-press.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;

/// Maximum contact duration for a tap.
pub const DEFAULT_TAP_MAX_MS: u64 = 300;

/// Window between a tap release and the next contact for a double-tap.
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Factor applied to the live horizontal drag offset.
pub const DEFAULT_SWIPE_DAMPING: f32 = 0.8;

/// Bounds accepted for the swipe damping factor.
pub const MIN_SWIPE_DAMPING: f32 = 0.1;
pub const MAX_SWIPE_DAMPING: f32 = 1.0;

/// Upper bound for any configured pixel threshold.
pub const MAX_THRESHOLD_PX: f32 = 500.0;

/// Upper bound for any configured gesture duration.
pub const MAX_GESTURE_MS: u64 = 5_000;

/// Swipe threshold used by the mobile image controls preset.
pub const CONTROLS_MIN_SWIPE_DISTANCE_PX: f32 = 75.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Minimum pinch scale.
pub const DEFAULT_MIN_SCALE: f32 = scale_bounds::MIN;

/// Maximum pinch scale.
pub const DEFAULT_MAX_SCALE: f32 = scale_bounds::MAX;

/// Two contacts closer than this are treated as a degenerate pinch baseline.
pub const MIN_PINCH_DISTANCE_PX: f32 = 1.0;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Duration of the slide (or settle-back) animation.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Autoplay interval when autoplay is enabled.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Minimum autoplay interval accepted from configuration.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 500;

/// Extra damping applied when dragging past the first or last item.
pub const DEFAULT_EDGE_RESISTANCE: f32 = 0.35;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Visibility window of the "liked" acknowledgment.
pub const DEFAULT_LIKE_ACK_MS: u64 = 1_000;

/// Item width assumed until the host reports a viewport size.
pub const DEFAULT_ITEM_WIDTH_PX: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TAP_SLOP_PX > 0.0);
    assert!(DEFAULT_MIN_SWIPE_DISTANCE_PX > DEFAULT_TAP_SLOP_PX);
    assert!(DEFAULT_LONG_PRESS_MS > DEFAULT_TAP_MAX_MS);
    assert!(DEFAULT_SWIPE_DAMPING >= MIN_SWIPE_DAMPING);
    assert!(DEFAULT_SWIPE_DAMPING <= MAX_SWIPE_DAMPING);
    assert!(DEFAULT_MAX_SCALE > DEFAULT_MIN_SCALE);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_EDGE_RESISTANCE > 0.0);
    assert!(DEFAULT_EDGE_RESISTANCE <= 1.0);
};
