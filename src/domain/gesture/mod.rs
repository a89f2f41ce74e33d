// SPDX-License-Identifier: MPL-2.0
//! Gesture domain types.
//!
//! Framework-free value objects shared by the sampler, classifier,
//! carousel and viewer layers.

pub mod newtypes;
pub mod types;

pub use newtypes::{Scale, ScaleRange};
pub use types::{ContactPoint, GestureEvent, PointerEvent, PointerId, SwipeDirection, TouchPhase};
