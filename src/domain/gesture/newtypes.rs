// SPDX-License-Identifier: MPL-2.0
//! Gesture newtypes.
//!
//! Type-safe wrappers that keep zoom values inside their valid range.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Zoom scale bounds (1.0x to 4.0x).
pub mod scale_bounds {
    /// Minimum scale; the unzoomed image.
    pub const MIN: f32 = 1.0;
    /// Maximum scale.
    pub const MAX: f32 = 4.0;
    /// Largest upper bound a configuration may request.
    pub const CEILING: f32 = 16.0;
    /// Tolerance used to decide that a scale is back at its minimum.
    pub const EPSILON: f32 = 1e-3;
}

// =============================================================================
// ScaleRange
// =============================================================================

/// Inclusive range a pinch scale is clamped into.
///
/// Construction normalizes the bounds: `min` is at least 1.0 and `max` is
/// never below `min` nor above [`scale_bounds::CEILING`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    min: f32,
    max: f32,
}

impl ScaleRange {
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() {
            min.clamp(scale_bounds::MIN, scale_bounds::CEILING)
        } else {
            scale_bounds::MIN
        };
        let max = if max.is_finite() {
            max.clamp(min, scale_bounds::CEILING)
        } else {
            scale_bounds::MAX.max(min)
        };
        Self { min, max }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps `value` into the range. Non-finite input maps to `min`.
    #[must_use]
    pub fn clamp(self, value: f32) -> f32 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        }
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self {
            min: scale_bounds::MIN,
            max: scale_bounds::MAX,
        }
    }
}

// =============================================================================
// Scale
// =============================================================================

/// Zoom scale factor, guaranteed to lie within its [`ScaleRange`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    value: f32,
    range: ScaleRange,
}

impl Scale {
    /// Creates a scale, clamping `value` into `range`.
    #[must_use]
    pub fn new(value: f32, range: ScaleRange) -> Self {
        Self {
            value: range.clamp(value),
            range,
        }
    }

    /// The unzoomed scale for `range`.
    #[must_use]
    pub fn unzoomed(range: ScaleRange) -> Self {
        Self {
            value: range.min(),
            range,
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.value
    }

    #[must_use]
    pub fn range(self) -> ScaleRange {
        self.range
    }

    /// Returns a scale with the same range and a new (clamped) value.
    #[must_use]
    pub fn with_value(self, value: f32) -> Self {
        Self::new(value, self.range)
    }

    /// Returns whether the view is zoomed in beyond its minimum.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.value > self.range.min() + scale_bounds::EPSILON
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.value >= self.range.max()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::unzoomed(ScaleRange::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_default_range() {
        let range = ScaleRange::default();
        assert_eq!(Scale::new(0.2, range).value(), 1.0);
        assert_eq!(Scale::new(9.0, range).value(), 4.0);
        assert_eq!(Scale::new(2.5, range).value(), 2.5);
    }

    #[test]
    fn nan_scale_falls_back_to_min() {
        let scale = Scale::new(f32::NAN, ScaleRange::default());
        assert_eq!(scale.value(), 1.0);
        assert!(!scale.is_zoomed());
    }

    #[test]
    fn range_normalizes_inverted_bounds() {
        let range = ScaleRange::new(3.0, 2.0);
        assert_eq!(range.min(), 3.0);
        assert_eq!(range.max(), 3.0);
    }

    #[test]
    fn range_never_goes_below_one() {
        let range = ScaleRange::new(0.1, 100.0);
        assert_eq!(range.min(), scale_bounds::MIN);
        assert_eq!(range.max(), scale_bounds::CEILING);
    }

    #[test]
    fn zoomed_detection_uses_tolerance() {
        let range = ScaleRange::default();
        assert!(!Scale::new(1.0005, range).is_zoomed());
        assert!(Scale::new(1.1, range).is_zoomed());
        assert!(Scale::new(4.0, range).is_max());
    }
}
