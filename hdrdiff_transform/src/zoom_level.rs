// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between user-facing zoom levels and raw scale factors.
//!
//! Zoom level `0` is a scale of `1.0`. Positive levels add to the scale
//! (`1` → `2.0`, `2` → `3.0`), negative levels divide it (`-1` → `0.5`,
//! `-2` → `1/3`). Equal level increments therefore give fine steps when
//! magnifying and coarse steps when shrinking near `1.0`.
//!
//! The mapping is continuous at level `0` but its slope is not; that kink is
//! part of the zoom feel and is kept as is.

/// Converts a zoom level into a scale factor.
///
/// The result is strictly positive for every finite `level`. A `NaN` level
/// yields `NaN`.
#[must_use]
pub fn zoom_level_to_scale(level: f64) -> f64 {
    if level > 0.0 {
        level + 1.0
    } else {
        1.0 / (-level + 1.0)
    }
}

/// Converts a scale factor into a zoom level.
///
/// This is the inverse of [`zoom_level_to_scale`] for `scale > 0`. A zero
/// scale maps to negative infinity and negative scales produce meaningless
/// levels; [`crate::ViewTransform`] never holds such a scale.
#[must_use]
pub fn scale_to_zoom_level(scale: f64) -> f64 {
    if scale > 1.0 {
        scale - 1.0
    } else {
        -(1.0 / scale - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{scale_to_zoom_level, zoom_level_to_scale};

    #[test]
    fn level_table() {
        assert_eq!(zoom_level_to_scale(0.0), 1.0);
        assert_eq!(zoom_level_to_scale(1.0), 2.0);
        assert_eq!(zoom_level_to_scale(2.0), 3.0);
        assert_eq!(zoom_level_to_scale(0.5), 1.5);
        assert_eq!(zoom_level_to_scale(-1.0), 0.5);
        assert_eq!(zoom_level_to_scale(-3.0), 0.25);
        assert!((zoom_level_to_scale(-2.0) - 1.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn unit_scale_is_level_zero() {
        assert_eq!(scale_to_zoom_level(1.0), 0.0);
        assert_eq!(scale_to_zoom_level(2.0), 1.0);
        assert_eq!(scale_to_zoom_level(0.5), -1.0);
        assert_eq!(scale_to_zoom_level(0.25), -3.0);
    }

    #[test]
    fn continuous_across_the_branch_point() {
        let eps = 1e-9;
        let below = zoom_level_to_scale(-eps);
        let above = zoom_level_to_scale(eps);
        assert!((below - 1.0).abs() < 1e-8);
        assert!((above - 1.0).abs() < 1e-8);
        assert!(below < 1.0 && 1.0 < above);
    }

    #[test]
    fn strictly_increasing() {
        let mut prev = zoom_level_to_scale(-20.0);
        let mut level = -20.0;
        while level < 20.0 {
            level += 0.25;
            let next = zoom_level_to_scale(level);
            assert!(next > prev, "scale must grow with level at {level}");
            prev = next;
        }
    }

    #[test]
    fn zero_scale_is_negative_infinity() {
        assert_eq!(scale_to_zoom_level(0.0), f64::NEG_INFINITY);
    }
}
