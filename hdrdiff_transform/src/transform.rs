// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

use kurbo::{Affine, Point, Rect, Vec2};

use crate::error::TransformError;
use crate::zoom_level::scale_to_zoom_level;

/// Uniform scale plus translation, mapping item space into viewport space.
///
/// A point `p` in item coordinates maps to `p * scale + translation` in
/// viewport coordinates. The scale is always positive and finite, so the
/// transform is always invertible and never mirrors.
///
/// Compose with `*` the same way as [`kurbo::Affine`]: `a * b` applies `b`
/// first, then `a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    translation: Vec2,
}

impl ViewTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self::from_parts(1.0, Vec2::ZERO);

    /// Creates a transform from a scale factor and a viewport-space translation.
    ///
    /// Fails with [`TransformError::InvalidArgument`] if `scale` is not a
    /// positive finite number or `translation` is not finite.
    pub fn new(scale: f64, translation: Vec2) -> Result<Self, TransformError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(TransformError::invalid_argument(
                "scale",
                "a positive, finite scale factor",
            ));
        }
        if !translation.is_finite() {
            return Err(TransformError::invalid_argument(
                "translation",
                "a finite translation",
            ));
        }
        Ok(Self::from_parts(scale, translation))
    }

    /// A pure translation. `translation` must be finite.
    pub(crate) const fn translate(translation: Vec2) -> Self {
        Self::from_parts(1.0, translation)
    }

    pub(crate) const fn from_parts(scale: f64, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    /// The uniform scale factor.
    #[must_use]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// The translation applied after scaling, in viewport coordinates.
    #[must_use]
    pub const fn translation(&self) -> Vec2 {
        self.translation
    }

    /// The zoom level corresponding to [`ViewTransform::scale`].
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        scale_to_zoom_level(self.scale)
    }

    /// Maps an item-space point into viewport space.
    #[must_use]
    pub fn map_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.translation).to_point()
    }

    /// Maps an item-space rectangle into viewport space.
    ///
    /// Because the scale is positive the mapped corners keep their order, so
    /// no bounding-box pass is needed.
    #[must_use]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let p0 = self.map_point(Point::new(rect.x0, rect.y0));
        let p1 = self.map_point(Point::new(rect.x1, rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// The transform mapping viewport space back into item space.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let inv = 1.0 / self.scale;
        Self::from_parts(inv, -self.translation * inv)
    }

    /// Appends a viewport-space translation.
    ///
    /// Returns `self` unchanged if the resulting translation would not be
    /// finite.
    #[must_use]
    pub fn then_translate(self, delta: Vec2) -> Self {
        let translation = self.translation + delta;
        if !translation.is_finite() {
            return self;
        }
        Self::from_parts(self.scale, translation)
    }

    /// Appends a scale by `factor` about a fixed viewport-space `center`.
    ///
    /// `factor` must be positive; callers in this crate guarantee that.
    #[must_use]
    pub(crate) fn then_scale_about(self, center: Point, factor: f64) -> Self {
        let c = center.to_vec2();
        Self::translate(c) * Self::from_parts(factor, Vec2::ZERO) * Self::translate(-c) * self
    }

    /// Converts into a general [`Affine`] for renderers.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new([
            self.scale,
            0.0,
            0.0,
            self.scale,
            self.translation.x,
            self.translation.y,
        ])
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for ViewTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_parts(
            self.scale * rhs.scale,
            rhs.translation * self.scale + self.translation,
        )
    }
}

impl From<ViewTransform> for Affine {
    fn from(t: ViewTransform) -> Self {
        t.to_affine()
    }
}

impl TryFrom<Affine> for ViewTransform {
    type Error = TransformError;

    /// Accepts only uniform positive scale plus translation.
    ///
    /// Shear, rotation, mirroring, or unequal axis scales yield
    /// [`TransformError::InvalidState`].
    fn try_from(affine: Affine) -> Result<Self, Self::Error> {
        let coeffs = affine.as_coeffs();
        let [m11, m12, m21, m22, tx, ty] = coeffs;
        let similarity = m11 == m22
            && m12 == 0.0
            && m21 == 0.0
            && m11.is_finite()
            && m11 > 0.0
            && tx.is_finite()
            && ty.is_finite();
        if !similarity {
            return Err(TransformError::InvalidState { coeffs });
        }
        Ok(Self::from_parts(m11, Vec2::new(tx, ty)))
    }
}

/// Returns the uniform scale factor of a general affine transform.
///
/// Fails with [`TransformError::InvalidState`] unless the transform is a
/// uniform positive scale plus translation (the two diagonal components equal
/// and no shear).
pub fn scale_factor(affine: Affine) -> Result<f64, TransformError> {
    ViewTransform::try_from(affine).map(|t| t.scale())
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Vec2};

    use super::{ViewTransform, scale_factor};
    use crate::TransformError;

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-9, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn composition_matches_kurbo() {
        let a = ViewTransform::new(2.0, Vec2::new(10.0, -4.0)).unwrap();
        let b = ViewTransform::new(0.25, Vec2::new(-3.0, 7.0)).unwrap();
        let ours = (a * b).to_affine();
        let theirs = a.to_affine() * b.to_affine();
        let pt = Point::new(12.5, -8.0);
        assert_close(ours * pt, theirs * pt);
        assert_close((a * b).map_point(pt), a.map_point(b.map_point(pt)));
    }

    #[test]
    fn inverse_roundtrip() {
        let t = ViewTransform::new(3.5, Vec2::new(-40.0, 12.0)).unwrap();
        let pt = Point::new(7.0, 9.0);
        assert_close(t.inverse().map_point(t.map_point(pt)), pt);
        let id = t * t.inverse();
        assert!((id.scale() - 1.0).abs() < 1e-12);
        assert!(id.translation().hypot() < 1e-9);
    }

    #[test]
    fn then_translate_keeps_translation_finite() {
        let t = ViewTransform::new(2.0, Vec2::new(1.0, 1.0)).unwrap();
        assert_eq!(t.then_translate(Vec2::new(f64::NAN, 0.0)), t);
        assert_eq!(t.then_translate(Vec2::new(0.0, f64::INFINITY)), t);
        assert_eq!(t.then_translate(Vec2::new(f64::MAX, 0.0)).translation().x, f64::MAX);
        let near_max = ViewTransform::new(1.0, Vec2::new(f64::MAX, 0.0)).unwrap();
        assert_eq!(near_max.then_translate(Vec2::new(f64::MAX, 0.0)), near_max);
    }

    #[test]
    fn map_rect_keeps_corner_order() {
        let t = ViewTransform::new(0.5, Vec2::new(5.0, 5.0)).unwrap();
        let r = t.map_rect(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(r, Rect::new(5.0, 5.0, 55.0, 25.0));
    }

    #[test]
    fn new_rejects_bad_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ViewTransform::new(scale, Vec2::ZERO),
                Err(TransformError::InvalidArgument {
                    argument: "scale",
                    ..
                })
            ));
        }
        assert!(ViewTransform::new(1.0, Vec2::new(f64::NAN, 0.0)).is_err());
    }

    #[test]
    fn scale_factor_accepts_similarity() {
        let affine = Affine::translate((3.0, 4.0)) * Affine::scale(2.5);
        assert_eq!(scale_factor(affine), Ok(2.5));
        let t = ViewTransform::try_from(affine).unwrap();
        assert_eq!(t.translation(), Vec2::new(3.0, 4.0));
        assert_eq!(Affine::from(t), affine);
    }

    #[test]
    fn scale_factor_rejects_non_uniform_scale_and_shear() {
        let rejected = [
            Affine::scale_non_uniform(2.0, 3.0),
            Affine::skew(0.5, 0.0),
            Affine::rotate(0.3),
            Affine::scale(-1.0),
            Affine::scale(0.0),
        ];
        for affine in rejected {
            assert_eq!(
                scale_factor(affine),
                Err(TransformError::InvalidState {
                    coeffs: affine.as_coeffs()
                })
            );
        }
    }

    #[test]
    fn then_scale_about_fixes_center() {
        let t = ViewTransform::new(1.7, Vec2::new(-20.0, 33.0)).unwrap();
        let center = Point::new(120.0, 80.0);
        let item_pt = t.inverse().map_point(center);
        let zoomed = t.then_scale_about(center, 3.0);
        assert_close(zoomed.map_point(item_pt), center);
        assert!((zoomed.scale() - 5.1).abs() < 1e-12);
    }
}
