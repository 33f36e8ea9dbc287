// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

use crate::error::TransformError;
use crate::transform::ViewTransform;
use crate::zoom_level::{scale_to_zoom_level, zoom_level_to_scale};

/// Fits an item of size `item` inside a viewport of size `view`.
///
/// The largest uniform scale that keeps the whole item visible is chosen; the
/// item touches both edges of the viewport along the constraining axis and is
/// centered along the other one.
///
/// Fails with [`TransformError::InvalidArgument`] if either size has a
/// non-positive or non-finite component, or if the sizes are so far apart
/// that the scale would overflow to infinity or underflow to zero.
pub fn fit(item: Size, view: Size) -> Result<ViewTransform, TransformError> {
    check_size("item", item)?;
    check_size("view", view)?;

    let scale = (view.width / item.width).min(view.height / item.height);
    if !(scale.is_finite() && scale > 0.0) {
        return Err(TransformError::invalid_argument(
            "item",
            "a size whose ratio to the view gives a positive, finite scale",
        ));
    }

    // Item center to origin, scale, origin to view center.
    let to_origin = ViewTransform::translate(-item.to_vec2() * 0.5);
    let to_view_center = ViewTransform::translate(view.to_vec2() * 0.5);
    let fitted = to_view_center * ViewTransform::from_parts(scale, Vec2::ZERO) * to_origin;
    if !fitted.translation().is_finite() {
        return Err(TransformError::invalid_argument(
            "view",
            "a size whose center offset stays finite",
        ));
    }
    Ok(fitted)
}

/// Zooms by `increment` zoom levels about a viewport-space `center`.
///
/// Positive increments zoom in, negative increments zoom out. The current
/// scale is converted to a zoom level, offset by `increment`, and converted
/// back; the correction is applied in viewport space, after the existing
/// item → viewport mapping, so `center` stays fixed on screen.
///
/// A non-finite increment, or one that would drive the scale to zero or
/// infinity or the translation out of range, leaves the transform unchanged.
#[must_use]
pub fn zoom(transform: ViewTransform, center: Point, increment: f64) -> ViewTransform {
    if !increment.is_finite() {
        return transform;
    }
    let old_scale = transform.scale();
    let new_scale = zoom_level_to_scale(scale_to_zoom_level(old_scale) + increment);
    if !(new_scale.is_finite() && new_scale > 0.0) {
        return transform;
    }
    let zoomed = transform.then_scale_about(center, new_scale / old_scale);
    if !(zoomed.scale().is_finite() && zoomed.translation().is_finite()) {
        return transform;
    }
    zoomed
}

/// Like [`zoom`], but for a general [`Affine`] handed over by a renderer.
///
/// Fails with [`TransformError::InvalidState`] if `transform` is not a
/// uniform positive scale plus translation.
pub fn zoom_affine(
    transform: Affine,
    center: Point,
    increment: f64,
) -> Result<Affine, TransformError> {
    let transform = ViewTransform::try_from(transform)?;
    Ok(zoom(transform, center, increment).to_affine())
}

/// Pans by the pointer movement since the start of a drag.
///
/// The translation is always applied to `at_drag_start`, never to the live
/// transform, so intermediate pointer positions do not accumulate error.
/// There is no clamping; the item may be moved arbitrarily far away.
#[must_use]
pub fn pan(
    at_drag_start: ViewTransform,
    pointer_at_start: Point,
    pointer_now: Point,
) -> ViewTransform {
    at_drag_start.then_translate(pointer_now - pointer_at_start)
}

fn check_size(argument: &'static str, size: Size) -> Result<(), TransformError> {
    let valid = size.width.is_finite()
        && size.height.is_finite()
        && size.width > 0.0
        && size.height > 0.0;
    if valid {
        Ok(())
    } else {
        Err(TransformError::invalid_argument(
            argument,
            "positive, finite dimensions",
        ))
    }
}
