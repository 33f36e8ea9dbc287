// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! hdrdiff Transform: fit, pan, and zoom algebra for image viewers.
//!
//! This crate computes the similarity transform (uniform scale plus
//! translation) that places an image inside a viewport. It focuses on:
//! - Fitting an item of any size into a viewport, centered, without cropping.
//! - Zooming in "zoom levels" so that equal steps feel even in both
//!   directions, while a chosen viewport point stays fixed on screen.
//! - Panning from a drag start without accumulating error.
//!
//! It does **not** decode images, render pixels, or handle input events.
//! Callers store the returned [`ViewTransform`] and pass it back in on the
//! next operation; every function here is pure.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hdrdiff_transform::{fit, pan, zoom};
//!
//! // A 4000x3000 image in an 800x600 viewport.
//! let view = Size::new(800.0, 600.0);
//! let t = fit(Size::new(4000.0, 3000.0), view).unwrap();
//! assert_eq!(t.scale(), 0.2);
//!
//! // One wheel notch (delta 120) zooms in half a level about the cursor.
//! let cursor = Point::new(200.0, 150.0);
//! let zoomed = zoom(t, cursor, 120.0 / 240.0);
//! let under_cursor = t.inverse().map_point(cursor);
//! let after = zoomed.map_point(under_cursor);
//! assert!((after - cursor).hypot() < 1e-9);
//!
//! // Drag from (10, 10) to (30, 40).
//! let panned = pan(zoomed, Point::new(10.0, 10.0), Point::new(30.0, 40.0));
//! assert_eq!(panned.scale(), zoomed.scale());
//! ```
//!
//! ## Zoom levels
//!
//! See [`zoom_level_to_scale`] and [`scale_to_zoom_level`]: level `0` is
//! `1.0x`, level `n > 0` is `(n + 1)x` and level `-n` is `1/(n + 1)x`.
//!
//! ## Interop
//!
//! [`ViewTransform`] converts into [`kurbo::Affine`] for rendering. Going the
//! other way ([`ViewTransform::try_from`], [`scale_factor`], [`zoom_affine`])
//! checks that the affine really is a uniform scale plus translation and
//! reports [`TransformError::InvalidState`] otherwise.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod ops;
mod transform;
mod zoom_level;

pub use error::TransformError;
pub use ops::{fit, pan, zoom, zoom_affine};
pub use transform::{ViewTransform, scale_factor};
pub use zoom_level::{scale_to_zoom_level, zoom_level_to_scale};
