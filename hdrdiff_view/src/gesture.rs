// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan gesture: remember where a drag started and what the view looked like.
//!
//! ## Usage
//!
//! 1) Capture a gesture with [`PanGesture::new`] from the live transform and
//!    the pointer position.
//! 2) On each move, call [`PanGesture::update`] to get the transform for the
//!    new pointer position. It is always derived from the captured transform.
//! 3) Drop the gesture when the button is released.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use hdrdiff_transform::ViewTransform;
//! use hdrdiff_view::PanGesture;
//!
//! let mut gesture = PanGesture::new(ViewTransform::IDENTITY, Point::new(10.0, 20.0));
//! let t = gesture.update(Point::new(15.0, 25.0));
//! assert_eq!(t.translation(), Vec2::new(5.0, 5.0));
//! assert_eq!(gesture.total_offset(), Vec2::new(5.0, 5.0));
//! ```

use hdrdiff_transform::{ViewTransform, pan};
use kurbo::{Point, Vec2};

/// Transform and pointer position captured at the start of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    start_transform: ViewTransform,
    start_pos: Point,
    last_pos: Point,
}

impl PanGesture {
    /// Starts a gesture from the live transform and pointer position.
    #[must_use]
    pub fn new(transform: ViewTransform, pos: Point) -> Self {
        Self {
            start_transform: transform,
            start_pos: pos,
            last_pos: pos,
        }
    }

    /// Transform captured when the gesture started.
    #[must_use]
    pub fn start_transform(&self) -> ViewTransform {
        self.start_transform
    }

    /// Pointer position when the gesture started.
    #[must_use]
    pub fn start_pos(&self) -> Point {
        self.start_pos
    }

    /// Last pointer position passed to [`PanGesture::update`].
    #[must_use]
    pub fn last_pos(&self) -> Point {
        self.last_pos
    }

    /// Records a pointer move and returns the panned transform.
    pub fn update(&mut self, pos: Point) -> ViewTransform {
        self.last_pos = pos;
        pan(self.start_transform, self.start_pos, pos)
    }

    /// Total pointer offset from the start position to the last update.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.last_pos - self.start_pos
    }

    /// Restarts the gesture from `transform` at the last pointer position.
    ///
    /// Used when the view changes mid-drag (for example a wheel zoom) so
    /// that later moves build on the new transform.
    pub fn rebase(&mut self, transform: ViewTransform) {
        self.start_transform = transform;
        self.start_pos = self.last_pos;
    }
}
