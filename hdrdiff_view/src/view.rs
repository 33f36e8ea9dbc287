// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use hdrdiff_transform::{TransformError, ViewTransform, fit, zoom};
use kurbo::{Point, Rect, Size};

use crate::command::ViewCommand;
use crate::config::{ConfigError, ViewConfig};
use crate::gesture::PanGesture;

/// Pointer cursor a host should show over the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// Regular pointer.
    #[default]
    Arrow,
    /// A pan drag is in progress.
    ClosedHand,
}

/// Headless state of a view displaying one image.
///
/// `ImageView` owns the current [`ViewTransform`] and turns input events
/// (resizes, wheel ticks, pointer moves, shortcut commands) into calls to the
/// pure functions of `hdrdiff_transform`. Hosts render the image with
/// [`ImageView::transform`] after each event.
///
/// All pointer positions are in viewport coordinates.
#[derive(Clone, Debug)]
pub struct ImageView {
    item_size: Size,
    view_size: Size,
    transform: ViewTransform,
    gesture: Option<PanGesture>,
    config: ViewConfig,
}

impl ImageView {
    /// Creates a view showing an image of `item_size`, fitted into `view_size`.
    pub fn new(item_size: Size, view_size: Size, config: ViewConfig) -> Result<Self, ViewError> {
        config.validate()?;
        let transform = fit(item_size, view_size)?;
        Ok(Self {
            item_size,
            view_size,
            transform,
            gesture: None,
            config,
        })
    }

    /// The current item → viewport transform.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// The current zoom level.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.transform.zoom_level()
    }

    /// Natural size of the displayed image.
    #[must_use]
    pub fn item_size(&self) -> Size {
        self.item_size
    }

    /// Size of the viewport.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Returns `true` while a pan drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// The cursor to show for the current state.
    #[must_use]
    pub fn cursor(&self) -> CursorShape {
        if self.is_dragging() {
            CursorShape::ClosedHand
        } else {
            CursorShape::Arrow
        }
    }

    /// Handles a viewport resize.
    ///
    /// Spontaneous resizes (those the window system reports on its own, for
    /// example while the window is being mapped) are ignored. Any other
    /// resize refits the image. On error the view is left unchanged.
    pub fn resize(&mut self, view_size: Size, spontaneous: bool) -> Result<(), ViewError> {
        if spontaneous {
            return Ok(());
        }
        self.transform = fit(self.item_size, view_size)?;
        self.view_size = view_size;
        self.gesture = None;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = view_size.width,
            height = view_size.height,
            scale = self.transform.scale(),
            "view resized, image refitted"
        );
        Ok(())
    }

    /// Replaces the displayed image with one of `item_size` and refits.
    pub fn set_item_size(&mut self, item_size: Size) -> Result<(), ViewError> {
        self.transform = fit(item_size, self.view_size)?;
        self.item_size = item_size;
        self.gesture = None;
        Ok(())
    }

    /// Fits the image back into the viewport.
    pub fn reset_view(&mut self) {
        // Both sizes were validated by `fit` when they were stored.
        if let Ok(transform) = fit(self.item_size, self.view_size) {
            self.transform = transform;
        }
        self.gesture = None;
        #[cfg(feature = "tracing")]
        tracing::debug!(scale = self.transform.scale(), "view reset");
    }

    /// Handles a wheel event at `pos` with raw vertical `delta`.
    ///
    /// One notch on most mice is a delta of `120`, which with the default
    /// configuration zooms by half a level.
    pub fn wheel(&mut self, pos: Point, delta: f64) {
        if !delta.is_finite() {
            #[cfg(feature = "tracing")]
            tracing::debug!(delta, "ignoring non-finite wheel delta");
            return;
        }
        let increment = self.config.wheel_increment(delta);
        self.zoom_about(pos, increment);
    }

    /// Zooms in one step about the viewport center.
    pub fn zoom_in(&mut self) {
        self.zoom_about(self.view_center(), self.config.zoom_step);
    }

    /// Zooms out one step about the viewport center.
    pub fn zoom_out(&mut self) {
        self.zoom_about(self.view_center(), -self.config.zoom_step);
    }

    /// Applies a zoom or reset shortcut.
    ///
    /// Returns `false` for commands the view does not handle; channel and
    /// image commands belong to [`crate::ImageSelection`], and
    /// [`ViewCommand::NormalizeDiff`] to the host.
    pub fn apply(&mut self, command: ViewCommand) -> bool {
        match command {
            ViewCommand::ZoomIn => self.zoom_in(),
            ViewCommand::ZoomOut => self.zoom_out(),
            ViewCommand::Reset => self.reset_view(),
            ViewCommand::ViewChannel(_)
            | ViewCommand::ShowImage(_)
            | ViewCommand::NormalizeDiff => return false,
        }
        true
    }

    /// Handles a pointer move to `pos`.
    ///
    /// With the primary button held, the first move captures the drag start
    /// and later moves pan relative to it. Moves without the button do
    /// nothing.
    pub fn pointer_move(&mut self, pos: Point, primary_down: bool) {
        if !primary_down {
            return;
        }
        if let Some(gesture) = &mut self.gesture {
            self.transform = gesture.update(pos);
            return;
        }
        self.gesture = Some(PanGesture::new(self.transform, pos));
        #[cfg(feature = "tracing")]
        tracing::trace!(x = pos.x, y = pos.y, "pan drag started");
    }

    /// Handles release of the pointer button, ending any drag.
    pub fn pointer_up(&mut self) {
        if let Some(_gesture) = self.gesture.take() {
            #[cfg(feature = "tracing")]
            {
                let offset = _gesture.total_offset();
                tracing::trace!(dx = offset.x, dy = offset.y, "pan drag ended");
            }
        }
    }

    /// Maps a viewport point into image coordinates.
    #[must_use]
    pub fn view_to_item(&self, pos: Point) -> Point {
        self.transform.inverse().map_point(pos)
    }

    /// Integer pixel of the image under a viewport point, if any.
    #[must_use]
    pub fn pixel_at(&self, pos: Point) -> Option<(u32, u32)> {
        let pt = self.view_to_item(pos);
        let inside = pt.x >= 0.0
            && pt.y >= 0.0
            && pt.x < self.item_size.width
            && pt.y < self.item_size.height;
        if !inside {
            return None;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "non-negative and below the image size, truncation is floor"
        )]
        let pixel = (pt.x as u32, pt.y as u32);
        Some(pixel)
    }

    /// The image-space rectangle currently covered by the viewport.
    ///
    /// This may extend past the image bounds when zoomed out or panned.
    #[must_use]
    pub fn visible_item_rect(&self) -> Rect {
        self.transform.inverse().map_rect(self.view_size.to_rect())
    }

    fn view_center(&self) -> Point {
        (self.view_size.to_vec2() * 0.5).to_point()
    }

    fn zoom_about(&mut self, center: Point, increment: f64) {
        self.transform = zoom(self.transform, center, increment);
        if let Some(gesture) = &mut self.gesture {
            gesture.rebase(self.transform);
        }
    }
}

/// Error returned by [`ImageView`] operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// An image or viewport size was rejected.
    Transform(TransformError),
}

impl From<ConfigError> for ViewError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<TransformError> for ViewError {
    fn from(err: TransformError) -> Self {
        Self::Transform(err)
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid view configuration: {err}"),
            Self::Transform(err) => write!(f, "cannot fit image: {err}"),
        }
    }
}

impl core::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Transform(err) => Some(err),
        }
    }
}
