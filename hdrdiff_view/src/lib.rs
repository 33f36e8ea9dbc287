// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! hdrdiff View: headless state for an image comparison view.
//!
//! This crate sits between a GUI toolkit and `hdrdiff_transform`. It keeps
//! the per-view state the toolkit would otherwise scatter across event
//! handlers, and exposes one method per input event:
//! - [`ImageView::resize`] refits the image on every non-spontaneous resize.
//! - [`ImageView::wheel`] zooms about the cursor.
//! - [`ImageView::pointer_move`] / [`ImageView::pointer_up`] pan by dragging.
//! - [`ImageView::apply`] runs zoom-in, zoom-out and reset shortcuts.
//!
//! [`ImageSelection`] tracks which image (left, right or diff) is shown and
//! whether one channel is isolated. [`DragValue`] models the numeric fields
//! for exposure and diff scale.
//!
//! After each event the host reads [`ImageView::transform`] and draws the
//! image with it. Decoding, drawing and shortcut registration stay in the
//! host.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hdrdiff_view::{ImageView, ViewCommand, ViewConfig};
//!
//! let mut view = ImageView::new(
//!     Size::new(1920.0, 1080.0),
//!     Size::new(960.0, 540.0),
//!     ViewConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(view.transform().scale(), 0.5);
//!
//! // Two wheel notches up over the top-left quarter.
//! view.wheel(Point::new(240.0, 135.0), 120.0);
//! view.wheel(Point::new(240.0, 135.0), 120.0);
//! assert!((view.transform().scale() - 1.0).abs() < 1e-9);
//!
//! // Drag the image 30 px to the right.
//! view.pointer_move(Point::new(100.0, 100.0), true);
//! view.pointer_move(Point::new(130.0, 100.0), true);
//! view.pointer_up();
//!
//! view.apply(ViewCommand::Reset);
//! assert_eq!(view.transform().scale(), 0.5);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`ViewConfig`].
//! - `tracing`: emit `tracing` events when the view is refitted and when pan
//!   drags start and end.
//!
//! This crate is `no_std`.

#![no_std]

mod command;
mod config;
mod gesture;
mod number;
mod selection;
mod view;

pub use command::ViewCommand;
pub use config::{ConfigError, ViewConfig};
pub use gesture::PanGesture;
pub use number::DragValue;
pub use selection::{Channel, ImageSelection, ImageSlot};
pub use view::{CursorShape, ImageView, ViewError};
