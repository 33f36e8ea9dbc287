// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-adjust number field.
//!
//! Exposure scale, offset and diff scale are edited with fields that change
//! their value while the pointer is dragged horizontally, and fall back to
//! text entry on a plain click. [`DragValue`] models that without a toolkit:
//!
//! ```
//! use hdrdiff_view::{DragValue, ViewConfig};
//!
//! let mut exposure = DragValue::new(1.0, Some(0.0), &ViewConfig::default()).unwrap();
//! exposure.pointer_move(100.0, true); // press: starts the drag
//! exposure.pointer_move(140.0, true); // 40 px to the right
//! assert_eq!(exposure.value(), 1.2);
//! assert!(!exposure.pointer_up()); // a drag, not a click
//! ```

use core::num::ParseFloatError;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round` and `powi`

use crate::config::{ConfigError, ViewConfig};

/// A number adjusted by horizontal dragging, rounded and optionally clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragValue {
    value: f64,
    min: Option<f64>,
    step: f64,
    factor: f64,
    drag: Option<(f64, f64)>,
}

impl DragValue {
    /// Creates a field holding `start`, never going below `min`.
    ///
    /// Step and precision come from [`ViewConfig::number_step`] and
    /// [`ViewConfig::number_decimals`]. Fails if `config` does not pass
    /// [`ViewConfig::validate`].
    pub fn new(start: f64, min: Option<f64>, config: &ViewConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let decimals = i32::try_from(config.number_decimals)
            .map_err(|_| ConfigError::TooManyDecimals(config.number_decimals))?;
        let mut field = Self {
            value: 0.0,
            min,
            step: config.number_step,
            factor: 10_f64.powi(decimals),
            drag: None,
        };
        field.set_value(start);
        Ok(field)
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Sets the value, rounding it and clamping to the minimum.
    ///
    /// Returns the value actually stored.
    pub fn set_value(&mut self, value: f64) -> f64 {
        let rounded = (value * self.factor).round() / self.factor;
        self.value = match self.min {
            Some(min) => rounded.max(min),
            None => rounded,
        };
        self.value
    }

    /// Handles a pointer move to horizontal position `x`.
    ///
    /// During a drag the value becomes the value at drag start plus the
    /// horizontal distance times the step, and the new value is returned.
    /// Otherwise a move with the primary button held starts a drag.
    pub fn pointer_move(&mut self, x: f64, primary_down: bool) -> Option<f64> {
        if let Some((x0, v0)) = self.drag {
            return Some(self.set_value(v0 + (x - x0) * self.step));
        }
        if primary_down {
            self.drag = Some((x, self.value));
        }
        None
    }

    /// Handles release of the pointer button.
    ///
    /// Returns `true` if no drag was in progress, meaning the press was a
    /// click and the host should switch the field into text entry.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.take().is_none()
    }

    /// Commits typed text as the new value.
    ///
    /// Leaves the value unchanged if `text` is not a number.
    pub fn commit_text(&mut self, text: &str) -> Result<f64, ParseFloatError> {
        let parsed: f64 = text.trim().parse()?;
        Ok(self.set_value(parsed))
    }
}
