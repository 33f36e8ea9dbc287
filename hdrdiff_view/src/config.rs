// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for how input maps onto view changes.

use core::fmt;

/// Configuration for [`crate::ImageView`] and [`crate::DragValue`].
///
/// The defaults reproduce the usual desktop feel: one mouse-wheel notch
/// (a delta of `120`) is half a zoom level, and the zoom shortcuts step by
/// half a level as well.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfig {
    /// Raw wheel delta corresponding to one whole zoom level. Default: `240.0`.
    pub wheel_delta_per_level: f64,
    /// Zoom levels added or removed by the zoom-in/zoom-out commands. Default: `0.5`.
    pub zoom_step: f64,
    /// Value change per pixel of horizontal drag on a [`crate::DragValue`]. Default: `0.005`.
    pub number_step: f64,
    /// Decimal places kept by [`crate::DragValue`]. Default: `3`.
    pub number_decimals: u32,
}

impl ViewConfig {
    /// Largest supported [`ViewConfig::number_decimals`].
    pub const MAX_DECIMALS: u32 = 15;

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("wheel_delta_per_level", self.wheel_delta_per_level)?;
        positive("zoom_step", self.zoom_step)?;
        positive("number_step", self.number_step)?;
        if self.number_decimals > Self::MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals(self.number_decimals));
        }
        Ok(())
    }

    /// Zoom-level increment for a raw wheel delta.
    #[must_use]
    pub fn wheel_increment(&self, delta: f64) -> f64 {
        delta / self.wheel_delta_per_level
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            wheel_delta_per_level: 240.0,
            zoom_step: 0.5,
            number_step: 0.005,
            number_decimals: 3,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

/// Error returned by [`ViewConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A field that must be a positive finite number was not.
    NotPositive {
        /// Name of the field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// [`ViewConfig::number_decimals`] exceeded [`ViewConfig::MAX_DECIMALS`].
    TooManyDecimals(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => {
                write!(f, "`{field}` must be positive and finite, got {value}")
            }
            Self::TooManyDecimals(n) => write!(
                f,
                "`number_decimals` must be at most {}, got {n}",
                ViewConfig::MAX_DECIMALS
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
