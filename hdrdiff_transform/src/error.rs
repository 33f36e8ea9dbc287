// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned by the view-transform operations.
#[derive(Clone, Copy, PartialEq)]
pub enum TransformError {
    /// An argument was outside the domain of the operation.
    ///
    /// Returned for non-positive or non-finite dimensions passed to
    /// [`crate::fit`] and for invalid scales passed to
    /// [`crate::ViewTransform::new`].
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// What the argument was required to be.
        expected: &'static str,
    },
    /// A general affine transform was not a uniform scale plus translation.
    ///
    /// This is a caller bug: the operations in this crate never produce such
    /// a transform themselves.
    InvalidState {
        /// Coefficients of the rejected transform, in `kurbo::Affine` order.
        coeffs: [f64; 6],
    },
}

impl TransformError {
    pub(crate) const fn invalid_argument(argument: &'static str, expected: &'static str) -> Self {
        Self::InvalidArgument { argument, expected }
    }
}

impl fmt::Debug for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, expected } => write!(
                f,
                "InvalidArgument {{ argument: {argument:?}, expected: {expected:?} }}"
            ),
            Self::InvalidState { coeffs } => write!(f, "InvalidState {{ coeffs: {coeffs:?} }}"),
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, expected } => {
                write!(f, "invalid argument `{argument}`: expected {expected}")
            }
            Self::InvalidState { coeffs } => write!(
                f,
                "transform {coeffs:?} is not a uniform positive scale plus translation"
            ),
        }
    }
}

impl core::error::Error for TransformError {}
