// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors produced while converting between screen and logical coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformError {
    /// The transform was used before a surface was attached.
    ///
    /// The requested operation cannot proceed; retry after calling
    /// [`CoordinateTransform::set_surface`](crate::CoordinateTransform::set_surface).
    SurfaceNotBound,
    /// A surface is attached but reports neither a view transform nor a
    /// fallback transform (for example, it has not been laid out yet).
    TransformUnavailable,
    /// The view transform has a (numerically) zero determinant, so no
    /// meaningful screen/logical mapping exists.
    NonInvertibleTransform {
        /// Determinant of the offending matrix.
        determinant: f64,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceNotBound => f.write_str("no surface is bound to the coordinate transform"),
            Self::TransformUnavailable => {
                f.write_str("the surface has no view transform and no fallback transform")
            }
            Self::NonInvertibleTransform { determinant } => write!(
                f,
                "view transform is not invertible (determinant {determinant})"
            ),
        }
    }
}

impl core::error::Error for TransformError {}
