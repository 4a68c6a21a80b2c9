// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `sqrt`
use kurbo::Affine;

/// A rendering surface that displays the canvas.
///
/// Implementations report the transform currently in effect between canvas
/// logical space and screen (viewport pixel) space. The transform is queried
/// lazily by [`CoordinateTransform`](crate::CoordinateTransform), which caches
/// the inverse until it is invalidated.
pub trait Surface {
    /// Returns the current forward view transform (logical → screen).
    ///
    /// Returns `None` when the surface cannot report its screen transform yet,
    /// for example before its element has been laid out.
    fn view_transform(&self) -> Option<Affine>;

    /// Returns an alternate local transform used when
    /// [`Surface::view_transform`] is unavailable.
    ///
    /// The default implementation has no fallback.
    fn fallback_transform(&self) -> Option<Affine> {
        None
    }

    /// Returns the current logical → screen scale factor (zoom).
    fn scale(&self) -> f64;
}

impl<S: Surface + ?Sized> Surface for &S {
    fn view_transform(&self) -> Option<Affine> {
        (**self).view_transform()
    }

    fn fallback_transform(&self) -> Option<Affine> {
        (**self).fallback_transform()
    }

    fn scale(&self) -> f64 {
        (**self).scale()
    }
}

/// A fixed transform is a surface that never changes.
///
/// Handy for tests and for hosts that compute the matrix themselves.
impl Surface for Affine {
    fn view_transform(&self) -> Option<Affine> {
        Some(*self)
    }

    fn scale(&self) -> f64 {
        // Uniform scale assumed; the geometric mean covers mild anisotropy.
        self.determinant().abs().sqrt()
    }
}
