// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::{Surface, TransformError};

/// Smallest determinant magnitude treated as invertible.
const MIN_DETERMINANT: f64 = 1e-12;

/// Converts points between screen (viewport pixel) space and canvas logical
/// space for a bound [`Surface`].
///
/// The inverse of the surface's view transform is computed on first use and
/// cached. The cache is reused until [`CoordinateTransform::invalidate`] is
/// called, [`CoordinateTransform::surface_mut`] hands out the surface, or a new
/// surface is bound. Using a stale cache after an uninvalidated zoom/pan change
/// is a caller bug.
///
/// The forward direction ([`CoordinateTransform::logical_to_screen`]) is not
/// cached; it is needed less often and is cheap to query.
#[derive(Clone, Debug)]
pub struct CoordinateTransform<S> {
    surface: Option<S>,
    inverse: Option<Affine>,
}

impl<S> Default for CoordinateTransform<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CoordinateTransform<S> {
    /// Creates a transform with no surface bound.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            surface: None,
            inverse: None,
        }
    }

    /// Creates a transform bound to `surface`.
    #[must_use]
    pub const fn with_surface(surface: S) -> Self {
        Self {
            surface: Some(surface),
            inverse: None,
        }
    }

    /// Binds `surface`, replacing any previous one, and invalidates the cache.
    pub fn set_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.invalidate();
    }

    /// Unbinds and returns the current surface.
    pub fn take_surface(&mut self) -> Option<S> {
        self.invalidate();
        self.surface.take()
    }

    /// Returns `true` if a surface is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns the bound surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Returns the bound surface for mutation.
    ///
    /// Any mutation may change zoom, pan, or layout, so the cached inverse is
    /// dropped.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.invalidate();
        self.surface.as_mut()
    }

    /// Clears the cached inverse view transform.
    ///
    /// Call whenever zoom, pan, layout, or surface size changes.
    pub fn invalidate(&mut self) {
        if self.inverse.take().is_some() {
            tracing::trace!("inverse view transform invalidated");
        }
    }

    /// Returns `true` if an inverse view transform is currently cached.
    #[must_use]
    pub fn has_cached_inverse(&self) -> bool {
        self.inverse.is_some()
    }
}

impl<S: Surface> CoordinateTransform<S> {
    /// Converts a screen point into canvas logical coordinates.
    ///
    /// # Errors
    ///
    /// - [`TransformError::SurfaceNotBound`] if no surface is bound.
    /// - [`TransformError::TransformUnavailable`] if the surface reports
    ///   neither a view transform nor a fallback.
    /// - [`TransformError::NonInvertibleTransform`] if the view transform is
    ///   singular.
    pub fn screen_to_logical(&mut self, pt: Point) -> Result<Point, TransformError> {
        Ok(self.inverse()? * pt)
    }

    /// Converts a canvas logical point into screen coordinates.
    ///
    /// # Errors
    ///
    /// [`TransformError::SurfaceNotBound`] or
    /// [`TransformError::TransformUnavailable`], as for
    /// [`CoordinateTransform::screen_to_logical`].
    pub fn logical_to_screen(&self, pt: Point) -> Result<Point, TransformError> {
        Ok(self.forward()? * pt)
    }

    /// Converts a pixel vector into a logical vector.
    ///
    /// Both endpoints of the vector are mapped and subtracted, so the
    /// translation part of the view transform (pan) does not leak into the
    /// result.
    ///
    /// # Errors
    ///
    /// Same as [`CoordinateTransform::screen_to_logical`].
    pub fn pixel_delta_to_logical(&mut self, delta: Vec2) -> Result<Vec2, TransformError> {
        let inverse = self.inverse()?;
        let origin = inverse * Point::ZERO;
        let tip = inverse * delta.to_point();
        Ok(tip - origin)
    }

    /// Returns the current logical → screen scale factor of the surface.
    ///
    /// # Errors
    ///
    /// [`TransformError::SurfaceNotBound`] if no surface is bound.
    pub fn scale(&self) -> Result<f64, TransformError> {
        self.surface
            .as_ref()
            .map(Surface::scale)
            .ok_or(TransformError::SurfaceNotBound)
    }

    /// Converts a length in screen pixels into logical units.
    ///
    /// Used to keep handle sizes and snapping thresholds visually constant
    /// regardless of zoom.
    ///
    /// # Errors
    ///
    /// [`TransformError::SurfaceNotBound`] if no surface is bound, or
    /// [`TransformError::NonInvertibleTransform`] if the surface scale is not
    /// a positive finite number.
    pub fn pixels_to_logical(&self, pixels: f64) -> Result<f64, TransformError> {
        let scale = self.scale()?;
        if !(scale.is_finite() && scale > 0.0) {
            return Err(TransformError::NonInvertibleTransform {
                determinant: scale * scale,
            });
        }
        Ok(pixels / scale)
    }

    fn forward(&self) -> Result<Affine, TransformError> {
        let surface = self
            .surface
            .as_ref()
            .ok_or(TransformError::SurfaceNotBound)?;
        surface
            .view_transform()
            .or_else(|| surface.fallback_transform())
            .ok_or(TransformError::TransformUnavailable)
    }

    fn inverse(&mut self) -> Result<Affine, TransformError> {
        if let Some(inverse) = self.inverse {
            return Ok(inverse);
        }
        let forward = self.forward()?;
        let determinant = forward.determinant();
        if !determinant.is_finite() || determinant.abs() < MIN_DETERMINANT {
            return Err(TransformError::NonInvertibleTransform { determinant });
        }
        let inverse = forward.inverse();
        self.inverse = Some(inverse);
        Ok(inverse)
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use kurbo::{Affine, Point, Vec2};

    use super::CoordinateTransform;
    use crate::{Surface, TransformError};

    /// Surface that counts how often its transforms are queried.
    #[derive(Debug)]
    struct CountingSurface {
        primary: Option<Affine>,
        fallback: Option<Affine>,
        queries: Cell<usize>,
    }

    impl CountingSurface {
        fn new(primary: Affine) -> Self {
            Self {
                primary: Some(primary),
                fallback: None,
                queries: Cell::new(0),
            }
        }
    }

    impl Surface for CountingSurface {
        fn view_transform(&self) -> Option<Affine> {
            self.queries.set(self.queries.get() + 1);
            self.primary
        }

        fn fallback_transform(&self) -> Option<Affine> {
            self.fallback
        }

        fn scale(&self) -> f64 {
            1.0
        }
    }

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn roundtrips_for_common_transforms() {
        let transforms = [
            Affine::IDENTITY,
            Affine::scale(2.5),
            Affine::scale_non_uniform(0.5, 3.0),
            Affine::translate(Vec2::new(-120.0, 48.5)),
            Affine::translate(Vec2::new(300.0, -20.0)) * Affine::scale(0.25),
        ];
        let samples = [
            Point::ZERO,
            Point::new(10.0, -5.0),
            Point::new(1234.5, 678.25),
        ];

        for affine in transforms {
            let mut ct = CoordinateTransform::with_surface(affine);
            for p in samples {
                let screen = ct.logical_to_screen(p).unwrap();
                assert_close(ct.screen_to_logical(screen).unwrap(), p);

                let logical = ct.screen_to_logical(p).unwrap();
                assert_close(ct.logical_to_screen(logical).unwrap(), p);
            }
        }
    }

    #[test]
    fn cached_inverse_is_reused_until_invalidated() {
        let mut ct = CoordinateTransform::with_surface(CountingSurface::new(Affine::scale(2.0)));
        let queries = |ct: &CoordinateTransform<CountingSurface>| ct.surface().unwrap().queries.get();

        ct.screen_to_logical(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(queries(&ct), 1);
        ct.screen_to_logical(Point::new(20.0, 10.0)).unwrap();
        ct.pixel_delta_to_logical(Vec2::new(4.0, 4.0)).unwrap();
        assert_eq!(queries(&ct), 1);
        assert!(ct.has_cached_inverse());

        ct.invalidate();
        assert!(!ct.has_cached_inverse());
        ct.screen_to_logical(Point::new(10.0, 10.0)).unwrap();
        ct.screen_to_logical(Point::new(11.0, 10.0)).unwrap();
        assert_eq!(queries(&ct), 2);
    }

    #[test]
    fn surface_mut_invalidates_cache() {
        let mut ct = CoordinateTransform::with_surface(CountingSurface::new(Affine::scale(2.0)));
        assert_eq!(
            ct.screen_to_logical(Point::new(10.0, 10.0)).unwrap(),
            Point::new(5.0, 5.0)
        );

        ct.surface_mut().unwrap().primary = Some(Affine::scale(5.0));
        assert_eq!(
            ct.screen_to_logical(Point::new(10.0, 10.0)).unwrap(),
            Point::new(2.0, 2.0)
        );
    }

    #[test]
    fn unbound_transform_fails() {
        let mut ct = CoordinateTransform::<Affine>::new();
        assert_eq!(
            ct.screen_to_logical(Point::ZERO),
            Err(TransformError::SurfaceNotBound)
        );
        assert_eq!(
            ct.logical_to_screen(Point::ZERO),
            Err(TransformError::SurfaceNotBound)
        );
        assert_eq!(ct.pixels_to_logical(8.0), Err(TransformError::SurfaceNotBound));
    }

    #[test]
    fn fallback_used_when_primary_missing() {
        let mut surface = CountingSurface::new(Affine::IDENTITY);
        surface.primary = None;
        surface.fallback = Some(Affine::scale(4.0));
        let mut ct = CoordinateTransform::with_surface(surface);
        assert_eq!(
            ct.screen_to_logical(Point::new(8.0, 4.0)).unwrap(),
            Point::new(2.0, 1.0)
        );

        ct.surface_mut().unwrap().fallback = None;
        assert_eq!(
            ct.screen_to_logical(Point::ZERO),
            Err(TransformError::TransformUnavailable)
        );
    }

    #[test]
    fn singular_transform_is_rejected() {
        let mut ct = CoordinateTransform::with_surface(Affine::scale_non_uniform(1.0, 0.0));
        assert!(matches!(
            ct.screen_to_logical(Point::new(1.0, 1.0)),
            Err(TransformError::NonInvertibleTransform { .. })
        ));
        assert!(!ct.has_cached_inverse());
    }

    #[test]
    fn pixel_delta_ignores_pan() {
        let panned = Affine::translate(Vec2::new(500.0, -250.0)) * Affine::scale(2.0);
        let mut ct = CoordinateTransform::with_surface(panned);
        let delta = ct.pixel_delta_to_logical(Vec2::new(10.0, -6.0)).unwrap();
        assert!((delta.x - 5.0).abs() < 1e-9);
        assert!((delta.y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn pixels_to_logical_uses_scale() {
        let ct = CoordinateTransform::with_surface(Affine::scale(4.0));
        assert_eq!(ct.pixels_to_logical(8.0).unwrap(), 2.0);
    }
}
