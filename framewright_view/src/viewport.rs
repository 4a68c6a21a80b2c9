// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::Surface;

/// Pan/zoom surface over the canvas plane.
///
/// `Viewport` tracks a rectangular region in device/view space and a uniform
/// pan+zoom transform mapping canvas logical coordinates into that region.
/// It implements [`Surface`], so it can be bound directly to a
/// [`CoordinateTransform`](crate::CoordinateTransform).
///
/// A viewport whose view rect has no area is considered "not laid out": its
/// [`Surface::view_transform`] is unavailable and the local pan+zoom transform
/// (ignoring the view rect origin) is offered as the fallback instead.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    canvas_to_view: Affine,
    view_to_canvas: Affine,
}

impl Viewport {
    /// Creates a new viewport covering `view_rect`.
    ///
    /// - Initial zoom is `1.0`.
    /// - Initial pan is zero (canvas origin maps to the view rect origin).
    /// - Zoom is clamped to the range `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        let mut vp = Self {
            view_rect,
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            canvas_to_view: Affine::IDENTITY,
            view_to_canvas: Affine::IDENTITY,
        };
        vp.rebuild_transform();
        vp
    }

    /// Returns the current view rectangle in device coordinates.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the view rectangle in device coordinates (for example after a
    /// layout pass or a window resize).
    pub fn set_view_rect(&mut self, rect: Rect) {
        if self.view_rect == rect {
            return;
        }
        self.view_rect = rect;
        self.rebuild_transform();
    }

    /// Returns `true` once the view rect has a non-zero area.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.view_rect.width() > 0.0 && self.view_rect.height() > 0.0
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in view coordinates.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.zoom = clamped;
        self.rebuild_transform();
    }

    /// Pans the view by a delta in view/device space.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.pan += delta;
        self.rebuild_transform();
    }

    /// Zooms around a given anchor point in view/device coordinates.
    ///
    /// The anchor point remains fixed in view space under the new zoom level.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }

        let old_canvas = self.view_to_canvas_point(anchor_view);
        self.zoom = new_zoom;
        self.rebuild_transform();
        let new_anchor_view = self.canvas_to_view_point(old_canvas);
        self.pan_by_view(anchor_view - new_anchor_view);
    }

    /// Fits the canvas bounds into the view, preserving aspect ratio and
    /// centering the canvas.
    ///
    /// Degenerate canvas bounds or an unlaid-out view are ignored.
    pub fn fit_canvas(&mut self, canvas: Rect) {
        if canvas.width() <= 0.0 || canvas.height() <= 0.0 || !self.is_laid_out() {
            return;
        }
        let view_size = self.view_rect.size();
        let sx = view_size.width / canvas.width();
        let sy = view_size.height / canvas.height();
        let zoom = sx.min(sy).clamp(self.min_zoom, self.max_zoom);
        self.zoom = zoom;

        let view_origin = self.view_rect.origin().to_vec2();
        let view_center = self.view_rect.center().to_vec2();
        self.pan = view_center - view_origin - canvas.center().to_vec2() * zoom;
        self.rebuild_transform();
    }

    /// Returns the canvas‑space rectangle currently visible through the view.
    #[must_use]
    pub fn visible_canvas_rect(&self) -> Rect {
        let p0 = self.view_to_canvas * self.view_rect.origin();
        let p1 = self.view_to_canvas * Point::new(self.view_rect.max_x(), self.view_rect.max_y());
        Rect::from_points(p0, p1)
    }

    /// Converts a canvas point into view/device coordinates.
    #[must_use]
    pub fn canvas_to_view_point(&self, pt: Point) -> Point {
        self.canvas_to_view * pt
    }

    /// Converts a view/device point into canvas coordinates.
    #[must_use]
    pub fn view_to_canvas_point(&self, pt: Point) -> Point {
        self.view_to_canvas * pt
    }

    fn local_transform(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }

    fn rebuild_transform(&mut self) {
        // Canvas → view: scale, translate by pan, then translate into the view rect.
        let view_origin = self.view_rect.origin().to_vec2();
        self.canvas_to_view = Affine::translate(view_origin) * self.local_transform();
        self.view_to_canvas = self.canvas_to_view.inverse();
    }
}

impl Surface for Viewport {
    fn view_transform(&self) -> Option<Affine> {
        self.is_laid_out().then_some(self.canvas_to_view)
    }

    fn fallback_transform(&self) -> Option<Affine> {
        Some(self.local_transform())
    }

    fn scale(&self) -> f64 {
        self.zoom
    }
}
