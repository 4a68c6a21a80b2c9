// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Which snap sources are active and how close a candidate must be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapOptions {
    /// Master switch; when `false` snapping returns its input unchanged.
    pub enabled: bool,
    /// Snap distance in screen pixels. Converted to logical units using the
    /// viewport scale so that the feel is the same at every zoom level.
    pub threshold_px: f64,
    /// Snap to the canvas edges.
    pub snap_to_edges: bool,
    /// Snap to the canvas center lines.
    pub snap_to_center: bool,
    /// Snap to other frames' edges and centers.
    pub snap_to_objects: bool,
}

impl SnapOptions {
    /// Default snap distance in screen pixels.
    pub const DEFAULT_THRESHOLD_PX: f64 = 8.0;

    /// Options with snapping turned off.
    pub const DISABLED: Self = Self {
        enabled: false,
        ..Self::DEFAULT
    };

    const DEFAULT: Self = Self {
        enabled: true,
        threshold_px: Self::DEFAULT_THRESHOLD_PX,
        snap_to_edges: true,
        snap_to_center: true,
        snap_to_objects: true,
    };

    /// Returns these options with a different pixel threshold.
    #[must_use]
    pub const fn with_threshold_px(mut self, threshold_px: f64) -> Self {
        self.threshold_px = threshold_px;
        self
    }
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Everything the snap engine needs besides the frames themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapContext {
    /// Canvas bounds in logical units.
    pub canvas: Rect,
    /// Active options.
    pub options: SnapOptions,
    /// Current logical → screen scale of the viewport.
    pub scale: f64,
}

impl SnapContext {
    /// Hysteresis radius as a multiple of the snap threshold.
    pub const HYSTERESIS_FACTOR: f64 = 1.5;

    /// Creates a context.
    #[must_use]
    pub const fn new(canvas: Rect, options: SnapOptions, scale: f64) -> Self {
        Self {
            canvas,
            options,
            scale,
        }
    }

    /// Snap threshold in logical units, or `None` when snapping cannot apply
    /// (disabled, non-positive threshold, or an unusable scale).
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        if !self.options.enabled {
            return None;
        }
        let threshold = self.options.threshold_px / self.scale;
        (threshold.is_finite() && threshold > 0.0).then_some(threshold)
    }

    /// Radius within which a previous snap is retained, in logical units.
    #[must_use]
    pub fn hysteresis_threshold(&self) -> Option<f64> {
        self.threshold().map(|t| t * Self::HYSTERESIS_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{SnapContext, SnapOptions};

    #[test]
    fn threshold_scales_with_zoom() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        let ctx = SnapContext::new(canvas, SnapOptions::default().with_threshold_px(10.0), 2.0);
        assert_eq!(ctx.threshold(), Some(5.0));
        assert_eq!(ctx.hysteresis_threshold(), Some(7.5));
    }

    #[test]
    fn unusable_thresholds_disable_snapping() {
        let canvas = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(SnapContext::new(canvas, SnapOptions::DISABLED, 1.0).threshold(), None);
        let zero = SnapOptions::default().with_threshold_px(0.0);
        assert_eq!(SnapContext::new(canvas, zero, 1.0).threshold(), None);
        assert_eq!(SnapContext::new(canvas, SnapOptions::default(), 0.0).threshold(), None);
    }
}
