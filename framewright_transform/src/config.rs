// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunables for the transform controller.

use framewright_snap::SnapOptions;

/// Controller configuration.
///
/// Pixel values are screen pixels; the controller converts them to logical
/// units through the current viewport scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformConfig {
    /// Snapping behavior.
    pub snap: SnapOptions,
    /// Smallest width or height, in logical units, a resize may produce.
    pub min_size: f64,
    /// Smallest font size a proportional group resize may produce.
    pub min_font_size: f64,
    /// Share of the previous pointer velocity kept on each move.
    pub velocity_retention: f64,
    /// Pointer speed (pixels per millisecond) at which snapping is fully
    /// suppressed. Snap strength falls off linearly with the smoothed speed up
    /// to this value, and drops to zero as soon as one move reaches it.
    pub velocity_cutoff: f64,
    /// Side length of a resize handle's hit square.
    pub handle_size_px: f64,
    /// Distance from the top edge to the rotate handle.
    pub rotate_handle_offset_px: f64,
}

impl TransformConfig {
    /// Default minimum frame size.
    pub const DEFAULT_MIN_SIZE: f64 = 10.0;
    /// Default minimum font size.
    pub const DEFAULT_MIN_FONT_SIZE: f64 = 6.0;

    /// Returns a copy with different snap options.
    #[must_use]
    pub const fn with_snap(mut self, snap: SnapOptions) -> Self {
        self.snap = snap;
        self
    }

    /// Returns a copy with a different minimum frame size.
    #[must_use]
    pub const fn with_min_size(mut self, min_size: f64) -> Self {
        self.min_size = min_size;
        self
    }

    /// Snap threshold multiplier for a pointer with the given smoothed and
    /// latest instantaneous speeds, both in px/ms.
    ///
    /// `1.0` when the pointer is still. `0.0` when either speed is at or above
    /// the cutoff.
    #[must_use]
    pub fn snap_strength(&self, velocity: f64, instant: f64) -> f64 {
        if self.velocity_cutoff.is_nan() || self.velocity_cutoff <= 0.0 {
            return 1.0;
        }
        if instant >= self.velocity_cutoff {
            return 0.0;
        }
        (1.0 - (velocity / self.velocity_cutoff).min(1.0)).max(0.0)
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            snap: SnapOptions::default(),
            min_size: Self::DEFAULT_MIN_SIZE,
            min_font_size: Self::DEFAULT_MIN_FONT_SIZE,
            velocity_retention: 0.7,
            velocity_cutoff: 2.0,
            handle_size_px: 8.0,
            rotate_handle_offset_px: 24.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TransformConfig;

    #[test]
    fn strength_falls_off_with_speed() {
        let config = TransformConfig::default();
        assert_eq!(config.snap_strength(0.0, 0.0), 1.0);
        assert_eq!(config.snap_strength(1.0, 1.0), 0.5);
        assert_eq!(config.snap_strength(2.0, 0.0), 0.0);
        assert_eq!(config.snap_strength(50.0, 0.0), 0.0);
    }

    #[test]
    fn instant_speed_at_cutoff_suppresses() {
        let config = TransformConfig::default();
        // Smoothed speed after one 2 px/ms move from rest.
        assert_eq!(config.snap_strength(0.6, 2.0), 0.0);
        assert_eq!(config.snap_strength(0.6, 9.0), 0.0);
        assert!((config.snap_strength(0.6, 1.99) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn zero_cutoff_never_suppresses() {
        let config = TransformConfig {
            velocity_cutoff: 0.0,
            ..TransformConfig::default()
        };
        assert_eq!(config.snap_strength(100.0, 100.0), 1.0);
    }
}
