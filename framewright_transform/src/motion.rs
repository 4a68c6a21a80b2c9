// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer motion tracking: movement deltas and a smoothed pointer velocity.
//!
//! ## Usage
//!
//! 1) Start tracking with [`MotionTracker::start`] and the pointer-down sample.
//! 2) On each move, call [`MotionTracker::update`] to get the screen delta since
//!    the previous sample; the smoothed velocity is updated as a side effect.
//! 3) Read [`MotionTracker::velocity`] to decide how strongly to snap, and
//!    [`MotionTracker::instant_velocity`] to tell when snapping is off entirely.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use framewright_transform::{MotionTracker, PointerSample};
//!
//! let mut motion = MotionTracker::default();
//! motion.start(PointerSample::new(Point::new(0.0, 0.0), 0));
//!
//! // 10px in 5ms: instantaneous velocity 2px/ms, smoothed to 0.6px/ms.
//! let delta = motion.update(PointerSample::new(Point::new(6.0, 8.0), 5)).unwrap();
//! assert_eq!(delta.x, 6.0);
//! assert!((motion.velocity() - 0.6).abs() < 1e-12);
//! assert_eq!(motion.instant_velocity(), 2.0);
//! ```

use kurbo::{Point, Vec2};

/// A pointer position in screen pixels plus the event timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    /// Position in screen (viewport pixel) coordinates.
    pub position: Point,
    /// Event time in milliseconds; only differences matter.
    pub timestamp_ms: u64,
}

impl PointerSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(position: Point, timestamp_ms: u64) -> Self {
        Self {
            position,
            timestamp_ms,
        }
    }
}

/// Tracks pointer samples for one gesture.
#[derive(Clone, Copy, Debug)]
pub struct MotionTracker {
    last: Option<PointerSample>,
    velocity: f64,
    instant: f64,
    retention: f64,
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RETENTION)
    }
}

impl MotionTracker {
    /// Share of the previous velocity kept on each update.
    pub const DEFAULT_RETENTION: f64 = 0.7;

    /// Creates a tracker with the given smoothing retention in `[0, 1]`.
    ///
    /// Each update computes `velocity × retention + instant × (1 − retention)`.
    #[must_use]
    pub fn new(retention: f64) -> Self {
        Self {
            last: None,
            velocity: 0.0,
            instant: 0.0,
            retention: retention.clamp(0.0, 1.0),
        }
    }

    /// Starts tracking a new gesture, resetting both velocities.
    pub fn start(&mut self, sample: PointerSample) {
        self.last = Some(sample);
        self.velocity = 0.0;
        self.instant = 0.0;
    }

    /// Records a new sample, returning the movement since the previous one.
    ///
    /// Samples that arrive with no elapsed time still move the pointer but
    /// leave both velocities unchanged.
    pub fn update(&mut self, sample: PointerSample) -> Option<Vec2> {
        let last = self.last.as_mut()?;
        let delta = sample.position - last.position;
        let elapsed = sample.timestamp_ms.saturating_sub(last.timestamp_ms);
        *last = sample;
        if elapsed > 0 {
            self.instant = delta.hypot() / elapsed as f64;
            self.velocity = self.velocity * self.retention + self.instant * (1.0 - self.retention);
        }
        Some(delta)
    }

    /// Smoothed pointer speed in pixels per millisecond.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Unsmoothed speed between the last two timed samples, in pixels per
    /// millisecond.
    #[must_use]
    pub fn instant_velocity(&self) -> f64 {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{MotionTracker, PointerSample};

    fn sample(x: f64, y: f64, t: u64) -> PointerSample {
        PointerSample::new(Point::new(x, y), t)
    }

    #[test]
    fn update_without_start_is_ignored() {
        let mut motion = MotionTracker::default();
        assert_eq!(motion.update(sample(5.0, 5.0, 10)), None);
        assert_eq!(motion.update(sample(9.0, 5.0, 20)), None);
        assert_eq!(motion.velocity(), 0.0);
        assert_eq!(motion.instant_velocity(), 0.0);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut motion = MotionTracker::default();
        motion.start(sample(10.0, 20.0, 0));

        assert_eq!(motion.update(sample(15.0, 25.0, 16)), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(motion.update(sample(12.0, 30.0, 32)), Some(Vec2::new(-3.0, 5.0)));
    }

    #[test]
    fn velocity_is_exponentially_smoothed() {
        let mut motion = MotionTracker::default();
        motion.start(sample(0.0, 0.0, 0));

        // 30px in 10ms = 3px/ms.
        motion.update(sample(30.0, 0.0, 10));
        assert!((motion.velocity() - 0.9).abs() < 1e-12);
        assert_eq!(motion.instant_velocity(), 3.0);

        // Another 3px/ms sample: 0.9 * 0.7 + 3 * 0.3.
        motion.update(sample(60.0, 0.0, 20));
        assert!((motion.velocity() - 1.53).abs() < 1e-12);

        // Standing still decays it.
        motion.update(sample(60.0, 0.0, 30));
        assert!((motion.velocity() - 1.071).abs() < 1e-12);
        assert_eq!(motion.instant_velocity(), 0.0);
    }

    #[test]
    fn simultaneous_samples_keep_velocity() {
        let mut motion = MotionTracker::default();
        motion.start(sample(0.0, 0.0, 100));
        motion.update(sample(10.0, 0.0, 110));
        let before = motion.velocity();

        assert_eq!(motion.update(sample(50.0, 0.0, 110)), Some(Vec2::new(40.0, 0.0)));
        assert_eq!(motion.velocity(), before);
        assert_eq!(motion.instant_velocity(), 1.0);
    }

    #[test]
    fn restart_resets_velocity() {
        let mut motion = MotionTracker::default();
        motion.start(sample(0.0, 0.0, 0));
        motion.update(sample(100.0, 0.0, 1));
        assert!(motion.velocity() > 0.0);

        motion.start(sample(5.0, 5.0, 50));
        assert_eq!(motion.velocity(), 0.0);
        assert_eq!(motion.instant_velocity(), 0.0);
        assert_eq!(motion.update(sample(8.0, 9.0, 60)), Some(Vec2::new(3.0, 4.0)));
    }
}
