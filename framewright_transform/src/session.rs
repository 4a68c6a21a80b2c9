// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! State that lives for exactly one gesture.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use framewright_snap::{Frame, Handle, SnapState};
use hashbrown::{HashMap, HashSet};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::Point;

use crate::capture::PointerCapture;
use crate::motion::MotionTracker;

/// Snapshot and bookkeeping for an active drag.
///
/// Created by [`TransformController::begin`](crate::TransformController::begin)
/// and dropped when the gesture ends or is cancelled. Dropping a session
/// releases its pointer capture.
pub struct DragSession<K> {
    handle: Handle,
    start_logical: Point,
    originals: Vec<(K, Frame)>,
    selected: HashSet<K>,
    group_bounds: Option<Frame>,
    font_sizes: HashMap<K, f64>,
    emitted_font_sizes: HashMap<K, f64>,
    pub(crate) motion: MotionTracker,
    pub(crate) snap_state: SnapState,
    capture: Option<Box<dyn PointerCapture>>,
}

impl<K: Clone + Eq + Hash> DragSession<K> {
    pub(crate) fn new(
        handle: Handle,
        start_logical: Point,
        originals: Vec<(K, Frame)>,
        motion: MotionTracker,
    ) -> Self {
        let selected = originals.iter().map(|(k, _)| k.clone()).collect();
        let group_bounds = if originals.len() > 1 {
            Frame::bounding(originals.iter().map(|(_, f)| f))
        } else {
            None
        };
        Self {
            handle,
            start_logical,
            originals,
            selected,
            group_bounds,
            font_sizes: HashMap::new(),
            emitted_font_sizes: HashMap::new(),
            motion,
            snap_state: SnapState::new(),
            capture: None,
        }
    }

    /// Returns `true` if `key` is part of the dragged selection.
    #[must_use]
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// Original font size of a text element in the selection.
    #[must_use]
    pub fn original_font_size(&self, key: &K) -> Option<f64> {
        self.font_sizes.get(key).copied()
    }

    /// Records the original font sizes of text elements to be scaled.
    pub(crate) fn set_font_sizes(&mut self, sizes: HashMap<K, f64>) {
        self.emitted_font_sizes = sizes
            .iter()
            .map(|(key, size)| (key.clone(), size.round()))
            .collect();
        self.font_sizes = sizes;
    }

    /// Rounded font sizes produced by `scale` that differ from the last ones
    /// emitted, in selection order. The returned sizes count as emitted.
    pub(crate) fn font_changes(&mut self, scale: impl Fn(f64) -> f64) -> Vec<(K, f64)> {
        let mut changes = Vec::new();
        for (key, _) in &self.originals {
            let Some(&original) = self.font_sizes.get(key) else {
                continue;
            };
            let size = scale(original).round();
            if self.emitted_font_sizes.get(key) != Some(&size) {
                self.emitted_font_sizes.insert(key.clone(), size);
                changes.push((key.clone(), size));
            }
        }
        changes
    }
}

impl<K> DragSession<K> {
    /// The handle that started the gesture.
    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Pointer-down position in logical units.
    #[must_use]
    pub fn start_logical(&self) -> Point {
        self.start_logical
    }

    /// Frames as they were when the gesture started, in selection order.
    #[must_use]
    pub fn original_frames(&self) -> &[(K, Frame)] {
        &self.originals
    }

    /// Union of the original frames when more than one is selected.
    #[must_use]
    pub fn group_bounds(&self) -> Option<Frame> {
        self.group_bounds
    }

    /// Smoothed pointer speed in pixels per millisecond.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.motion.velocity()
    }

    /// Pointer speed of the latest timed move in pixels per millisecond.
    #[must_use]
    pub fn instant_velocity(&self) -> f64 {
        self.motion.instant_velocity()
    }

    /// Snap state carried between moves of this gesture.
    #[must_use]
    pub fn snap_state(&self) -> &SnapState {
        &self.snap_state
    }

    /// Returns `true` if a pointer capture is held.
    #[must_use]
    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub(crate) fn set_capture(&mut self, mut capture: Box<dyn PointerCapture>) {
        self.release_capture();
        capture.capture();
        self.capture = Some(capture);
    }

    fn release_capture(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            capture.release();
        }
    }
}

impl<K> Drop for DragSession<K> {
    fn drop(&mut self) {
        self.release_capture();
    }
}

impl<K: fmt::Debug> fmt::Debug for DragSession<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSession")
            .field("handle", &self.handle)
            .field("start_logical", &self.start_logical)
            .field("originals", &self.originals)
            .field("group_bounds", &self.group_bounds)
            .field("font_sizes", &self.font_sizes)
            .field("motion", &self.motion)
            .field("snap_state", &self.snap_state)
            .field("has_capture", &self.capture.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::Cell;

    use framewright_snap::{Frame, Handle};
    use kurbo::Point;

    use super::DragSession;
    use crate::capture::OnRelease;
    use crate::motion::MotionTracker;

    #[test]
    fn group_bounds_only_for_multi_selection() {
        let single = DragSession::new(
            Handle::Move,
            Point::ZERO,
            vec![(1_u32, Frame::new(0.0, 0.0, 10.0, 10.0))],
            MotionTracker::default(),
        );
        assert_eq!(single.group_bounds(), None);
        assert!(single.is_selected(&1));
        assert!(!single.is_selected(&2));

        let multi = DragSession::new(
            Handle::SouthEast,
            Point::ZERO,
            vec![
                (1_u32, Frame::new(0.0, 0.0, 10.0, 10.0)),
                (2, Frame::new(20.0, 30.0, 10.0, 10.0)),
            ],
            MotionTracker::default(),
        );
        assert_eq!(multi.group_bounds(), Some(Frame::new(0.0, 0.0, 30.0, 40.0)));
        assert_eq!(multi.original_frames()[1].0, 2);
    }

    #[test]
    fn font_changes_are_emitted_once() {
        let mut session = DragSession::new(
            Handle::SouthEast,
            Point::ZERO,
            vec![
                (1_u32, Frame::new(0.0, 0.0, 10.0, 10.0)),
                (2, Frame::new(20.0, 0.0, 10.0, 10.0)),
            ],
            MotionTracker::default(),
        );
        session.set_font_sizes([(2, 12.0)].into_iter().collect());

        // Unchanged after rounding: nothing to emit.
        assert!(session.font_changes(|s| s * 1.02).is_empty());
        assert_eq!(session.font_changes(|s| s * 2.0), vec![(2, 24.0)]);
        assert!(session.font_changes(|s| s * 2.0).is_empty());
        assert_eq!(session.original_font_size(&2), Some(12.0));
        assert_eq!(session.original_font_size(&1), None);
    }

    #[test]
    fn drop_releases_capture_once() {
        let released = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&released);
        let mut session = DragSession::new(
            Handle::Move,
            Point::ZERO,
            vec![(1_u32, Frame::new(0.0, 0.0, 10.0, 10.0))],
            MotionTracker::default(),
        );
        session.set_capture(Box::new(OnRelease(move || counter.set(counter.get() + 1))));
        assert!(session.has_capture());

        drop(session);
        assert_eq!(released.get(), 1);
    }
}
