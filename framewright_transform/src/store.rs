// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame store seam: where frames are read from and where proposed
//! mutations go.

use core::hash::Hash;

use framewright_snap::Frame;
use hashbrown::HashMap;
use kurbo::{Point, Rect};

/// A partial frame update.
///
/// `None` fields are left untouched by the store.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FramePatch {
    /// New left edge.
    pub x: Option<f64>,
    /// New top edge.
    pub y: Option<f64>,
    /// New width.
    pub width: Option<f64>,
    /// New height.
    pub height: Option<f64>,
    /// New rotation in degrees.
    pub rotation: Option<f64>,
}

impl FramePatch {
    /// Moves the frame's origin.
    #[must_use]
    pub const fn position(origin: Point) -> Self {
        Self {
            x: Some(origin.x),
            y: Some(origin.y),
            width: None,
            height: None,
            rotation: None,
        }
    }

    /// Replaces position and size, leaving rotation alone.
    #[must_use]
    pub const fn bounds(frame: &Frame) -> Self {
        Self {
            x: Some(frame.x),
            y: Some(frame.y),
            width: Some(frame.width),
            height: Some(frame.height),
            rotation: None,
        }
    }

    /// Replaces the rotation only.
    #[must_use]
    pub const fn rotation(degrees: f64) -> Self {
        Self {
            x: None,
            y: None,
            width: None,
            height: None,
            rotation: Some(degrees),
        }
    }

    /// Returns `true` if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes the set fields into `frame`.
    pub fn apply_to(&self, frame: &mut Frame) {
        if let Some(x) = self.x {
            frame.x = x;
        }
        if let Some(y) = self.y {
            frame.y = y;
        }
        if let Some(width) = self.width {
            frame.width = width;
        }
        if let Some(height) = self.height {
            frame.height = height;
        }
        if let Some(rotation) = self.rotation {
            frame.rotation = Some(rotation);
        }
    }
}

/// Read access to frames and a sink for proposed mutations.
///
/// The controller never holds frames past a single call; it reads what it
/// needs and proposes replacement values. Whether and how proposals are
/// committed (and recorded for undo) is up to the implementation.
pub trait FrameStore<K> {
    /// Current frame for `key`, if the element exists.
    fn frame(&self, key: &K) -> Option<Frame>;

    /// All frames on the canvas, in any order.
    fn frames<'a>(&'a self) -> impl Iterator<Item = (&'a K, Frame)>
    where
        K: 'a;

    /// Bounds of the editable canvas in logical units.
    fn canvas_bounds(&self) -> Rect;

    /// Font size of a text-capable element, or `None` for other elements.
    fn font_size(&self, key: &K) -> Option<f64> {
        let _ = key;
        None
    }

    /// Proposes a new (partial) frame for `key`.
    fn propose_frame(&mut self, key: &K, patch: FramePatch);

    /// Proposes a new font size for a text-capable element.
    fn propose_font_size(&mut self, key: &K, size: f64) {
        let _ = (key, size);
    }
}

/// An in-memory [`FrameStore`] that commits every proposal immediately.
///
/// Each accepted proposal bumps [`MemoryFrameStore::revision`], which makes
/// it easy to check whether an interaction mutated anything.
#[derive(Clone, Debug)]
pub struct MemoryFrameStore<K> {
    canvas: Rect,
    frames: HashMap<K, Frame>,
    font_sizes: HashMap<K, f64>,
    revision: u64,
}

impl<K: Eq + Hash> MemoryFrameStore<K> {
    /// Creates an empty store for a canvas with the given bounds.
    #[must_use]
    pub fn new(canvas: Rect) -> Self {
        Self {
            canvas,
            frames: HashMap::new(),
            font_sizes: HashMap::new(),
            revision: 0,
        }
    }

    /// Inserts or replaces a frame without counting it as a proposal.
    pub fn insert(&mut self, key: K, frame: Frame) {
        self.frames.insert(key, frame);
    }

    /// Inserts or replaces a text element's frame and font size.
    pub fn insert_text(&mut self, key: K, frame: Frame, font_size: f64)
    where
        K: Clone,
    {
        self.font_sizes.insert(key.clone(), font_size);
        self.frames.insert(key, frame);
    }

    /// Removes an element.
    pub fn remove(&mut self, key: &K) -> Option<Frame> {
        self.font_sizes.remove(key);
        self.frames.remove(key)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if the store has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Counter bumped by every accepted proposal.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<K: Eq + Hash> FrameStore<K> for MemoryFrameStore<K> {
    fn frame(&self, key: &K) -> Option<Frame> {
        self.frames.get(key).copied()
    }

    fn frames<'a>(&'a self) -> impl Iterator<Item = (&'a K, Frame)>
    where
        K: 'a,
    {
        self.frames.iter().map(|(k, f)| (k, *f))
    }

    fn canvas_bounds(&self) -> Rect {
        self.canvas
    }

    fn font_size(&self, key: &K) -> Option<f64> {
        self.font_sizes.get(key).copied()
    }

    fn propose_frame(&mut self, key: &K, patch: FramePatch) {
        if patch.is_empty() {
            return;
        }
        if let Some(frame) = self.frames.get_mut(key) {
            patch.apply_to(frame);
            self.revision += 1;
        }
    }

    fn propose_font_size(&mut self, key: &K, size: f64) {
        if let Some(current) = self.font_sizes.get_mut(key) {
            *current = size;
            self.revision += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use framewright_snap::Frame;
    use kurbo::{Point, Rect};

    use super::{FramePatch, FrameStore, MemoryFrameStore};

    #[test]
    fn patch_only_touches_set_fields() {
        let mut frame = Frame::new(1.0, 2.0, 3.0, 4.0).with_rotation(10.0);
        FramePatch::position(Point::new(5.0, 6.0)).apply_to(&mut frame);
        assert_eq!(frame, Frame::new(5.0, 6.0, 3.0, 4.0).with_rotation(10.0));

        FramePatch::rotation(45.0).apply_to(&mut frame);
        assert_eq!(frame.rotation, Some(45.0));
        assert_eq!(frame.width, 3.0);

        FramePatch::bounds(&Frame::new(0.0, 0.0, 9.0, 9.0)).apply_to(&mut frame);
        assert_eq!(frame, Frame::new(0.0, 0.0, 9.0, 9.0).with_rotation(45.0));
        assert!(FramePatch::default().is_empty());
    }

    #[test]
    fn memory_store_counts_accepted_proposals() {
        let mut store = MemoryFrameStore::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        store.insert(1_u32, Frame::new(0.0, 0.0, 10.0, 10.0));
        store.insert_text(2, Frame::new(20.0, 0.0, 10.0, 10.0), 12.0);
        assert_eq!(store.len(), 2);

        store.propose_frame(&1, FramePatch::position(Point::new(3.0, 4.0)));
        assert_eq!(store.frame(&1).unwrap().origin(), Point::new(3.0, 4.0));
        assert_eq!(store.revision(), 1);

        // Unknown keys, empty patches, and non-text font updates are ignored.
        store.propose_frame(&9, FramePatch::position(Point::ZERO));
        store.propose_frame(&1, FramePatch::default());
        store.propose_font_size(&1, 20.0);
        assert_eq!(store.revision(), 1);

        store.propose_font_size(&2, 18.0);
        assert_eq!(store.font_size(&2), Some(18.0));
        assert_eq!(store.font_size(&1), None);
        assert_eq!(store.revision(), 2);

        assert_eq!(store.frames().count(), 2);
        assert!(store.remove(&2).is_some());
        assert_eq!(store.font_size(&2), None);
    }
}
