// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{SnapTarget, TargetKind};

/// Orientation of a guide line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuideAxis {
    /// A vertical line at an x coordinate.
    Vertical,
    /// A horizontal line at a y coordinate.
    Horizontal,
}

/// A transient line indicating an active snap alignment.
///
/// Guides are rendering hints only; they are regenerated on every pointer move
/// and never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapGuide {
    /// Line orientation.
    pub axis: GuideAxis,
    /// Coordinate of the line in logical units.
    pub position: f64,
    /// Optional label copied from the snap target.
    pub label: Option<&'static str>,
    /// Target source; renderers use it to pick a color.
    pub kind: TargetKind,
}

impl SnapGuide {
    pub(crate) fn for_target(axis: GuideAxis, target: &SnapTarget) -> Self {
        Self {
            axis,
            position: target.value,
            label: target.label,
            kind: target.kind,
        }
    }
}

/// Which line of a frame was aligned on an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Left or top edge.
    Start,
    /// Center line.
    Center,
    /// Right or bottom edge.
    End,
}

/// An active snap on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisSnap {
    /// Raw (unsnapped) coordinate of the aligned line when it was snapped.
    pub value: f64,
    /// Which line of the frame is aligned.
    pub anchor: Anchor,
    /// Target the line is aligned to.
    pub target: SnapTarget,
}

/// Snap decisions carried between successive moves of one drag.
///
/// Used for hysteresis: a line that snapped on the previous move stays on the
/// same target until it moves further away than the hysteresis radius.
/// Reset when the drag ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SnapState {
    /// Active snap on the x axis.
    pub x: Option<AxisSnap>,
    /// Active snap on the y axis.
    pub y: Option<AxisSnap>,
}

impl SnapState {
    /// Creates an empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self { x: None, y: None }
    }

    /// Returns `true` if either axis is snapped.
    #[must_use]
    pub fn is_snapped(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// Forgets both axes.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
