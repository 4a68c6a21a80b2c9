// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Proportional resize of several frames through their shared bounding box.
//!
//! Each child keeps its fractional position and size inside the group's box:
//! a child whose left edge sits at 25% of the old box's width sits at 25% of
//! the new box's width. Text children scale their font size by the vertical
//! factor.

use framewright_snap::{Frame, Handle};
use kurbo::Vec2;

use crate::handles::resize_frame;

/// Result of dragging a corner of a group's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupScale {
    /// The new bounding box.
    pub bounds: Frame,
    /// New width ÷ original width.
    pub scale_x: f64,
    /// New height ÷ original height.
    pub scale_y: f64,
}

/// Computes the group box after dragging a corner `handle` by `delta`.
///
/// Returns `None` when `handle` is not a corner, when the original box is
/// empty, or when either side of the new box would fall below `min_size`.
#[must_use]
pub fn scale_group(
    original: &Frame,
    handle: Handle,
    delta: Vec2,
    min_size: f64,
) -> Option<GroupScale> {
    if !handle.is_corner() || original.width <= 0.0 || original.height <= 0.0 {
        return None;
    }
    let bounds = resize_frame(original, handle, delta);
    if bounds.width < min_size || bounds.height < min_size {
        return None;
    }
    Some(GroupScale {
        bounds,
        scale_x: bounds.width / original.width,
        scale_y: bounds.height / original.height,
    })
}

impl GroupScale {
    /// Re-projects `child`, given relative to `original`, into the new box.
    ///
    /// The child's rotation is kept.
    #[must_use]
    pub fn project(&self, original: &Frame, child: &Frame) -> Frame {
        let fx = (child.x - original.x) / original.width;
        let fy = (child.y - original.y) / original.height;
        Frame {
            x: self.bounds.x + fx * self.bounds.width,
            y: self.bounds.y + fy * self.bounds.height,
            width: child.width / original.width * self.bounds.width,
            height: child.height / original.height * self.bounds.height,
            rotation: child.rotation,
        }
    }

    /// Scaled font size for a text child, floored at `min_font_size`.
    #[must_use]
    pub fn scale_font(&self, original: f64, min_font_size: f64) -> f64 {
        (original * self.scale_y).max(min_font_size)
    }
}
