// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// A positioned rectangular element on the canvas, in logical units.
///
/// `x`/`y` are the top-left corner. `rotation` is in degrees, clockwise, with
/// `0` meaning upright; it does not affect the axis-aligned box used for
/// snapping and group bounds.
///
/// Committed frames have a positive `width` and `height`. Intermediate values
/// produced during a drag may transiently violate this and are rejected before
/// they are proposed to the frame store.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Rotation in degrees, if any.
    pub rotation: Option<f64>,
}

impl Frame {
    /// Creates an unrotated frame.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: None,
        }
    }

    /// Returns this frame with the given rotation in degrees.
    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Creates an unrotated frame covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(rect.x0, rect.y0, rect.width(), rect.height())
    }

    /// Returns the axis-aligned box of this frame.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Width and height.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// Returns this frame moved by `delta`.
    #[must_use]
    pub fn translate(self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// Smallest unrotated frame containing both frames' boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::from_rect(self.to_rect().union(other.to_rect()))
    }

    /// Union bounding box of `frames`, or `None` if there are none.
    pub fn bounding<'a>(frames: impl IntoIterator<Item = &'a Self>) -> Option<Self> {
        frames
            .into_iter()
            .fold(None, |acc: Option<Self>, f| {
                Some(acc.map_or(Self::from_rect(f.to_rect()), |a| a.union(f)))
            })
    }

    /// Returns `true` if both dimensions are strictly greater than `min_size`.
    #[must_use]
    pub fn exceeds(&self, min_size: f64) -> bool {
        self.width > min_size && self.height > min_size
    }

    /// Compares position and size within `epsilon`; rotation is ignored.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }
}

impl From<Rect> for Frame {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
