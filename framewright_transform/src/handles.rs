// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle geometry: where handles sit on a frame, which handle is under the
//! pointer, and how a handle drag changes a frame.
//!
//! Sizes are passed in logical units. Callers derive them from constant pixel
//! sizes via the viewport scale so that handles look the same at any zoom.

use core::f64::consts::PI;

use framewright_snap::{Frame, Handle};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`
use kurbo::{Affine, Point, Vec2};

/// Position of `handle` on `frame`'s axis-aligned box.
///
/// The rotate handle sits `rotate_offset` above the top edge's midpoint;
/// [`Handle::Move`] has no position.
#[must_use]
pub fn handle_position(frame: &Frame, handle: Handle, rotate_offset: f64) -> Option<Point> {
    let (left, top, right, bottom) = (frame.x, frame.y, frame.right(), frame.bottom());
    let (cx, cy) = (frame.center_x(), frame.center_y());
    let pos = match handle {
        Handle::Move => return None,
        Handle::North => Point::new(cx, top),
        Handle::NorthEast => Point::new(right, top),
        Handle::East => Point::new(right, cy),
        Handle::SouthEast => Point::new(right, bottom),
        Handle::South => Point::new(cx, bottom),
        Handle::SouthWest => Point::new(left, bottom),
        Handle::West => Point::new(left, cy),
        Handle::NorthWest => Point::new(left, top),
        Handle::Rotate => Point::new(cx, top - rotate_offset),
    };
    Some(pos)
}

/// Finds the handle of `frame` under the logical point `pt`.
///
/// Each handle is a square of side `2 × half_size` centered on its position.
/// The rotate handle is tested first, then corners before edges, and finally
/// the frame body, which yields [`Handle::Move`]. Rotated frames are hit
/// tested in their own unrotated space.
#[must_use]
pub fn handle_at(frame: &Frame, pt: Point, half_size: f64, rotate_offset: f64) -> Option<Handle> {
    let pt = match frame.rotation {
        Some(degrees) if degrees != 0.0 => {
            Affine::rotate_about(-degrees * PI / 180.0, frame.center()) * pt
        }
        _ => pt,
    };
    let hit = |handle| {
        handle_position(frame, handle, rotate_offset).is_some_and(|p| {
            (pt.x - p.x).abs() <= half_size && (pt.y - p.y).abs() <= half_size
        })
    };

    if hit(Handle::Rotate) {
        return Some(Handle::Rotate);
    }
    let corners = Handle::RESIZE.into_iter().filter(|h| h.is_corner());
    let edges = Handle::RESIZE.into_iter().filter(|h| !h.is_corner());
    if let Some(handle) = corners.chain(edges).find(|&h| hit(h)) {
        return Some(handle);
    }
    frame.to_rect().contains(pt).then_some(Handle::Move)
}

/// Applies a logical drag `delta` to the edges `handle` controls.
///
/// The opposite edges stay fixed. The result may have a non-positive size;
/// callers validate it before committing. [`Handle::Move`] translates the
/// frame and [`Handle::Rotate`] leaves it unchanged.
#[must_use]
pub fn resize_frame(frame: &Frame, handle: Handle, delta: Vec2) -> Frame {
    match handle {
        Handle::Move => return frame.translate(delta),
        Handle::Rotate => return *frame,
        _ => {}
    }
    let mut out = *frame;
    if handle.moves_left() {
        out.x = frame.x + delta.x;
        out.width = frame.width - delta.x;
    } else if handle.moves_right() {
        out.width = frame.width + delta.x;
    }
    if handle.moves_top() {
        out.y = frame.y + delta.y;
        out.height = frame.height - delta.y;
    } else if handle.moves_bottom() {
        out.height = frame.height + delta.y;
    }
    out
}

/// Rotation in degrees that points `frame`'s top toward `pointer`.
///
/// `0` means the pointer is straight above the center; angles grow clockwise
/// (screen y points down) and are normalized to `[0, 360)`.
#[must_use]
pub fn rotation_toward(frame: &Frame, pointer: Point) -> f64 {
    let v = pointer - frame.center();
    let degrees = v.y.atan2(v.x) * 180.0 / PI + 90.0;
    let normalized = degrees % 360.0;
    if normalized < 0.0 {
        normalized + 360.0
    } else {
        normalized
    }
}
