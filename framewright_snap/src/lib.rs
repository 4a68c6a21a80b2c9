// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framewright Snap: alignment snapping for frames on a canvas.
//!
//! Given a candidate [`Frame`] (the position a drag or resize would produce),
//! the other frames on the canvas, and the canvas bounds, [`snap_frame`]
//! returns a corrected frame that lines up with nearby targets, the
//! [`SnapGuide`]s to draw, and a [`SnapState`] to feed into the next call of
//! the same gesture.
//!
//! Targets are one-dimensional: x and y are handled independently. Sources are
//! the canvas edges, the canvas center lines, and each sibling's near edge, far
//! edge, and center (see [`collect_targets`] and [`SnapOptions`]).
//!
//! ## Behavior
//!
//! - The threshold is given in screen pixels and divided by the viewport scale,
//!   so snapping feels the same at every zoom level.
//! - **Hysteresis**: a line that snapped on the previous call keeps its target
//!   until it moves more than 1.5× the threshold away. This prevents flicker
//!   when the pointer hovers near the threshold boundary.
//! - **Move**: left/center/right (and top/middle/bottom) lines are tested; a
//!   center-line match takes priority over edge matches, otherwise the closest
//!   match wins, and the whole frame is shifted.
//! - **Resize**: only the edges moved by the [`Handle`] are tested, and the
//!   opposite edge stays fixed. There is no center priority.
//!
//! The engine is a pure function. It never enforces a minimum size; the
//! interaction layer is responsible for rejecting degenerate resizes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use framewright_snap::{Frame, Handle, SnapContext, SnapOptions, SnapState, snap_frame};
//!
//! let canvas = Rect::new(0.0, 0.0, 1000.0, 1000.0);
//! let ctx = SnapContext::new(canvas, SnapOptions::default(), 1.0);
//! let siblings = [Frame::new(100.0, 400.0, 200.0, 100.0)];
//!
//! // Dragged so its left edge is 3 units right of the sibling's left edge.
//! let candidate = Frame::new(103.0, 700.0, 50.0, 50.0);
//! let result = snap_frame(&ctx, candidate, &siblings, Some(Handle::Move), &SnapState::new());
//!
//! assert_eq!(result.frame.x, 100.0);
//! assert_eq!(result.guides.len(), 1);
//!
//! // Feed `result.state` into the next move of the same drag.
//! let next = snap_frame(
//!     &ctx,
//!     Frame::new(110.0, 700.0, 50.0, 50.0),
//!     &siblings,
//!     Some(Handle::Move),
//!     &result.state,
//! );
//! assert_eq!(next.frame.x, 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod frame;
mod guide;
mod handle;
mod options;
mod target;

pub use engine::{Guides, SnapResult, snap_frame};
pub use frame::Frame;
pub use guide::{Anchor, AxisSnap, GuideAxis, SnapGuide, SnapState};
pub use handle::Handle;
pub use options::{SnapContext, SnapOptions};
pub use target::{AxisTargets, SnapTarget, TargetKind, collect_targets};
