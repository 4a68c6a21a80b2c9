// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framewright Transform: interactive move, resize, and rotate of frames.
//!
//! [`TransformController`] turns a pointer gesture on a selection into proposed
//! frame updates. It owns a [`CoordinateTransform`](framewright_view::CoordinateTransform)
//! for screen → logical conversion and calls into the `framewright_snap`
//! engine for alignment. Frames are read from and proposed to a
//! [`FrameStore`]; the controller never keeps frames beyond one gesture.
//!
//! ## Gestures
//!
//! - **Move** translates every selected frame. Only the first selected frame is
//!   snapped (against frames outside the selection) and the same correction is
//!   applied to the rest.
//! - **Resize** of a single frame moves the edges controlled by the grabbed
//!   [`Handle`], snaps those edges, and rejects results at or below
//!   [`TransformConfig::min_size`].
//! - **Corner resize** of several frames scales the group's bounding box and
//!   re-projects each frame proportionally (see [`group`]). Text elements scale
//!   their font size. There is no snapping.
//! - **Rotate** of a single frame points its top toward the pointer.
//!
//! Snapping weakens as the pointer speeds up and is fully suppressed at
//! [`TransformConfig::velocity_cutoff`], so quick flicks are not caught by
//! every target they pass.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect};
//! use framewright_snap::{Frame, Handle};
//! use framewright_transform::{
//!     FrameStore, MemoryFrameStore, MoveOutcome, PointerSample, TransformConfig,
//!     TransformController,
//! };
//!
//! let mut store = MemoryFrameStore::new(Rect::new(0.0, 0.0, 1000.0, 1000.0));
//! store.insert("card", Frame::new(100.0, 100.0, 50.0, 50.0));
//!
//! // An identity surface: screen pixels equal logical units.
//! let mut controller =
//!     TransformController::with_surface(TransformConfig::default(), Affine::IDENTITY);
//! let down = PointerSample::new(Point::new(120.0, 120.0), 0);
//! controller.begin(&store, &["card"], Handle::Move, down).unwrap();
//!
//! // A slow drag to the right; the frame's right edge lands near the canvas
//! // center line and snaps onto it.
//! let outcome = controller
//!     .update(&mut store, PointerSample::new(Point::new(467.0, 120.0), 1000))
//!     .unwrap();
//! assert_eq!(outcome, MoveOutcome::Applied { frames: 1 });
//! assert_eq!(store.frame(&"card").unwrap().x, 450.0);
//! assert_eq!(controller.guides().len(), 1);
//!
//! controller.end();
//! assert!(controller.guides().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod capture;
mod config;
mod controller;
mod error;
pub mod group;
mod handles;
mod motion;
mod session;
mod store;

pub use capture::{OnRelease, PointerCapture};
pub use config::TransformConfig;
pub use controller::{Interaction, MoveOutcome, TransformController};
pub use error::InteractionError;
pub use handles::{handle_at, handle_position, resize_frame, rotation_toward};
pub use motion::{MotionTracker, PointerSample};
pub use session::DragSession;
pub use store::{FramePatch, FrameStore, MemoryFrameStore};

pub use framewright_snap::{Frame, Handle};
