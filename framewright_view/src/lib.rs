// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Framewright View: mapping between screen pixels and canvas logical units.
//!
//! Pointer events arrive in viewport (screen) pixels, while frames on the
//! canvas live in a fixed logical coordinate space that does not change with
//! zoom or pan. This crate provides the pieces that translate between the two:
//! - [`Surface`]: the rendering surface abstraction. It reports the current
//!   forward view transform (logical → screen), an optional fallback transform
//!   for surfaces that are not laid out yet, and the current scale factor.
//! - [`CoordinateTransform`]: binds a surface and converts points and pixel
//!   deltas in both directions. The inverse view transform is cached until the
//!   caller invalidates it.
//! - [`Viewport`]: a small pan/zoom surface that is good enough for headless
//!   hosts and tests.
//!
//! It does **not** own any scene, selection, or input routing. Callers are
//! expected to:
//! - Call [`CoordinateTransform::invalidate`] whenever zoom, pan, layout, or
//!   surface size changes (mutating the surface through
//!   [`CoordinateTransform::surface_mut`] does this automatically).
//! - Feed converted positions into higher-level controllers such as the
//!   `framewright_transform` crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use framewright_view::{CoordinateTransform, Viewport};
//!
//! // 800x600 device rect showing the canvas at 2x zoom.
//! let mut viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! viewport.set_zoom(2.0);
//!
//! let mut transform = CoordinateTransform::with_surface(viewport);
//! let logical = transform.screen_to_logical(Point::new(200.0, 100.0)).unwrap();
//! assert_eq!(logical, Point::new(100.0, 50.0));
//!
//! let screen = transform.logical_to_screen(logical).unwrap();
//! assert_eq!(screen, Point::new(200.0, 100.0));
//! ```
//!
//! ## Constant-size handles
//!
//! Handles and snapping thresholds are specified in screen pixels so that they
//! look the same at every zoom level. [`CoordinateTransform::pixels_to_logical`]
//! converts such a pixel length into logical units:
//!
//! ```rust
//! use kurbo::Rect;
//! use framewright_view::{CoordinateTransform, Viewport};
//!
//! let mut viewport = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! viewport.set_zoom(4.0);
//! let transform = CoordinateTransform::with_surface(viewport);
//!
//! // An 8px handle covers 2 logical units at 4x zoom.
//! assert_eq!(transform.pixels_to_logical(8.0).unwrap(), 2.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod surface;
mod transform;
mod viewport;

pub use error::TransformError;
pub use surface::Surface;
pub use transform::CoordinateTransform;
pub use viewport::Viewport;
