// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer capture subscriptions scoped to a drag session.
//!
//! While a gesture is active the host usually routes pointer-move and
//! pointer-up events from the whole window (not just the canvas) to the
//! controller. A [`PointerCapture`] represents that subscription. The
//! controller calls [`PointerCapture::capture`] when the gesture starts and
//! guarantees exactly one [`PointerCapture::release`] when the session goes
//! away: on normal end, on cancellation, or when the controller is dropped
//! mid-gesture.

use core::fmt;

/// A host-side pointer subscription owned by a drag session.
pub trait PointerCapture {
    /// Starts routing pointer events to the controller.
    ///
    /// The default implementation does nothing, for hosts that subscribe
    /// before handing the capture over.
    fn capture(&mut self) {}

    /// Stops routing pointer events. Called exactly once.
    fn release(&mut self);
}

/// No capture; for hosts that route pointer events themselves.
impl PointerCapture for () {
    fn release(&mut self) {}
}

/// Adapts a closure into a [`PointerCapture`] that runs on release.
pub struct OnRelease<F: FnMut()>(pub F);

impl<F: FnMut()> fmt::Debug for OnRelease<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnRelease").finish_non_exhaustive()
    }
}

impl<F: FnMut()> PointerCapture for OnRelease<F> {
    fn release(&mut self) {
        (self.0)();
    }
}
