// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use framewright_view::TransformError;

/// Errors reported by [`TransformController`](crate::TransformController).
///
/// None of these leave the controller in a partial state: a failed `begin`
/// stays idle, and a failed `update` keeps the session and proposes nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionError {
    /// Pointer coordinates could not be converted to logical units.
    Transform(TransformError),
    /// A resize would have produced a frame at or below the minimum size.
    DegenerateResize {
        /// Width the resize would have produced.
        width: f64,
        /// Height the resize would have produced.
        height: f64,
    },
    /// `begin` was called while another gesture is active.
    GestureInProgress,
    /// `begin` was called with no selected element present in the store.
    EmptySelection,
}

impl fmt::Display for InteractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(err) => write!(f, "coordinate conversion failed: {err}"),
            Self::DegenerateResize { width, height } => write!(
                f,
                "resize to {width}x{height} is below the minimum frame size"
            ),
            Self::GestureInProgress => f.write_str("a gesture is already in progress"),
            Self::EmptySelection => f.write_str("no selected element exists in the store"),
        }
    }
}

impl core::error::Error for InteractionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Transform(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransformError> for InteractionError {
    fn from(err: TransformError) -> Self {
        Self::Transform(err)
    }
}
