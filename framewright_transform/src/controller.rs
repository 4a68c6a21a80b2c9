// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::hash::Hash;

use framewright_snap::{Frame, Guides, Handle, SnapContext, SnapGuide, snap_frame};
use framewright_view::{CoordinateTransform, Surface};
use hashbrown::HashMap;
use kurbo::{Point, Vec2};

use crate::capture::PointerCapture;
use crate::config::TransformConfig;
use crate::error::InteractionError;
use crate::group::scale_group;
use crate::handles::{handle_at, resize_frame, rotation_toward};
use crate::motion::{MotionTracker, PointerSample};
use crate::session::DragSession;
use crate::store::{FramePatch, FrameStore};

/// What the controller is doing right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// No gesture; `hovered` is the handle under the pointer, if any.
    Idle {
        /// Handle last found by [`TransformController::update_hover`].
        hovered: Option<Handle>,
    },
    /// A gesture started with `handle` is active.
    Dragging {
        /// The grabbed handle.
        handle: Handle,
    },
}

/// Result of a pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No gesture is active.
    Idle,
    /// The gesture does not apply to this selection (for example rotating
    /// several frames), or the group would collapse; nothing was proposed.
    Ignored,
    /// Frames were proposed to the store.
    Applied {
        /// Number of frames proposed.
        frames: usize,
    },
}

/// Turns pointer gestures on selected frames into proposed frame updates.
///
/// The controller is a two-state machine: idle, or dragging one [`Handle`].
/// [`begin`](Self::begin) snapshots the selection, [`update`](Self::update)
/// recomputes every frame from that snapshot and the total pointer offset,
/// and [`end`](Self::end) or [`cancel`](Self::cancel) returns to idle.
/// Because updates are computed from the snapshot rather than accumulated,
/// snapping corrections never drift.
///
/// Pointer positions arrive in screen pixels and are converted through the
/// bound [`Surface`].
#[derive(Debug)]
pub struct TransformController<K, S> {
    transform: CoordinateTransform<S>,
    config: TransformConfig,
    session: Option<DragSession<K>>,
    guides: Guides,
    hovered: Option<Handle>,
}

impl<K, S> Default for TransformController<K, S> {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

impl<K, S> TransformController<K, S> {
    /// Creates an idle controller with no surface bound.
    #[must_use]
    pub fn new(config: TransformConfig) -> Self {
        Self {
            transform: CoordinateTransform::new(),
            config,
            session: None,
            guides: Guides::new(),
            hovered: None,
        }
    }

    /// Creates an idle controller bound to `surface`.
    #[must_use]
    pub fn with_surface(config: TransformConfig, surface: S) -> Self {
        Self {
            transform: CoordinateTransform::with_surface(surface),
            ..Self::new(config)
        }
    }

    /// Binds a new surface.
    pub fn set_surface(&mut self, surface: S) {
        self.transform.set_surface(surface);
    }

    /// The coordinate transform used for pointer conversion.
    #[must_use]
    pub fn coordinate_transform(&self) -> &CoordinateTransform<S> {
        &self.transform
    }

    /// Mutable access to the coordinate transform, for example to reach the
    /// surface through [`CoordinateTransform::surface_mut`].
    pub fn coordinate_transform_mut(&mut self) -> &mut CoordinateTransform<S> {
        &mut self.transform
    }

    /// Drops the cached inverse view transform after a zoom or pan.
    pub fn invalidate_view(&mut self) {
        self.transform.invalidate();
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Replaces the configuration; an active gesture picks it up on its
    /// next move.
    pub fn set_config(&mut self, config: TransformConfig) {
        self.config = config;
    }

    /// Current interaction state.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        match &self.session {
            Some(session) => Interaction::Dragging {
                handle: session.handle(),
            },
            None => Interaction::Idle {
                hovered: self.hovered,
            },
        }
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active gesture's session.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// Guides produced by the most recent accepted move.
    #[must_use]
    pub fn guides(&self) -> &[SnapGuide] {
        &self.guides
    }

    /// Handle last found under the pointer while idle.
    #[must_use]
    pub fn hovered_handle(&self) -> Option<Handle> {
        self.hovered
    }

    /// Finishes the gesture, keeping everything proposed so far.
    ///
    /// Clears guides and releases the pointer capture. Returns `false` if no
    /// gesture was active.
    pub fn end(&mut self) -> bool {
        let ended = self.finish();
        if ended {
            tracing::debug!("gesture ended");
        }
        ended
    }

    /// Abandons the gesture without proposing anything further.
    ///
    /// Returns `false` if no gesture was active.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.finish();
        if cancelled {
            tracing::debug!("gesture cancelled");
        }
        cancelled
    }

    fn finish(&mut self) -> bool {
        self.guides.clear();
        self.session.take().is_some()
    }
}

impl<K: Clone + Eq + Hash, S: Surface> TransformController<K, S> {
    /// Hit-tests `frame`'s handles at the screen point `pointer`.
    ///
    /// Handle sizes are constant in screen pixels. Pass `None` when nothing is
    /// selected. While dragging, the hovered handle is left unchanged.
    ///
    /// # Errors
    ///
    /// [`InteractionError::Transform`] if `pointer` cannot be converted.
    pub fn update_hover(
        &mut self,
        frame: Option<&Frame>,
        pointer: Point,
    ) -> Result<Option<Handle>, InteractionError> {
        if self.session.is_some() {
            return Ok(self.hovered);
        }
        self.hovered = match frame {
            Some(frame) => {
                let logical = self.transform.screen_to_logical(pointer)?;
                let half = self
                    .transform
                    .pixels_to_logical(self.config.handle_size_px / 2.0)?;
                let offset = self
                    .transform
                    .pixels_to_logical(self.config.rotate_handle_offset_px)?;
                handle_at(frame, logical, half, offset)
            }
            None => None,
        };
        Ok(self.hovered)
    }

    /// Starts a gesture on `selection` with the grabbed `handle`.
    ///
    /// Selected keys missing from the store are skipped; the first remaining
    /// key is the reference frame for move snapping.
    ///
    /// # Errors
    ///
    /// - [`InteractionError::GestureInProgress`] if a gesture is active.
    /// - [`InteractionError::EmptySelection`] if no selected key is in the store.
    /// - [`InteractionError::Transform`] if the pointer cannot be converted.
    ///
    /// On error the controller stays idle.
    pub fn begin<F: FrameStore<K>>(
        &mut self,
        store: &F,
        selection: &[K],
        handle: Handle,
        sample: PointerSample,
    ) -> Result<(), InteractionError> {
        self.start(store, selection, handle, sample).map(|_| ())
    }

    /// Like [`begin`](Self::begin), and also takes ownership of a pointer
    /// capture for the duration of the gesture.
    ///
    /// The capture is acquired only if the gesture starts and is released
    /// exactly once when it ends, is cancelled, or the controller is dropped.
    ///
    /// # Errors
    ///
    /// Same as [`begin`](Self::begin).
    pub fn begin_with_capture<F: FrameStore<K>>(
        &mut self,
        store: &F,
        selection: &[K],
        handle: Handle,
        sample: PointerSample,
        capture: impl PointerCapture + 'static,
    ) -> Result<(), InteractionError> {
        let session = self.start(store, selection, handle, sample)?;
        session.set_capture(Box::new(capture));
        Ok(())
    }

    fn start<F: FrameStore<K>>(
        &mut self,
        store: &F,
        selection: &[K],
        handle: Handle,
        sample: PointerSample,
    ) -> Result<&mut DragSession<K>, InteractionError> {
        if self.session.is_some() {
            return Err(InteractionError::GestureInProgress);
        }
        let mut originals: Vec<(K, Frame)> = Vec::with_capacity(selection.len());
        for key in selection {
            if originals.iter().any(|(k, _)| k == key) {
                continue;
            }
            if let Some(frame) = store.frame(key) {
                originals.push((key.clone(), frame));
            }
        }
        if originals.is_empty() {
            return Err(InteractionError::EmptySelection);
        }
        let start_logical = self.transform.screen_to_logical(sample.position)?;

        let mut font_sizes = HashMap::new();
        if originals.len() > 1 && handle.is_corner() {
            for (key, _) in &originals {
                if let Some(size) = store.font_size(key) {
                    font_sizes.insert(key.clone(), size);
                }
            }
        }

        let mut motion = MotionTracker::new(self.config.velocity_retention);
        motion.start(sample);
        let selected = originals.len();
        let mut session = DragSession::new(handle, start_logical, originals, motion);
        session.set_font_sizes(font_sizes);

        self.guides.clear();
        tracing::debug!(?handle, selected, "gesture started");
        Ok(self.session.insert(session))
    }

    /// Handles a pointer move during a gesture.
    ///
    /// Every frame is recomputed from its original value and the total
    /// logical offset since [`begin`](Self::begin), then proposed to `store`.
    /// Fast pointer motion weakens snapping, down to none at
    /// [`TransformConfig::velocity_cutoff`]. A single move at or above the
    /// cutoff also turns snapping off for that move.
    ///
    /// # Errors
    ///
    /// - [`InteractionError::Transform`] if the pointer cannot be converted.
    /// - [`InteractionError::DegenerateResize`] if a single-frame resize would
    ///   reach the minimum size. Nothing is proposed and the guides are kept.
    pub fn update<F: FrameStore<K>>(
        &mut self,
        store: &mut F,
        sample: PointerSample,
    ) -> Result<MoveOutcome, InteractionError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(MoveOutcome::Idle);
        };
        let logical = self.transform.screen_to_logical(sample.position)?;
        let scale = self.transform.scale()?;
        session.motion.update(sample);

        let delta = logical - session.start_logical();
        let strength = self
            .config
            .snap_strength(session.velocity(), session.instant_velocity());
        let snap = self
            .config
            .snap
            .with_threshold_px(self.config.snap.threshold_px * strength);
        let ctx = SnapContext::new(store.canvas_bounds(), snap, scale);

        let handle = session.handle();
        let single = session.original_frames().len() == 1;
        let gesture = Gesture {
            session,
            guides: &mut self.guides,
            config: &self.config,
        };
        match handle {
            Handle::Move => Ok(gesture.translate(store, &ctx, delta)),
            Handle::Rotate if single => Ok(gesture.rotate(store, logical)),
            _ if single => gesture.resize(store, &ctx, handle, delta),
            _ if handle.is_corner() => Ok(gesture.scale_group(store, handle, delta)),
            _ => Ok(MoveOutcome::Ignored),
        }
    }
}

/// Borrowed pieces of the controller needed to apply one move.
struct Gesture<'a, K> {
    session: &'a mut DragSession<K>,
    guides: &'a mut Guides,
    config: &'a TransformConfig,
}

impl<K: Clone + Eq + Hash> Gesture<'_, K> {
    fn siblings<F: FrameStore<K>>(&self, store: &F) -> Vec<Frame> {
        store
            .frames()
            .filter(|(key, _)| !self.session.is_selected(key))
            .map(|(_, frame)| frame)
            .collect()
    }

    fn translate<F: FrameStore<K>>(
        self,
        store: &mut F,
        ctx: &SnapContext,
        delta: Vec2,
    ) -> MoveOutcome {
        let Some((_, first)) = self.session.original_frames().first() else {
            return MoveOutcome::Ignored;
        };
        let candidate = first.translate(delta);
        let siblings = self.siblings(store);
        let result = snap_frame(
            ctx,
            candidate,
            &siblings,
            Some(Handle::Move),
            self.session.snap_state(),
        );
        let offset = delta + result.offset_from(&candidate);

        for (key, original) in self.session.original_frames() {
            store.propose_frame(key, FramePatch::position(original.origin() + offset));
        }
        *self.guides = result.guides;
        self.session.snap_state = result.state;
        MoveOutcome::Applied {
            frames: self.session.original_frames().len(),
        }
    }

    fn resize<F: FrameStore<K>>(
        self,
        store: &mut F,
        ctx: &SnapContext,
        handle: Handle,
        delta: Vec2,
    ) -> Result<MoveOutcome, InteractionError> {
        let Some((key, original)) = self.session.original_frames().first() else {
            return Ok(MoveOutcome::Ignored);
        };
        let candidate = resize_frame(original, handle, delta);
        let siblings = self.siblings(store);
        let result = snap_frame(
            ctx,
            candidate,
            &siblings,
            Some(handle),
            self.session.snap_state(),
        );
        let frame = result.frame;
        if !frame.exceeds(self.config.min_size) {
            tracing::trace!(
                width = frame.width,
                height = frame.height,
                "resize rejected below minimum size"
            );
            return Err(InteractionError::DegenerateResize {
                width: frame.width,
                height: frame.height,
            });
        }

        store.propose_frame(key, FramePatch::bounds(&frame));
        *self.guides = result.guides;
        self.session.snap_state = result.state;
        Ok(MoveOutcome::Applied { frames: 1 })
    }

    fn scale_group<F: FrameStore<K>>(
        self,
        store: &mut F,
        handle: Handle,
        delta: Vec2,
    ) -> MoveOutcome {
        self.guides.clear();
        let Some(bounds) = self.session.group_bounds() else {
            return MoveOutcome::Ignored;
        };
        let Some(scale) = scale_group(&bounds, handle, delta, self.config.min_size) else {
            tracing::trace!(?handle, "group resize rejected below minimum size");
            return MoveOutcome::Ignored;
        };

        for (key, child) in self.session.original_frames() {
            store.propose_frame(key, FramePatch::bounds(&scale.project(&bounds, child)));
        }
        let min_font_size = self.config.min_font_size;
        for (key, size) in self
            .session
            .font_changes(|original| scale.scale_font(original, min_font_size))
        {
            store.propose_font_size(&key, size);
        }
        MoveOutcome::Applied {
            frames: self.session.original_frames().len(),
        }
    }

    fn rotate<F: FrameStore<K>>(self, store: &mut F, pointer: Point) -> MoveOutcome {
        self.guides.clear();
        let Some((key, original)) = self.session.original_frames().first() else {
            return MoveOutcome::Ignored;
        };
        store.propose_frame(key, FramePatch::rotation(rotation_toward(original, pointer)));
        MoveOutcome::Applied { frames: 1 }
    }
}
