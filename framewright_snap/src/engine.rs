// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use smallvec::SmallVec;

use crate::{
    Anchor, AxisSnap, AxisTargets, Frame, GuideAxis, Handle, SnapContext, SnapGuide, SnapState,
    SnapTarget, collect_targets,
};

/// Guides produced by one snap call; at most one per axis.
pub type Guides = SmallVec<[SnapGuide; 2]>;

/// Output of [`snap_frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct SnapResult {
    /// The corrected frame.
    pub frame: Frame,
    /// Guides to draw for this move.
    pub guides: Guides,
    /// State to pass to the next call of the same drag.
    pub state: SnapState,
}

impl SnapResult {
    fn unchanged(frame: Frame) -> Self {
        Self {
            frame,
            guides: Guides::new(),
            state: SnapState::new(),
        }
    }

    /// Translation applied to `candidate`'s origin by the snap.
    #[must_use]
    pub fn offset_from(&self, candidate: &Frame) -> Vec2 {
        self.frame.origin() - candidate.origin()
    }
}

#[derive(Clone, Copy, Debug)]
struct Radii {
    threshold: f64,
    hysteresis: f64,
}

/// Aligns `candidate` to nearby canvas and sibling targets.
///
/// - `siblings` are the frames to align against; the frames being dragged
///   should already be excluded by the caller.
/// - `handle` selects the mode: `None` or [`Handle::Move`] translates the whole
///   frame, a resize handle only moves the edges that handle controls, and
///   [`Handle::Rotate`] never snaps.
/// - `prior` is the state returned by the previous call within the same drag
///   (or [`SnapState::new`] on the first move).
///
/// When snapping is disabled, or the effective threshold is not positive, the
/// candidate is returned unchanged with no guides and an empty state.
///
/// The engine does not enforce a minimum size; callers must reject degenerate
/// results of a resize.
pub fn snap_frame<'a>(
    ctx: &SnapContext,
    candidate: Frame,
    siblings: impl IntoIterator<Item = &'a Frame>,
    handle: Option<Handle>,
    prior: &SnapState,
) -> SnapResult {
    let (Some(threshold), Some(hysteresis)) = (ctx.threshold(), ctx.hysteresis_threshold()) else {
        return SnapResult::unchanged(candidate);
    };
    let handle = handle.unwrap_or(Handle::Move);
    if handle == Handle::Rotate {
        return SnapResult::unchanged(candidate);
    }

    let targets = collect_targets(&candidate, siblings, ctx.canvas, &ctx.options);
    if targets.is_empty() {
        return SnapResult::unchanged(candidate);
    }

    let radii = Radii {
        threshold,
        hysteresis,
    };
    if handle == Handle::Move {
        snap_move(candidate, &targets, prior, radii)
    } else {
        snap_resize(candidate, handle, &targets, prior, radii)
    }
}

fn snap_move(
    candidate: Frame,
    targets: &AxisTargets,
    prior: &SnapState,
    radii: Radii,
) -> SnapResult {
    let x_lines = [
        (Anchor::Start, candidate.x),
        (Anchor::Center, candidate.center_x()),
        (Anchor::End, candidate.right()),
    ];
    let y_lines = [
        (Anchor::Start, candidate.y),
        (Anchor::Center, candidate.center_y()),
        (Anchor::End, candidate.bottom()),
    ];

    let mut result = SnapResult::unchanged(candidate);
    result.state.x = snap_axis(&x_lines, &targets.x, prior.x.as_ref(), radii, true);
    result.state.y = snap_axis(&y_lines, &targets.y, prior.y.as_ref(), radii, true);

    if let Some(snap) = &result.state.x {
        result.frame.x += snap.target.value - snap.value;
        result
            .guides
            .push(SnapGuide::for_target(GuideAxis::Vertical, &snap.target));
    }
    if let Some(snap) = &result.state.y {
        result.frame.y += snap.target.value - snap.value;
        result
            .guides
            .push(SnapGuide::for_target(GuideAxis::Horizontal, &snap.target));
    }
    result
}

fn snap_resize(
    candidate: Frame,
    handle: Handle,
    targets: &AxisTargets,
    prior: &SnapState,
    radii: Radii,
) -> SnapResult {
    let mut result = SnapResult::unchanged(candidate);
    let frame = &mut result.frame;

    let x_line = if handle.moves_left() {
        Some((Anchor::Start, candidate.x))
    } else if handle.moves_right() {
        Some((Anchor::End, candidate.right()))
    } else {
        None
    };
    if let Some(line) = x_line {
        result.state.x = snap_axis(&[line], &targets.x, prior.x.as_ref(), radii, false);
    }
    if let Some(snap) = &result.state.x {
        if snap.anchor == Anchor::Start {
            let right = frame.right();
            frame.x = snap.target.value;
            frame.width = right - frame.x;
        } else {
            frame.width = snap.target.value - frame.x;
        }
        result
            .guides
            .push(SnapGuide::for_target(GuideAxis::Vertical, &snap.target));
    }

    let y_line = if handle.moves_top() {
        Some((Anchor::Start, candidate.y))
    } else if handle.moves_bottom() {
        Some((Anchor::End, candidate.bottom()))
    } else {
        None
    };
    if let Some(line) = y_line {
        result.state.y = snap_axis(&[line], &targets.y, prior.y.as_ref(), radii, false);
    }
    if let Some(snap) = &result.state.y {
        if snap.anchor == Anchor::Start {
            let bottom = frame.bottom();
            frame.y = snap.target.value;
            frame.height = bottom - frame.y;
        } else {
            frame.height = snap.target.value - frame.y;
        }
        result
            .guides
            .push(SnapGuide::for_target(GuideAxis::Horizontal, &snap.target));
    }

    result
}

/// Picks the snap for one axis.
///
/// A previous snap is kept while its line stays within the hysteresis radius
/// of the same (still offered) target. Otherwise each line looks for its
/// closest target within the threshold; with `center_priority` a center-line
/// match wins over edge matches, else the closest match wins.
fn snap_axis(
    lines: &[(Anchor, f64)],
    targets: &[SnapTarget],
    prior: Option<&AxisSnap>,
    radii: Radii,
    center_priority: bool,
) -> Option<AxisSnap> {
    if let Some(prev) = prior {
        let held = lines.iter().find(|(anchor, _)| *anchor == prev.anchor);
        if let Some(&(anchor, value)) = held {
            if (value - prev.target.value).abs() <= radii.hysteresis
                && targets.iter().any(|t| t.same_as(&prev.target))
            {
                return Some(AxisSnap {
                    value,
                    anchor,
                    target: prev.target,
                });
            }
        }
    }

    let mut best: Option<(f64, AxisSnap)> = None;
    let mut center = None;
    for &(anchor, value) in lines {
        let Some((distance, target)) = closest_target(value, targets, radii.threshold) else {
            continue;
        };
        let snap = AxisSnap {
            value,
            anchor,
            target,
        };
        if center_priority && anchor == Anchor::Center {
            center = Some(snap);
        }
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, snap));
        }
    }

    center.or(best.map(|(_, snap)| snap))
}

fn closest_target(value: f64, targets: &[SnapTarget], threshold: f64) -> Option<(f64, SnapTarget)> {
    targets
        .iter()
        .map(|t| ((t.value - value).abs(), *t))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.total_cmp(&b.0))
}
