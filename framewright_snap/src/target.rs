// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Rect;

use crate::{Frame, SnapOptions};

/// Where a snap target comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A canvas edge.
    Edge,
    /// A canvas center line.
    Center,
    /// An edge or center line of another frame.
    Sibling,
}

/// A candidate coordinate on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTarget {
    /// Coordinate in logical units.
    pub value: f64,
    /// Source of the target.
    pub kind: TargetKind,
    /// Optional human-readable label for guides.
    pub label: Option<&'static str>,
}

impl SnapTarget {
    /// Creates an unlabeled target.
    #[must_use]
    pub const fn new(value: f64, kind: TargetKind) -> Self {
        Self {
            value,
            kind,
            label: None,
        }
    }

    /// Returns this target with a label.
    #[must_use]
    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub(crate) fn same_as(&self, other: &Self) -> bool {
        self.kind == other.kind && (self.value - other.value).abs() <= f64::EPSILON
    }
}

/// Snap targets for both axes.
///
/// `x` holds vertical lines (x coordinates), `y` holds horizontal lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisTargets {
    /// Targets on the x axis.
    pub x: Vec<SnapTarget>,
    /// Targets on the y axis.
    pub y: Vec<SnapTarget>,
}

impl AxisTargets {
    /// Returns `true` if neither axis has a target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }
}

/// Collects the snap targets offered to `candidate`.
///
/// Canvas edges and center lines are included according to `options`; every
/// sibling that is not identical to the candidate contributes its near edge,
/// far edge, and center on each axis when `snap_to_objects` is set.
pub fn collect_targets<'a>(
    candidate: &Frame,
    siblings: impl IntoIterator<Item = &'a Frame>,
    canvas: Rect,
    options: &SnapOptions,
) -> AxisTargets {
    let mut targets = AxisTargets::default();

    if options.snap_to_edges {
        targets.x.extend([
            SnapTarget::new(canvas.x0, TargetKind::Edge).with_label("canvas left"),
            SnapTarget::new(canvas.x1, TargetKind::Edge).with_label("canvas right"),
        ]);
        targets.y.extend([
            SnapTarget::new(canvas.y0, TargetKind::Edge).with_label("canvas top"),
            SnapTarget::new(canvas.y1, TargetKind::Edge).with_label("canvas bottom"),
        ]);
    }

    if options.snap_to_center {
        let center = canvas.center();
        targets
            .x
            .push(SnapTarget::new(center.x, TargetKind::Center).with_label("canvas center"));
        targets
            .y
            .push(SnapTarget::new(center.y, TargetKind::Center).with_label("canvas middle"));
    }

    if options.snap_to_objects {
        for sibling in siblings {
            if sibling.approx_eq(candidate, 1e-9) {
                continue;
            }
            targets.x.extend([
                SnapTarget::new(sibling.x, TargetKind::Sibling),
                SnapTarget::new(sibling.right(), TargetKind::Sibling),
                SnapTarget::new(sibling.center_x(), TargetKind::Sibling),
            ]);
            targets.y.extend([
                SnapTarget::new(sibling.y, TargetKind::Sibling),
                SnapTarget::new(sibling.bottom(), TargetKind::Sibling),
                SnapTarget::new(sibling.center_y(), TargetKind::Sibling),
            ]);
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{TargetKind, collect_targets};
    use crate::{Frame, SnapOptions};

    const CANVAS: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn canvas_targets_follow_options() {
        let candidate = Frame::new(10.0, 10.0, 50.0, 50.0);
        let all = collect_targets(&candidate, [], CANVAS, &SnapOptions::default());
        let xs: alloc::vec::Vec<f64> = all.x.iter().map(|t| t.value).collect();
        assert_eq!(xs, [0.0, 1000.0, 500.0]);
        assert_eq!(all.y[2].value, 400.0);
        assert_eq!(all.y[2].kind, TargetKind::Center);

        let edges_only = SnapOptions {
            snap_to_center: false,
            ..SnapOptions::default()
        };
        let targets = collect_targets(&candidate, [], CANVAS, &edges_only);
        assert!(targets.x.iter().all(|t| t.kind == TargetKind::Edge));

        let none = SnapOptions {
            snap_to_center: false,
            snap_to_edges: false,
            ..SnapOptions::default()
        };
        assert!(collect_targets(&candidate, [], CANVAS, &none).is_empty());
    }

    #[test]
    fn siblings_contribute_edges_and_centers_but_not_self() {
        let candidate = Frame::new(10.0, 10.0, 50.0, 50.0);
        let siblings = [candidate, Frame::new(200.0, 300.0, 100.0, 40.0)];
        let objects_only = SnapOptions {
            snap_to_center: false,
            snap_to_edges: false,
            ..SnapOptions::default()
        };
        let targets = collect_targets(&candidate, &siblings, CANVAS, &objects_only);
        let xs: alloc::vec::Vec<f64> = targets.x.iter().map(|t| t.value).collect();
        let ys: alloc::vec::Vec<f64> = targets.y.iter().map(|t| t.value).collect();
        assert_eq!(xs, [200.0, 300.0, 250.0]);
        assert_eq!(ys, [300.0, 340.0, 320.0]);
    }
}
