// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use framewright_snap::{
    Frame, Handle, SnapContext, SnapOptions, SnapState, collect_targets, snap_frame,
};
use kurbo::Rect;

const CANVAS: Rect = Rect::new(0.0, 0.0, 10_000.0, 10_000.0);

/// A square grid of `n` frames spread over the canvas.
fn grid(n: usize) -> Vec<Frame> {
    let side = (n as f64).sqrt().ceil() as usize;
    let pitch = CANVAS.width() / side as f64;
    (0..n)
        .map(|i| {
            let (col, row) = (i % side, i / side);
            Frame::new(
                col as f64 * pitch + 7.0,
                row as f64 * pitch + 3.0,
                pitch * 0.5,
                pitch * 0.4,
            )
        })
        .collect()
}

fn bench_snap_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/snap_frame");
    let ctx = SnapContext::new(CANVAS, SnapOptions::default(), 1.0);

    for n in [16usize, 256, 4_096] {
        let siblings = grid(n);
        let candidate = Frame::new(4_321.0, 1_234.0, 120.0, 80.0);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("move", n), &siblings, |b, siblings| {
            b.iter(|| {
                black_box(snap_frame(
                    &ctx,
                    black_box(candidate),
                    siblings,
                    Some(Handle::Move),
                    &SnapState::new(),
                ))
            });
        });

        group.bench_with_input(BenchmarkId::new("resize_se", n), &siblings, |b, siblings| {
            b.iter(|| {
                black_box(snap_frame(
                    &ctx,
                    black_box(candidate),
                    siblings,
                    Some(Handle::SouthEast),
                    &SnapState::new(),
                ))
            });
        });

        // Hysteresis path: feed the previous state back in, as a drag does.
        let prior = snap_frame(
            &ctx,
            candidate,
            &siblings,
            Some(Handle::Move),
            &SnapState::new(),
        )
        .state;
        group.bench_with_input(
            BenchmarkId::new("move_with_state", n),
            &siblings,
            |b, siblings| {
                b.iter(|| {
                    black_box(snap_frame(
                        &ctx,
                        black_box(candidate),
                        siblings,
                        Some(Handle::Move),
                        &prior,
                    ))
                });
            },
        );
    }

    group.finish();
}

fn bench_collect_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/collect_targets");
    let options = SnapOptions::default();

    for n in [256usize, 4_096] {
        let siblings = grid(n);
        let candidate = Frame::new(4_321.0, 1_234.0, 120.0, 80.0);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &siblings, |b, siblings| {
            b.iter(|| black_box(collect_targets(&candidate, siblings, CANVAS, &options)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_snap_frame, bench_collect_targets);
criterion_main!(benches);
