// Copyright 2025 the Framewright Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use framewright_snap::{Frame, Handle};
use framewright_transform::{
    MemoryFrameStore, PointerSample, TransformConfig, TransformController,
};
use kurbo::{Affine, Point, Rect};

const CANVAS: Rect = Rect::new(0.0, 0.0, 10_000.0, 10_000.0);

fn store_with(n: u32) -> MemoryFrameStore<u32> {
    let mut store = MemoryFrameStore::new(CANVAS);
    for i in 0..n {
        let x = f64::from(i % 64) * 150.0;
        let y = f64::from(i / 64) * 150.0;
        store.insert(i, Frame::new(x, y, 100.0, 60.0));
    }
    store
}

fn controller() -> TransformController<u32, Affine> {
    TransformController::with_surface(TransformConfig::default(), Affine::IDENTITY)
}

/// A pointer path of `steps` samples, 16ms apart.
fn path(steps: u32) -> Vec<PointerSample> {
    (1..=steps)
        .map(|i| {
            let t = f64::from(i);
            let position = Point::new(50.0 + t * 3.0, 30.0 + t * 1.5);
            PointerSample::new(position, u64::from(i) * 16)
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/drag");
    let samples = path(64);

    for (n, selected) in [(256u32, 1usize), (4_096, 1), (4_096, 32)] {
        let selection: Vec<u32> = (0..selected as u32).collect();
        group.throughput(Throughput::Elements(samples.len() as u64));

        let id = format!("move/{n}x{selected}");
        group.bench_function(BenchmarkId::from_parameter(id), |b| {
            b.iter_batched(
                || store_with(n),
                |mut store| {
                    let mut ctl = controller();
                    let down = PointerSample::new(Point::new(50.0, 30.0), 0);
                    if ctl.begin(&store, &selection, Handle::Move, down).is_ok() {
                        for sample in &samples {
                            let _ = black_box(ctl.update(&mut store, *sample));
                        }
                        ctl.end();
                    }
                    black_box(store);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_group_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/group_resize");
    let samples = path(64);

    for selected in [8u32, 128] {
        let selection: Vec<u32> = (0..selected).collect();
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(selected), &selection, |b, selection| {
            b.iter_batched(
                || store_with(1_024),
                |mut store| {
                    let mut ctl = controller();
                    let down = PointerSample::new(Point::new(50.0, 30.0), 0);
                    if ctl.begin(&store, selection, Handle::SouthEast, down).is_ok() {
                        for sample in &samples {
                            let _ = black_box(ctl.update(&mut store, *sample));
                        }
                        ctl.end();
                    }
                    black_box(store);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag, bench_group_resize);
criterion_main!(benches);
