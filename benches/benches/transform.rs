// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hdrdiff_transform::{fit, pan, scale_to_zoom_level, zoom, zoom_level_to_scale};
use kurbo::{Point, Size};

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("hdrdiff_transform/fit");

    for (w, h) in [(640.0, 480.0), (4096.0, 2160.0), (17.0, 9000.0)] {
        let item = Size::new(w, h);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{w}x{h}")),
            &item,
            |b, item| {
                b.iter(|| black_box(fit(black_box(*item), black_box(Size::new(1280.0, 720.0)))));
            },
        );
    }

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("hdrdiff_transform/zoom");
    let start = fit(Size::new(4096.0, 2160.0), Size::new(1280.0, 720.0)).unwrap();
    let cursor = Point::new(311.0, 207.0);

    group.bench_function("single_notch", |b| {
        b.iter(|| black_box(zoom(black_box(start), black_box(cursor), black_box(0.5))));
    });

    // A fast wheel spin: many small increments in both directions.
    group.bench_function("wheel_spin_64", |b| {
        b.iter(|| {
            let mut t = start;
            for i in 0..64 {
                let increment = if i % 16 < 8 { 0.125 } else { -0.125 };
                t = zoom(t, cursor, increment);
            }
            black_box(t)
        });
    });

    group.bench_function("level_roundtrip", |b| {
        b.iter(|| black_box(zoom_level_to_scale(scale_to_zoom_level(black_box(0.3125)))));
    });

    group.finish();
}

fn bench_pan(c: &mut Criterion) {
    let start = fit(Size::new(4096.0, 2160.0), Size::new(1280.0, 720.0)).unwrap();
    let pointer = Point::new(640.0, 360.0);

    c.bench_function("hdrdiff_transform/pan_drag_256", |b| {
        b.iter(|| {
            let mut t = start;
            for i in 0..256_u32 {
                let f = f64::from(i);
                t = pan(start, pointer, Point::new(640.0 + f, 360.0 - f * 0.5));
            }
            black_box(t)
        });
    });
}

criterion_group!(benches, bench_fit, bench_zoom, bench_pan);
criterion_main!(benches);
