// Copyright 2025 the hdrdiff Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hdrdiff_view::{ImageView, ViewConfig};
use kurbo::{Point, Size};

fn new_view() -> ImageView {
    ImageView::new(
        Size::new(4096.0, 2160.0),
        Size::new(1280.0, 720.0),
        ViewConfig::default(),
    )
    .expect("valid sizes")
}

fn bench_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("hdrdiff_view");

    // Hypothesis: a drag gesture costs the same per move regardless of length,
    // since every move is derived from the captured start transform.
    for moves in [16_u32, 256, 4_096] {
        group.bench_function(format!("drag(moves={moves})"), |b| {
            b.iter_batched(
                new_view,
                |mut view| {
                    view.pointer_move(Point::new(100.0, 100.0), true);
                    for i in 0..moves {
                        let f = f64::from(i);
                        view.pointer_move(Point::new(100.0 + f * 0.25, 100.0 + f * 0.1), true);
                    }
                    view.pointer_up();
                    black_box(view.transform());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("wheel_and_readout", |b| {
        b.iter_batched(
            new_view,
            |mut view| {
                let cursor = Point::new(333.0, 222.0);
                for _ in 0..8 {
                    view.wheel(cursor, 120.0);
                    black_box(view.pixel_at(cursor));
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("resize_refit", |b| {
        b.iter_batched(
            new_view,
            |mut view| {
                for w in [800.0, 1024.0, 1280.0, 1920.0] {
                    view.resize(Size::new(w, w * 0.5625), false).expect("valid size");
                }
                black_box(view.transform());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_events);
criterion_main!(benches);
