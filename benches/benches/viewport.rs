// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use epochline_axis::Viewport;
use epochline_viewport::{SliderDrag, ViewportController, ZoomDirection};
use kurbo::{Point, Rect};

fn controller() -> ViewportController {
    ViewportController::new(Viewport::new(-10_000.0, 2023.0), Viewport::new(-5000.0, 2000.0))
        .expect("default range is valid")
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("epochline_viewport");

    group.bench_function("zoom_in_out_x100", |b| {
        let mut vp = controller();
        b.iter(|| {
            for _ in 0..50 {
                black_box(vp.zoom(ZoomDirection::In));
            }
            for _ in 0..50 {
                black_box(vp.zoom(ZoomDirection::Out));
            }
        });
    });

    group.bench_function("drag_session_x256", |b| {
        let track = Rect::new(0.0, 0.0, 1024.0, 24.0);
        b.iter(|| {
            let mut vp = controller();
            let mut drag = SliderDrag::default();
            let handle = vp.handle();
            let start = Point::new(
                track.x0 + track.width() * handle.position_percent / 100.0,
                12.0,
            );
            drag.press(start, track, handle);
            for step in 0..256 {
                let pointer = Point::new(start.x + f64::from(step) * 2.0 - 256.0, 12.0);
                if let Some(position) = drag.drag_to(pointer, track) {
                    black_box(vp.set_by_drag(position));
                }
            }
            drag.release();
            black_box(vp.viewport())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
