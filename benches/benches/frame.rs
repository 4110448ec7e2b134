// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use epochline::{AverageAdvance, Event, HoverTarget, Period, Timeline, TimelineConfig, Viewport};
use kurbo::Point;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn dataset(n: usize) -> (Vec<Event>, Vec<Period>) {
    let mut rng = Lcg(0xF4A3_0000_0000_0001);
    let events = (0..n)
        .map(|i| {
            let year = (rng.next_u32() % 12_023) as i32 - 10_000;
            Event::new(year, format!("event {i}")).with_id(format!("e{i}"))
        })
        .collect();

    let mut periods = Vec::new();
    for era in 0..12 {
        let start = -10_000 + era * 1000;
        let name = format!("era {era}");
        for sub in 0..4 {
            let sub_start = start + sub * 250;
            periods.push(
                Period::new(format!("{name}.{sub}"), sub_start, sub_start + 249)
                    .with_parent(name.clone()),
            );
        }
        periods.push(Period::new(name, start, start + 999));
    }
    (events, periods)
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("epochline_frame");
    let (events, periods) = dataset(2_000);
    let mut measure = AverageAdvance::new(1600.0);

    let timeline = Timeline::new(events.clone(), periods.clone(), TimelineConfig::default())
        .expect("benchmark dataset is valid");
    group.bench_function("default_window", |b| {
        b.iter(|| black_box(timeline.frame(&mut measure).visible_events()));
    });

    let mut zoomed = Timeline::new(events.clone(), periods.clone(), TimelineConfig::default())
        .expect("benchmark dataset is valid");
    zoomed.zoom_to(Viewport::new(-7000.0, -6400.0));
    group.bench_function("drilled_down_window", |b| {
        b.iter(|| black_box(zoomed.frame(&mut measure).periods.len()));
    });

    group.bench_function("hover_then_frame", |b| {
        b.iter_batched(
            || {
                Timeline::new(events.clone(), periods.clone(), TimelineConfig::default())
                    .expect("benchmark dataset is valid")
            },
            |mut timeline| {
                for i in 0..32 {
                    timeline.hover(
                        HoverTarget::Event(format!("e{i}").into()),
                        Point::new(f64::from(i), 0.0),
                    );
                }
                black_box(timeline.frame(&mut AverageAdvance::new(1600.0)).revision)
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
