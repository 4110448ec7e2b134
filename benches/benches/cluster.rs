// Copyright 2025 the Epochline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use epochline_axis::Viewport;
use epochline_cluster::{Clusterer, visible};
use epochline_data::Event;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

fn events(n: usize, seed: u64) -> Vec<Event> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|i| {
            let year = (rng.next_u32() % 12_023) as i32 - 10_000;
            Event::new(year, format!("event {i}"))
        })
        .collect()
}

fn bench_cluster(c: &mut Criterion) {
    let mut group = c.benchmark_group("epochline_cluster");
    let full = Viewport::new(-10_000.0, 2023.0);
    let narrow = Viewport::new(1000.0, 1100.0);

    // The sweep scans open clusters per event, so the cost grows with the
    // number of clusters: at most 100 / threshold on a monotonic axis.
    for n in [100_usize, 1_000, 10_000] {
        let data = events(n, 0xE90C_0000_0000_0001);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("full_range", n), &data, |b, data| {
            b.iter(|| black_box(Clusterer::default().cluster(data, &full)));
        });

        group.bench_with_input(BenchmarkId::new("visible_then_cluster", n), &data, |b, data| {
            b.iter(|| {
                let shown = visible(data, &narrow);
                black_box(Clusterer::default().cluster(shown, &narrow))
            });
        });

        group.bench_with_input(BenchmarkId::new("fine_threshold", n), &data, |b, data| {
            b.iter(|| black_box(Clusterer::new(0.5).cluster(data, &full)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cluster);
criterion_main!(benches);
