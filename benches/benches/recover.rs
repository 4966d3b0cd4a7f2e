// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use oledkit_raster::{
    PixelGrid, Point, circle_filled, circle_outline, line, rect_outline, rounded_rect_filled,
    triangle_outline,
};
use oledkit_recover::{Pass, Pipeline};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn below(&mut self, upper_exclusive: u32) -> i32 {
        (self.next_u32() % upper_exclusive) as i32
    }
}

fn scene() -> PixelGrid {
    let mut g = PixelGrid::mask(|plot| circle_outline(Point::new(20, 20), 8, plot));
    g.paint(true, |plot| circle_filled(Point::new(100, 16), 6, plot));
    g.paint(true, |plot| rect_outline(Point::new(50, 5), Point::new(79, 24), plot));
    g.paint(true, |plot| rounded_rect_filled(84, 34, 30, 20, 5, plot));
    g.paint(true, |plot| {
        triangle_outline([Point::new(30, 34), Point::new(10, 60), Point::new(50, 60)], plot);
    });
    g.paint(true, |plot| line(Point::new(0, 63), Point::new(127, 40), plot));
    g
}

fn noise(seed: u64, pixels: usize) -> PixelGrid {
    let mut rng = Lcg::new(seed);
    let mut g = PixelGrid::new();
    for _ in 0..pixels {
        g.set(Point::new(rng.below(128), rng.below(64)), true);
    }
    g
}

fn bench_recover(c: &mut Criterion) {
    let mut group = c.benchmark_group("oledkit_recover");
    group.sample_size(20);

    let cases = [
        ("blank", PixelGrid::new()),
        ("scene", scene()),
        ("noise_400", noise(0x01ED_0000_0000_0001, 400)),
        ("full", PixelGrid::filled()),
    ];
    let pipeline = Pipeline::default();
    for (name, grid) in &cases {
        group.bench_function(format!("pipeline({name})"), |b| {
            b.iter(|| black_box(pipeline.run(black_box(grid))));
        });
    }

    let grid = scene();
    for pass in Pass::DEFAULT_ORDER {
        let single = Pipeline::default().with_passes([pass]);
        group.bench_function(format!("pass({pass})"), |b| {
            b.iter(|| black_box(single.run(black_box(&grid))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recover);
criterion_main!(benches);
