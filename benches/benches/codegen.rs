// Copyright 2025 the Oledkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use oledkit_codegen::{Generator, OutputMode, Strategy};
use oledkit_ops::Session;
use oledkit_raster::Point;

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

    fn point(&mut self) -> Point {
        Point::new((self.next_u32() % 128) as i32, (self.next_u32() % 64) as i32)
    }
}

fn scripted(seed: u64, steps: usize) -> Session {
    let mut rng = Lcg::new(seed);
    let mut s = Session::default();
    for _ in 0..steps {
        let (a, b) = (rng.point(), rng.point());
        let filled = rng.next_u32() % 2 == 0;
        match rng.next_u32() % 5 {
            0 => s.line(a, b),
            1 => s.rectangle(a, b, filled),
            2 => s.circle(a, Point::new(a.x + (b.x % 10), a.y), filled),
            3 => s.rounded_rectangle(a, b, filled),
            _ => s.triangle(a, b, filled),
        }
    }
    s
}

fn bench_codegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("oledkit_codegen");
    group.sample_size(20);

    for &steps in &[8_usize, 64, 256] {
        let session = scripted(0xC0DE_0000_0000_0001 ^ steps as u64, steps);
        group.bench_function(format!("replay(steps={steps})"), |b| {
            let g = Generator::new().with_strategy(Strategy::Replay);
            b.iter(|| black_box(g.generate(session.grid(), session.log())));
        });
        group.bench_function(format!("recover(steps={steps})"), |b| {
            let g = Generator::new().with_strategy(Strategy::Recover);
            b.iter(|| black_box(g.generate(session.grid(), session.log())));
        });
    }

    group.bench_function("bitmap", |b| {
        let g = Generator::new().with_mode(OutputMode::Bitmap);
        b.iter_batched(
            || scripted(7, 32),
            |session| black_box(g.generate(session.grid(), session.log())),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_codegen);
criterion_main!(benches);
