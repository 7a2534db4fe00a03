// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use caliper_core::math::interval::Interval;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16384];

fn random_intervals(count: usize, seed: u64) -> Vec<Interval> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let lower = rng.random_range(-100.0..100.0);
            Interval::new(lower, lower + rng.random_range(0.0..10.0))
        })
        .collect()
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    for size in SIZES {
        let lhs = random_intervals(size, 1);
        let rhs = random_intervals(size, 2);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("times", size), &size, |b, _| {
            b.iter(|| {
                lhs.iter()
                    .zip(&rhs)
                    .fold(Interval::EMPTY, |acc, (a, b)| acc.hull(a.times(*b)))
            })
        });

        group.bench_with_input(BenchmarkId::new("divided_by", size), &size, |b, _| {
            b.iter(|| {
                lhs.iter()
                    .zip(&rhs)
                    .map(|(a, b)| black_box(a.divided_by(*b)).width())
                    .sum::<f64>()
            })
        });
    }
    group.finish();
}

fn bench_elementary(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementary");
    let size = 4096;
    let xs = random_intervals(size, 3);
    let ys = random_intervals(size, 4);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("sin", |b| {
        b.iter(|| xs.iter().map(|x| black_box(x.sin()).width()).sum::<f64>())
    });
    group.bench_function("tan", |b| {
        b.iter(|| xs.iter().map(|x| black_box(x.tan()).width()).sum::<f64>())
    });
    group.bench_function("atan2", |b| {
        b.iter(|| {
            ys.iter()
                .zip(&xs)
                .map(|(y, x)| black_box(y.atan2(*x)).width())
                .sum::<f64>()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_elementary);
criterion_main!(benches);
