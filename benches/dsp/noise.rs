//! Benchmarks for white noise and the pink coloring filter.

use std::hint::black_box;

use breathwave::dsp::{filter::PINK, generate_pink_noise, noise::white_noise};
use criterion::{BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use crate::SAMPLE_RATES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &rate in SAMPLE_RATES {
        let mut rng = StdRng::seed_from_u64(1);

        // Gaussian draw only
        group.bench_with_input(BenchmarkId::new("white", rate), &rate, |b, &rate| {
            b.iter(|| white_noise(black_box(rate as usize), &mut rng))
        });

        // Recursive filter only
        let white = white_noise(rate as usize, &mut rng);
        group.bench_with_input(BenchmarkId::new("pink_filter", rate), &rate, |b, _| {
            b.iter(|| PINK.filter(black_box(&white)))
        });

        // Draw + filter + normalise
        group.bench_with_input(BenchmarkId::new("pink", rate), &rate, |b, &rate| {
            b.iter(|| generate_pink_noise(1.0, black_box(0.5), rate, &mut rng))
        });
    }

    group.finish();
}
