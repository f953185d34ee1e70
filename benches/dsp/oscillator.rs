//! Benchmarks for cosine tone generation.

use std::hint::black_box;

use breathwave::dsp::{generate_tone, oscillator::ToneOscillator};
use criterion::{BenchmarkId, Criterion};

use crate::SAMPLE_RATES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &rate in SAMPLE_RATES {
        // Allocating entry point
        group.bench_with_input(BenchmarkId::new("generate", rate), &rate, |b, &rate| {
            b.iter(|| generate_tone(black_box(195.9976), 0.2, 1.0, rate))
        });

        // Render into an existing buffer
        let osc = ToneOscillator::new(130.8128, 0.2).unwrap();
        let mut buffer = vec![0.0f32; rate as usize];
        group.bench_with_input(BenchmarkId::new("render", rate), &rate, |b, &rate| {
            b.iter(|| osc.render(black_box(&mut buffer), rate))
        });
    }

    group.finish();
}
