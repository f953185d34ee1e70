//! Benchmarks for the fade envelope.

use std::hint::black_box;

use breathwave::dsp::FadeEnvelope;
use criterion::{BenchmarkId, Criterion};

use crate::SAMPLE_RATES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    // Scaled so every segment fits in one second
    let env = FadeEnvelope::new(0.05, 0.4, 0.2, 0.05);

    for &rate in SAMPLE_RATES {
        let len = rate as usize;

        group.bench_with_input(BenchmarkId::new("render", rate), &rate, |b, &rate| {
            b.iter(|| env.render(black_box(len), rate))
        });

        group.bench_with_input(BenchmarkId::new("apply", rate), &rate, |b, &rate| {
            b.iter_batched(
                || vec![0.5f32; len],
                |buffer| env.apply(black_box(buffer), rate),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}
