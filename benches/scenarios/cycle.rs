//! Benchmarks for composing a breath cycle and repeating it into a track.

use std::hint::black_box;

use breathwave::{render_track, BreathCycle, BreathParams, Track};
use criterion::{BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

pub fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/cycle");
    group.sample_size(10);

    for &rate in &[8_000u32, 22_050] {
        let params = BreathParams::DEFAULT.with_sample_rate(rate);
        let mut rng = StdRng::seed_from_u64(1);

        // 15 s of audio: two segments, noise + tone + envelope each
        group.bench_with_input(BenchmarkId::new("compose", rate), &params, |b, params| {
            b.iter(|| BreathCycle::compose(black_box(params), &mut rng))
        });

        // Copy cost of 40 repetitions into a preallocated buffer
        let cycle = BreathCycle::compose(&params, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("repeat_40", rate), &cycle, |b, cycle| {
            b.iter(|| Track::repeat(black_box(cycle), 40, rate))
        });

        // Short track end to end
        let short = params.with_track_duration(30.0);
        group.bench_with_input(BenchmarkId::new("track_30s", rate), &short, |b, params| {
            b.iter(|| render_track(black_box(params), &mut rng))
        });
    }

    group.finish();
}
