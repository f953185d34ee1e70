//! Benchmarks for the signal generators.

mod envelope;
mod noise;
mod oscillator;

pub use envelope::bench_envelope;
pub use noise::bench_noise;
pub use oscillator::bench_oscillator;
