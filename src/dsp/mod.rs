//! Signal primitives used by the breath composer.
//!
//! Each generator is a pure function of its arguments (plus an explicit random
//! source for noise) and returns an owned buffer. Sample counts are always
//! derived by truncating `seconds * sample_rate`.

/// Fade/pause gain envelope applied to a finished segment.
pub mod envelope;
/// Fixed-coefficient recursive filters and their coefficient tables.
pub mod filter;
/// Gaussian white noise and filtered pink noise.
pub mod noise;
/// Fixed-frequency cosine tone.
pub mod oscillator;

pub use envelope::{apply_fading, FadeEnvelope};
pub use filter::{IirCoefficients, NoiseColor};
pub use noise::generate_pink_noise;
pub use oscillator::generate_tone;

/// Number of whole samples that fit in `seconds` at `sample_rate`.
///
/// Truncates toward zero, so 0.29 s at 100 Hz is 28 samples, not 29.
#[inline]
pub fn duration_to_samples(seconds: f64, sample_rate: u32) -> usize {
    (seconds * sample_rate as f64) as usize
}
