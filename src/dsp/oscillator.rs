use std::f64::consts::TAU;

use crate::dsp::duration_to_samples;
use crate::error::{require_non_negative, require_positive, require_sample_rate, Result};

/*
Cosine Tone
===========

    out[k] = volume × cos(2π · frequency · k / sample_rate),   k = 0 … n-1

Sample times cover the half-open interval [0, duration): the endpoint is
excluded, so a 1 s tone at 1 kHz has exactly 1000 samples and the first
sample is always `volume` (cos 0 = 1).

Phase is computed from the absolute sample index in f64 rather than by
accumulating an increment, so long segments do not drift.
*/

/// Fixed-frequency cosine generator.
#[derive(Debug, Clone, Copy)]
pub struct ToneOscillator {
    frequency: f64,
    volume: f32,
}

impl ToneOscillator {
    pub fn new(frequency: f64, volume: f32) -> Result<Self> {
        require_positive("tone_frequency", frequency)?;
        require_non_negative("tone_volume", volume as f64)?;
        Ok(Self { frequency, volume })
    }

    /// Value at sample index `k`.
    #[inline]
    pub fn sample_at(&self, k: usize, sample_rate: u32) -> f32 {
        let t = k as f64 / sample_rate as f64;
        (self.volume as f64 * (TAU * self.frequency * t).cos()) as f32
    }

    /// Fill `buffer` starting at sample index 0.
    pub fn render(&self, buffer: &mut [f32], sample_rate: u32) {
        for (k, sample) in buffer.iter_mut().enumerate() {
            *sample = self.sample_at(k, sample_rate);
        }
    }
}

/// Cosine tone of `duration_s` seconds.
pub fn generate_tone(frequency: f64, volume: f32, duration_s: f64, sample_rate: u32) -> Result<Vec<f32>> {
    let osc = ToneOscillator::new(frequency, volume)?;
    require_positive("tone_duration", duration_s)?;
    require_sample_rate(sample_rate)?;

    let mut buffer = vec![0.0f32; duration_to_samples(duration_s, sample_rate)];
    osc.render(&mut buffer, sample_rate);
    Ok(buffer)
}
