//! White and pink noise generation.

/*
Noise
=====

Vocabulary
----------

  white noise   Independent standard-normal samples (mean 0, variance 1).
                Flat power spectrum.

  pink noise    White noise passed through the pink coloring filter
                (see `filter`). Power falls roughly 3 dB per octave, which
                sounds softer and closer to wind or breath.

  peak          max |x| over the whole buffer.

Normalisation
-------------

The filter gain near DC is very large, so raw pink noise has no useful scale.
The buffer is divided by its peak and multiplied by `volume`:

    out[i] = volume × pink[i] / peak

so the loudest sample lands exactly on ±volume. A zero peak (every sample
is 0.0, e.g. a buffer shorter than the filter warm-up) is rejected instead
of producing NaN.

Randomness
----------

The caller owns the random source. Seeding it (`StdRng::seed_from_u64`)
makes a render reproducible.
*/

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::dsp::{duration_to_samples, filter::NoiseColor};
use crate::error::{require_non_negative, require_positive, require_sample_rate, BreathError, Result};

/// Draw `len` standard-normal samples.
pub fn white_noise<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len)
        .map(|_| <StandardNormal as Distribution<f64>>::sample(&StandardNormal, rng))
        .collect()
}

/// Scale `samples` so its peak magnitude equals `volume`.
pub fn normalize(samples: &[f64], volume: f32) -> Result<Vec<f32>> {
    let peak = samples.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    if peak == 0.0 || !peak.is_finite() {
        return Err(BreathError::DegenerateNoise {
            samples: samples.len(),
        });
    }

    let gain = volume as f64 / peak;
    Ok(samples.iter().map(|&x| (x * gain) as f32).collect())
}

/// Colored noise of the given duration, peak-normalised to `volume`.
pub fn generate_noise<R: Rng + ?Sized>(
    color: NoiseColor,
    duration_s: f64,
    volume: f32,
    sample_rate: u32,
    rng: &mut R,
) -> Result<Vec<f32>> {
    require_positive("noise_duration", duration_s)?;
    require_non_negative("noise_volume", volume as f64)?;
    require_sample_rate(sample_rate)?;

    let len = duration_to_samples(duration_s, sample_rate);
    let white = white_noise(len, rng);
    let colored = color.coefficients().filter(&white);

    debug!("{color:?} noise: {len} samples at {sample_rate} Hz, volume {volume}");
    normalize(&colored, volume)
}

/// Pink noise of `duration_s` seconds with peak amplitude `volume`.
pub fn generate_pink_noise<R: Rng + ?Sized>(
    duration_s: f64,
    volume: f32,
    sample_rate: u32,
    rng: &mut R,
) -> Result<Vec<f32>> {
    generate_noise(NoiseColor::Pink, duration_s, volume, sample_rate, rng)
}
