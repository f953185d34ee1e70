//! Track - breath cycles repeated to fill a target duration
//!
//! One cycle = inbreath segment followed by outbreath segment.
//! Each segment is pink noise plus a cosine tone, shaped by the fade envelope.

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    dsp::{generate_pink_noise, generate_tone},
    error::Result,
    io::Sink,
    runtime::BreathParams,
};

/// Add `src` into `dest` sample by sample.
fn mix_into(dest: &mut [f32], src: &[f32]) {
    debug_assert_eq!(dest.len(), src.len());
    for (d, s) in dest.iter_mut().zip(src) {
        *d += s;
    }
}

/// Render one shaped segment: noise + tone, then the envelope.
pub fn render_segment<R: Rng + ?Sized>(
    params: &BreathParams,
    duration_s: f64,
    frequency: f64,
    rng: &mut R,
) -> Result<Vec<f32>> {
    let mut segment = generate_pink_noise(duration_s, params.volume_noise, params.sample_rate, rng)?;
    let tone = generate_tone(frequency, params.volume_tone, duration_s, params.sample_rate)?;
    mix_into(&mut segment, &tone);

    params.envelope.apply(segment, params.sample_rate)
}

/// One inbreath followed by one outbreath. The unit of repetition.
#[derive(Debug, Clone)]
pub struct BreathCycle {
    pub inbreath: Vec<f32>,
    pub outbreath: Vec<f32>,
}

impl BreathCycle {
    /// Render both segments. Noise is drawn for the inbreath first.
    pub fn compose<R: Rng + ?Sized>(params: &BreathParams, rng: &mut R) -> Result<Self> {
        let inbreath = render_segment(params, params.duration_in, params.frequency_in, rng)?;
        debug!("inbreath: {} samples at {:.4} Hz", inbreath.len(), params.frequency_in);

        let outbreath = render_segment(params, params.duration_out, params.frequency_out, rng)?;
        debug!("outbreath: {} samples at {:.4} Hz", outbreath.len(), params.frequency_out);

        Ok(Self { inbreath, outbreath })
    }

    pub fn len(&self) -> usize {
        self.inbreath.len() + self.outbreath.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append the cycle (inbreath then outbreath) to `out`.
    pub fn write_into(&self, out: &mut Vec<f32>) {
        out.extend_from_slice(&self.inbreath);
        out.extend_from_slice(&self.outbreath);
    }
}

/// The finished mono sample buffer and the rate it was rendered at.
#[derive(Debug, Clone)]
pub struct Track {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub cycles: usize,
}

impl Track {
    /// Concatenate `count` copies of `cycle` into one preallocated buffer.
    pub fn repeat(cycle: &BreathCycle, count: usize, sample_rate: u32) -> Self {
        let mut samples = Vec::with_capacity(cycle.len() * count);
        for _ in 0..count {
            cycle.write_into(&mut samples);
        }

        Self {
            samples,
            sample_rate,
            cycles: count,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Validate `params`, compose one cycle and repeat it to fill the track.
pub fn render_track<R: Rng + ?Sized>(params: &BreathParams, rng: &mut R) -> Result<Track> {
    params.validate()?;

    let cycle = BreathCycle::compose(params, rng)?;
    let count = params.cycle_count();

    let covered = count as f64 * params.cycle_duration();
    if covered < params.track_duration {
        warn!(
            "dropping {:.3}s partial cycle: {} cycles cover {:.3}s of {:.3}s",
            params.track_duration - covered,
            count,
            covered,
            params.track_duration
        );
    }

    debug!("repeating {}-sample cycle {} times", cycle.len(), count);
    Ok(Track::repeat(&cycle, count, params.sample_rate))
}

/// Render the track and hand it to `sink` under the name from `params`.
pub fn run<R: Rng + ?Sized, S: Sink + ?Sized>(
    params: &BreathParams,
    rng: &mut R,
    sink: &mut S,
) -> Result<Track> {
    let track = render_track(params, rng)?;
    let name = params.file_stem();

    sink.write(&track.samples, track.sample_rate, &name)?;
    info!(
        "wrote `{}`: {} cycles, {} samples ({:.1}s) at {} Hz",
        name,
        track.cycles,
        track.len(),
        track.duration_secs(),
        track.sample_rate
    );

    Ok(track)
}
