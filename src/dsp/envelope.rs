use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::duration_to_samples;
use crate::error::{require_non_negative, require_sample_rate, BreathError, Result};

/*
Fade Envelope
=============

A fixed gain curve laid over a whole segment. Unlike a gated ADSR it knows
the segment length up front, so it is rendered once and multiplied in.

Vocabulary
----------

  pause       Leading or trailing silence (gain 0).

  fade        Linear ramp between 0 and 1. Both endpoints are included, so a
              fade of n samples steps by 1/(n-1).

  plateau     Unity gain between the fades. Its length is whatever remains
              after the other four segments.


The Shape
---------

  Gain
    1.0 ┐          ________________
        │         ╱                ╲
        │        ╱                  ╲
    0.0 └───────╱────────────────────╲───────→ Time
        pause   fade    plateau     fade  pause
        start   in                  out   end

Segment lengths are each truncated to whole samples independently:

    plateau = total − pause_start − fade_in − fade_out − pause_end

A negative plateau means the segments do not fit. That is an
`EnvelopeOverflow` naming the first segment (in time order, plateau
skipped) at which the running total passed the buffer length.

The requested seconds are checked as well as the truncated counts:
0.29 s at 10 Hz truncates to 2 samples, but four segments asking for
1.04 s still do not fit a 1.0 s buffer.
*/

/// Slack for float rounding when summing segment seconds.
const SECONDS_TOLERANCE: f64 = 1e-9;

/// Pause and fade durations in seconds.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEnvelope {
    pub pause_start: f64,
    pub fade_in: f64,
    pub fade_out: f64,
    pub pause_end: f64,
}

/// Segment lengths in samples for one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeLayout {
    pub pause_start: usize,
    pub fade_in: usize,
    pub plateau: usize,
    pub fade_out: usize,
    pub pause_end: usize,
}

impl EnvelopeLayout {
    pub fn len(&self) -> usize {
        self.pause_start + self.fade_in + self.plateau + self.fade_out + self.pause_end
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gain values, one per sample.
    pub fn gain_curve(&self) -> Vec<f32> {
        let mut gain = Vec::with_capacity(self.len());
        gain.extend(std::iter::repeat(0.0).take(self.pause_start));
        gain.extend(linspace(0.0, 1.0, self.fade_in));
        gain.extend(std::iter::repeat(1.0).take(self.plateau));
        gain.extend(linspace(1.0, 0.0, self.fade_out));
        gain.extend(std::iter::repeat(0.0).take(self.pause_end));
        gain
    }
}

/// `n` evenly spaced values from `start` to `end`, both inclusive.
fn linspace(start: f32, end: f32, n: usize) -> impl Iterator<Item = f32> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f32
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            end
        } else {
            start + step * i as f32
        }
    })
}

impl FadeEnvelope {
    pub const NONE: Self = Self {
        pause_start: 0.0,
        fade_in: 0.0,
        fade_out: 0.0,
        pause_end: 0.0,
    };

    pub fn new(pause_start: f64, fade_in: f64, fade_out: f64, pause_end: f64) -> Self {
        Self {
            pause_start,
            fade_in,
            fade_out,
            pause_end,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_non_negative("pause_start", self.pause_start)?;
        require_non_negative("fade_in", self.fade_in)?;
        require_non_negative("fade_out", self.fade_out)?;
        require_non_negative("pause_end", self.pause_end)
    }

    /// Fit the segments into a buffer of `total` samples.
    pub fn layout(&self, total: usize, sample_rate: u32) -> Result<EnvelopeLayout> {
        self.validate()?;
        require_sample_rate(sample_rate)?;

        let segments = [
            ("pause_start", self.pause_start),
            ("fade_in", self.fade_in),
            ("fade_out", self.fade_out),
            ("pause_end", self.pause_end),
        ]
        .map(|(segment, secs)| (segment, secs, duration_to_samples(secs, sample_rate)));

        let rate = sample_rate as f64;
        let available_secs = total as f64 / rate;
        let mut used = 0usize;
        let mut used_secs = 0.0f64;
        for (segment, secs, len) in segments {
            used = used.saturating_add(len);
            used_secs += secs;
            if used > total || used_secs > available_secs + SECONDS_TOLERANCE {
                return Err(BreathError::EnvelopeOverflow {
                    segment,
                    required: used.max((used_secs * rate).ceil() as usize),
                    available: total,
                });
            }
        }

        Ok(EnvelopeLayout {
            pause_start: segments[0].2,
            fade_in: segments[1].2,
            plateau: total - used,
            fade_out: segments[2].2,
            pause_end: segments[3].2,
        })
    }

    /// Render the gain curve for a buffer of `total` samples.
    pub fn render(&self, total: usize, sample_rate: u32) -> Result<Vec<f32>> {
        Ok(self.layout(total, sample_rate)?.gain_curve())
    }

    /// Multiply the envelope into `buffer`, consuming and returning it.
    pub fn apply(&self, mut buffer: Vec<f32>, sample_rate: u32) -> Result<Vec<f32>> {
        let layout = self.layout(buffer.len(), sample_rate)?;
        debug!("envelope over {} samples: {:?}", buffer.len(), layout);

        for (sample, g) in buffer.iter_mut().zip(layout.gain_curve()) {
            *sample *= g;
        }
        Ok(buffer)
    }
}

/// Apply pause and fade shaping to `buffer` (see [`FadeEnvelope`]).
pub fn apply_fading(
    buffer: Vec<f32>,
    pause_start: f64,
    pause_end: f64,
    fade_in: f64,
    fade_out: f64,
    sample_rate: u32,
) -> Result<Vec<f32>> {
    FadeEnvelope::new(pause_start, fade_in, fade_out, pause_end).apply(buffer, sample_rate)
}
