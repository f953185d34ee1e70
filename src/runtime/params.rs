//! The fixed parameter table for a breathing track.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::{duration_to_samples, FadeEnvelope};
use crate::error::{require_non_negative, require_positive, require_sample_rate, Result};
use crate::notes::{C1, G1};

/// Everything needed to render one track.
///
/// Durations are in seconds, frequencies in Hz, volumes are linear peak
/// amplitudes. `BreathParams::DEFAULT` is the shipped configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathParams {
    pub duration_in: f64,
    pub duration_out: f64,
    pub sample_rate: u32,
    pub envelope: FadeEnvelope,
    pub volume_tone: f32,
    pub volume_noise: f32,
    pub frequency_in: f64,
    pub frequency_out: f64,
    /// Target length of the whole track. Only whole cycles are rendered.
    pub track_duration: f64,
}

impl BreathParams {
    pub const DEFAULT: Self = Self {
        duration_in: 5.0,
        duration_out: 10.0,
        sample_rate: 44_100,
        envelope: FadeEnvelope {
            pause_start: 0.25,
            fade_in: 2.0,
            fade_out: 1.0,
            pause_end: 0.25,
        },
        volume_tone: 0.2,
        volume_noise: 0.5,
        frequency_in: G1 * 4.0,
        frequency_out: C1 * 4.0,
        track_duration: 10.0 * 60.0,
    };

    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_track_duration(mut self, seconds: f64) -> Self {
        self.track_duration = seconds;
        self
    }

    pub fn with_durations(mut self, duration_in: f64, duration_out: f64) -> Self {
        self.duration_in = duration_in;
        self.duration_out = duration_out;
        self
    }

    pub fn with_envelope(mut self, envelope: FadeEnvelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Check every scalar before any samples are generated.
    ///
    /// Envelope fit is checked later against actual segment lengths.
    pub fn validate(&self) -> Result<()> {
        require_sample_rate(self.sample_rate)?;
        require_positive("duration_in", self.duration_in)?;
        require_positive("duration_out", self.duration_out)?;
        require_positive("frequency_in", self.frequency_in)?;
        require_positive("frequency_out", self.frequency_out)?;
        require_non_negative("volume_tone", self.volume_tone as f64)?;
        require_non_negative("volume_noise", self.volume_noise as f64)?;
        require_positive("track_duration", self.track_duration)?;
        self.envelope.validate()
    }

    pub fn cycle_duration(&self) -> f64 {
        self.duration_in + self.duration_out
    }

    /// Whole cycles that fit in `track_duration`. The remainder is dropped.
    pub fn cycle_count(&self) -> usize {
        (self.track_duration / self.cycle_duration()) as usize
    }

    pub fn inbreath_len(&self) -> usize {
        duration_to_samples(self.duration_in, self.sample_rate)
    }

    pub fn outbreath_len(&self) -> usize {
        duration_to_samples(self.duration_out, self.sample_rate)
    }

    pub fn cycle_len(&self) -> usize {
        self.inbreath_len() + self.outbreath_len()
    }

    pub fn track_len(&self) -> usize {
        self.cycle_count() * self.cycle_len()
    }

    /// Output base name, e.g. `5_10`.
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.duration_in, self.duration_out)
    }
}

impl Default for BreathParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BreathError;
    use crate::notes::octave_up;

    #[test]
    fn default_tones_are_two_octaves_up() {
        let params = BreathParams::default();
        assert!((params.frequency_in - octave_up(G1, 2)).abs() < 1e-9);
        assert!((params.frequency_out - octave_up(C1, 2)).abs() < 1e-9);
    }

    #[test]
    fn ten_minute_track_has_forty_cycles() {
        let params = BreathParams::DEFAULT;
        assert_eq!(params.cycle_count(), 40);
        assert_eq!(params.inbreath_len(), 220_500);
        assert_eq!(params.outbreath_len(), 441_000);
        assert_eq!(params.track_len(), 26_460_000);
    }

    #[test]
    fn partial_cycle_is_dropped() {
        let params = BreathParams::DEFAULT.with_track_duration(44.0);
        assert_eq!(params.cycle_count(), 2);

        let params = BreathParams::DEFAULT.with_track_duration(14.0);
        assert_eq!(params.cycle_count(), 0);
        assert_eq!(params.track_len(), 0);
    }

    #[test]
    fn file_stem_uses_plain_numbers() {
        assert_eq!(BreathParams::DEFAULT.file_stem(), "5_10");
        let params = BreathParams::DEFAULT.with_durations(4.5, 6.0);
        assert_eq!(params.file_stem(), "4.5_6");
    }

    #[test]
    fn default_is_valid() {
        assert!(BreathParams::DEFAULT.validate().is_ok());
    }

    #[test]
    fn validate_catches_bad_scalars() {
        let mut params = BreathParams::DEFAULT;
        params.volume_noise = -1.0;
        assert!(matches!(
            params.validate(),
            Err(BreathError::InvalidParameter { name: "volume_noise", .. })
        ));

        let params = BreathParams::DEFAULT.with_sample_rate(0);
        assert!(matches!(
            params.validate(),
            Err(BreathError::InvalidParameter { name: "sample_rate", .. })
        ));

        let params = BreathParams::DEFAULT.with_durations(5.0, 0.0);
        assert!(matches!(
            params.validate(),
            Err(BreathError::InvalidParameter { name: "duration_out", .. })
        ));
    }
}
