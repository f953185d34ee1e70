//! Error types shared by the generators, the composer and the sinks.

use thiserror::Error;

/// Failures raised while building a breathing track.
///
/// Every variant aborts the run. Nothing is retried.
#[derive(Debug, Error)]
pub enum BreathError {
    /// A duration, frequency, volume or sample rate is out of range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Pause and fade segments need more samples than the buffer holds.
    #[error(
        "envelope overflow at `{segment}`: segments need {required} samples, buffer has {available}"
    )]
    EnvelopeOverflow {
        segment: &'static str,
        required: usize,
        available: usize,
    },

    /// Filtered noise had no energy to normalise against.
    #[error("pink noise of {samples} samples has zero peak amplitude")]
    DegenerateNoise { samples: usize },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Failures from the component that persists the finished track.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to write wav file: {0}")]
    Wav(#[from] hound::Error),

    #[error("failed to encode mp3: {0}")]
    Mp3(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BreathError>;

/// Reject values that are not finite or not strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(BreathError::InvalidParameter { name, value })
    }
}

/// Reject values that are not finite or negative.
pub(crate) fn require_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BreathError::InvalidParameter { name, value })
    }
}

pub(crate) fn require_sample_rate(sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        Err(BreathError::InvalidParameter {
            name: "sample_rate",
            value: 0.0,
        })
    } else {
        Ok(())
    }
}
