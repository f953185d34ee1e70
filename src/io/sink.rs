//! The seam between rendering and persistence.

use crate::error::SinkError;

/// Receives a finished mono buffer and persists it under `name`.
///
/// `name` is a base name without extension; the sink picks the format.
pub trait Sink {
    fn write(&mut self, samples: &[f32], sample_rate: u32, name: &str) -> Result<(), SinkError>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, samples: &[f32], sample_rate: u32, name: &str) -> Result<(), SinkError> {
        (**self).write(samples, sample_rate, name)
    }
}

/// Write to both sinks in order, stopping at the first failure.
///
/// `(WavSink, Mp3Sink)` produces `<name>.wav` and `<name>.mp3` from one run.
impl<A: Sink, B: Sink> Sink for (A, B) {
    fn write(&mut self, samples: &[f32], sample_rate: u32, name: &str) -> Result<(), SinkError> {
        self.0.write(samples, sample_rate, name)?;
        self.1.write(samples, sample_rate, name)
    }
}

/// One call recorded by [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct SinkWrite {
    pub name: String,
    pub sample_rate: u32,
    pub samples: Vec<f32>,
}

/// Keeps every write in memory (tests, previews).
#[derive(Debug, Default)]
pub struct MemorySink {
    pub writes: Vec<SinkWrite>,
}

impl Sink for MemorySink {
    fn write(&mut self, samples: &[f32], sample_rate: u32, name: &str) -> Result<(), SinkError> {
        self.writes.push(SinkWrite {
            name: name.to_string(),
            sample_rate,
            samples: samples.to_vec(),
        });
        Ok(())
    }
}
