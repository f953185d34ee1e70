//! 16-bit mono WAV output via `hound`.

use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use crate::error::SinkError;
use crate::io::{converter::quantize_i16, Sink};

/// Writes `<dir>/<name>.wav` as 16-bit signed mono PCM.
#[derive(Debug, Clone)]
pub struct WavSink {
    dir: PathBuf,
}

impl WavSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn spec(sample_rate: u32) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.wav"))
    }
}

fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), SinkError> {
    let mut writer = WavWriter::create(path, WavSink::spec(sample_rate))?;
    for &sample in samples {
        writer.write_sample(quantize_i16(sample))?;
    }
    writer.finalize()?;
    Ok(())
}

impl Sink for WavSink {
    fn write(&mut self, samples: &[f32], sample_rate: u32, name: &str) -> Result<(), SinkError> {
        let path = self.path_for(name);
        debug!("writing {} samples to {}", samples.len(), path.display());
        write_wav(&path, samples, sample_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_appends_extension() {
        let sink = WavSink::new("/tmp/out");
        assert_eq!(sink.path_for("5_10"), PathBuf::from("/tmp/out/5_10.wav"));
    }

    #[test]
    fn spec_is_mono_16_bit() {
        let spec = WavSink::spec(44_100);
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_rate, 44_100);
        assert_eq!(spec.sample_format, SampleFormat::Int);
    }

    #[test]
    fn missing_directory_is_a_sink_error() {
        let mut sink = WavSink::new("/nonexistent/breathwave/dir");
        let err = sink.write(&[0.0; 4], 8_000, "x").unwrap_err();
        assert!(matches!(err, SinkError::Wav(_) | SinkError::Io(_)));
    }
}
