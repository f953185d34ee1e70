//! Compressed rendition via LAME.
//!
//! Encodes the same quantized 16-bit samples the WAV sink writes, so the two
//! files carry identical source data.

use std::path::PathBuf;

use log::debug;
use mp3lame_encoder::{max_required_buffer_size, Bitrate, Builder, FlushNoGap, MonoPcm, Quality};

use crate::error::SinkError;
use crate::io::{converter::quantize_slice, Sink};

/// Room for the encoder's final frames on flush.
const FLUSH_RESERVE: usize = 7_200;

/// Writes `<dir>/<name>.mp3` as mono MP3.
#[derive(Debug, Clone)]
pub struct Mp3Sink {
    dir: PathBuf,
}

impl Mp3Sink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.mp3"))
    }

    /// Encode `samples` to an in-memory MP3 stream.
    pub fn encode(&self, samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, SinkError> {
        let mut builder =
            Builder::new().ok_or_else(|| SinkError::Mp3("could not allocate encoder".into()))?;
        builder.set_num_channels(1).map_err(mp3_err)?;
        builder.set_sample_rate(sample_rate).map_err(mp3_err)?;
        builder.set_brate(Bitrate::Kbps128).map_err(mp3_err)?;
        builder.set_quality(Quality::Good).map_err(mp3_err)?;
        let mut encoder = builder.build().map_err(mp3_err)?;

        let pcm = quantize_slice(samples);
        let mut out = Vec::with_capacity(max_required_buffer_size(pcm.len()));
        encoder
            .encode_to_vec(MonoPcm(&pcm), &mut out)
            .map_err(mp3_err)?;

        out.reserve(FLUSH_RESERVE);
        encoder.flush_to_vec::<FlushNoGap>(&mut out).map_err(mp3_err)?;
        Ok(out)
    }
}

fn mp3_err<E: std::fmt::Debug>(err: E) -> SinkError {
    SinkError::Mp3(format!("{err:?}"))
}

impl Sink for Mp3Sink {
    fn write(&mut self, samples: &[f32], sample_rate: u32, name: &str) -> Result<(), SinkError> {
        let path = self.path_for(name);
        let bytes = self.encode(samples, sample_rate)?;
        debug!("writing {} mp3 bytes to {}", bytes.len(), path.display());
        std::fs::write(&path, bytes)?;
        Ok(())
    }
}
