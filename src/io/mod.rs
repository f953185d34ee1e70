// Purpose - external interfaces, format conversions

pub mod converter;
pub mod mp3;
pub mod sink;
pub mod wav;

pub use converter::{quantize_i16, quantize_slice};
pub use mp3::Mp3Sink;
pub use sink::{MemorySink, Sink, SinkWrite};
pub use wav::WavSink;
