//! breathwave - render the breathing-guidance track
//!
//! Run with: cargo run --release
//!
//! Writes `<in>_<out>.wav` and `<in>_<out>.mp3` (e.g. `5_10.wav`, `5_10.mp3`)
//! to the current directory.

use breathwave::{
    io::{Mp3Sink, WavSink},
    run, BreathParams,
};
use log::LevelFilter;
use rand::{rngs::StdRng, SeedableRng};
use simple_logger::SimpleLogger;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let params = BreathParams::default();
    let mut rng = StdRng::from_entropy();
    let mut sink = (WavSink::new("."), Mp3Sink::new("."));

    run(&params, &mut rng, &mut sink)?;
    Ok(())
}
