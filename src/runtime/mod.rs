//! Cycle composition: from the parameter table to a finished track.
//!
//! # Example
//!
//! ```no_run
//! use breathwave::{io::WavSink, runtime::{run, BreathParams}};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! fn main() -> breathwave::Result<()> {
//!     let mut rng = StdRng::seed_from_u64(1);
//!     let mut sink = WavSink::new(".");
//!     run(&BreathParams::DEFAULT, &mut rng, &mut sink)?;
//!     Ok(())
//! }
//! ```

mod params;
mod track;

pub use params::BreathParams;
pub use track::{render_segment, render_track, run, BreathCycle, Track};
