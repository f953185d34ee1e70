//! Offline synthesis of breathing-guidance audio.
//!
//! A track is built from alternating inbreath and outbreath segments, each
//! made of pink noise plus a pure tone and shaped by a fade envelope. The
//! finished sample buffer is handed to a [`io::Sink`] for persistence.

pub mod dsp; // Noise, tone, envelope and filter primitives
pub mod error;
pub mod io;
pub mod notes;
pub mod runtime; // Cycle composition and the fixed parameter table

pub use error::{BreathError, Result, SinkError};
pub use runtime::{render_track, run, BreathCycle, BreathParams, Track};
