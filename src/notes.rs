/*
Pitch Constants
===============

Frequencies (Hz) of the lowest-octave notes used for the breathing tones.
Equal temperament, A4 = 440 Hz. Octave 1 sits below most speakers' useful
range, so the tones are raised two octaves (×4) before use.

    G1 × 2² ≈ 196.0 Hz  (G3, inbreath)
    C1 × 2² ≈ 130.8 Hz  (C3, outbreath)
*/

pub const C1: f64 = 32.7032;
/// Part of the octave-1 table; no default tone uses it.
pub const D1: f64 = 36.7081;
/// Part of the octave-1 table; no default tone uses it.
pub const E1: f64 = 41.2034;
pub const G1: f64 = 48.9994;

/// Shift a frequency up by whole octaves.
#[inline]
pub fn octave_up(frequency: f64, octaves: u32) -> f64 {
    frequency * 2.0_f64.powi(octaves as i32)
}
