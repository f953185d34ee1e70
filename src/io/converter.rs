/// Full-scale value for 16-bit PCM. Symmetric: -1.0 maps to -32767, not -32768.
pub const I16_FULL_SCALE: f32 = 32_767.0;

/// Quantize one sample to 16-bit PCM.
///
/// `trunc(clamp(sample, -1, 1) * 32767)`: truncation toward zero, saturating
/// outside [-1, 1]. NaN maps to 0.
#[inline]
pub fn quantize_i16(sample: f32) -> i16 {
    if sample.is_nan() {
        return 0;
    }
    (sample.clamp(-1.0, 1.0) * I16_FULL_SCALE) as i16
}

pub fn quantize_slice(samples: &[f32]) -> Vec<i16> {
    samples.iter().map(|&s| quantize_i16(s)).collect()
}
