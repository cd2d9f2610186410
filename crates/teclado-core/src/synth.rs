//! Per-symbol waveform generation.
//!
//! Each tone symbol becomes the sum of two sine waves, averaged to avoid
//! clipping at points of constructive interference, scaled to the 16-bit
//! range, and attenuated by a fixed 50% headroom factor. Quantization
//! truncates toward zero (`as i16`), applied identically to every sample.

use crate::keypad::FreqPair;
use core::f32::consts::TAU;
use libm::sinf;

/// Fixed output attenuation applied after scaling to 16-bit full scale.
///
/// Not configurable: together with the two-tone average it guarantees
/// every sample stays within `i16::MAX * 0.5`.
pub const HEADROOM: f32 = 0.5;

const FULL_SCALE: f32 = i16::MAX as f32;

/// Number of samples in a segment of `duration_secs` at `sample_rate`.
///
/// Samples are taken on the half-open interval `[0, duration_secs)`, so
/// the count is the floor of `sample_rate * duration_secs`. The product
/// is computed in f64 so a nominally integral result does not land just
/// below the integer.
pub fn sample_count(sample_rate: u32, duration_secs: f32) -> usize {
    (f64::from(sample_rate) * f64::from(duration_secs)).floor() as usize
}

/// Synthesize one dual-tone segment as 16-bit signed samples.
pub fn synthesize(pair: FreqPair, duration_secs: f32, sample_rate: u32) -> Vec<i16> {
    let count = sample_count(sample_rate, duration_secs);
    let rate = sample_rate as f32;
    (0..count)
        .map(|i| {
            let t = i as f32 / rate;
            let raw = sinf(TAU * pair.low_hz * t) + sinf(TAU * pair.high_hz * t);
            (raw / 2.0 * FULL_SCALE * HEADROOM) as i16
        })
        .collect()
}

/// A zero-filled segment of `duration_secs` at `sample_rate`.
pub fn silence(duration_secs: f32, sample_rate: u32) -> Vec<i16> {
    vec![0; sample_count(sample_rate, duration_secs)]
}
