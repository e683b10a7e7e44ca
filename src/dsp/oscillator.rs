//! Harmonic sine-stack tone generator.
//!
//! A lone sine wave sounds thin and clinical. Stacking a couple of quiet
//! upper harmonics on the fundamental gives each note a warmer, reedier
//! timbre while keeping the waveform cheap to evaluate and fully
//! deterministic.

use std::f32::consts::TAU;

/// Relative weights of the harmonic series, fundamental first.
///
/// The second and third harmonics sit well below the fundamental so the
/// perceived pitch stays on the fundamental frequency.
pub const HARMONIC_WEIGHTS: [f32; 3] = [1.0, 0.3, 0.1];

/// Evaluate the harmonic stack for `frequency` Hz at elapsed time `t`.
///
/// The peak amplitude is the sum of the weights (1.4), so callers are
/// expected to attenuate before mixing.
#[inline]
pub fn harmonic_stack(frequency: f32, t: f32) -> f32 {
    let mut sample = 0.0;
    for (k, &weight) in HARMONIC_WEIGHTS.iter().enumerate() {
        let harmonic = (k + 1) as f32;
        sample += weight * (TAU * frequency * harmonic * t).sin();
    }
    sample
}

/// Fill `out` with a tone at `frequency` Hz, sample `i` taken at elapsed
/// time `i / sample_rate`.
pub fn render(out: &mut [f32], frequency: f32, sample_rate: f32) {
    for (i, sample) in out.iter_mut().enumerate() {
        *sample = harmonic_stack(frequency, i as f32 / sample_rate);
    }
}
