//! SNR mixing of a clean/noise clip pair.

use crate::buffer::AudioBuffer;
use crate::error::{SynthError, SynthResult};

/// The three buffers produced for one (clip, SNR level) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct MixedTriple {
    /// Clean signal, unscaled.
    pub clean: AudioBuffer,
    /// Noise rescaled to hit the target SNR against the clean signal.
    pub noise: AudioBuffer,
    /// Elementwise sum of the two.
    pub noisy: AudioBuffer,
}

/// Mixes `clean` and `noise` at the target SNR.
///
/// The noise is rescaled by `rms(clean) / (10^(snr/20) * rms(noise))` so the
/// RMS power ratio of clean to rescaled noise equals `snr_db`; the noisy
/// signal is the elementwise sum. Pure and deterministic: the same inputs
/// always produce the same triple. All three outputs have the length and
/// sample rate of the inputs.
///
/// # Errors
/// [`SynthError::LengthMismatch`] or [`SynthError::RateMismatch`] when the
/// buffers disagree, and [`SynthError::SilentNoise`] when the noise carries
/// no energy (no scale factor can reach the requested ratio).
pub fn snr_mixer(clean: &AudioBuffer, noise: &AudioBuffer, snr_db: f64) -> SynthResult<MixedTriple> {
    if clean.len() != noise.len() {
        return Err(SynthError::LengthMismatch {
            clean: clean.len(),
            noise: noise.len(),
        });
    }
    if clean.sample_rate != noise.sample_rate {
        return Err(SynthError::RateMismatch {
            clean: clean.sample_rate,
            noise: noise.sample_rate,
        });
    }

    let rms_noise = rms(&noise.samples);
    if rms_noise == 0.0 {
        return Err(SynthError::SilentNoise);
    }

    let scalar = rms(&clean.samples) / (10f64.powf(snr_db / 20.0) * rms_noise);

    let scaled_noise: Vec<f64> = noise.samples.iter().map(|s| s * scalar).collect();
    let noisy: Vec<f64> = clean
        .samples
        .iter()
        .zip(scaled_noise.iter())
        .map(|(c, n)| c + n)
        .collect();

    Ok(MixedTriple {
        clean: clean.clone(),
        noise: AudioBuffer::new(scaled_noise, noise.sample_rate),
        noisy: AudioBuffer::new(noisy, clean.sample_rate),
    })
}

/// Root mean square of the samples.
fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mean_square = samples.iter().map(|s| s * s).sum::<f64>() / samples.len() as f64;
    mean_square.sqrt()
}
