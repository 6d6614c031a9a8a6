//! Audio decoding and encoding.
//!
//! The synthesis pipeline only talks to audio files through the
//! [`AudioCodec`] trait, so tests can substitute an in-memory fake without
//! performing real file I/O. [`WavCodec`] is the production implementation.

use std::path::Path;

use crate::buffer::AudioBuffer;
use crate::error::{SynthError, SynthResult};

/// File-format seam between the pipeline and the audio files on disk.
pub trait AudioCodec {
    /// Decodes the file at `path` into a mono buffer.
    fn decode(&self, path: &Path) -> SynthResult<AudioBuffer>;

    /// Encodes `buffer` to the file at `path`, without level normalization.
    fn encode(&self, path: &Path, buffer: &AudioBuffer) -> SynthResult<()>;
}

/// WAV codec backed by hound.
///
/// Decoding accepts 8/16/24/32-bit integer PCM and averages multi-channel
/// sources down to mono. Encoding always writes mono 16-bit PCM at the
/// buffer's sample rate, clipping samples to [-1.0, 1.0].
#[derive(Debug, Default, Clone, Copy)]
pub struct WavCodec;

impl WavCodec {
    /// Creates a WAV codec.
    pub fn new() -> Self {
        Self
    }
}

impl AudioCodec for WavCodec {
    fn decode(&self, path: &Path) -> SynthResult<AudioBuffer> {
        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        if spec.sample_format != hound::SampleFormat::Int {
            return Err(SynthError::UnsupportedFormat {
                path: path.to_path_buf(),
                message: format!(
                    "only integer PCM is supported, got {:?}",
                    spec.sample_format
                ),
            });
        }

        let samples: Vec<i32> = match spec.bits_per_sample {
            8 | 16 | 24 | 32 => reader
                .samples::<i32>()
                .collect::<Result<Vec<i32>, _>>()?,
            bits => {
                return Err(SynthError::UnsupportedFormat {
                    path: path.to_path_buf(),
                    message: format!("{} bits per sample (supported: 8, 16, 24, 32)", bits),
                });
            }
        };

        let mono = downmix_to_mono(&samples, spec.channels, spec.bits_per_sample);
        Ok(AudioBuffer::new(mono, spec.sample_rate))
    }

    fn encode(&self, path: &Path, buffer: &AudioBuffer) -> SynthResult<()> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: buffer.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path, spec)?;
        for &sample in &buffer.samples {
            let clipped = sample.clamp(-1.0, 1.0);
            writer.write_sample((clipped * 32767.0).round() as i16)?;
        }
        writer.finalize()?;
        Ok(())
    }
}

/// Averages interleaved multi-channel samples to mono, normalized to
/// [-1.0, 1.0] by bit depth.
fn downmix_to_mono(samples: &[i32], channels: u16, bits_per_sample: u16) -> Vec<f64> {
    if channels <= 1 {
        return samples
            .iter()
            .map(|&s| normalize_sample(s, bits_per_sample))
            .collect();
    }

    let channels = channels as usize;
    let frame_count = samples.len() / channels;
    let mut mono = Vec::with_capacity(frame_count);

    for frame_idx in 0..frame_count {
        let mut sum = 0i64;
        for ch in 0..channels {
            sum += samples[frame_idx * channels + ch] as i64;
        }
        let avg = (sum / channels as i64) as i32;
        mono.push(normalize_sample(avg, bits_per_sample));
    }

    mono
}

fn normalize_sample(sample: i32, bits_per_sample: u16) -> f64 {
    let max_value = match bits_per_sample {
        8 => 128.0,
        16 => 32768.0,
        24 => 8388608.0,
        _ => 2147483648.0,
    };

    sample as f64 / max_value
}
