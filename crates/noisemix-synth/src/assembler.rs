//! Fixed-length clip assembly from variable-length source files.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::buffer::AudioBuffer;
use crate::codec::AudioCodec;
use crate::error::{SynthError, SynthResult};
use crate::pool::FilePool;

/// Assembles fixed-length clips by concatenating pool files with silence
/// gaps in between.
#[derive(Debug, Clone, Copy)]
pub struct ClipAssembler {
    silence_seconds: f64,
}

impl ClipAssembler {
    /// Creates an assembler inserting `silence_seconds` of silence between
    /// concatenated source files.
    pub fn new(silence_seconds: f64) -> Self {
        Self { silence_seconds }
    }

    /// Produces a clip of exactly `length_in_samples` samples.
    ///
    /// Starts at a uniformly random pool index and, while the accumulated
    /// audio is not longer than the target, walks the pool in order
    /// (wrapping), appending a silence gap and then the next decoded file.
    /// The result is truncated to the target length and carries the sample
    /// rate of the first decoded file.
    ///
    /// The continuation test is `<=`: audio exactly as long as the target
    /// still pulls one more source file before truncation.
    ///
    /// A pool with a single short file keeps revisiting that file, padded
    /// with silence each round, so short pools can satisfy long requests.
    pub fn fetch_random_clip<C: AudioCodec>(
        &self,
        codec: &C,
        pool: &FilePool,
        rng: &mut Pcg32,
        length_in_samples: usize,
    ) -> SynthResult<AudioBuffer> {
        if pool.is_empty() {
            return Err(SynthError::EmptyPool);
        }

        let mut index = rng.gen_range(0..pool.len());
        let mut audio = codec.decode(pool.get(index))?;
        let gap_samples = (audio.sample_rate as f64 * self.silence_seconds) as usize;

        while audio.len() <= length_in_samples {
            index = (index + 1) % pool.len();
            let next = codec.decode(pool.get(index))?;
            audio.append_silence(gap_samples);
            audio.append(&next.samples);
        }

        audio.truncate(length_in_samples);
        Ok(audio)
    }
}
