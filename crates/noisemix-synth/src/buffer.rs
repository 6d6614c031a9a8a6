//! Mono audio buffer type.

/// A mono audio clip: f64 samples in [-1.0, 1.0] plus a sample rate.
///
/// All buffers combined in one mixing operation share the same sample rate;
/// the rate travels with the samples so the invariant can be checked at the
/// seams instead of being assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Audio samples.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Creates a buffer from samples and a rate.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Creates a silent buffer of the given length.
    pub fn silence(num_samples: usize, sample_rate: u32) -> Self {
        Self {
            samples: vec![0.0; num_samples],
            sample_rate,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Buffer duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Appends `num_samples` of silence.
    pub fn append_silence(&mut self, num_samples: usize) {
        self.samples
            .extend(std::iter::repeat(0.0).take(num_samples));
    }

    /// Appends the samples of another buffer.
    pub fn append(&mut self, other: &[f64]) {
        self.samples.extend_from_slice(other);
    }

    /// Truncates to at most `num_samples` samples.
    pub fn truncate(&mut self, num_samples: usize) {
        self.samples.truncate(num_samples);
    }
}
