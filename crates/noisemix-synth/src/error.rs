//! Error types for the synthesis backend.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while assembling and mixing the corpus.
#[derive(Debug, Error)]
pub enum SynthError {
    /// A source pool matched no files after filtering.
    #[error("no audio files found in {} matching {pattern}", dir.display())]
    NoFilesFound {
        /// Directory that was scanned.
        dir: PathBuf,
        /// Glob pattern applied.
        pattern: String,
    },

    /// A clip was requested from an empty pool.
    #[error("file pool is empty")]
    EmptyPool,

    /// A session was started with no SNR levels to sweep.
    #[error("SNR sweep is empty")]
    EmptySweep,

    /// A source file uses a WAV encoding the codec does not handle.
    #[error("unsupported audio format in {}: {message}", path.display())]
    UnsupportedFormat {
        /// Offending file.
        path: PathBuf,
        /// What was unsupported about it.
        message: String,
    },

    /// The noise clip carries no energy, so no SNR scaling exists.
    #[error("noise clip is silent, cannot scale to a target SNR")]
    SilentNoise,

    /// Clean and noise buffers passed to the mixer differ in length.
    #[error("clean and noise buffers differ in length ({clean} vs {noise} samples)")]
    LengthMismatch {
        /// Clean buffer length in samples.
        clean: usize,
        /// Noise buffer length in samples.
        noise: usize,
    },

    /// Clean and noise buffers passed to the mixer differ in sample rate.
    #[error("clean and noise buffers differ in sample rate ({clean} vs {noise} Hz)")]
    RateMismatch {
        /// Clean buffer sample rate.
        clean: u32,
        /// Noise buffer sample rate.
        noise: u32,
    },

    /// Wrapper around errors produced by the WAV codec library.
    #[error(transparent)]
    Wav(#[from] hound::Error),

    /// The configured audio-format glob pattern is malformed.
    #[error("invalid audio format pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A globbed path could not be read.
    #[error(transparent)]
    Glob(#[from] glob::GlobError),

    /// Wrapper around IO errors encountered while reading or writing files.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
