//! Noisemix Synthesis Backend
//!
//! This crate assembles noisy-speech training triples: it samples clean
//! speech and noise recordings from file pools, mixes each pair at a sweep
//! of SNR levels, and persists (clean, noise, noisy) WAV triples until a
//! sample budget is met.
//!
//! # Overview
//!
//! - [`FilePool`] - indexes source files with glob matching and prefix
//!   exclusion
//! - [`ClipAssembler`] - builds fixed-length clips, concatenating short
//!   sources with silence gaps
//! - [`snr_mixer`] - rescales noise against clean for a target SNR and sums
//! - [`SynthSession`] - the main loop: sample, sweep, persist, account
//! - [`TripleWriter`] - deterministic output naming per (counter, SNR)
//! - [`AudioCodec`] / [`WavCodec`] - the file-format seam, fakeable in tests
//!
//! # Determinism
//!
//! Sampling runs on PCG32 streams derived from one base seed via BLAKE3, so
//! a seeded session reproduces the same corpus byte for byte. The mixer
//! itself is a pure function.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use noisemix_spec::{RunConfig, RunLayout, snr_sweep, DEFAULT_SECTION};
//! use noisemix_synth::{FilePool, SessionParams, SynthSession, WavCodec};
//!
//! let config = RunConfig::load(Path::new("noisyspeech_synthesizer.cfg"), DEFAULT_SECTION)?;
//! let layout = RunLayout::resolve(Path::new("."), &config);
//! layout.create()?;
//!
//! let clean_pool = FilePool::index(&layout.clean_dir, &config.audioformat, &[])?;
//! let noise_pool = FilePool::index(
//!     &layout.noise_dir,
//!     &config.audioformat,
//!     &config.excluded_prefixes(),
//! )?;
//!
//! let codec = WavCodec::new();
//! let mut session = SynthSession::new(
//!     &codec,
//!     &layout,
//!     clean_pool,
//!     noise_pool,
//!     SessionParams {
//!         snr_levels: snr_sweep(config.total_snrlevels),
//!         clip_samples: config.clip_samples(),
//!         silence_seconds: config.silence_length,
//!         target_samples: config.target_samples(1.0),
//!         seed: 42,
//!     },
//! );
//! let summary = session.run(|_| {})?;
//! println!("{} triples written", summary.triples_written);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod buffer;
pub mod codec;
pub mod error;
pub mod mixer;
pub mod output;
pub mod pool;
pub mod rng;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types at crate root
pub use assembler::ClipAssembler;
pub use buffer::AudioBuffer;
pub use codec::{AudioCodec, WavCodec};
pub use error::{SynthError, SynthResult};
pub use mixer::{snr_mixer, MixedTriple};
pub use output::{clean_file_name, format_snr_db, noise_file_name, noisy_file_name, TripleWriter};
pub use pool::FilePool;
pub use session::{Progress, SessionParams, SessionSummary, SynthSession};
