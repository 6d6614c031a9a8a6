//! Noisemix Run Configuration Library
//!
//! This crate provides the configuration, SNR planning, and directory layout
//! types shared by the synthesis backend and the CLI.
//!
//! A synthesis run is described by one named section of a JSON configuration
//! file ([`RunConfig`]), resolved into concrete directories ([`RunLayout`])
//! and an SNR sweep ([`snr_sweep`]).
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use noisemix_spec::{RunConfig, RunLayout, snr_sweep, DEFAULT_SECTION};
//!
//! let config = RunConfig::load(Path::new("noisyspeech_synthesizer.cfg"), DEFAULT_SECTION)?;
//! let layout = RunLayout::resolve(Path::new("."), &config);
//! layout.create()?;
//!
//! let sweep = snr_sweep(config.total_snrlevels);
//! assert_eq!(sweep.first(), Some(&10.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod snr;

// Re-export commonly used types at the crate root
pub use config::{RunConfig, DEFAULT_CONFIG_FILE, DEFAULT_SECTION, NONE_SENTINEL};
pub use error::{SpecError, SpecResult};
pub use layout::{
    RunLayout, CLEAN_OUT_DIR, DEFAULT_CLEAN_IN_DIR, DEFAULT_NOISE_IN_DIR, NOISE_OUT_DIR,
    NOISY_OUT_DIR,
};
pub use snr::{snr_sweep, SNR_MAX_DB, SNR_MIN_DB};
