//! Run configuration for a synthesis run.
//!
//! The configuration file is a JSON object whose top-level keys are section
//! names; one section describes one synthesis profile. The legacy sentinel
//! value `"None"` is accepted for optional directory and exclusion fields.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "noisyspeech_synthesizer.cfg";

/// Default configuration section name.
pub const DEFAULT_SECTION: &str = "noisy_speech";

/// Sentinel meaning "field not set, use the default".
pub const NONE_SENTINEL: &str = "None";

/// Configuration for one synthesis run.
///
/// Durations are in seconds, the sampling rate in Hz. `speech_dir`,
/// `noise_dir`, and `noise_types_excluded` accept the literal `"None"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Directory holding clean speech recordings, or `"None"` for the
    /// default `clean_train` subdirectory under the run root.
    pub speech_dir: String,

    /// Directory holding noise recordings, or `"None"` for the default
    /// `noise_train` subdirectory under the run root.
    pub noise_dir: String,

    /// Glob pattern selecting source audio files, e.g. `*.wav`.
    pub audioformat: String,

    /// Comma-separated file-name prefixes to exclude from the noise pool,
    /// or `"None"` to disable filtering.
    pub noise_types_excluded: String,

    /// Sampling rate in Hz shared by all source recordings.
    pub sampling_rate: u32,

    /// Target clip length in seconds, before the SNR sweep.
    pub audio_length: f64,

    /// Silence gap in seconds inserted between concatenated source files.
    pub silence_length: f64,

    /// Number of evenly spaced SNR points between 10 and 40 dB.
    pub total_snrlevels: usize,
}

impl RunConfig {
    /// Loads and validates the named section from a configuration file.
    ///
    /// # Errors
    /// Returns [`SpecError::ConfigNotFound`] when the file is missing,
    /// [`SpecError::SectionNotFound`] when the section is absent, and
    /// [`SpecError::InvalidValue`] when a field fails validation.
    pub fn load(path: &Path, section: &str) -> SpecResult<Self> {
        if !path.exists() {
            return Err(SpecError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let text = fs::read_to_string(path)?;
        let mut sections: BTreeMap<String, serde_json::Value> = serde_json::from_str(&text)?;
        let value = sections
            .remove(section)
            .ok_or_else(|| SpecError::SectionNotFound {
                section: section.to_string(),
                path: path.to_path_buf(),
            })?;

        let config: RunConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks numeric fields for usable ranges.
    pub fn validate(&self) -> SpecResult<()> {
        if self.sampling_rate == 0 {
            return Err(SpecError::invalid_value("sampling_rate", "must be positive"));
        }
        if self.audio_length <= 0.0 {
            return Err(SpecError::invalid_value(
                "audio_length",
                "must be greater than zero seconds",
            ));
        }
        if self.silence_length < 0.0 {
            return Err(SpecError::invalid_value(
                "silence_length",
                "must not be negative",
            ));
        }
        if self.total_snrlevels == 0 {
            return Err(SpecError::invalid_value(
                "total_snrlevels",
                "at least one SNR level is required",
            ));
        }
        if self.audioformat.is_empty() {
            return Err(SpecError::invalid_value("audioformat", "must not be empty"));
        }
        Ok(())
    }

    /// Resolves the clean-speech input directory against the run root.
    pub fn resolve_speech_dir(&self, root: &Path) -> PathBuf {
        resolve_dir(&self.speech_dir, root, crate::layout::DEFAULT_CLEAN_IN_DIR)
    }

    /// Resolves the noise input directory against the run root.
    pub fn resolve_noise_dir(&self, root: &Path) -> PathBuf {
        resolve_dir(&self.noise_dir, root, crate::layout::DEFAULT_NOISE_IN_DIR)
    }

    /// Returns the configured exclusion prefixes, empty when disabled.
    pub fn excluded_prefixes(&self) -> Vec<String> {
        if self.noise_types_excluded == NONE_SENTINEL {
            return Vec::new();
        }
        self.noise_types_excluded
            .split(',')
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Target clip length in samples.
    pub fn clip_samples(&self) -> usize {
        (self.audio_length * self.sampling_rate as f64) as usize
    }

    /// Silence gap length in samples at the configured sampling rate.
    pub fn silence_samples(&self) -> usize {
        (self.silence_length * self.sampling_rate as f64) as usize
    }

    /// Total sample budget for a run of `total_hours` hours.
    pub fn target_samples(&self, total_hours: f64) -> u64 {
        (total_hours * 3600.0 * self.sampling_rate as f64) as u64
    }
}

fn resolve_dir(configured: &str, root: &Path, default_subdir: &str) -> PathBuf {
    if configured == NONE_SENTINEL {
        root.join(default_subdir)
    } else {
        PathBuf::from(configured)
    }
}
