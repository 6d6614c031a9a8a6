//! Per-run directory layout.
//!
//! A run touches five directories: the two input pools (clean speech and
//! noise) and the three output directories for the written triples. All of
//! them are created up front so the synthesis loop never has to care.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::RunConfig;

/// Output directory for the mixed noisy-speech files.
pub const NOISY_OUT_DIR: &str = "NoisySpeech_training";

/// Output directory for the clean reference files.
pub const CLEAN_OUT_DIR: &str = "CleanSpeech_training";

/// Output directory for the rescaled noise files.
pub const NOISE_OUT_DIR: &str = "Noise_training";

/// Default clean-speech input subdirectory under the run root.
pub const DEFAULT_CLEAN_IN_DIR: &str = "clean_train";

/// Default noise input subdirectory under the run root.
pub const DEFAULT_NOISE_IN_DIR: &str = "noise_train";

/// Resolved directories for one synthesis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunLayout {
    /// Clean speech input pool.
    pub clean_dir: PathBuf,
    /// Noise input pool.
    pub noise_dir: PathBuf,
    /// Output directory for noisy mixes.
    pub noisy_out_dir: PathBuf,
    /// Output directory for clean references.
    pub clean_out_dir: PathBuf,
    /// Output directory for rescaled noise.
    pub noise_out_dir: PathBuf,
}

impl RunLayout {
    /// Resolves all five directories against the run root.
    pub fn resolve(root: &Path, config: &RunConfig) -> Self {
        Self {
            clean_dir: config.resolve_speech_dir(root),
            noise_dir: config.resolve_noise_dir(root),
            noisy_out_dir: root.join(NOISY_OUT_DIR),
            clean_out_dir: root.join(CLEAN_OUT_DIR),
            noise_out_dir: root.join(NOISE_OUT_DIR),
        }
    }

    /// Creates every directory in the layout, parents included.
    pub fn create(&self) -> io::Result<()> {
        for dir in self.all() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn all(&self) -> [&Path; 5] {
        [
            &self.clean_dir,
            &self.noise_dir,
            &self.noisy_out_dir,
            &self.clean_out_dir,
            &self.noise_out_dir,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NONE_SENTINEL;
    use pretty_assertions::assert_eq;

    fn sample_config() -> RunConfig {
        RunConfig {
            speech_dir: NONE_SENTINEL.to_string(),
            noise_dir: NONE_SENTINEL.to_string(),
            audioformat: "*.wav".to_string(),
            noise_types_excluded: NONE_SENTINEL.to_string(),
            sampling_rate: 16000,
            audio_length: 10.0,
            silence_length: 0.2,
            total_snrlevels: 3,
        }
    }

    #[test]
    fn test_resolve_uses_defaults_for_sentinel_dirs() {
        let layout = RunLayout::resolve(Path::new("/run"), &sample_config());
        assert_eq!(layout.clean_dir, PathBuf::from("/run/clean_train"));
        assert_eq!(layout.noise_dir, PathBuf::from("/run/noise_train"));
        assert_eq!(layout.noisy_out_dir, PathBuf::from("/run/NoisySpeech_training"));
        assert_eq!(layout.clean_out_dir, PathBuf::from("/run/CleanSpeech_training"));
        assert_eq!(layout.noise_out_dir, PathBuf::from("/run/Noise_training"));
    }

    #[test]
    fn test_create_makes_all_five_directories() {
        let root = tempfile::tempdir().unwrap();
        let layout = RunLayout::resolve(root.path(), &sample_config());
        layout.create().unwrap();

        for dir in layout.all() {
            assert!(dir.is_dir(), "missing directory: {}", dir.display());
        }
    }

    #[test]
    fn test_create_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let layout = RunLayout::resolve(root.path(), &sample_config());
        layout.create().unwrap();
        layout.create().unwrap();
    }
}
