//! Deterministic output naming and persistence.
//!
//! Each (file counter, SNR level) combination produces three files:
//!
//! - `NoisySpeech_training/noisy{n}_SNRdb_{snr}_clnsp{n}.wav`
//! - `CleanSpeech_training/clnsp{n}.wav`
//! - `Noise_training/noisy{n}_SNRdb_{snr}.wav`
//!
//! The noisy name references the paired clean counter, so a training loader
//! can pair files without a manifest. Counters increase strictly per outer
//! iteration, so no two (counter, SNR) pairs collide within one run.

use std::path::PathBuf;

use noisemix_spec::RunLayout;

use crate::codec::AudioCodec;
use crate::error::SynthResult;
use crate::mixer::MixedTriple;

/// Renders an SNR level for use in a filename.
///
/// Shortest decimal representation that round-trips, with at least one
/// decimal place: `10.0`, `17.5`, `23.333333333333332`.
pub fn format_snr_db(snr_db: f64) -> String {
    format!("{:?}", snr_db)
}

/// Noisy-mix filename for a counter/SNR pair.
pub fn noisy_file_name(counter: u64, snr: &str) -> String {
    format!("noisy{counter}_SNRdb_{snr}_clnsp{counter}.wav")
}

/// Clean-reference filename for a counter.
pub fn clean_file_name(counter: u64) -> String {
    format!("clnsp{counter}.wav")
}

/// Rescaled-noise filename for a counter/SNR pair.
pub fn noise_file_name(counter: u64, snr: &str) -> String {
    format!("noisy{counter}_SNRdb_{snr}.wav")
}

/// Persists mixed triples into the run's output directories.
#[derive(Debug)]
pub struct TripleWriter<'a, C: AudioCodec> {
    codec: &'a C,
    noisy_dir: PathBuf,
    clean_dir: PathBuf,
    noise_dir: PathBuf,
}

impl<'a, C: AudioCodec> TripleWriter<'a, C> {
    /// Creates a writer targeting the layout's output directories.
    pub fn new(codec: &'a C, layout: &RunLayout) -> Self {
        Self {
            codec,
            noisy_dir: layout.noisy_out_dir.clone(),
            clean_dir: layout.clean_out_dir.clone(),
            noise_dir: layout.noise_out_dir.clone(),
        }
    }

    /// Writes the three buffers of `triple` under deterministic names.
    ///
    /// Returns the noisy output's length in samples, which is what the
    /// session adds to its running budget.
    pub fn write(&self, counter: u64, snr_db: f64, triple: &MixedTriple) -> SynthResult<u64> {
        let snr = format_snr_db(snr_db);

        self.codec
            .encode(&self.noisy_dir.join(noisy_file_name(counter, &snr)), &triple.noisy)?;
        self.codec
            .encode(&self.clean_dir.join(clean_file_name(counter)), &triple.clean)?;
        self.codec
            .encode(&self.noise_dir.join(noise_file_name(counter, &snr)), &triple.noise)?;

        Ok(triple.noisy.len() as u64)
    }
}
