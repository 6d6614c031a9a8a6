//! Corpus synthesis session.
//!
//! The session owns the whole main loop: sample a clean clip, sample a
//! matching noise clip, sweep the SNR levels, persist each triple, and stop
//! once the sample budget is met. The file counter and running sample count
//! live here as explicit fields so the pipeline stays re-entrant and
//! testable; there is no module-level mutable state.

use rand_pcg::Pcg32;

use noisemix_spec::RunLayout;

use crate::assembler::ClipAssembler;
use crate::codec::AudioCodec;
use crate::error::{SynthError, SynthResult};
use crate::mixer::snr_mixer;
use crate::output::TripleWriter;
use crate::pool::FilePool;
use crate::rng::create_stream_rng;

/// Parameters of one synthesis session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams {
    /// Ordered SNR sweep in dB.
    pub snr_levels: Vec<f64>,
    /// Target clip length in samples.
    pub clip_samples: usize,
    /// Silence gap in seconds between concatenated source files.
    pub silence_seconds: f64,
    /// Total sample budget; the loop stops once the running count reaches it.
    pub target_samples: u64,
    /// Base seed for the clean and noise sampling streams.
    pub seed: u64,
}

/// Progress snapshot reported after every persisted triple.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    /// Samples written so far (noisy outputs only).
    pub samples_written: u64,
    /// Total sample budget.
    pub target_samples: u64,
    /// Triples written so far.
    pub triples_written: u64,
}

/// Totals for a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Outer loop iterations (clean/noise pairs sampled).
    pub iterations: u64,
    /// Triples written (`iterations * snr_levels`).
    pub triples_written: u64,
    /// Samples written, counted over noisy outputs.
    pub samples_written: u64,
}

/// One corpus synthesis run.
pub struct SynthSession<'a, C: AudioCodec> {
    codec: &'a C,
    writer: TripleWriter<'a, C>,
    assembler: ClipAssembler,
    clean_pool: FilePool,
    noise_pool: FilePool,
    snr_levels: Vec<f64>,
    clip_samples: usize,
    target_samples: u64,
    clean_rng: Pcg32,
    noise_rng: Pcg32,
    file_counter: u64,
    samples_written: u64,
}

impl<'a, C: AudioCodec> SynthSession<'a, C> {
    /// Creates a session over the given pools and output layout.
    pub fn new(
        codec: &'a C,
        layout: &RunLayout,
        clean_pool: FilePool,
        noise_pool: FilePool,
        params: SessionParams,
    ) -> Self {
        Self {
            codec,
            writer: TripleWriter::new(codec, layout),
            assembler: ClipAssembler::new(params.silence_seconds),
            clean_pool,
            noise_pool,
            snr_levels: params.snr_levels,
            clip_samples: params.clip_samples,
            target_samples: params.target_samples,
            clean_rng: create_stream_rng(params.seed, "clean"),
            noise_rng: create_stream_rng(params.seed, "noise"),
            file_counter: 0,
            samples_written: 0,
        }
    }

    /// Runs the main loop until the sample budget is met.
    ///
    /// `on_progress` is invoked after every persisted triple. The running
    /// count grows by the noisy output's length per triple, so a run never
    /// overshoots the budget by more than one outer iteration's worth of
    /// output.
    pub fn run(&mut self, mut on_progress: impl FnMut(Progress)) -> SynthResult<SessionSummary> {
        if self.snr_levels.is_empty() {
            return Err(SynthError::EmptySweep);
        }

        let sweep = self.snr_levels.clone();
        let mut iterations = 0u64;
        let mut triples_written = 0u64;

        while self.samples_written < self.target_samples {
            let clean = self.assembler.fetch_random_clip(
                self.codec,
                &self.clean_pool,
                &mut self.clean_rng,
                self.clip_samples,
            )?;
            // The noise clip targets the clean clip's realized length, which
            // after truncation equals the configured clip length.
            let noise = self.assembler.fetch_random_clip(
                self.codec,
                &self.noise_pool,
                &mut self.noise_rng,
                clean.len(),
            )?;

            self.file_counter += 1;
            iterations += 1;

            for &snr_db in &sweep {
                let triple = snr_mixer(&clean, &noise, snr_db)?;
                let written = self.writer.write(self.file_counter, snr_db, &triple)?;
                self.samples_written += written;
                triples_written += 1;

                on_progress(Progress {
                    samples_written: self.samples_written,
                    target_samples: self.target_samples,
                    triples_written,
                });
            }
        }

        Ok(SessionSummary {
            iterations,
            triples_written,
            samples_written: self.samples_written,
        })
    }
}
