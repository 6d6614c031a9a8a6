//! Synthesize command implementation
//!
//! Runs one corpus synthesis session from a configuration file and a total
//! duration given on the command line.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use noisemix_spec::{snr_sweep, RunConfig, RunLayout};
use noisemix_synth::{FilePool, Progress, SessionParams, SynthSession, WavCodec};

/// Run the synthesize command
///
/// # Arguments
/// * `cfg_path` - Path to the configuration file
/// * `section` - Configuration section to read
/// * `root` - Run root for default directories and outputs
/// * `total_hours` - Total hours of audio to synthesize
/// * `seed` - Base seed; a fresh one is drawn from OS entropy when omitted
pub fn run(
    cfg_path: &str,
    section: &str,
    root: &str,
    total_hours: f64,
    seed: Option<u64>,
) -> Result<ExitCode> {
    let root = Path::new(root);
    let config = RunConfig::load(Path::new(cfg_path), section)
        .with_context(|| format!("Failed to load configuration from {}", cfg_path))?;

    let layout = RunLayout::resolve(root, &config);
    layout
        .create()
        .context("Failed to create run directories")?;

    println!("{} {} [{}]", "Configuration:".cyan().bold(), cfg_path, section);
    println!("{} {}", "Clean pool:".cyan().bold(), layout.clean_dir.display());
    println!("{} {}", "Noise pool:".cyan().bold(), layout.noise_dir.display());

    let clean_pool = FilePool::index(&layout.clean_dir, &config.audioformat, &[])
        .context("Failed to index the clean speech pool")?;
    let noise_pool = FilePool::index(
        &layout.noise_dir,
        &config.audioformat,
        &config.excluded_prefixes(),
    )
    .context("Failed to index the noise pool")?;

    println!(
        "{} {} clean, {} noise source files",
        "Indexed:".dimmed(),
        clean_pool.len(),
        noise_pool.len()
    );

    let seed = seed.unwrap_or_else(rand::random);
    let target_samples = config.target_samples(total_hours);
    let snr_levels = snr_sweep(config.total_snrlevels);

    println!(
        "{} {:.2} h at {} Hz ({} samples), {} SNR levels, seed {}",
        "Target:".cyan().bold(),
        total_hours,
        config.sampling_rate,
        target_samples,
        snr_levels.len(),
        seed
    );

    let codec = WavCodec::new();
    let mut session = SynthSession::new(
        &codec,
        &layout,
        clean_pool,
        noise_pool,
        SessionParams {
            snr_levels,
            clip_samples: config.clip_samples(),
            silence_seconds: config.silence_length,
            target_samples,
            seed,
        },
    );

    let mut last_percent = None;
    let summary = session.run(|progress| {
        let percent = percent_done(&progress);
        if last_percent != Some(percent) {
            last_percent = Some(percent);
            println!(
                "  {} {:>3}%  ({} / {} samples)",
                "synthesizing".dimmed(),
                percent,
                progress.samples_written,
                progress.target_samples
            );
        }
    })?;

    println!(
        "\n{} {} triples from {} clip pairs ({} samples) in {}",
        "DONE".green().bold(),
        summary.triples_written,
        summary.iterations,
        summary.samples_written,
        layout.noisy_out_dir.display()
    );

    Ok(ExitCode::SUCCESS)
}

fn percent_done(progress: &Progress) -> u64 {
    if progress.target_samples == 0 {
        return 100;
    }
    (progress.samples_written * 100 / progress.target_samples).min(100)
}
