//! Noisemix CLI - Command-line interface for noisy-speech corpus synthesis
//!
//! This binary provides commands for synthesizing a corpus of
//! (clean, noise, noisy) training triples and for uploading the resulting
//! noisy-speech files to a hosted dataset registry.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use noisemix_cli::commands;

/// Noisemix - Noisy-Speech Training Corpus Synthesizer
#[derive(Parser)]
#[command(name = "noisemix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize a corpus of noisy-speech training triples
    Synthesize {
        /// Total hours of audio to synthesize
        #[arg(long)]
        total_hours: f64,

        /// Path to the configuration file
        #[arg(long, default_value = noisemix_spec::DEFAULT_CONFIG_FILE)]
        cfg: String,

        /// Configuration section to read
        #[arg(long, default_value = noisemix_spec::DEFAULT_SECTION)]
        cfg_section: String,

        /// Run root for default input subdirectories and outputs
        #[arg(long, default_value = ".")]
        root: String,

        /// Base seed for reproducible sampling (default: OS entropy)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Upload the noisy-speech outputs to a hosted dataset registry
    Upload {
        /// Directory holding the noisy-speech WAV files
        #[arg(long, default_value = noisemix_spec::NOISY_OUT_DIR)]
        dir: String,

        /// Dataset repository id on the registry
        #[arg(long, default_value = commands::upload::DEFAULT_REPO_ID)]
        repo_id: String,

        /// Registry endpoint URL
        #[arg(long, default_value = commands::upload::DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Access token (default: the HUB_TOKEN environment variable)
        #[arg(long)]
        token: Option<String>,

        /// Print the dataset manifest instead of uploading
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Synthesize {
            total_hours,
            cfg,
            cfg_section,
            root,
            seed,
        } => commands::synthesize::run(&cfg, &cfg_section, &root, total_hours, seed),
        Commands::Upload {
            dir,
            repo_id,
            endpoint,
            token,
            dry_run,
        } => commands::upload::run(&dir, &repo_id, &endpoint, token.as_deref(), dry_run),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
