//! Upload command implementation
//!
//! Scans the noisy-speech output directory, tags every WAV file with the
//! fixed `noisy_speech` label, wraps them as the `train` split of an
//! audio-typed dataset, and pushes the files plus a manifest to a hosted
//! dataset registry. Fully decoupled from synthesis: it only needs the
//! output directory to exist and be populated.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Default dataset repository id on the registry.
pub const DEFAULT_REPO_ID: &str = "rfhuang/audio-quality";

/// Default registry endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Label attached to every uploaded file.
pub const FILE_LABEL: &str = "noisy_speech";

/// Name of the single dataset split.
pub const TRAIN_SPLIT: &str = "train";

/// Environment variable consulted when `--token` is not given.
pub const TOKEN_ENV_VAR: &str = "HUB_TOKEN";

/// One labeled audio file reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct FileEntry {
    file: String,
    label: String,
}

/// The dataset manifest pushed alongside the audio files.
#[derive(Debug, Serialize)]
struct DatasetManifest {
    split: String,
    column_type: String,
    files: Vec<FileEntry>,
}

/// Run the upload command
///
/// # Arguments
/// * `dir` - Directory holding the noisy-speech WAV files
/// * `repo_id` - Dataset repository id on the registry
/// * `endpoint` - Registry endpoint URL
/// * `token` - Access token; falls back to the `HUB_TOKEN` environment variable
/// * `dry_run` - Print the manifest instead of uploading
pub fn run(
    dir: &str,
    repo_id: &str,
    endpoint: &str,
    token: Option<&str>,
    dry_run: bool,
) -> Result<ExitCode> {
    let dir = Path::new(dir);
    let files = scan_wav_files(dir)?;
    let manifest = build_manifest(&files, dir);

    println!(
        "{} {} audio files under {}",
        "Collected:".cyan().bold(),
        manifest.files.len(),
        dir.display()
    );

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(ExitCode::SUCCESS);
    }

    let token = match token.map(str::to_string).or_else(|| env::var(TOKEN_ENV_VAR).ok()) {
        Some(token) => token,
        None => bail!(
            "no access token: pass --token or set {}",
            TOKEN_ENV_VAR
        ),
    };

    let client = reqwest::blocking::Client::new();
    create_repo(&client, endpoint, repo_id, &token)?;

    for (path, entry) in files.iter().zip(manifest.files.iter()) {
        let url = format!(
            "{}/api/datasets/{}/upload/main/{}/{}",
            endpoint, repo_id, TRAIN_SPLIT, entry.file
        );
        let body = fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        client
            .post(&url)
            .bearer_auth(&token)
            .body(body)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .with_context(|| format!("Failed to upload {}", entry.file))?;
        println!("  {} {}", "pushed".dimmed(), entry.file);
    }

    let manifest_url = format!(
        "{}/api/datasets/{}/upload/main/dataset.json",
        endpoint, repo_id
    );
    client
        .post(&manifest_url)
        .bearer_auth(&token)
        .json(&manifest)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .context("Failed to upload the dataset manifest")?;

    println!(
        "\n{} {} files pushed to {}",
        "DONE".green().bold(),
        manifest.files.len(),
        repo_id
    );

    Ok(ExitCode::SUCCESS)
}

/// Creates the dataset repository, tolerating one that already exists.
fn create_repo(
    client: &reqwest::blocking::Client,
    endpoint: &str,
    repo_id: &str,
    token: &str,
) -> Result<()> {
    let response = client
        .post(format!("{}/api/repos/create", endpoint))
        .bearer_auth(token)
        .json(&serde_json::json!({ "type": "dataset", "name": repo_id }))
        .send()
        .context("Failed to reach the dataset registry")?;

    if response.status().is_success() || response.status() == reqwest::StatusCode::CONFLICT {
        return Ok(());
    }
    bail!(
        "registry refused to create dataset {}: {}",
        repo_id,
        response.status()
    );
}

/// Lists the `.wav` files under `dir`, sorted by path.
fn scan_wav_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("output directory {} does not exist", dir.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("wav"))
        .collect();
    files.sort();

    if files.is_empty() {
        bail!("no audio files found in {}", dir.display());
    }
    Ok(files)
}

/// Labels every file and wraps the set as the `train` split.
fn build_manifest(files: &[PathBuf], base_dir: &Path) -> DatasetManifest {
    let entries = files
        .iter()
        .map(|path| FileEntry {
            file: path
                .strip_prefix(base_dir)
                .unwrap_or(path)
                .to_string_lossy()
                .into_owned(),
            label: FILE_LABEL.to_string(),
        })
        .collect();

    DatasetManifest {
        split: TRAIN_SPLIT.to_string(),
        column_type: "audio".to_string(),
        files: entries,
    }
}
