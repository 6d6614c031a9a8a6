//! End-to-end synthesis runs against real WAV fixtures in a temp directory.

use std::fs;
use std::path::Path;

use noisemix_cli::commands::synthesize;

const RATE: u32 = 16000;

fn write_tone(path: &Path, seconds: f64, freq: f64, amplitude: f64) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    let num_samples = (seconds * RATE as f64) as usize;
    for i in 0..num_samples {
        let t = i as f64 / RATE as f64;
        let value = amplitude * (2.0 * std::f64::consts::PI * freq * t).sin();
        writer.write_sample((value * 32767.0).round() as i16).unwrap();
    }
    writer.finalize().unwrap();
}

fn write_config(root: &Path, noise_types_excluded: &str) -> String {
    let cfg = serde_json::json!({
        "noisy_speech": {
            "speech_dir": "None",
            "noise_dir": "None",
            "audioformat": "*.wav",
            "noise_types_excluded": noise_types_excluded,
            "sampling_rate": RATE,
            "audio_length": 4.0,
            "silence_length": 0.5,
            "total_snrlevels": 2
        }
    });
    let path = root.join("noisyspeech_synthesizer.cfg");
    fs::write(&path, serde_json::to_string_pretty(&cfg).unwrap()).unwrap();
    path.to_str().unwrap().to_string()
}

fn seed_fixtures(root: &Path) {
    fs::create_dir_all(root.join("clean_train")).unwrap();
    fs::create_dir_all(root.join("noise_train")).unwrap();
    write_tone(&root.join("clean_train/sp1.wav"), 10.0, 220.0, 0.4);
    write_tone(&root.join("noise_train/n1.wav"), 10.0, 3011.0, 0.2);
}

fn wav_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_small_run_produces_expected_triples() {
    let root = tempfile::tempdir().unwrap();
    seed_fixtures(root.path());
    let cfg = write_config(root.path(), "None");

    // Budget of 96000 samples: one outer iteration at two SNR levels of
    // 4-second clips (128000 samples) covers it.
    let total_hours = 96_000.0 / (3600.0 * RATE as f64);
    synthesize::run(
        &cfg,
        "noisy_speech",
        root.path().to_str().unwrap(),
        total_hours,
        Some(7),
    )
    .unwrap();

    let noisy = wav_names(&root.path().join("NoisySpeech_training"));
    assert_eq!(
        noisy,
        vec![
            "noisy1_SNRdb_10.0_clnsp1.wav",
            "noisy1_SNRdb_40.0_clnsp1.wav"
        ]
    );

    let clean = wav_names(&root.path().join("CleanSpeech_training"));
    assert_eq!(clean, vec!["clnsp1.wav"]);

    let noise = wav_names(&root.path().join("Noise_training"));
    assert_eq!(noise, vec!["noisy1_SNRdb_10.0.wav", "noisy1_SNRdb_40.0.wav"]);

    // Every noisy output is exactly one clip long.
    for name in &noisy {
        let reader = hound::WavReader::open(root.path().join("NoisySpeech_training").join(name))
            .unwrap();
        assert_eq!(reader.len(), 4 * RATE);
        assert_eq!(reader.spec().sample_rate, RATE);
        assert_eq!(reader.spec().channels, 1);
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let run_once = || {
        let root = tempfile::tempdir().unwrap();
        seed_fixtures(root.path());
        let cfg = write_config(root.path(), "None");
        let total_hours = 96_000.0 / (3600.0 * RATE as f64);
        synthesize::run(
            &cfg,
            "noisy_speech",
            root.path().to_str().unwrap(),
            total_hours,
            Some(1234),
        )
        .unwrap();
        fs::read(
            root.path()
                .join("NoisySpeech_training/noisy1_SNRdb_10.0_clnsp1.wav"),
        )
        .unwrap()
    };

    assert_eq!(run_once(), run_once());
}

#[test]
fn test_excluded_noise_prefix_empties_the_pool() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("clean_train")).unwrap();
    fs::create_dir_all(root.path().join("noise_train")).unwrap();
    write_tone(&root.path().join("clean_train/sp1.wav"), 10.0, 220.0, 0.4);
    write_tone(&root.path().join("noise_train/babble_1.wav"), 10.0, 3011.0, 0.2);
    let cfg = write_config(root.path(), "babble");

    let err = synthesize::run(
        &cfg,
        "noisy_speech",
        root.path().to_str().unwrap(),
        0.001,
        Some(7),
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("no audio files found"));
}

#[test]
fn test_missing_config_file_aborts_before_processing() {
    let root = tempfile::tempdir().unwrap();

    let err = synthesize::run(
        root.path().join("absent.cfg").to_str().unwrap(),
        "noisy_speech",
        root.path().to_str().unwrap(),
        0.001,
        Some(7),
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("no configuration file found"));
    // Nothing was created.
    assert!(!root.path().join("NoisySpeech_training").exists());
}

#[test]
fn test_missing_section_aborts() {
    let root = tempfile::tempdir().unwrap();
    seed_fixtures(root.path());
    let cfg = write_config(root.path(), "None");

    let err = synthesize::run(
        &cfg,
        "studio",
        root.path().to_str().unwrap(),
        0.001,
        Some(7),
    )
    .unwrap_err();

    assert!(format!("{:#}", err).contains("section 'studio'"));
}
