//! CLI harness tests: spawn the binary against generated WAV fixtures

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cry_cli"))
}

/// Write a mono float WAV with a pure sine tone
fn write_sine_wav(path: &PathBuf, frequency: f32, amplitude: f32, seconds: f32) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).expect("creating fixture WAV");
    let total = (16000.0 * seconds) as usize;
    for i in 0..total {
        let t = i as f32 / 16000.0;
        let sample = amplitude * (2.0 * std::f32::consts::PI * frequency * t).sin();
        writer.write_sample(sample).expect("writing sample");
    }
    writer.finalize().expect("finalizing fixture WAV");
}

#[test]
fn classify_tone_fixture_reports_neh() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wav_path = dir.path().join("tone_300.wav");
    write_sine_wav(&wav_path, 300.0, 0.3, 1.0);

    let output = cli()
        .args(["classify", "--input"])
        .arg(&wav_path)
        .output()
        .expect("failed to run cry_cli classify");
    assert!(
        output.status.success(),
        "CLI exited with {:?}: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let json: Value = serde_json::from_str(stdout.trim()).expect("classification report JSON");
    assert_eq!(json["sample_rate"], 16000);
    // 1.0 s at 0.5 s windows = 2 full windows
    assert_eq!(json["window_count"], 2);
    assert_eq!(json["events"][0]["matched"], "Neh");
    assert_eq!(json["events"][0]["display_name"], "HUNGRY");
    assert_eq!(json["events"][1]["matched"], "Neh");
}

#[test]
fn classify_silent_fixture_reports_no_match() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wav_path = dir.path().join("silence.wav");
    write_sine_wav(&wav_path, 300.0, 0.0, 0.5);

    let output = cli()
        .args(["classify", "--input"])
        .arg(&wav_path)
        .output()
        .expect("failed to run cry_cli classify");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let json: Value = serde_json::from_str(stdout.trim()).expect("classification report JSON");
    assert_eq!(json["window_count"], 1);
    assert_eq!(json["events"][0]["matched"], Value::Null);
    assert!(json["events"][0]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("No sound"));
}

#[test]
fn classify_writes_report_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let wav_path = dir.path().join("tone_480.wav");
    let report_path = dir.path().join("report.json");
    write_sine_wav(&wav_path, 480.0, 0.3, 0.5);

    let output = cli()
        .args(["classify", "--input"])
        .arg(&wav_path)
        .arg("--output")
        .arg(&report_path)
        .output()
        .expect("failed to run cry_cli classify");
    assert!(output.status.success());

    let contents = std::fs::read_to_string(&report_path).expect("reading report file");
    let json: Value = serde_json::from_str(&contents).expect("report JSON");
    assert_eq!(json["events"][0]["matched"], "Eairh");
}

#[test]
fn synth_tone_classifies_in_band() {
    let output = cli()
        .args(["synth", "--freq", "480", "--noise", "0.05"])
        .output()
        .expect("failed to run cry_cli synth");
    assert!(
        output.status.success(),
        "CLI exited with {:?}: {}",
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout UTF-8");
    let json: Value = serde_json::from_str(stdout.trim()).expect("synth report JSON");
    assert_eq!(json["frequency_hz"], 480.0);
    assert_eq!(json["result"]["matched"], "Eairh");
    assert_eq!(json["display_name"], "GAS PAIN");
}

#[test]
fn classify_rejects_missing_input() {
    let output = cli()
        .args(["classify", "--input", "does_not_exist.wav"])
        .output()
        .expect("failed to run cry_cli");
    assert_eq!(output.status.code(), Some(1));
}
