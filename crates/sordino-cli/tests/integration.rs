//! Integration tests for sordino-cli.
//!
//! Run the `sordino` binary end to end: parameter listing, coefficient
//! design, and file rendering with flags and a settings file.

use sordino_io::{WavSpec, read_wav, write_wav};
use std::process::Command;
use tempfile::TempDir;

/// Helper to get the path to the `sordino` binary built by cargo.
fn sordino_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sordino"))
}

fn square_wave(frames: usize, period: usize) -> Vec<f32> {
    (0..frames)
        .map(|i| if i % period < period / 2 { 0.5 } else { -0.5 })
        .collect()
}

#[test]
fn cli_params_lists_both_parameters() {
    let output = sordino_bin()
        .args(["params", "--detailed"])
        .output()
        .expect("failed to run sordino params");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lp_cutoff"));
    assert!(stdout.contains("lp_resonance"));
    assert!(stdout.contains("power 4"));
    assert!(stdout.contains("no effect on audio"));
}

#[test]
fn cli_design_prints_alpha() {
    let output = sordino_bin()
        .args(["design", "--cutoff", "1000", "--sample-rate", "44100"])
        .output()
        .expect("failed to run sordino design");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("alpha:       0.0666"), "stdout: {stdout}");
}

#[test]
fn cli_design_rejects_cutoff_above_nyquist() {
    let output = sordino_bin()
        .args(["design", "--cutoff", "30000", "--sample-rate", "48000"])
        .output()
        .expect("failed to run sordino design");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cutoff_hz"), "stderr: {stderr}");
}

#[test]
fn cli_process_stereo_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");

    let left = square_wave(4800, 8);
    let right = vec![0.0; 4800];
    write_wav(&input, &[left.clone(), right], WavSpec::default()).unwrap();

    let status = sordino_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .args(["--cutoff", "500", "--block-size", "100", "--bit-depth", "24"])
        .status()
        .expect("failed to run sordino process");
    assert!(status.success());

    let (channels, spec) = read_wav(&output).unwrap();
    assert_eq!(spec.channels, 2);
    assert_eq!(spec.bits_per_sample, 24);
    assert_eq!(channels[0].len(), 4800);
    // A 6 kHz square through a 500 Hz low-pass loses most of its swing.
    let out_peak = channels[0][480..].iter().fold(0.0_f32, |m, s| m.max(s.abs()));
    assert!(out_peak < 0.1, "peak {out_peak}");
    assert!(channels[1].iter().all(|&s| s == 0.0));
}

#[test]
fn cli_process_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    let config = dir.path().join("render.toml");

    let mono = WavSpec {
        channels: 1,
        ..WavSpec::default()
    };
    write_wav(&input, &[square_wave(2000, 40)], mono).unwrap();
    std::fs::write(&config, "bit_depth = 16\n\n[filter]\ncutoff_hz = 20000.0\n").unwrap();

    let status = sordino_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .arg("--config")
        .arg(&config)
        .status()
        .expect("failed to run sordino process");
    assert!(status.success());

    let (channels, spec) = read_wav(&output).unwrap();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(channels[0].len(), 2000);
}

#[test]
fn cli_process_rejects_multichannel_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("quad.wav");
    let output = dir.path().join("out.wav");
    let quad = WavSpec {
        channels: 4,
        ..WavSpec::default()
    };
    write_wav(&input, &vec![vec![0.0; 64]; 4], quad).unwrap();

    let output = sordino_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .output()
        .expect("failed to run sordino process");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported channel layout"), "stderr: {stderr}");
}

#[test]
fn cli_process_rejects_cutoff_above_nyquist() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let output = dir.path().join("out.wav");
    let spec = WavSpec {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 32,
    };
    write_wav(&input, &[vec![0.0; 64]], spec).unwrap();

    let result = sordino_bin()
        .arg("process")
        .arg(&input)
        .arg(&output)
        .args(["--cutoff", "15000"])
        .output()
        .expect("failed to run sordino process");
    assert!(!result.status.success());
    assert!(!output.exists());
}
