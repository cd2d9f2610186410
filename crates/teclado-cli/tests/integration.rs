//! Integration tests for the teclado binary.
//!
//! Each test runs the built binary in its own temporary directory with
//! `--no-play`, then inspects the status lines and the WAV files the
//! run leaves behind.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper to get the path to the `teclado` binary built by cargo.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_teclado"))
        .current_dir(dir)
        .args(args)
        .arg("--no-play")
        .output()
        .expect("failed to run teclado")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// Generation and the file cache
// ---------------------------------------------------------------------------

#[test]
fn generates_a_wav_and_reports_it() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["5551234"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(
        stdout(&output).contains("generated and saved as dtmf_5551234.wav"),
        "got: {}",
        stdout(&output)
    );

    let (samples, rate) = teclado_io::read_wav(dir.path().join("dtmf_5551234.wav")).unwrap();
    assert_eq!(rate, 8000);
    // 7 digits, each 0.2s tone (1600) + 0.05s gap (400).
    assert_eq!(samples.len(), 7 * 2000);
}

#[test]
fn second_run_reuses_the_existing_file() {
    let dir = TempDir::new().unwrap();
    run_in(dir.path(), &["42"]);

    let output = run_in(dir.path(), &["42"]);
    assert!(output.status.success());
    assert!(
        stdout(&output).contains("Using existing file: dtmf_42.wav"),
        "got: {}",
        stdout(&output)
    );
}

#[test]
fn cache_key_ignores_duration_arguments() {
    let dir = TempDir::new().unwrap();
    run_in(dir.path(), &["5551234", "--duration", "0.2"]);
    let first = std::fs::read(dir.path().join("dtmf_5551234.wav")).unwrap();

    // Different duration, same sequence: the stale file wins.
    let output = run_in(dir.path(), &["5551234", "--duration", "0.5"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Using existing file"));

    let second = std::fs::read(dir.path().join("dtmf_5551234.wav")).unwrap();
    assert_eq!(first, second, "cached file must be byte-identical");
}

#[test]
fn force_regenerates_with_the_new_duration() {
    let dir = TempDir::new().unwrap();
    run_in(dir.path(), &["7", "--duration", "0.2"]);

    let output = run_in(dir.path(), &["7", "--duration", "0.5", "--force"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("generated and saved"));

    let (samples, _) = teclado_io::read_wav(dir.path().join("dtmf_7.wav")).unwrap();
    assert_eq!(samples.len(), 4000 + 400);
}

#[test]
fn reuse_path_never_parses_duration_flags() {
    let dir = TempDir::new().unwrap();
    run_in(dir.path(), &["9"]);

    // A bogus duration is irrelevant once the cache hits.
    let output = run_in(dir.path(), &["9", "--duration", "bogus"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Using existing file"));
}

// ---------------------------------------------------------------------------
// Input sanitizing
// ---------------------------------------------------------------------------

#[test]
fn unsupported_characters_are_stripped_before_naming() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["(55) 12"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.path().join("dtmf_55 12.wav").exists());
}

#[test]
fn silence_only_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["  --__"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("no tone-producing symbols"),
        "got: {}",
        stderr(&output)
    );
}

// ---------------------------------------------------------------------------
// Duration specifications
// ---------------------------------------------------------------------------

#[test]
fn per_symbol_durations_shape_the_buffer() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["1-2", "--durations", "0.2,0.1,0.2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let (samples, _) = teclado_io::read_wav(dir.path().join("dtmf_1-2.wav")).unwrap();
    // tone+gap (2000) + bare pause (800) + tone+gap (2000)
    assert_eq!(samples.len(), 4800);
}

#[test]
fn duration_count_mismatch_is_fatal_and_counted() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["123", "--durations", "0.1,0.2"]);

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(
        err.contains("expected 3 duration values, got 2"),
        "got: {err}"
    );
    assert!(!dir.path().join("dtmf_123.wav").exists());
}

#[test]
fn invalid_duration_token_is_named() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["1", "--duration", "0.2x"]);

    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("invalid duration value: '0.2x'"),
        "got: {}",
        stderr(&output)
    );
}

#[test]
fn beat_macros_are_accepted_anywhere() {
    let dir = TempDir::new().unwrap();

    let output = run_in(dir.path(), &["1", "--duration", "long"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let (samples, _) = teclado_io::read_wav(dir.path().join("dtmf_1.wav")).unwrap();
    assert_eq!(samples.len(), 2400 + 400);

    let output = run_in(dir.path(), &["23", "--durations", "short,0.2"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let (samples, _) = teclado_io::read_wav(dir.path().join("dtmf_23.wav")).unwrap();
    assert_eq!(samples.len(), (1200 + 400) + (1600 + 400));
}

// ---------------------------------------------------------------------------
// End-to-end sample values
// ---------------------------------------------------------------------------

#[test]
fn single_digit_buffer_matches_the_synthesis_contract() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["1"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let (samples, rate) = teclado_io::read_wav(dir.path().join("dtmf_1.wav")).unwrap();
    assert_eq!(rate, 8000);
    assert_eq!(samples.len(), 1600 + 400);

    // t = 0 is sin(0) + sin(0).
    assert_eq!(samples[0], 0);
    // Trailing inter-symbol gap is pure silence.
    assert!(samples[1600..].iter().all(|&s| s == 0));
    // Fixed headroom: nothing beyond half of full scale.
    assert!(samples.iter().all(|&s| s.unsigned_abs() <= 16383));
}

#[test]
fn custom_sample_rate_scales_the_buffer() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["1", "--sample-rate", "16000"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let (samples, rate) = teclado_io::read_wav(dir.path().join("dtmf_1.wav")).unwrap();
    assert_eq!(rate, 16000);
    assert_eq!(samples.len(), 3200 + 800);
}

// ---------------------------------------------------------------------------
// CLI surface
// ---------------------------------------------------------------------------

#[test]
fn help_lists_the_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_teclado"))
        .arg("--help")
        .output()
        .expect("failed to run teclado --help");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("--duration"));
    assert!(text.contains("--durations"));
    assert!(text.contains("--force"));
    assert!(text.contains("--no-play"));
}

#[test]
fn missing_sequence_argument_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_teclado"))
        .output()
        .expect("failed to run teclado");
    assert!(!output.status.success());
}
