//! Teclado CLI - generate and play DTMF tones for a keypad sequence.

use anyhow::Context;
use clap::Parser;
use std::path::Path;
use teclado_core::{DurationSpec, DurationValue, SynthError, contains_tone, render, sanitize};
use teclado_io::{output_filename, play, read_wav, write_wav};

/// Generate DTMF (telephone keypad) tones as a mono 16-bit WAV file.
///
/// The output file name is derived from the sanitized symbol sequence
/// alone, so an existing file is reused even when duration arguments
/// differ between runs. Pass --force to regenerate.
#[derive(Parser)]
#[command(name = "teclado", version, about, long_about = None)]
struct Cli {
    /// Symbol sequence: digits, '*', '#', plus space/hyphen/underscore
    /// as pauses. Unsupported characters are stripped.
    sequence: String,

    /// Tone duration in seconds, or a beat macro ('long' = 0.3s,
    /// 'short' = 0.15s).
    #[arg(long, default_value = "0.2")]
    duration: String,

    /// Comma-separated per-symbol durations (numbers and/or beat
    /// macros). Overrides --duration; the count must equal the
    /// sanitized symbol count.
    #[arg(long)]
    durations: Option<String>,

    /// Output sample rate in Hz.
    #[arg(long, default_value_t = 8000)]
    sample_rate: u32,

    /// Regenerate even if the output file already exists.
    #[arg(long)]
    force: bool,

    /// Skip playback after writing or reusing the file.
    #[arg(long)]
    no_play: bool,

    /// Playback output device (exact or partial name).
    #[arg(long)]
    device: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let symbols = sanitize(&cli.sequence);
    if !contains_tone(&symbols) {
        anyhow::bail!(SynthError::NoValidSymbols);
    }

    let file_name = output_filename(&symbols);
    let path = Path::new(&file_name);

    // The cache check consults only the file name, never the duration
    // flags; those are parsed on the generation path alone.
    let playback = if path.exists() && !cli.force {
        println!("Using existing file: {file_name}");
        if cli.no_play {
            None
        } else {
            match read_wav(path) {
                Ok((samples, rate)) => Some((samples, rate)),
                Err(err) => {
                    eprintln!("Playback unavailable: {err}");
                    None
                }
            }
        }
    } else {
        let spec = match &cli.durations {
            Some(list) => DurationSpec::parse_list(list)?,
            None => DurationSpec::Uniform(cli.duration.parse::<DurationValue>()?),
        };
        let durations = spec.resolve(symbols.chars().count())?;
        let samples = render(&symbols, &durations, cli.sample_rate)?;

        write_wav(path, &samples, cli.sample_rate)
            .with_context(|| format!("failed to write {file_name}"))?;
        println!("DTMF tones generated and saved as {file_name}");
        Some((samples, cli.sample_rate))
    };

    if !cli.no_play {
        if let Some((samples, rate)) = playback {
            if let Err(err) = play(&samples, rate, cli.device.as_deref()) {
                eprintln!("Playback unavailable: {err}");
            }
        }
    }

    Ok(())
}
