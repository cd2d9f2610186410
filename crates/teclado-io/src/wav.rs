//! WAV file reading and writing.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Write a mono 16-bit PCM WAV file.
///
/// The payload samples equal the rendered buffer verbatim; the declared
/// rate is the one used for synthesis.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[i16], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    tracing::debug!(
        path = %path.as_ref().display(),
        samples = samples.len(),
        sample_rate,
        "writing WAV"
    );

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Read a mono 16-bit PCM WAV file back into samples and its rate.
///
/// Files in any other layout are rejected rather than converted; this
/// reader only exists to hand previously generated output to playback.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<i16>, u32)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 || spec.channels != 1 {
        return Err(Error::UnsupportedFormat(format!(
            "{} ch / {} bit / {:?}",
            spec.channels, spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples = reader
        .into_samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok((samples, spec.sample_rate))
}
