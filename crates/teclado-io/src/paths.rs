//! Output-file naming.

/// Name of the output file for a sanitized symbol sequence.
///
/// The name is a pure function of the symbol sequence alone: durations
/// and sample rate do not participate. The file therefore acts as a
/// cache key. Re-running the same sequence with different duration
/// arguments finds the existing file and reuses it, stale audio and
/// all, unless regeneration is forced.
pub fn output_filename(symbols: &str) -> String {
    format!("dtmf_{symbols}.wav")
}
