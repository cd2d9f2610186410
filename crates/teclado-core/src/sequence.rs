//! Sequence assembly: symbols + durations -> one sample buffer.

use crate::error::SynthError;
use crate::keypad::{SymbolClass, classify};
use crate::synth::{sample_count, silence, synthesize};

/// Fixed silent gap appended after every tone symbol, in seconds.
///
/// Independent of the symbol's own duration. Silence symbols get no
/// extra gap; their assigned duration already is the pause.
pub const INTER_SYMBOL_GAP_SECS: f32 = 0.05;

/// Strip every character outside the supported alphabet.
///
/// Tone symbols and explicit silence placeholders survive; everything
/// else is dropped.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(|&c| classify(c).is_some()).collect()
}

/// Whether the sequence contains at least one tone-producing symbol.
pub fn contains_tone(symbols: &str) -> bool {
    symbols
        .chars()
        .any(|c| matches!(classify(c), Some(SymbolClass::Tone(_))))
}

/// Render a symbol sequence with the default inter-symbol gap.
pub fn render(symbols: &str, durations: &[f32], sample_rate: u32) -> Result<Vec<i16>, SynthError> {
    render_with_gap(symbols, durations, sample_rate, INTER_SYMBOL_GAP_SECS)
}

/// Render a symbol sequence into one contiguous sample buffer.
///
/// Segments are concatenated in input order: each tone symbol yields its
/// waveform followed by a `gap_secs` silence; each silence symbol yields
/// silence of its own assigned duration and nothing more. No trailing
/// trim. A sequence without a single tone symbol has no audible content
/// and is rejected.
pub fn render_with_gap(
    symbols: &str,
    durations: &[f32],
    sample_rate: u32,
    gap_secs: f32,
) -> Result<Vec<i16>, SynthError> {
    let symbol_count = symbols.chars().count();
    if durations.len() != symbol_count {
        return Err(SynthError::DurationCountMismatch {
            expected: symbol_count,
            actual: durations.len(),
        });
    }
    if !contains_tone(symbols) {
        return Err(SynthError::NoValidSymbols);
    }

    let gap_len = sample_count(sample_rate, gap_secs);
    let mut total = 0;
    for (symbol, &duration) in symbols.chars().zip(durations) {
        total += sample_count(sample_rate, duration);
        if matches!(classify(symbol), Some(SymbolClass::Tone(_))) {
            total += gap_len;
        }
    }

    let mut buffer = Vec::with_capacity(total);
    for (symbol, &duration) in symbols.chars().zip(durations) {
        match classify(symbol) {
            Some(SymbolClass::Tone(pair)) => {
                buffer.extend(synthesize(pair, duration, sample_rate));
                buffer.extend(silence(gap_secs, sample_rate));
            }
            Some(SymbolClass::Silence) => buffer.extend(silence(duration, sample_rate)),
            None => return Err(SynthError::UnsupportedSymbol(symbol)),
        }
    }
    Ok(buffer)
}
