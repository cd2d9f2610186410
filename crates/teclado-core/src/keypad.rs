//! The DTMF keypad frequency table.
//!
//! Every tone symbol combines one low-group row frequency with one
//! high-group column frequency per the standard 4x3 keypad layout:
//!
//! | Hz  | 1209 | 1336 | 1477 |
//! |-----|------|------|------|
//! | 697 |  1   |  2   |  3   |
//! | 770 |  4   |  5   |  6   |
//! | 852 |  7   |  8   |  9   |
//! | 941 |  *   |  0   |  #   |
//!
//! Space, hyphen, and underscore are explicit silence placeholders.
//! Everything else is unsupported and must be filtered out before
//! rendering.

/// A low-group/high-group frequency pair for one keypad symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreqPair {
    /// Low-group (row) frequency in Hz.
    pub low_hz: f32,
    /// High-group (column) frequency in Hz.
    pub high_hz: f32,
}

/// Classification of one input symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SymbolClass {
    /// A keypad symbol that produces a dual-tone waveform.
    Tone(FreqPair),
    /// A placeholder that produces silence for its assigned duration.
    Silence,
}

const fn tone(low_hz: f32, high_hz: f32) -> Option<SymbolClass> {
    Some(SymbolClass::Tone(FreqPair { low_hz, high_hz }))
}

/// Classify a symbol against the keypad table.
///
/// Returns `None` for characters outside the supported alphabet.
pub const fn classify(symbol: char) -> Option<SymbolClass> {
    match symbol {
        '1' => tone(697.0, 1209.0),
        '2' => tone(697.0, 1336.0),
        '3' => tone(697.0, 1477.0),
        '4' => tone(770.0, 1209.0),
        '5' => tone(770.0, 1336.0),
        '6' => tone(770.0, 1477.0),
        '7' => tone(852.0, 1209.0),
        '8' => tone(852.0, 1336.0),
        '9' => tone(852.0, 1477.0),
        '*' => tone(941.0, 1209.0),
        '0' => tone(941.0, 1336.0),
        '#' => tone(941.0, 1477.0),
        ' ' | '-' | '_' => Some(SymbolClass::Silence),
        _ => None,
    }
}
