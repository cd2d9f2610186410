//! Duration specifications and their resolution to per-symbol seconds.
//!
//! A duration can be given three ways: a single scalar broadcast to every
//! symbol, an explicit per-symbol list, or a beat macro (`long`/`short`)
//! standing in for a fixed scalar. Any individual value, broadcast or
//! listed, may itself be a macro token or a numeric literal. Everything
//! is resolved to a uniform `Vec<f32>` of seconds before synthesis.

use crate::error::SynthError;
use core::str::FromStr;

/// Duration of the `long` beat macro in seconds.
pub const LONG_BEAT_SECS: f32 = 0.3;

/// Duration of the `short` beat macro in seconds.
pub const SHORT_BEAT_SECS: f32 = 0.15;

/// Default per-symbol tone duration in seconds.
pub const DEFAULT_TONE_SECS: f32 = 0.2;

/// One duration token: a numeric literal or a beat macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationValue {
    /// An explicit non-negative duration in seconds.
    Seconds(f32),
    /// The `long` beat macro (0.3 s).
    LongBeat,
    /// The `short` beat macro (0.15 s).
    ShortBeat,
}

impl DurationValue {
    /// Resolve this value to seconds.
    pub fn seconds(self) -> f32 {
        match self {
            DurationValue::Seconds(secs) => secs,
            DurationValue::LongBeat => LONG_BEAT_SECS,
            DurationValue::ShortBeat => SHORT_BEAT_SECS,
        }
    }
}

impl FromStr for DurationValue {
    type Err = SynthError;

    /// Parse a single duration token.
    ///
    /// Beat macros are matched case-insensitively; anything else must
    /// parse as a finite, non-negative number.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("long") {
            return Ok(DurationValue::LongBeat);
        }
        if trimmed.eq_ignore_ascii_case("short") {
            return Ok(DurationValue::ShortBeat);
        }
        match trimmed.parse::<f32>() {
            Ok(secs) if secs.is_finite() && secs >= 0.0 => Ok(DurationValue::Seconds(secs)),
            _ => Err(SynthError::InvalidDurationValue(trimmed.to_string())),
        }
    }
}

impl Default for DurationValue {
    fn default() -> Self {
        DurationValue::Seconds(DEFAULT_TONE_SECS)
    }
}

/// How durations are assigned across a symbol sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum DurationSpec {
    /// One value broadcast to every symbol.
    Uniform(DurationValue),
    /// An explicit value per symbol; the length must equal the symbol count.
    PerSymbol(Vec<DurationValue>),
}

impl Default for DurationSpec {
    fn default() -> Self {
        DurationSpec::Uniform(DurationValue::default())
    }
}

impl DurationSpec {
    /// Parse a comma-separated list of duration tokens into a per-symbol spec.
    pub fn parse_list(list: &str) -> Result<Self, SynthError> {
        let values = list
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<DurationValue>, _>>()?;
        Ok(DurationSpec::PerSymbol(values))
    }

    /// Resolve the spec into one duration in seconds per symbol.
    ///
    /// A per-symbol list whose length differs from `symbol_count` is a
    /// hard error, never truncated or padded.
    pub fn resolve(&self, symbol_count: usize) -> Result<Vec<f32>, SynthError> {
        match self {
            DurationSpec::Uniform(value) => Ok(vec![value.seconds(); symbol_count]),
            DurationSpec::PerSymbol(values) => {
                if values.len() != symbol_count {
                    return Err(SynthError::DurationCountMismatch {
                        expected: symbol_count,
                        actual: values.len(),
                    });
                }
                Ok(values.iter().map(|v| v.seconds()).collect())
            }
        }
    }
}
