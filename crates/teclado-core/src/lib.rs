//! Teclado Core - DTMF synthesis engine
//!
//! This crate turns a string of keypad symbols into a mono 16-bit sample
//! buffer, ready for PCM encoding. It is pure computation: deterministic,
//! allocation-light, and free of I/O.
//!
//! # Components
//!
//! - [`classify`] - the keypad frequency table; maps each symbol to a
//!   [`SymbolClass`] (a dual-tone [`FreqPair`] or an explicit silence)
//! - [`DurationSpec`] / [`DurationValue`] - duration specifications:
//!   scalar broadcast, per-symbol list, or beat macros (`long`/`short`),
//!   resolved once into per-symbol seconds
//! - [`synthesize`] / [`silence`] - per-symbol waveform generation with a
//!   fixed [`HEADROOM`] attenuation
//! - [`render`] - sequence assembly with inter-symbol gaps
//!
//! # Example
//!
//! ```rust
//! use teclado_core::{DurationSpec, render, sanitize};
//!
//! let symbols = sanitize("555-1234");
//! let durations = DurationSpec::default().resolve(symbols.chars().count())?;
//! let buffer = render(&symbols, &durations, 8000)?;
//! assert!(!buffer.is_empty());
//! # Ok::<(), teclado_core::SynthError>(())
//! ```

pub mod duration;
pub mod error;
pub mod keypad;
pub mod sequence;
pub mod synth;

pub use duration::{
    DEFAULT_TONE_SECS, DurationSpec, DurationValue, LONG_BEAT_SECS, SHORT_BEAT_SECS,
};
pub use error::SynthError;
pub use keypad::{FreqPair, SymbolClass, classify};
pub use sequence::{INTER_SYMBOL_GAP_SECS, contains_tone, render, render_with_gap, sanitize};
pub use synth::{HEADROOM, sample_count, silence, synthesize};
