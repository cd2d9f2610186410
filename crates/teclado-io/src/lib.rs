//! Audio I/O layer for teclado.
//!
//! This crate provides:
//!
//! - **WAV encoding**: [`write_wav`] / [`read_wav`] for mono 16-bit PCM files
//! - **Output naming**: [`output_filename`], the cache-key function for
//!   generated files
//! - **Playback**: [`play`], a best-effort blocking playback of a rendered
//!   buffer through the system's output device
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use teclado_io::{output_filename, play, write_wav};
//!
//! let path = output_filename("5551234");
//! write_wav(&path, &samples, 8000)?;
//! play(&samples, 8000, None)?;
//! ```

mod paths;
mod play;
mod wav;

pub use paths::output_filename;
pub use play::play;
pub use wav::{read_wav, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("No audio device available")]
    NoDevice,

    /// The requested audio device was not found.
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// The file is not in the expected mono 16-bit PCM format.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
