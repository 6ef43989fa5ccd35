//! WAV file I/O for sordino.
//!
//! Audio is exchanged as one `Vec<f32>` per channel, the layout the filter
//! chain processes in place. [`read_wav`] deinterleaves and normalises
//! integer PCM to `[-1, 1)`; [`write_wav`] interleaves and writes float or
//! clamped integer PCM depending on the requested bit depth.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sordino_io::{read_wav, write_wav};
//!
//! let (mut channels, spec) = read_wav("input.wav")?;
//! // ... filter `channels` in place ...
//! write_wav("output.wav", &channels, spec)?;
//! ```

mod wav;

pub use wav::{
    WavFormat, WavInfo, WavSpec, deinterleave, interleave, read_wav, read_wav_info, write_wav,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Channel buffers disagree with the `WavSpec` or with each other.
    #[error("channel mismatch: {0}")]
    ChannelMismatch(String),

    /// Only 16, 24 and 32 bit output is supported.
    #[error("unsupported bit depth: {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
