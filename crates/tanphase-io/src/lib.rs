//! WAV file I/O for tanphase.
//!
//! - [`read_wav`] / [`write_wav`] for mono buffers
//! - [`read_wav_stereo`] / [`write_wav_stereo`] with [`StereoSamples`]
//! - [`read_wav_info`] for header-only inspection
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tanphase_io::{read_wav, write_wav_stereo, StereoSamples};
//!
//! let (mono, spec) = read_wav("input.wav")?;
//! let stereo = StereoSamples::from_mono(mono);
//! write_wav_stereo("output.wav", &stereo, spec)?;
//! ```

mod stereo;
mod wav;

pub use stereo::StereoSamples;
pub use wav::{
    SUPPORTED_BIT_DEPTHS, WavFormat, WavInfo, WavSpec, read_wav, read_wav_info, read_wav_stereo,
    write_wav, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The requested sample format is not supported.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
