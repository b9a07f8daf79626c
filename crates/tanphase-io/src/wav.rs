//! WAV file reading and writing.

use crate::{Error, Result, StereoSamples};
use hound::{SampleFormat, WavReader, WavWriter};
use std::io::Read;
use std::path::Path;

/// Bit depths accepted for writing. 32-bit is written as IEEE float.
pub const SUPPORTED_BIT_DEPTHS: &[u16] = &[16, 24, 32];

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV file metadata extracted without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Total number of sample frames (samples per channel).
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Audio encoding format.
    pub format: WavFormat,
}

/// Read WAV metadata without loading sample data.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let total_samples = u64::from(reader.len());
    let num_frames = total_samples / u64::from(spec.channels.max(1));
    let duration_secs = num_frames as f64 / f64::from(spec.sample_rate);

    let format = match spec.sample_format {
        SampleFormat::Float => WavFormat::IeeeFloat,
        SampleFormat::Int => WavFormat::Pcm,
    };

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs,
        format,
    })
}

/// WAV file specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of audio channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// Bit depth per sample: 16, 24 or 32.
    pub bits_per_sample: u16,
}

impl Default for WavSpec {
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
        }
    }
}

impl From<hound::WavSpec> for WavSpec {
    fn from(spec: hound::WavSpec) -> Self {
        Self {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
        }
    }
}

impl From<WavSpec> for hound::WavSpec {
    fn from(spec: WavSpec) -> Self {
        hound::WavSpec {
            channels: spec.channels,
            sample_rate: spec.sample_rate,
            bits_per_sample: spec.bits_per_sample,
            sample_format: if spec.bits_per_sample == 32 {
                SampleFormat::Float
            } else {
                SampleFormat::Int
            },
        }
    }
}

fn check_bit_depth(bits: u16) -> Result<()> {
    if SUPPORTED_BIT_DEPTHS.contains(&bits) {
        Ok(())
    } else {
        Err(Error::UnsupportedFormat(format!(
            "{bits}-bit output (supported: 16, 24, 32)"
        )))
    }
}

/// Decode every sample as interleaved f32 in [-1, 1).
fn read_samples<R: Read>(reader: WavReader<R>) -> Result<Vec<f32>> {
    let spec = reader.spec();
    let samples = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };
    Ok(samples)
}

fn write_frames<W>(writer: &mut WavWriter<W>, bits: u16, samples: impl Iterator<Item = f32>) -> Result<()>
where
    W: std::io::Write + std::io::Seek,
{
    if bits == 32 {
        for sample in samples {
            writer.write_sample(sample)?;
        }
    } else {
        let max_val = (1i32 << (bits - 1)) as f32;
        for sample in samples {
            let int_sample = (sample * max_val).clamp(-max_val, max_val - 1.0) as i32;
            writer.write_sample(int_sample)?;
        }
    }
    Ok(())
}

/// Read a WAV file and return samples as f32 along with the spec.
///
/// Multi-channel files are mixed down to mono by averaging channels.
///
/// # Example
/// ```ignore
/// let (samples, spec) = read_wav("input.wav")?;
/// println!("Loaded {} samples at {} Hz", samples.len(), spec.sample_rate);
/// ```
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let path = path.as_ref();
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = usize::from(spec.channels.max(1));
    let samples = read_samples(reader)?;

    let mono = if channels > 1 {
        samples
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    tracing::debug!(
        path = %path.display(),
        frames = mono.len(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        "wav read"
    );
    Ok((mono, spec))
}

/// Write mono samples to a WAV file. `spec.channels` is forced to 1.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], spec: WavSpec) -> Result<()> {
    check_bit_depth(spec.bits_per_sample)?;
    let mono_spec = WavSpec { channels: 1, ..spec };
    let mut writer = WavWriter::create(path.as_ref(), hound::WavSpec::from(mono_spec))?;
    write_frames(&mut writer, spec.bits_per_sample, samples.iter().copied())?;
    writer.finalize()?;
    tracing::debug!(path = %path.as_ref().display(), frames = samples.len(), "wav written");
    Ok(())
}

/// Read a WAV file and return stereo samples along with the spec.
///
/// Mono files are expanded to stereo by duplicating to both channels.
/// Files with more than 2 channels use only the first two channels.
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<(StereoSamples, WavSpec)> {
    let reader = WavReader::open(path)?;
    let spec = WavSpec::from(reader.spec());
    let channels = usize::from(spec.channels.max(1));
    let all_samples = read_samples(reader)?;

    let stereo = match channels {
        1 => StereoSamples::from_mono(all_samples),
        2 => StereoSamples::from_interleaved(&all_samples),
        _ => {
            let (left, right) = all_samples
                .chunks_exact(channels)
                .map(|frame| (frame[0], frame[1]))
                .unzip();
            StereoSamples::new(left, right)
        }
    };

    Ok((stereo, spec))
}

/// Write stereo samples to a WAV file. `spec.channels` is forced to 2.
pub fn write_wav_stereo<P: AsRef<Path>>(
    path: P,
    samples: &StereoSamples,
    spec: WavSpec,
) -> Result<()> {
    check_bit_depth(spec.bits_per_sample)?;
    let stereo_spec = WavSpec { channels: 2, ..spec };
    let mut writer = WavWriter::create(path.as_ref(), hound::WavSpec::from(stereo_spec))?;
    let frames = samples
        .left
        .iter()
        .zip(&samples.right)
        .flat_map(|(&l, &r)| [l, r]);
    write_frames(&mut writer, spec.bits_per_sample, frames)?;
    writer.finalize()?;
    tracing::debug!(path = %path.as_ref().display(), frames = samples.len(), "stereo wav written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn ramp(len: usize) -> Vec<f32> {
        (0..len).map(|i| (i as f32 / len as f32) * 1.8 - 0.9).collect()
    }

    #[test]
    fn test_roundtrip_f32() {
        let samples: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin()).collect();
        let spec = WavSpec::default();

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec, spec);
        assert_eq!(loaded, samples);
    }

    #[test]
    fn test_roundtrip_i16() {
        let samples = ramp(1000);
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let (loaded, loaded_spec) = read_wav(file.path()).unwrap();
        assert_eq!(loaded_spec.sample_rate, 44100);
        assert_eq!(loaded.len(), samples.len());
        for (a, b) in samples.iter().zip(&loaded) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_roundtrip_i24() {
        let samples = ramp(500);
        let spec = WavSpec {
            bits_per_sample: 24,
            ..WavSpec::default()
        };

        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &samples, spec).unwrap();

        let (loaded, _) = read_wav(file.path()).unwrap();
        for (a, b) in samples.iter().zip(&loaded) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_integer_output_clamps() {
        let spec = WavSpec {
            bits_per_sample: 16,
            ..WavSpec::default()
        };
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &[2.0, -2.0], spec).unwrap();
        let (loaded, _) = read_wav(file.path()).unwrap();
        assert!(loaded[0] < 1.0 && loaded[0] > 0.999);
        assert_eq!(loaded[1], -1.0);
    }

    #[test]
    fn test_unsupported_bit_depth() {
        let spec = WavSpec {
            bits_per_sample: 12,
            ..WavSpec::default()
        };
        let file = NamedTempFile::new().unwrap();
        let err = write_wav(file.path(), &[0.0], spec).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)), "got {err:?}");
    }

    #[test]
    fn test_stereo_roundtrip_f32() {
        let left: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).sin()).collect();
        let right: Vec<f32> = (0..1000).map(|i| (i as f32 / 1000.0).cos()).collect();
        let samples = StereoSamples::new(left, right);

        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &samples, WavSpec::default()).unwrap();

        let (loaded, loaded_spec) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(loaded_spec.channels, 2);
        assert_eq!(loaded, samples);
    }

    #[test]
    fn test_read_mono_as_stereo() {
        let mono: Vec<f32> = (0..100).map(|i| i as f32 / 100.0).collect();
        let file = NamedTempFile::new().unwrap();
        write_wav(file.path(), &mono, WavSpec::default()).unwrap();

        let (stereo, _) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(stereo.left, mono);
        assert_eq!(stereo.right, mono);
    }

    #[test]
    fn test_read_stereo_as_mono_averages() {
        let samples = StereoSamples::new(vec![1.0, 0.5], vec![0.0, -0.5]);
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &samples, WavSpec::default()).unwrap();

        let (mono, spec) = read_wav(file.path()).unwrap();
        assert_eq!(spec.channels, 2);
        assert_eq!(mono, vec![0.5, 0.0]);
    }

    #[test]
    fn test_info() {
        let file = NamedTempFile::new().unwrap();
        let samples = StereoSamples::from_mono(vec![0.0; 24000]);
        write_wav_stereo(file.path(), &samples, WavSpec::default()).unwrap();

        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.num_frames, 24000);
        assert!((info.duration_secs - 0.5).abs() < 1e-9);
        assert_eq!(info.format, WavFormat::IeeeFloat);
    }

    #[test]
    fn test_missing_file_reports_wav_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_wav(dir.path().join("absent.wav")).unwrap_err();
        assert!(matches!(err, Error::Wav(hound::Error::IoError(_))), "got {err:?}");
    }
}
