//! Test signal generation command.

use crate::commands::common::parse_bit_depth;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tanphase_io::{WavSpec, write_wav};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a single-sample impulse followed by silence
    Impulse {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Length in samples
        #[arg(long, default_value = "48000")]
        length: usize,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Impulse amplitude
        #[arg(long, default_value = "1.0")]
        amplitude: f32,

        /// Output bit depth (16, 24, or 32)
        #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
        bit_depth: u16,
    },

    /// Generate a sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "1.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,

        /// Output bit depth (16, 24, or 32)
        #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
        bit_depth: u16,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Impulse {
            output,
            length,
            sample_rate,
            amplitude,
            bit_depth,
        } => {
            if length == 0 {
                anyhow::bail!("impulse length must be at least 1 sample");
            }
            let samples = impulse(length, amplitude);
            write(&output, &samples, sample_rate, bit_depth)?;
            println!("Generated {length}-sample impulse: {}", output.display());
        }
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
            bit_depth,
        } => {
            if duration.is_nan() || duration <= 0.0 {
                anyhow::bail!("duration must be positive");
            }
            let samples = tone(freq, duration, sample_rate, amplitude);
            write(&output, &samples, sample_rate, bit_depth)?;
            println!(
                "Generated {freq} Hz tone, {duration}s: {}",
                output.display()
            );
        }
    }
    Ok(())
}

fn write(path: &Path, samples: &[f32], sample_rate: u32, bits_per_sample: u16) -> anyhow::Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample,
    };
    write_wav(path, samples, spec)?;
    Ok(())
}

fn impulse(length: usize, amplitude: f32) -> Vec<f32> {
    let mut samples = vec![0.0; length];
    samples[0] = amplitude;
    samples
}

fn tone(freq: f32, duration: f32, sample_rate: u32, amplitude: f32) -> Vec<f32> {
    let len = (duration * sample_rate as f32) as usize;
    let step = std::f64::consts::TAU * f64::from(freq) / f64::from(sample_rate);
    (0..len)
        .map(|n| ((n as f64 * step).sin() as f32) * amplitude)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impulse_shape() {
        let samples = impulse(4, 0.5);
        assert_eq!(samples, vec![0.5, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn tone_length_and_level() {
        let samples = tone(1000.0, 0.5, 48000, 0.8);
        assert_eq!(samples.len(), 24000);
        let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
        assert!((peak - 0.8).abs() < 1e-3);
        assert_eq!(samples[0], 0.0);
    }
}
