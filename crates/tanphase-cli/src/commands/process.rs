//! File-based phaser processing command.

use crate::commands::common::{load_preset, parse_bit_depth, parse_unit};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tanphase_config::Preset;
use tanphase_core::{f32_to_q31, linear_to_db};
use tanphase_effects::{ModFx, ModFxParam};
use tanphase_io::{StereoSamples, WavSpec, read_wav_stereo, write_wav_stereo};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (always stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset TOML file
    #[arg(short, long, conflicts_with = "factory")]
    preset: Option<PathBuf>,

    /// Factory preset name
    #[arg(short, long)]
    factory: Option<String>,

    /// LFO time, 0-1 (larger is slower). Overrides the preset.
    #[arg(short, long, value_parser = parse_unit)]
    time: Option<f32>,

    /// Sweep depth, 0-1. Overrides the preset.
    #[arg(short, long, value_parser = parse_unit)]
    depth: Option<f32>,

    /// Frames per processing block. Overrides the preset.
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32", value_parser = parse_bit_depth)]
    bit_depth: u16,
}

impl ProcessArgs {
    /// Preset plus command-line overrides, at the input's sample rate.
    fn settings(&self, sample_rate: u32) -> anyhow::Result<Preset> {
        let mut settings = match (&self.preset, &self.factory) {
            (Some(path), _) => Preset::load(path)?,
            (None, Some(name)) => load_preset(name)?,
            (None, None) => Preset::new("Default"),
        };
        if let Some(time) = self.time {
            settings.time = time;
        }
        if let Some(depth) = self.depth {
            settings.depth = depth;
        }
        if let Some(block_size) = self.block_size {
            settings.block_size = block_size;
        }
        settings.sample_rate = sample_rate;
        settings.validate()?;
        Ok(settings)
    }
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (input, spec) = read_wav_stereo(&args.input)?;
    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        input.len(),
        spec.channels,
        spec.sample_rate,
        input.len() as f32 / spec.sample_rate as f32
    );
    if spec.channels > 1 {
        println!("  Only the left channel is processed.");
    }

    let settings = args.settings(spec.sample_rate)?;
    println!(
        "Phaser: {} (time {:.2}, depth {:.2}, block {})",
        settings.name, settings.time, settings.depth, settings.block_size
    );
    tracing::info!(
        preset = %settings.name,
        time = settings.time,
        depth = settings.depth,
        block_size = settings.block_size,
        "processing"
    );

    let output = render(&input, &settings)?;

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input.rms()),
        linear_to_db(input.peak())
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output.rms()),
        linear_to_db(output.peak())
    );

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };
    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}

/// Drive the host adapter over the whole input, one block at a time.
fn render(input: &StereoSamples, settings: &Preset) -> anyhow::Result<StereoSamples> {
    let mut fx = ModFx::on_load(settings.sample_rate as f32);
    fx.on_parameter_change(ModFxParam::Time as usize, f32_to_q31(settings.time));
    fx.on_parameter_change(ModFxParam::Depth as usize, f32_to_q31(settings.depth));

    let frames = input.len();
    let block = settings.block_size;
    let interleaved = input.to_interleaved();
    let mut main_out = vec![0.0; interleaved.len()];
    let mut sub_out = vec![0.0; 2 * block];

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    for (block_in, block_out) in interleaved
        .chunks(2 * block)
        .zip(main_out.chunks_mut(2 * block))
    {
        let n = block_in.len() / 2;
        fx.on_process_block(block_in, block_out, block_in, &mut sub_out, n);
        pb.inc(n as u64);
    }
    pb.finish_and_clear();

    Ok(StereoSamples::from_interleaved(&main_out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tanphase_effects::Phaser;
    use tanphase_core::Effect;

    #[test]
    fn render_matches_direct_phaser() {
        let settings = Preset::new("t").with_time(0.5).with_depth(1.0).with_block_size(100);
        let mono: Vec<f32> = (0..1000).map(|n| ((n as f32) * 0.02).sin() * 0.5).collect();
        let output = render(&StereoSamples::from_mono(mono.clone()), &settings).unwrap();

        let mut phaser = Phaser::new(48000.0);
        phaser.set_time(0.5);
        phaser.set_depth(1.0);
        for (n, &x) in mono.iter().enumerate() {
            let y = phaser.process(x);
            assert!((output.left[n] - y).abs() < 1e-6, "frame {n}");
            assert_eq!(output.left[n], output.right[n]);
        }
    }
}
