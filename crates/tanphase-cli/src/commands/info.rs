//! Phaser and WAV file information.

use clap::Args;
use std::path::{Path, PathBuf};
use tanphase_core::saturation::{DOMAIN_MAX, DOMAIN_MIN, TABLE_SIZE, VALUE_BITS};
use tanphase_core::{ParameterInfo, SaturationTable, period_samples_for_time, time_to_increment};
use tanphase_effects::Phaser;
use tanphase_io::{WavFormat, read_wav_info};

/// Display phaser details and, optionally, WAV file metadata.
#[derive(Args)]
pub struct InfoArgs {
    /// Sample rate used for the LFO timing table
    #[arg(long, default_value = "48000")]
    sample_rate: u32,

    /// Optional WAV file to describe
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    print_parameters();
    println!();
    print_lfo_timing(args.sample_rate as f32);
    println!();
    print_table_summary();

    if let Some(file) = &args.file {
        println!();
        print_wav_info(file)?;
    }
    Ok(())
}

fn print_parameters() {
    let phaser = Phaser::new(48000.0);
    println!("Parameters:");
    println!(
        "  {:<4} {:<8} {:<8} {:<12} {:>8}",
        "#", "Name", "Key", "Range", "Default"
    );
    for index in 0..phaser.param_count() {
        if let Some(desc) = phaser.param_info(index) {
            println!(
                "  {:<4} {:<8} {:<8} {:<12} {:>7}%",
                desc.id.0,
                desc.name,
                desc.string_id,
                format!("{}-{}%", desc.min, desc.max),
                desc.default
            );
        }
    }
}

fn print_lfo_timing(sample_rate: f32) {
    println!("LFO timing at {sample_rate} Hz:");
    println!("  {:<6} {:>10} {:>10} {:>10}", "time", "period", "seconds", "increment");
    for step in 0..=4 {
        let time = step as f32 * 0.25;
        let period = period_samples_for_time(time, sample_rate);
        println!(
            "  {:<6.2} {:>10} {:>10.3} {:>10}",
            time,
            period,
            period as f32 / sample_rate,
            time_to_increment(time, sample_rate)
        );
    }
}

fn print_table_summary() {
    let table = SaturationTable::tanh();
    let mid = TABLE_SIZE / 2;
    println!("Saturation table:");
    println!("  Entries:  {TABLE_SIZE} ({VALUE_BITS}-bit values)");
    println!(
        "  Domain:   [{}, {})",
        DOMAIN_MIN.to_f32(),
        DOMAIN_MAX.to_f32()
    );
    println!(
        "  Curve:    0.5 + 0.5 * tanh(x) / tanh(2), first {:.4}, centre {:.4}, last {:.4}",
        table.entry(0).to_f32(),
        table.entry(mid).to_f32(),
        table.entry(TABLE_SIZE - 1).to_f32()
    );
}

fn print_wav_info(path: &Path) -> anyhow::Result<()> {
    let info = read_wav_info(path)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", path.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );
    Ok(())
}
