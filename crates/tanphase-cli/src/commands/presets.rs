//! Preset commands: list, show and export.

use crate::commands::common::load_preset;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};
use tanphase_config::{Preset, factory_presets};
use tanphase_core::period_samples_for_time;

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: Option<PresetsCommand>,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List factory presets
    List,

    /// Show details of a preset
    Show {
        /// Factory preset name or TOML path
        name: String,
    },

    /// Write a preset to a TOML file for editing
    Export {
        /// Factory preset name or TOML path
        name: String,

        /// Destination file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command.unwrap_or(PresetsCommand::List) {
        PresetsCommand::List => list_presets(),
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Export {
            name,
            output,
            force,
        } => export_preset(&name, &output, force),
    }
}

fn list_presets() -> anyhow::Result<()> {
    println!("Factory Presets:");
    println!("================");
    for (key, preset) in tanphase_config::factory_preset_names()
        .into_iter()
        .zip(factory_presets())
    {
        let desc = preset.description.as_deref().unwrap_or("");
        println!("  {key:14} {:14} - {desc}", preset.name);
    }
    Ok(())
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = load_preset(name)?;
    print_preset(&preset);
    Ok(())
}

fn print_preset(preset: &Preset) {
    let period = period_samples_for_time(preset.time, preset.sample_rate as f32);
    println!("Preset: {}", preset.name);
    if let Some(desc) = &preset.description {
        println!("  {desc}");
    }
    println!();
    println!("  Sample rate: {} Hz", preset.sample_rate);
    println!(
        "  Time:        {:.2} (LFO period {:.3}s)",
        preset.time,
        period as f32 / preset.sample_rate as f32
    );
    println!("  Depth:       {:.2}", preset.depth);
    println!("  Block size:  {}", preset.block_size);
}

fn export_preset(name: &str, output: &Path, force: bool) -> anyhow::Result<()> {
    if output.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            output.display()
        );
    }
    let preset = load_preset(name)?;
    preset.save(output)?;
    println!("Exported '{}' to {}", preset.name, output.display());
    Ok(())
}
