//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use tanphase_core::Effect;
use tanphase_effects::{Phaser, PhaserParams};

use crate::error::ConfigError;
use crate::validation::{self, ValidationResult};

const DEFAULT_SAMPLE_RATE: u32 = 48000;
const DEFAULT_BLOCK_SIZE: usize = 64;

/// Saved phaser settings.
///
/// # TOML Format
///
/// ```toml
/// name = "Slow Sweep"
/// description = "Long, gentle sweep"
/// sample_rate = 48000
/// time = 0.8
/// depth = 0.6
/// block_size = 64
/// ```
///
/// Every field but `name` is optional and falls back to the phaser's
/// power-on value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint in Hz. Renders may override it with the input's rate.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// LFO time control in `[0, 1]`. Larger is slower.
    #[serde(default = "default_time")]
    pub time: f32,

    /// Sweep depth in `[0, 1]`.
    #[serde(default = "default_depth")]
    pub depth: f32,

    /// Frames per processing block.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_time() -> f32 {
    tanphase_effects::params::DEFAULT_TIME
}

fn default_depth() -> f32 {
    tanphase_effects::params::DEFAULT_DEPTH
}

fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

impl Preset {
    /// Create a preset holding the power-on controls.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            time: default_time(),
            depth: default_depth(),
            block_size: default_block_size(),
        }
    }

    /// Create a preset with a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the time control.
    pub fn with_time(mut self, time: f32) -> Self {
        self.time = time;
        self
    }

    /// Set the depth control.
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the processing block size.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let preset: Preset = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), name = %preset.name, "preset loaded");
        Ok(preset)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        tracing::debug!(path = %path.display(), name = %self.name, "preset saved");
        Ok(())
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> ValidationResult<()> {
        validation::validate_preset(self)
    }

    /// Write the controls into a shared store. Values are clamped by the store.
    pub fn apply(&self, params: &PhaserParams) {
        params.set_time(self.time);
        params.set_depth(self.depth);
    }

    /// Apply sample rate and controls to an existing phaser.
    pub fn apply_to(&self, phaser: &mut Phaser) {
        phaser.set_sample_rate(self.sample_rate as f32);
        phaser.set_time(self.time);
        phaser.set_depth(self.depth);
    }

    /// Build a fresh phaser configured by this preset.
    pub fn build_phaser(&self) -> Phaser {
        let mut phaser = Phaser::new(self.sample_rate as f32);
        phaser.set_time(self.time);
        phaser.set_depth(self.depth);
        phaser
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_new() {
        let preset = Preset::new("Test Preset");
        assert_eq!(preset.name, "Test Preset");
        assert!(preset.description.is_none());
        assert_eq!(preset.sample_rate, 48000);
        assert_eq!(preset.time, 0.25);
        assert_eq!(preset.depth, 0.5);
        assert_eq!(preset.block_size, 64);
    }

    #[test]
    fn test_preset_builder() {
        let preset = Preset::new("My Preset")
            .with_description("A test preset")
            .with_sample_rate(44100)
            .with_time(0.8)
            .with_depth(0.6)
            .with_block_size(128);

        assert_eq!(preset.description, Some("A test preset".to_string()));
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.time, 0.8);
        assert_eq!(preset.depth, 0.6);
        assert_eq!(preset.block_size, 128);
    }

    #[test]
    fn test_preset_from_toml() {
        let toml = r#"
name = "Slow Sweep"
description = "Long, gentle sweep"
sample_rate = 44100
time = 0.8
depth = 0.6
block_size = 32
"#;

        let preset = Preset::from_toml(toml).unwrap();
        assert_eq!(preset.name, "Slow Sweep");
        assert_eq!(preset.description.as_deref(), Some("Long, gentle sweep"));
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.time, 0.8);
        assert_eq!(preset.depth, 0.6);
        assert_eq!(preset.block_size, 32);
    }

    #[test]
    fn test_minimal_toml() {
        let preset = Preset::from_toml("name = \"Minimal\"").unwrap();
        assert_eq!(preset, Preset::new("Minimal"));
    }

    #[test]
    fn test_missing_name_is_error() {
        assert!(matches!(
            Preset::from_toml("time = 0.5"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_preset_to_toml() {
        let toml = Preset::new("Test")
            .with_description("Test description")
            .with_depth(0.75)
            .to_toml()
            .unwrap();

        assert!(toml.contains("name = \"Test\""));
        assert!(toml.contains("description = \"Test description\""));
        assert!(toml.contains("depth = 0.75"));
        assert!(toml.contains("block_size = 64"));
    }

    #[test]
    fn test_to_toml_skips_missing_description() {
        let toml = Preset::new("Bare").to_toml().unwrap();
        assert!(!toml.contains("description"));
    }

    #[test]
    fn test_apply_writes_shared_params() {
        let params = PhaserParams::default();
        Preset::new("p").with_time(0.9).with_depth(0.1).apply(&params);
        assert!((params.time() - 0.9).abs() < 1e-6);
        assert!((params.depth() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_apply_clamps_out_of_range() {
        let params = PhaserParams::default();
        Preset::new("p").with_time(4.0).with_depth(-1.0).apply(&params);
        assert_eq!(params.time(), 1.0);
        assert_eq!(params.depth(), 0.0);
    }

    #[test]
    fn test_build_and_apply_agree() {
        let preset = Preset::new("p")
            .with_sample_rate(44100)
            .with_time(0.4)
            .with_depth(0.9);

        let mut built = preset.build_phaser();
        let mut applied = Phaser::new(48000.0);
        preset.apply_to(&mut applied);

        assert_eq!(built.sample_rate(), 44100.0);
        assert_eq!(applied.sample_rate(), 44100.0);
        for n in 0..512 {
            let x = ((n as f32) * 0.03).sin() * 0.5;
            assert_eq!(built.process(x), applied.process(x));
        }
    }

    #[test]
    fn test_preset_default() {
        assert_eq!(Preset::default().name, "Untitled");
    }
}
