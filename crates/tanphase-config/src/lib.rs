//! Configuration and preset management for the tanphase phaser.
//!
//! A preset is a small TOML file holding the two controls (`time`, `depth`)
//! plus the sample rate and block size a render should use.
//!
//! # Features
//!
//! - **Presets**: load and save TOML presets, apply them to a [`Phaser`] or
//!   a shared [`PhaserParams`](tanphase_effects::PhaserParams) store
//! - **Validation**: range checks with every offending field reported
//! - **Factory Presets**: built-in settings that need no files on disk
//!
//! # Example
//!
//! ```rust,no_run
//! use tanphase_config::{Preset, get_factory_preset};
//!
//! let preset = Preset::load("my_sweep.toml").unwrap();
//! let mut phaser = preset.build_phaser();
//!
//! let deep = get_factory_preset("deep").unwrap();
//! deep.apply_to(&mut phaser);
//! ```
//!
//! [`Phaser`]: tanphase_effects::Phaser

mod error;
mod preset;

/// Preset range validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_preset_names, factory_presets, find_preset,
    get_factory_preset, is_factory_preset,
};
pub use preset::Preset;
pub use validation::{ValidationError, ValidationResult, validate_preset};
