//! Range checks for presets.
//!
//! The phaser itself clamps whatever it is given, so validation exists to
//! catch mistakes in preset files before a render rather than to protect
//! the DSP.
//!
//! # Example
//!
//! ```rust
//! use tanphase_config::{Preset, ValidationError};
//!
//! let preset = Preset::new("Bad").with_depth(1.5).with_block_size(0);
//! match preset.validate() {
//!     Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::Preset;

/// Allowed sample rates in Hz.
pub const SAMPLE_RATE_RANGE: RangeInclusive<u32> = 8000..=192_000;

/// Allowed processing block sizes in frames.
pub const BLOCK_SIZE_RANGE: RangeInclusive<usize> = 1..=4096;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A field lies outside its allowed range.
    #[error("field '{field}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the field.
        field: String,
        /// The rejected value.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// The preset name is empty or only whitespace.
    #[error("preset name is empty")]
    EmptyName,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn check_unit(field: &str, value: f32, errors: &mut Vec<ValidationError>) {
    // NaN fails `contains` and is reported too.
    if !(0.0..=1.0).contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field: field.to_string(),
            value: f64::from(value),
            min: 0.0,
            max: 1.0,
        });
    }
}

fn check_range<T>(field: &str, value: T, range: &RangeInclusive<T>, errors: &mut Vec<ValidationError>)
where
    T: PartialOrd + Copy + Into<f64>,
{
    if !range.contains(&value) {
        errors.push(ValidationError::OutOfRange {
            field: field.to_string(),
            value: value.into(),
            min: (*range.start()).into(),
            max: (*range.end()).into(),
        });
    }
}

/// Validate every field of a preset.
///
/// A single problem is returned as itself; several are wrapped in
/// [`ValidationError::Multiple`].
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    check_unit("time", preset.time, &mut errors);
    check_unit("depth", preset.depth, &mut errors);
    check_range("sample_rate", preset.sample_rate, &SAMPLE_RATE_RANGE, &mut errors);

    // usize has no lossless f64 conversion; block sizes are small.
    let block = u32::try_from(preset.block_size).unwrap_or(u32::MAX);
    let block_range = (*BLOCK_SIZE_RANGE.start() as u32)..=(*BLOCK_SIZE_RANGE.end() as u32);
    check_range("block_size", block, &block_range, &mut errors);

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
