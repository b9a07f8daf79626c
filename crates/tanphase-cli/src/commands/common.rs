//! Shared CLI helpers used across multiple commands.

use tanphase_config::{Preset, find_preset};
use tanphase_io::SUPPORTED_BIT_DEPTHS;

/// Load a preset by factory name, falling back to a TOML file path.
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    Ok(find_preset(name)?)
}

/// clap `value_parser` for output bit depths.
pub fn parse_bit_depth(s: &str) -> Result<u16, String> {
    let bits: u16 = s
        .parse()
        .map_err(|_| format!("invalid bit depth '{s}'"))?;
    if SUPPORTED_BIT_DEPTHS.contains(&bits) {
        Ok(bits)
    } else {
        Err(format!("unsupported bit depth {bits} (expected 16, 24 or 32)"))
    }
}

/// clap `value_parser` for normalised controls.
pub fn parse_unit(s: &str) -> Result<f32, String> {
    let value: f32 = s.parse().map_err(|_| format!("invalid number '{s}'"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is outside [0, 1]"))
    }
}
