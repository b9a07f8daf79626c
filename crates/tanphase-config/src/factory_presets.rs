//! Factory presets bundled with tanphase.
//!
//! These are embedded at compile time and always available without
//! external files.

use std::path::Path;

use crate::{ConfigError, Preset};

/// Factory preset names, in listing order.
pub static FACTORY_PRESET_NAMES: &[&str] = &["default", "slow-sweep", "fast-warble", "deep"];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("default", DEFAULT_PRESET),
    ("slow-sweep", SLOW_SWEEP_PRESET),
    ("fast-warble", FAST_WARBLE_PRESET),
    ("deep", DEEP_PRESET),
];

/// Power-on settings.
const DEFAULT_PRESET: &str = r#"
name = "Default"
description = "Power-on settings: moderate rate, half depth"
sample_rate = 48000
time = 0.25
depth = 0.5
block_size = 64
"#;

const SLOW_SWEEP_PRESET: &str = r#"
name = "Slow Sweep"
description = "Long, gentle sweep"
sample_rate = 48000
time = 0.8
depth = 0.6
block_size = 64
"#;

const FAST_WARBLE_PRESET: &str = r#"
name = "Fast Warble"
description = "Quick, shallow vibrato-like wobble"
sample_rate = 48000
time = 0.05
depth = 0.35
block_size = 64
"#;

const DEEP_PRESET: &str = r#"
name = "Deep"
description = "Full-depth sweep at a medium rate"
sample_rate = 48000
time = 0.5
depth = 1.0
block_size = 64
"#;

/// Get all factory presets.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by key or display name.
///
/// The match is case-insensitive, so `"deep"`, `"Deep"` and `"slow sweep"`
/// style display names all resolve.
///
/// # Example
///
/// ```rust
/// use tanphase_config::get_factory_preset;
///
/// let preset = get_factory_preset("slow-sweep").unwrap();
/// assert_eq!(preset.name, "Slow Sweep");
/// assert!(get_factory_preset("Slow Sweep").is_some());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    let name_lower = name.to_lowercase();

    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(&name_lower))
    {
        return Preset::from_toml(toml).ok();
    }

    factory_presets()
        .into_iter()
        .find(|preset| preset.name.to_lowercase() == name_lower)
}

/// Get the factory preset keys.
pub fn factory_preset_names() -> Vec<&'static str> {
    FACTORY_PRESETS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a name resolves to a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}

/// Resolve a preset by factory name, falling back to a TOML file path.
///
/// Returns [`ConfigError::PresetNotFound`] when the name is neither a
/// factory preset nor an existing file.
pub fn find_preset(name: &str) -> Result<Preset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }

    let path = Path::new(name);
    if path.is_file() {
        return Preset::load(path);
    }

    Err(ConfigError::PresetNotFound(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_presets_load() {
        let presets = factory_presets();
        assert_eq!(presets.len(), FACTORY_PRESET_NAMES.len());
    }

    #[test]
    fn test_get_factory_preset() {
        let deep = get_factory_preset("deep").unwrap();
        assert_eq!(deep.name, "Deep");
        assert_eq!(deep.depth, 1.0);

        assert!(get_factory_preset("DEEP").is_some());
        assert!(get_factory_preset("Fast Warble").is_some());
        assert!(get_factory_preset("nonexistent").is_none());
    }

    #[test]
    fn test_factory_preset_names() {
        assert_eq!(factory_preset_names(), FACTORY_PRESET_NAMES.to_vec());
    }

    #[test]
    fn test_all_factory_presets_valid() {
        for preset in factory_presets() {
            assert!(
                preset.validate().is_ok(),
                "factory preset '{}' failed validation",
                preset.name
            );
        }
    }

    #[test]
    fn test_default_matches_power_on() {
        let preset = get_factory_preset("default").unwrap();
        let power_on = crate::Preset::new(preset.name.clone());
        assert_eq!(preset.time, power_on.time);
        assert_eq!(preset.depth, power_on.depth);
        assert_eq!(preset.sample_rate, power_on.sample_rate);
        assert_eq!(preset.block_size, power_on.block_size);
    }

    #[test]
    fn test_is_factory_preset() {
        assert!(is_factory_preset("slow-sweep"));
        assert!(is_factory_preset("Slow Sweep"));
        assert!(!is_factory_preset("my-preset"));
    }

    #[test]
    fn test_find_preset_by_factory_name() {
        let preset = find_preset("Slow Sweep").unwrap();
        assert_eq!(preset.time, 0.8);
    }

    #[test]
    fn test_find_preset_unknown_name() {
        let err = find_preset("no-such-preset").unwrap_err();
        assert!(matches!(err, ConfigError::PresetNotFound(ref name) if name == "no-such-preset"));
        assert_eq!(err.to_string(), "preset not found: no-such-preset");
    }
}
