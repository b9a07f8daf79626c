//! Parameter introspection for discoverable effect parameters.
//!
//! [`ParameterInfo`] lets the CLI and host adapter list and set parameters
//! by index without knowing the concrete effect type. Every parameter is a
//! percentage described by a [`ParamDescriptor`] carrying a stable [`ParamId`].
//!
//! # Example
//!
//! ```rust
//! use tanphase_core::{ParamDescriptor, ParamId, ParameterInfo};
//!
//! struct Level {
//!     level: f32,
//! }
//!
//! impl ParameterInfo for Level {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::percent("Level", 100.0)
//!                 .with_id(ParamId(10), "level")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         if index == 0 { self.level } else { 0.0 }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if let Some(desc) = self.param_info(index) {
//!             self.level = desc.clamp(value);
//!         }
//!     }
//! }
//!
//! let mut level = Level { level: 100.0 };
//! level.set_param(0, 250.0);
//! assert_eq!(level.get_param(0), 100.0);
//! assert_eq!(level.param_info(0).map(|d| d.string_id), Some("level"));
//! ```

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter;
/// presets and host automation key on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParamId(pub u32);

/// Trait for effects that expose introspectable parameters.
///
/// Indices run `0..param_count()` and are stable for the lifetime of an
/// instance. Out-of-range indices read as `0.0` and ignore writes.
pub trait ParameterInfo {
    /// Number of exposed parameters.
    fn param_count(&self) -> usize;

    /// Descriptor for parameter `index`, or `None` if out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of parameter `index` in its display units.
    fn get_param(&self, index: usize) -> f32;

    /// Set parameter `index`, clamped to its descriptor's range.
    fn set_param(&mut self, index: usize, value: f32);
}

/// Metadata for one percentage parameter: display name, range, default and identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display.
    pub name: &'static str,

    /// Minimum value.
    pub min: f32,

    /// Maximum value.
    pub max: f32,

    /// Value on construction.
    pub default: f32,

    /// Stable numeric ID. `ParamId(0)` means unassigned.
    pub id: ParamId,

    /// Stable string ID used by presets and the CLI. Empty means unassigned.
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Percentage parameter over `0..=100`.
    pub fn percent(name: &'static str, default: f32) -> Self {
        Self {
            name,
            min: 0.0,
            max: 100.0,
            default,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Standard depth parameter (0–100%, default 50%).
    pub fn depth() -> Self {
        Self::percent("Depth", 50.0)
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use tanphase_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::depth().with_id(ParamId(101), "depth");
    /// assert_eq!(desc.id, ParamId(101));
    /// assert_eq!(desc.string_id, "depth");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Clamps a value to this parameter's range. NaN maps to the default.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Plain value to `[0, 1]`.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / range
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEffect {
        amount: f32,
        depth: f32,
    }

    impl ParameterInfo for TestEffect {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::percent("Amount", 25.0)
                        .with_id(ParamId(100), "test_amount"),
                ),
                1 => Some(ParamDescriptor::depth().with_id(ParamId(101), "test_depth")),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.amount,
                1 => self.depth,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            let Some(desc) = self.param_info(index) else {
                return;
            };
            match index {
                0 => self.amount = desc.clamp(value),
                1 => self.depth = desc.clamp(value),
                _ => {}
            }
        }
    }

    fn effect() -> TestEffect {
        TestEffect {
            amount: 25.0,
            depth: 50.0,
        }
    }

    #[test]
    fn test_param_info() {
        let effect = effect();
        assert_eq!(effect.param_count(), 2);
        let info = effect.param_info(0).expect("should have amount param");
        assert_eq!(info.name, "Amount");
        assert_eq!((info.min, info.max), (0.0, 100.0));
        assert_eq!(info.default, 25.0);
        assert!(effect.param_info(2).is_none());
    }

    #[test]
    fn test_clamping() {
        let mut effect = effect();
        effect.set_param(0, 150.0);
        assert_eq!(effect.get_param(0), 100.0);
        effect.set_param(1, -5.0);
        assert_eq!(effect.get_param(1), 0.0);
        effect.set_param(1, f32::NAN);
        assert_eq!(effect.get_param(1), 50.0);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut effect = effect();
        assert_eq!(effect.get_param(99), 0.0);
        effect.set_param(99, 42.0);
        assert_eq!(effect.get_param(0), 25.0);
        assert_eq!(effect.get_param(1), 50.0);
    }

    #[test]
    fn test_normalize() {
        let desc = ParamDescriptor::depth();
        assert_eq!(desc.normalize(0.0), 0.0);
        assert_eq!(desc.normalize(50.0), 0.5);
        assert_eq!(desc.normalize(100.0), 1.0);
        assert_eq!(desc.normalize(250.0), 1.0);
        assert_eq!(desc.normalize(f32::NAN), 0.5);
    }

    #[test]
    fn test_ids() {
        let effect = effect();
        let ids: Vec<_> = (0..effect.param_count())
            .filter_map(|i| effect.param_info(i))
            .map(|d| (d.id, d.string_id))
            .collect();
        assert_eq!(ids, [(ParamId(100), "test_amount"), (ParamId(101), "test_depth")]);
    }
}
