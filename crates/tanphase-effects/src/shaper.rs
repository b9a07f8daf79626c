//! LFO-to-coefficient mapping.
//!
//! Turns the LFO's smoothed output into the all-pass coefficient `b0` for
//! the current sample:
//!
//! ```text
//! x   = ((out2 - 0.02 - 0.25) * depth) >> 14        (Q16, ~[-1.08, 0.92] at depth 1)
//! s   = lookup(x)                                  (Q16, [0, 1])
//! b0  = (s - 0.5) * 1.89 + 0.025                   (f32, ~[-0.76, 0.74] at depth 1)
//! ```
//!
//! The `>> 14` applied to a Q16·Q16 product leaves the result in Q16 scaled
//! by four, which is what stretches the half-amplitude LFO over most of the
//! table's `[-2, 2)` domain. The `+0.025` offset tilts the sweep slightly
//! toward positive coefficients.

use tanphase_core::{Q16, SaturationTable};

/// Small bias subtracted from the LFO before centring.
pub const LFO_BIAS: Q16 = Q16::from_raw(1310);

/// Centre of the LFO's smoothed output.
pub const LFO_CENTER: Q16 = Q16::from_raw(1 << 14);

/// Right shift applied to the `(lfo * depth)` product.
pub const DEPTH_SHIFT: u32 = 14;

/// Span of the coefficient around its centre.
pub const COEFF_SCALE: f32 = 1.89;

/// Constant tilt added to every coefficient.
pub const COEFF_OFFSET: f32 = 0.025;

/// Maps LFO output and depth to an all-pass coefficient.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModulationShaper {
    table: SaturationTable,
}

impl ModulationShaper {
    /// Shaper over the built-in tanh table.
    pub const fn new() -> Self {
        Self {
            table: SaturationTable::tanh(),
        }
    }

    /// Table input for an LFO value and depth, before the lookup.
    #[inline]
    pub fn table_input(&self, lfo: Q16, depth: Q16) -> Q16 {
        (lfo - LFO_BIAS - LFO_CENTER).mul_shr(depth, DEPTH_SHIFT)
    }

    /// All-pass coefficient for this sample.
    ///
    /// ```rust
    /// use tanphase_core::Q16;
    /// use tanphase_effects::ModulationShaper;
    ///
    /// let shaper = ModulationShaper::new();
    /// // Zero depth parks the sweep at the centre of the curve.
    /// let b0 = shaper.coefficient(Q16::from_f32(0.4), Q16::ZERO);
    /// assert!((b0 - 0.025).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn coefficient(&self, lfo: Q16, depth: Q16) -> f32 {
        let shaped = self.table.lookup(self.table_input(lfo, depth));
        (shaped.to_f32() - 0.5) * COEFF_SCALE + COEFF_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_depth_is_centred() {
        let shaper = ModulationShaper::new();
        for raw in [0, 0x1000, 0x4000, 0x7FFF] {
            let input = shaper.table_input(Q16::from_raw(raw), Q16::ZERO);
            assert_eq!(input, Q16::ZERO);
        }
    }

    #[test]
    fn test_full_depth_range() {
        let shaper = ModulationShaper::new();
        let lo = shaper.table_input(Q16::ZERO, Q16::ONE).to_f32();
        let hi = shaper.table_input(Q16::from_raw(0x7FFF), Q16::ONE).to_f32();
        assert!((lo - (-1.08)).abs() < 0.01, "lo {lo}");
        assert!((hi - 0.92).abs() < 0.01, "hi {hi}");
    }

    #[test]
    fn test_coefficient_is_bounded() {
        let shaper = ModulationShaper::new();
        for depth in [0.0, 0.25, 0.5, 1.0] {
            let depth = Q16::from_f32(depth);
            for raw in (0..0x8000).step_by(64) {
                let b0 = shaper.coefficient(Q16::from_raw(raw), depth);
                assert!(b0 > -0.94 && b0 < 0.94, "b0 {b0}");
            }
        }
    }

    #[test]
    fn test_coefficient_rises_with_lfo() {
        let shaper = ModulationShaper::new();
        let depth = Q16::from_f32(0.8);
        let mut prev = f32::MIN;
        for raw in (0..0x8000).step_by(256) {
            let b0 = shaper.coefficient(Q16::from_raw(raw), depth);
            assert!(b0 >= prev);
            prev = b0;
        }
    }
}
