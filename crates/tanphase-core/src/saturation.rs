//! Table-driven saturation curve with linear interpolation.
//!
//! The phaser shapes its LFO through a tanh-like curve before turning it into
//! an all-pass coefficient. Evaluating `tanh` per sample is too expensive for
//! small targets, so the curve is sampled once into [`TANH_TABLE`] and read
//! back with piecewise-linear interpolation.
//!
//! # Domain mapping
//!
//! ```text
//! input  x      : Q16, natural domain [-2, +2)
//! offset        : x + 2            -> [0, 4) = [0, 262144) raw
//! index         : offset >> 8      -> 0..=1023
//! fraction      : offset & 0xFF    -> 256 sub-steps between entries
//! output        : Q16 in [0, 1]
//! ```
//!
//! Inputs below the domain return the first entry (0.0); inputs at or above
//! the top return the last entry (1.0). Nothing is extrapolated.
//!
//! Entries hold [`VALUE_BITS`] of magnitude and are widened to full Q16
//! before interpolating, so the fractional step keeps all 16 bits.

use crate::fixed::{FRAC_BITS, Q16};
use crate::tanh_table::TANH_TABLE;

/// Number of table entries (1024 intervals plus the closing point).
pub const TABLE_SIZE: usize = 1025;

/// Fractional bits between adjacent table entries.
pub const FRACTION_BITS: u32 = 8;

/// Magnitude bits of each table entry.
pub const VALUE_BITS: u32 = 14;

/// Largest table value, representing 1.0.
pub const VALUE_MAX: i32 = 1 << VALUE_BITS;

/// Lower edge of the lookup domain (inclusive).
pub const DOMAIN_MIN: Q16 = Q16::from_int(-2);

/// Upper edge of the lookup domain (exclusive).
pub const DOMAIN_MAX: Q16 = Q16::from_int(2);

const FRACTION_MASK: u32 = (1 << FRACTION_BITS) - 1;
const WIDEN_SHIFT: u32 = FRAC_BITS - VALUE_BITS;

/// Immutable, monotone lookup table over `[-2, +2)`.
///
/// # Example
///
/// ```rust
/// use tanphase_core::{Q16, SaturationTable};
///
/// let table = SaturationTable::tanh();
/// assert_eq!(table.lookup(Q16::from_int(-3)), Q16::ZERO);
/// assert_eq!(table.lookup(Q16::from_int(2)), Q16::ONE);
///
/// let mid = table.lookup(Q16::ZERO).to_f32();
/// assert!((mid - 0.5).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SaturationTable {
    entries: &'static [i16; TABLE_SIZE],
}

impl SaturationTable {
    /// The built-in normalised tanh curve.
    pub const fn tanh() -> Self {
        Self {
            entries: &TANH_TABLE,
        }
    }

    /// Raw table entries.
    #[inline]
    pub fn entries(&self) -> &'static [i16; TABLE_SIZE] {
        self.entries
    }

    /// Entry `index` widened to Q16.
    #[inline]
    pub fn entry(&self, index: usize) -> Q16 {
        Q16::from_raw(i32::from(self.entries[index]) << WIDEN_SHIFT)
    }

    /// Look up `x` on the curve, returning a Q16 value in `[0, 1]`.
    #[inline]
    pub fn lookup(&self, x: Q16) -> Q16 {
        if x < DOMAIN_MIN {
            return self.entry(0);
        }
        if x >= DOMAIN_MAX {
            return self.entry(TABLE_SIZE - 1);
        }

        let offset = (x - DOMAIN_MIN).raw() as u32;
        let index = (offset >> FRACTION_BITS) as usize;
        let frac = (offset & FRACTION_MASK) as i32;

        let val = self.entry(index).raw();
        let diff = self.entry(index + 1).raw() - val;

        Q16::from_raw(val + ((diff * frac) >> FRACTION_BITS))
    }

    /// Q16 input that lands exactly on entry `index` (no fractional part).
    #[inline]
    pub fn input_for_index(index: usize) -> Q16 {
        DOMAIN_MIN + Q16::from_raw((index as i32) << FRACTION_BITS)
    }
}

impl Default for SaturationTable {
    fn default() -> Self {
        Self::tanh()
    }
}
