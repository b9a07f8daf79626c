//! Signed 16.16 fixed-point arithmetic.
//!
//! [`Q16`] is the numeric currency of the modulation path: the LFO phase,
//! its smoothed outputs, the depth scaling and the saturation-table lookup
//! all run in Q16.16 so the sweep is bit-reproducible across targets.
//!
//! # Representation
//!
//! A `Q16` wraps an `i32` whose low [`FRAC_BITS`] bits are the fraction:
//!
//! ```text
//! value = raw / 65536
//! range = [-32768.0, 32768.0)   resolution = 1/65536
//! ```
//!
//! Conversions from `f32` saturate at the range edges. Multiplication widens
//! to `i64` and saturates on the way back, so products of in-range values
//! never wrap.
//!
//! # Example
//!
//! ```rust
//! use tanphase_core::Q16;
//!
//! let quarter = Q16::from_f32(0.25);
//! assert_eq!(quarter.raw(), 0x4000);
//! assert_eq!((quarter + quarter).to_f32(), 0.5);
//! assert_eq!(Q16::from_int(3).pow2().to_f32(), 8.0);
//! ```

use core::ops::{Add, Neg, Shl, Shr, Sub};

/// Number of fractional bits in a [`Q16`].
pub const FRAC_BITS: u32 = 16;

/// Signed 16.16 fixed-point value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q16(i32);

impl Q16 {
    /// 0.0
    pub const ZERO: Self = Self(0);
    /// 1.0
    pub const ONE: Self = Self(1 << FRAC_BITS);
    /// Largest representable value (just under 32768.0).
    pub const MAX: Self = Self(i32::MAX);
    /// Smallest representable value (-32768.0).
    pub const MIN: Self = Self(i32::MIN);

    /// Wrap a raw 16.16 integer.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw 16.16 integer.
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whole-number value.
    #[inline]
    pub const fn from_int(value: i16) -> Self {
        Self((value as i32) << FRAC_BITS)
    }

    /// Convert from `f32`, truncating toward zero.
    ///
    /// Values outside the representable range saturate; NaN maps to zero.
    #[inline]
    pub fn from_f32(value: f32) -> Self {
        // `as` from float to int saturates and maps NaN to 0.
        Self((value * Self::ONE.0 as f32) as i32)
    }

    /// Convert to `f32`.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE.0 as f32
    }

    /// Saturating 16.16 multiply.
    #[inline]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        let wide = (i64::from(self.0) * i64::from(rhs.0)) >> FRAC_BITS;
        Self(saturate_i64(wide))
    }

    /// Multiply as integers and shift right by `shift`, without the implicit
    /// 16-bit renormalisation of [`saturating_mul`](Self::saturating_mul).
    ///
    /// This is the `(a * b) >> shift` idiom of hand-written fixed-point code,
    /// computed in 64 bits and saturated.
    #[inline]
    pub fn mul_shr(self, rhs: Self, shift: u32) -> Self {
        let wide = (i64::from(self.0) * i64::from(rhs.0)) >> shift;
        Self(saturate_i64(wide))
    }

    /// Saturating addition.
    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Integer part (floor).
    #[inline]
    pub const fn floor_int(self) -> i32 {
        self.0 >> FRAC_BITS
    }

    /// Fractional part in `[0, 1)`.
    #[inline]
    pub const fn fract(self) -> Self {
        Self(self.0 & (Self::ONE.0 - 1))
    }

    /// Base-2 exponential, `2^self`.
    ///
    /// The integer part of the exponent becomes a shift; the fractional part
    /// is evaluated once in floating point. Results that would exceed
    /// [`Q16::MAX`] saturate; results below one LSB flush to zero.
    ///
    /// ```rust
    /// use tanphase_core::Q16;
    ///
    /// assert_eq!(Q16::ZERO.pow2(), Q16::ONE);
    /// assert_eq!(Q16::from_int(-1).pow2().to_f32(), 0.5);
    /// assert_eq!(Q16::from_int(20).pow2(), Q16::MAX);
    /// ```
    pub fn pow2(self) -> Self {
        let int = self.floor_int();
        let frac = self.fract().to_f32();
        // 2^frac in [1, 2), held in Q16
        let mantissa = i64::from(Self::from_f32(libm::exp2f(frac)).0);

        if int >= 15 {
            return Self::MAX;
        }
        if int <= -(FRAC_BITS as i32) - 1 {
            return Self::ZERO;
        }
        let scaled = if int >= 0 {
            mantissa << int
        } else {
            mantissa >> (-int)
        };
        Self(saturate_i64(scaled))
    }
}

#[inline]
fn saturate_i64(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Add for Q16 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl Sub for Q16 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Q16 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

impl Shr<u32> for Q16 {
    type Output = Self;

    #[inline]
    fn shr(self, rhs: u32) -> Self {
        Self(self.0 >> rhs)
    }
}

impl Shl<u32> for Q16 {
    type Output = Self;

    #[inline]
    fn shl(self, rhs: u32) -> Self {
        Self(self.0 << rhs)
    }
}

impl From<i16> for Q16 {
    fn from(value: i16) -> Self {
        Self::from_int(value)
    }
}
