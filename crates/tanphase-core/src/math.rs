//! Scalar helpers shared by the processing path.
//!
//! - [`soft_clip`] / [`soft_limit`] - cubic soft clipper and the output limiter built on it
//! - [`flush_denormal`] - keep feedback state out of the subnormal range
//! - [`clip01`] / [`q31_to_f32`] / [`f32_to_q31`] - host value conversions
//! - [`linear_to_db`] - level reporting

use libm::{copysignf, fabsf, logf};

/// Cubic soft clipper.
///
/// Clamps `x` to `[-1, 1]` and bends it with `x - c·x³`. For `0 <= c <= 1/3`
/// the curve is odd, monotone, and maps `[0, ∞)` onto `[0, 1 - c]`.
///
/// ```rust
/// use tanphase_core::soft_clip;
///
/// assert_eq!(soft_clip(0.05, 0.0), 0.0);
/// assert!((soft_clip(0.05, 10.0) - 0.95).abs() < 1e-6);
/// assert_eq!(soft_clip(0.05, -0.5), -soft_clip(0.05, 0.5));
/// ```
#[inline]
pub fn soft_clip(c: f32, x: f32) -> f32 {
    let x = x.clamp(-1.0, 1.0);
    x - c * (x * x * x)
}

/// Soft limiter with a linear region below the knee.
///
/// With `th = limit - 1 + c`, samples with `|x| < th` pass untouched. Above
/// that, the excess magnitude goes through [`soft_clip`] and the sign is
/// restored, so the output climbs smoothly toward `limit` and never passes
/// it. `limit` is expected to be at least 1.
///
/// ```rust
/// use tanphase_core::soft_limit;
///
/// assert_eq!(soft_limit(0.05, 0.01, 1.0), 0.01);
/// assert!(soft_limit(0.05, 4.0, 1.0) <= 1.0);
/// assert!(soft_limit(0.05, -4.0, 1.0) >= -1.0);
/// ```
#[inline]
pub fn soft_limit(c: f32, x: f32, limit: f32) -> f32 {
    let th = limit - 1.0 + c;
    let mag = fabsf(x);
    if mag < th {
        x
    } else {
        copysignf(th + soft_clip(c, mag - th), x)
    }
}

/// Flush subnormal (denormalized) floats to zero.
///
/// Feedback paths that decay toward silence otherwise end up in the
/// subnormal range, which is very slow on most FPUs. Anything below 1e-20
/// is treated as zero.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Clamp to `[0, 1]`. NaN becomes 0.
#[inline]
pub fn clip01(x: f32) -> f32 {
    if x > 0.0 { x.min(1.0) } else { 0.0 }
}

/// Convert a Q31 platform value to `f32` in `[-1, 1)`.
#[inline]
pub fn q31_to_f32(value: i32) -> f32 {
    value as f32 / 2_147_483_648.0
}

/// Convert `f32` to Q31, saturating outside `[-1, 1)`.
#[inline]
pub fn f32_to_q31(value: f32) -> i32 {
    (value * 2_147_483_648.0) as i32
}

/// Convert linear gain to decibels, floored at -200 dB.
///
/// ```rust
/// use tanphase_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}
