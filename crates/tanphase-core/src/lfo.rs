//! Fixed-point low frequency oscillator for the phaser sweep.
//!
//! A wrapping `u32` phase accumulator drives an asymmetric triangle, which is
//! then smoothed by two cascaded one-pole sections to round off its corners.
//! Everything runs in integer arithmetic so the sweep is identical on every
//! target.
//!
//! # Outputs
//!
//! | Output | Shape | Range (Q16) |
//! |--------|-------|-------------|
//! | [`Lfo::out`] | Triangle, rising over `[0, th)`, falling over `[th, 1)` | `[0, 1)` |
//! | [`Lfo::out2`] | Half-amplitude triangle through a two-pole smoother | `[0, 0.5)` |
//!
//! # Update cadence
//!
//! The increment is computed once per processing block from the "time"
//! control with [`time_to_increment`]; [`Lfo::advance`] runs once per sample.
//! The increment itself is never smoothed, so an abrupt time change makes an
//! abrupt rate change. Only the waveform smoothing softens level jumps.

use crate::fixed::{FRAC_BITS, Q16};

/// Full-scale value of the phase timer. One LFO cycle spans this many ticks.
pub const LFO_TIMER_MAX: u32 = u32::MAX;

/// Exponent (log2 seconds) of the LFO period at `time = 0`.
pub const TIME_EXP_MIN: f32 = -4.2;

/// Exponent span covered as `time` goes from 0 to 1.
pub const TIME_EXP_SPAN: f32 = 8.2;

/// Shift of each one-pole smoothing section (`y += (x - y) >> 6`).
const SMOOTH_SHIFT: u32 = 6;

/// Default phase split point (symmetric triangle).
const DEFAULT_THRESHOLD: Q16 = Q16::from_raw(1 << (FRAC_BITS - 1));

/// Fixed-point LFO state.
///
/// # Invariants
///
/// - `out` stays in `[0, 1)` and `out2` in `[0, 0.5)`.
/// - `dt > 0`, so the phase always advances.
///
/// # Example
///
/// ```rust
/// use tanphase_core::{Lfo, lfo::time_to_increment};
///
/// let mut lfo = Lfo::new();
/// lfo.set_increment(time_to_increment(0.25, 48000.0));
///
/// for _ in 0..1000 {
///     lfo.advance();
///     assert!(lfo.out2().to_f32() < 0.5);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lfo {
    /// Phase increment per sample.
    dt: u32,
    /// Phase split point between the rising and falling ramps.
    th: Q16,
    /// Phase accumulator.
    timer: u32,
    /// Raw triangle.
    out: Q16,
    /// First smoothing section.
    smooth: Q16,
    /// Smoothed, half-amplitude triangle.
    out2: Q16,
}

impl Default for Lfo {
    fn default() -> Self {
        Self::new()
    }
}

impl Lfo {
    /// Create an LFO with unit increment and a symmetric triangle.
    pub const fn new() -> Self {
        Self {
            dt: 1 << FRAC_BITS,
            th: DEFAULT_THRESHOLD,
            timer: 0,
            out: Q16::ZERO,
            smooth: Q16::ZERO,
            out2: Q16::ZERO,
        }
    }

    /// Set the per-sample phase increment. Zero is raised to one.
    #[inline]
    pub fn set_increment(&mut self, dt: u32) {
        self.dt = dt.max(1);
    }

    /// Current per-sample phase increment.
    #[inline]
    pub fn increment(&self) -> u32 {
        self.dt
    }

    /// Set the phase split point, clamped inside `(0, 1)`.
    pub fn set_threshold(&mut self, th: Q16) {
        self.th = Q16::from_raw(th.raw().clamp(1, Q16::ONE.raw() - 1));
        #[cfg(feature = "tracing")]
        if self.th != th {
            tracing::debug!("lfo_threshold: {} clamped to {}", th.raw(), self.th.raw());
        }
    }

    /// Current phase split point.
    pub fn threshold(&self) -> Q16 {
        self.th
    }

    /// Period in samples for the current increment.
    pub fn period_samples(&self) -> u32 {
        LFO_TIMER_MAX / self.dt
    }

    /// Current phase in `[0, 1)`.
    #[inline]
    pub fn phase(&self) -> Q16 {
        Q16::from_raw((self.timer >> (32 - FRAC_BITS)) as i32)
    }

    /// Raw triangle output in `[0, 1)`.
    #[inline]
    pub fn out(&self) -> Q16 {
        self.out
    }

    /// Smoothed half-amplitude output in `[0, 0.5)`.
    #[inline]
    pub fn out2(&self) -> Q16 {
        self.out2
    }

    /// Restart the phase and clear both outputs.
    pub fn reset(&mut self) {
        self.timer = 0;
        self.out = Q16::ZERO;
        self.smooth = Q16::ZERO;
        self.out2 = Q16::ZERO;
    }

    /// Advance one sample.
    #[inline]
    pub fn advance(&mut self) {
        self.timer = self.timer.wrapping_add(self.dt);

        let phase = i64::from(self.phase().raw());
        let one = i64::from(Q16::ONE.raw());
        let th = i64::from(self.th.raw());

        let tri = if phase < th {
            (phase << FRAC_BITS) / th
        } else {
            ((one - phase) << FRAC_BITS) / (one - th)
        };
        self.out = Q16::from_raw(tri.min(one - 1) as i32);

        // Two one-pole sections; each output is a convex step toward its
        // input, so both stay inside [0, 0.5).
        let half = self.out >> 1;
        self.smooth = self.smooth + ((half - self.smooth) >> SMOOTH_SHIFT);
        self.out2 = self.out2 + ((self.smooth - self.out2) >> SMOOTH_SHIFT);
    }
}

/// LFO period in samples for a normalised `time` control.
///
/// `time` in `[0, 1]` maps to a period of `2^(-4.2 + 8.2 * time)` seconds,
/// roughly 54 ms to 16 s. The period is quantised the same way on every
/// target: the Q16 seconds value and the sample rate are each pre-shifted so
/// the product fits comfortably in 32 bits.
pub fn period_samples_for_time(time: f32, sample_rate: f32) -> u32 {
    let exponent = Q16::from_f32(TIME_EXP_MIN + time.clamp(0.0, 1.0) * TIME_EXP_SPAN);
    let seconds = exponent.pow2().raw().max(0) as u64;
    let rate = sample_rate.max(0.0) as u64;
    let period = ((seconds >> 4) * (rate >> 6)) >> 6;
    period.clamp(1, u64::from(u32::MAX)) as u32
}

/// Per-sample phase increment for a normalised `time` control.
///
/// Larger `time` gives a longer period and therefore a smaller increment.
/// The result is always at least 1.
pub fn time_to_increment(time: f32, sample_rate: f32) -> u32 {
    (LFO_TIMER_MAX / period_samples_for_time(time, sample_rate)).max(1)
}
