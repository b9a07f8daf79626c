//! Input gain ramp for click-free starts.
//!
//! After a reset the phaser mutes its input and lets it fade back in, so the
//! first block never starts with a hard step into a cleared feedback loop.
//! [`GainRamp`] is a one-pole approach to unity with a fixed coefficient and
//! a snap point:
//!
//! ```text
//! g < SNAP:   g += (1 - g) · COEFF
//! otherwise:  g  = 1
//! ```
//!
//! With `COEFF = 1/16` the gap to unity shrinks by 15/16 each sample, so after
//! `n` samples `g = 1 - (15/16)^n`. The snap lands after about 170 samples,
//! roughly 3.5 ms at 48 kHz.
//!
//! ```rust
//! use tanphase_core::GainRamp;
//!
//! let mut ramp = GainRamp::new();
//! assert_eq!(ramp.get(), 0.0);
//! assert_eq!(ramp.advance(), 0.0625);
//!
//! for _ in 0..1000 {
//!     ramp.advance();
//! }
//! assert_eq!(ramp.get(), 1.0);
//! ```

/// Per-sample approach coefficient.
pub const RAMP_COEFF: f32 = 0.0625;

/// Level at which the ramp snaps to exactly 1.0.
pub const RAMP_SNAP: f32 = 0.999_98;

/// Input gain ramp from silence to unity.
///
/// # Invariants
///
/// - The value is in `[0, 1]` and never decreases between resets.
/// - Once it reaches 1.0 it stays there.
#[derive(Debug, Clone, Default)]
pub struct GainRamp {
    current: f32,
}

impl GainRamp {
    /// Create a ramp at zero.
    pub const fn new() -> Self {
        Self { current: 0.0 }
    }

    /// Advance one sample and return the new gain.
    #[inline]
    pub fn advance(&mut self) -> f32 {
        if self.current < RAMP_SNAP {
            self.current += (1.0 - self.current) * RAMP_COEFF;
        } else {
            self.current = 1.0;
        }
        self.current
    }

    /// Current gain without advancing.
    #[inline]
    pub fn get(&self) -> f32 {
        self.current
    }

    /// True once the ramp has snapped to unity.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current >= 1.0
    }

    /// Return to zero.
    pub fn reset(&mut self) {
        self.current = 0.0;
    }
}
