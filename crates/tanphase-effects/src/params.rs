//! Lock-free parameter store shared between control and audio threads.
//!
//! [`PhaserParams`] keeps `time` and `depth` as `f32` bit patterns in
//! `AtomicU32`s. A control thread writes with [`set_time`](PhaserParams::set_time)
//! and [`set_depth`](PhaserParams::set_depth); the audio thread reads both once
//! per block. `Relaxed` ordering is enough: each value is independent, and a
//! block that sees a one-block-stale value is indistinguishable from a
//! control change that arrived slightly later.

use core::sync::atomic::{AtomicU32, Ordering};

use tanphase_core::clip01;

/// Default `time` on load.
pub const DEFAULT_TIME: f32 = 0.25;

/// Default `depth` on load.
pub const DEFAULT_DEPTH: f32 = 0.5;

/// Normalised phaser controls, each in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use tanphase_effects::PhaserParams;
///
/// let params = PhaserParams::default();
/// assert_eq!(params.time(), 0.25);
///
/// params.set_depth(3.0);
/// assert_eq!(params.depth(), 1.0);
/// ```
#[derive(Debug)]
pub struct PhaserParams {
    time: AtomicU32,
    depth: AtomicU32,
}

impl PhaserParams {
    /// Create a store with the given values, clamped to `[0, 1]`.
    pub fn new(time: f32, depth: f32) -> Self {
        Self {
            time: AtomicU32::new(clip01(time).to_bits()),
            depth: AtomicU32::new(clip01(depth).to_bits()),
        }
    }

    /// LFO time control. Larger is slower.
    #[inline]
    pub fn time(&self) -> f32 {
        f32::from_bits(self.time.load(Ordering::Relaxed))
    }

    /// Modulation depth and wet amount.
    #[inline]
    pub fn depth(&self) -> f32 {
        f32::from_bits(self.depth.load(Ordering::Relaxed))
    }

    /// Set `time`, clamped to `[0, 1]`. NaN becomes 0.
    #[inline]
    pub fn set_time(&self, value: f32) {
        self.time.store(clip01(value).to_bits(), Ordering::Relaxed);
    }

    /// Set `depth`, clamped to `[0, 1]`. NaN becomes 0.
    #[inline]
    pub fn set_depth(&self, value: f32) {
        self.depth.store(clip01(value).to_bits(), Ordering::Relaxed);
    }
}

impl Default for PhaserParams {
    fn default() -> Self {
        Self::new(DEFAULT_TIME, DEFAULT_DEPTH)
    }
}
