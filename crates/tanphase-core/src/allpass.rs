//! Eight-stage first-order all-pass cascade with a feedback loop.
//!
//! The phaser core. Nine cells share one coefficient `b0` per sample:
//!
//! ```text
//!                    ┌───────────────── wet ◄──────────────────┐
//!                    ▼                                          │
//! dry_in ──► (+) ─► out[0] ─► AP1 ─► out[1] ─► AP2 ─► … ─► AP8 ─► out[8]
//!                                      │
//!                                      └──► tap (audible output)
//! ```
//!
//! Each stage `i` in `1..=8` is the first-order all-pass
//!
//! ```text
//! w      = out[i-1] - b0 · z1[i]
//! out[i] = b0 · w + z1[i]
//! z1[i]  = w
//! ```
//!
//! Stages update in descending index order, so stage `i` reads the value of
//! `out[i-1]` left by the *previous* sample except for stage 1, which sees
//! this sample's freshly mixed `out[0]`. The signal therefore advances at
//! most one stage per sample on its way to the feedback tap, and `out[8]`
//! closes the loop into the next sample's `out[0]`.

use crate::math::flush_denormal;

/// Number of active all-pass stages.
pub const PHASER_STAGES: usize = 8;

/// Number of state cells (the stage-0 input mix plus one per stage).
pub const CASCADE_CELLS: usize = PHASER_STAGES + 1;

/// All-pass cascade state: delay memory and per-stage output cache.
///
/// # Example
///
/// ```rust
/// use tanphase_core::AllpassCascade;
///
/// let mut cascade = AllpassCascade::new();
/// let (input0, tap) = cascade.process(1.0, 0.0, 0.5);
/// assert_eq!(input0, 1.0);
/// assert_eq!(tap, 0.5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AllpassCascade {
    z1: [f32; CASCADE_CELLS],
    out: [f32; CASCADE_CELLS],
}

impl AllpassCascade {
    /// Create a cascade with all state cleared.
    pub const fn new() -> Self {
        Self {
            z1: [0.0; CASCADE_CELLS],
            out: [0.0; CASCADE_CELLS],
        }
    }

    /// Run one sample through the cascade.
    ///
    /// `dry_in` is the already-scaled input contribution; `wet` scales the
    /// previous sample's feedback tap into the stage-0 mix; `b0` is the
    /// shared all-pass coefficient and must satisfy `|b0| < 1`.
    ///
    /// Returns `(out[0], out[1])`: the mixed cascade input and the audible
    /// tap taken after the first stage.
    #[inline]
    pub fn process(&mut self, dry_in: f32, wet: f32, b0: f32) -> (f32, f32) {
        let z1 = &mut self.z1;
        let out = &mut self.out;

        out[0] = flush_denormal(dry_in + out[PHASER_STAGES] * wet);

        for i in (1..=PHASER_STAGES).rev() {
            let w = out[i - 1] - b0 * z1[i];
            out[i] = b0 * w + z1[i];
            z1[i] = flush_denormal(w);
        }

        (out[0], out[1])
    }

    /// Output of stage `index` from the last processed sample.
    #[inline]
    pub fn stage_output(&self, index: usize) -> f32 {
        self.out[index]
    }

    /// Delay memory of stage `index`.
    #[inline]
    pub fn stage_state(&self, index: usize) -> f32 {
        self.z1[index]
    }

    /// The feedback tap, `out[8]`.
    #[inline]
    pub fn feedback_tap(&self) -> f32 {
        self.out[PHASER_STAGES]
    }

    /// Zero all delay memory and the output cache.
    pub fn reset(&mut self) {
        self.z1 = [0.0; CASCADE_CELLS];
        self.out = [0.0; CASCADE_CELLS];
    }

    /// True when every cell is exactly zero.
    pub fn is_cleared(&self) -> bool {
        self.z1.iter().chain(self.out.iter()).all(|&v| v == 0.0)
    }
}
