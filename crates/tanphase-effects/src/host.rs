//! Modulation-effect host adapter.
//!
//! [`ModFx`] wraps a [`Phaser`] in the four-callback shape a modulation-effect
//! slot expects: load, process a block, parameter change, resume. Audio is
//! exchanged as interleaved stereo `f32` buffers in two pairs, "main" and
//! "sub". Only the left channel of the main input is read; the processed mono
//! sample is written to both channels of both output pairs.
//!
//! Parameter values arrive as Q31 integers and are converted to `[0, 1]`.

use alloc::sync::Arc;

use tanphase_core::{Effect, clip01, q31_to_f32};

use crate::params::PhaserParams;
use crate::phaser::Phaser;

/// Host parameter slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModFxParam {
    /// LFO time (slot 0).
    Time = 0,
    /// Depth (slot 1).
    Depth = 1,
}

impl ModFxParam {
    /// Map a host slot index to a parameter. Unknown slots give `None`.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Time),
            1 => Some(Self::Depth),
            _ => None,
        }
    }

    /// Apply a normalised value to the matching control.
    pub fn apply(self, params: &PhaserParams, value: f32) {
        match self {
            Self::Time => params.set_time(value),
            Self::Depth => params.set_depth(value),
        }
    }
}

/// Phaser as a modulation-effect slot.
///
/// # Example
///
/// ```rust
/// use tanphase_effects::{ModFx, ModFxParam};
///
/// let mut fx = ModFx::on_load(48000.0);
/// fx.on_parameter_change(ModFxParam::Depth as usize, i32::MAX);
///
/// let main_in = [0.5f32; 64];
/// let sub_in = [0.0f32; 64];
/// let mut main_out = [0.0f32; 64];
/// let mut sub_out = [0.0f32; 64];
/// fx.on_process_block(&main_in, &mut main_out, &sub_in, &mut sub_out, 32);
///
/// assert_eq!(main_out[10], main_out[11]);
/// assert_eq!(main_out[10], sub_out[10]);
/// ```
#[derive(Debug, Clone)]
pub struct ModFx {
    phaser: Phaser,
}

impl ModFx {
    /// Create the effect with default controls and a silent input ramp.
    pub fn on_load(sample_rate: f32) -> Self {
        #[cfg(feature = "tracing")]
        tracing::info!("modfx_load: {sample_rate} Hz");
        Self {
            phaser: Phaser::new(sample_rate),
        }
    }

    /// Process up to `frames` interleaved stereo frames.
    ///
    /// `frames` is clamped to the capacity of the shortest buffer that is
    /// read or written. `sub_in` is accepted for signature parity and ignored.
    pub fn on_process_block(
        &mut self,
        main_in: &[f32],
        main_out: &mut [f32],
        _sub_in: &[f32],
        sub_out: &mut [f32],
        frames: usize,
    ) {
        let frames = frames
            .min(main_in.len() / 2)
            .min(main_out.len() / 2)
            .min(sub_out.len() / 2);

        self.phaser.prepare_block();

        let inputs = main_in.chunks_exact(2).take(frames);
        let outputs = main_out.chunks_exact_mut(2).zip(sub_out.chunks_exact_mut(2));
        for (frame_in, (main, sub)) in inputs.zip(outputs) {
            let y = self.phaser.step(frame_in[0]);
            main[0] = y;
            main[1] = y;
            sub[0] = y;
            sub[1] = y;
        }
    }

    /// Handle a host parameter change. Unknown indices are ignored.
    pub fn on_parameter_change(&self, index: usize, value: i32) {
        if let Some(param) = ModFxParam::from_index(index) {
            param.apply(&self.phaser.params(), clip01(q31_to_f32(value)));
        }
    }

    /// Clear the cascade and restart the input fade. Controls are untouched.
    pub fn on_resume(&mut self) {
        self.phaser.reset();
    }

    /// Shared control store, for a control thread to write into.
    pub fn params(&self) -> Arc<PhaserParams> {
        self.phaser.params()
    }

    /// The wrapped phaser.
    pub fn phaser(&self) -> &Phaser {
        &self.phaser
    }
}
