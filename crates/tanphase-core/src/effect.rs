//! Core Effect trait.
//!
//! The [`Effect`] trait is the single processing interface of the crate
//! family. Mono in, mono out; the host adapter fans a mono result out to as
//! many channels as it needs.
//!
//! - **Object-safe**: usable as `dyn Effect` from the CLI and tests.
//! - **No allocations**: every method may be called from an audio callback.

/// Core trait for audio effects.
///
/// # Example
///
/// ```rust
/// use tanphase_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut gain = Gain { gain: 0.5 };
/// let mut out = [0.0; 2];
/// gain.process_block(&[1.0, -1.0], &mut out);
/// assert_eq!(out, [0.5, -0.5]);
/// ```
pub trait Effect {
    /// Process a single sample, advancing internal state by one step.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls [`process`](Self::process) per sample.
    /// Effects with per-block work (coefficient updates, parameter snapshots)
    /// override this.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate and recompute anything derived from it.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Clear internal state without touching parameters.
    fn reset(&mut self);

    /// Processing latency in samples. Default is zero.
    fn latency_samples(&self) -> usize {
        0
    }
}
