//! Eight-stage feedback phaser with a tanh-shaped sweep.
//!
//! The phaser runs a shared, time-varying coefficient through a cascade of
//! eight first-order all-pass stages. The LFO sweeps that coefficient through
//! a saturating curve, so the notches dwell near the ends of their travel
//! and pass quickly through the middle.
//!
//! Processing is split by cadence:
//!
//! - **per block** ([`Phaser::prepare_block`]): read `time` and `depth`,
//!   derive the LFO increment and the wet/dry weights;
//! - **per sample** ([`Phaser::step`]): advance the LFO, shape `b0`, ramp
//!   the input gain, run the cascade, limit the tap.
//!
//! ```text
//! x ─► ×gain ─► ×dry ─► (+) ─► AP1 ─► … ─► AP8 ─┐
//!                        ▲      │                │
//!                        │      └─► soft_limit ─► y
//!                        └────── ×wet ◄──────────┘
//! ```

use alloc::sync::Arc;

use tanphase_core::{
    AllpassCascade, Effect, GainRamp, Lfo, ParamDescriptor, ParamId, ParameterInfo, Q16,
    soft_limit, time_to_increment,
};

use crate::params::{DEFAULT_DEPTH, DEFAULT_TIME, PhaserParams};
use crate::shaper::ModulationShaper;

/// Fraction of `depth` routed to the feedback path.
pub const WET_SCALE: f32 = 0.75;

/// Cubic amount of the output limiter's clip curve.
pub const LIMIT_CURVE: f32 = 0.05;

/// Output limiter ceiling.
pub const LIMIT_CEILING: f32 = 1.0;

/// Sample rate used when none is given.
pub const DEFAULT_SAMPLE_RATE: f32 = 48000.0;

/// Values derived once per block from the shared controls.
#[derive(Debug, Clone, Copy)]
struct BlockSetup {
    depth: Q16,
    wet: f32,
    dry: f32,
}

impl BlockSetup {
    fn from_depth(depth: f32) -> Self {
        let wet = WET_SCALE * depth;
        Self {
            depth: Q16::from_f32(depth),
            wet,
            dry: 1.0 - wet,
        }
    }
}

/// Mono phaser.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Default |
/// |-------|------|-------|---------|
/// | 0 | Time | 0–100% | 25.0 |
/// | 1 | Depth | 0–100% | 50.0 |
///
/// # Example
///
/// ```rust
/// use tanphase_core::Effect;
/// use tanphase_effects::Phaser;
///
/// let mut phaser = Phaser::new(48000.0);
/// phaser.set_depth(0.8);
///
/// let input = [0.5; 64];
/// let mut output = [0.0; 64];
/// phaser.process_block(&input, &mut output);
/// assert!(output.iter().all(|y| y.abs() <= 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct Phaser {
    lfo: Lfo,
    shaper: ModulationShaper,
    cascade: AllpassCascade,
    ramp: GainRamp,
    params: Arc<PhaserParams>,
    sample_rate: f32,
    setup: BlockSetup,
    /// Coefficient used by the most recent sample.
    last_b0: f32,
}

impl Phaser {
    /// Create a phaser with default controls (time 0.25, depth 0.5).
    pub fn new(sample_rate: f32) -> Self {
        Self::with_params(sample_rate, Arc::new(PhaserParams::default()))
    }

    /// Create a phaser reading its controls from a shared store.
    pub fn with_params(sample_rate: f32, params: Arc<PhaserParams>) -> Self {
        let mut phaser = Self {
            lfo: Lfo::new(),
            shaper: ModulationShaper::new(),
            cascade: AllpassCascade::new(),
            ramp: GainRamp::new(),
            params,
            sample_rate,
            setup: BlockSetup::from_depth(DEFAULT_DEPTH),
            last_b0: 0.0,
        };
        phaser.prepare_block();
        phaser
    }

    /// Handle to the shared control store.
    pub fn params(&self) -> Arc<PhaserParams> {
        Arc::clone(&self.params)
    }

    /// Set `time` in `[0, 1]` and apply it immediately. Larger is slower.
    pub fn set_time(&mut self, time: f32) {
        self.params.set_time(time);
        self.prepare_block();
    }

    /// Current `time` control.
    pub fn time(&self) -> f32 {
        self.params.time()
    }

    /// Set `depth` in `[0, 1]` and apply it immediately.
    pub fn set_depth(&mut self, depth: f32) {
        self.params.set_depth(depth);
        self.prepare_block();
    }

    /// Current `depth` control.
    pub fn depth(&self) -> f32 {
        self.params.depth()
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Coefficient applied to the most recent sample.
    pub fn coefficient(&self) -> f32 {
        self.last_b0
    }

    /// Current input gain.
    pub fn input_gain(&self) -> f32 {
        self.ramp.get()
    }

    /// Weight of the incoming signal in the cascade input.
    pub fn dry(&self) -> f32 {
        self.setup.dry
    }

    /// Weight of the feedback tap in the cascade input.
    pub fn wet(&self) -> f32 {
        self.setup.wet
    }

    /// The modulation oscillator.
    pub fn lfo(&self) -> &Lfo {
        &self.lfo
    }

    /// The all-pass cascade.
    pub fn cascade(&self) -> &AllpassCascade {
        &self.cascade
    }

    /// True when the cascade state and input gain are all exactly zero.
    pub fn is_cleared(&self) -> bool {
        self.cascade.is_cleared() && self.ramp.get() == 0.0
    }

    /// Per-block setup: snapshot the controls and derive the LFO increment
    /// and mix weights.
    ///
    /// [`process_block`](Effect::process_block) calls this before its sample
    /// loop. Single-sample callers that share the control store with another
    /// thread call it at their own block boundaries.
    pub fn prepare_block(&mut self) {
        let time = self.params.time();
        let depth = self.params.depth();
        self.lfo.set_increment(time_to_increment(time, self.sample_rate));
        self.setup = BlockSetup::from_depth(depth);
    }

    /// Per-sample step.
    #[inline]
    pub fn step(&mut self, input: f32) -> f32 {
        self.lfo.advance();
        let b0 = self.shaper.coefficient(self.lfo.out2(), self.setup.depth);
        self.last_b0 = b0;

        let gain = self.ramp.advance();
        let (_, tap) = self
            .cascade
            .process(input * gain * self.setup.dry, self.setup.wet, b0);

        soft_limit(LIMIT_CURVE, tap, LIMIT_CEILING)
    }
}

impl Default for Phaser {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}

impl Effect for Phaser {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.step(input)
    }

    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        self.prepare_block();
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.step(*inp);
        }
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        self.prepare_block();
        for sample in buffer.iter_mut() {
            *sample = self.step(*sample);
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.prepare_block();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "phaser_sample_rate: {sample_rate} Hz, lfo period {} samples",
            self.lfo.period_samples()
        );
    }

    /// Clear the cascade and restart the input fade. The LFO keeps running
    /// and the controls are untouched.
    fn reset(&mut self) {
        self.cascade.reset();
        self.ramp.reset();
        #[cfg(feature = "tracing")]
        tracing::debug!("phaser_reset");
    }
}

impl ParameterInfo for Phaser {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(
                ParamDescriptor::percent("Time", DEFAULT_TIME * 100.0)
                    .with_id(ParamId(1), "time"),
            ),
            1 => Some(ParamDescriptor::depth().with_id(ParamId(2), "depth")),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.time() * 100.0,
            1 => self.depth() * 100.0,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        let Some(desc) = self.param_info(index) else {
            return;
        };
        let value = desc.normalize(value);
        match index {
            0 => self.set_time(value),
            1 => self.set_depth(value),
            _ => {}
        }
    }
}
