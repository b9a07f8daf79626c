//! Tanphase Core - fixed-point and DSP primitives for the tanphase phaser
//!
//! This crate holds the building blocks the phaser is assembled from. Every
//! piece is allocation-free and safe to call from an audio callback.
//!
//! # Core Abstractions
//!
//! ## Fixed Point
//!
//! - [`Q16`] - signed 16.16 fixed-point value with saturating conversions
//!
//! ## Modulation
//!
//! - [`Lfo`] - integer phase accumulator with a smoothed triangle output
//! - [`SaturationTable`] - 1025-entry tanh curve with interpolated lookup
//!
//! ## Filtering
//!
//! - [`AllpassCascade`] - eight first-order all-pass stages with a feedback loop
//!
//! ## Level Handling
//!
//! - [`GainRamp`] - click-free input fade-in after a reset
//! - [`soft_limit`] - output limiter built on [`soft_clip`]
//!
//! ## Effect System
//!
//! - [`Effect`] - object-safe processing trait
//! - [`ParameterInfo`] / [`ParamDescriptor`] - parameter introspection
//!
//! # no_std Support
//!
//! Disable the default `std` feature for embedded targets:
//!
//! ```toml
//! [dependencies]
//! tanphase-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use tanphase_core::{AllpassCascade, GainRamp, Q16, SaturationTable, soft_limit};
//!
//! let table = SaturationTable::tanh();
//! let mut cascade = AllpassCascade::new();
//! let mut ramp = GainRamp::new();
//!
//! // Centre of the curve gives a coefficient near zero.
//! let b0 = (table.lookup(Q16::ZERO).to_f32() - 0.5) * 1.89 + 0.025;
//! let gain = ramp.advance();
//! let (_, tap) = cascade.process(0.5 * gain, 0.0, b0);
//! let y = soft_limit(0.05, tap, 1.0);
//! assert!(y.abs() <= 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod allpass;
pub mod effect;
pub mod fixed;
pub mod lfo;
pub mod math;
pub mod param;
pub mod param_info;
pub mod saturation;
mod tanh_table;

pub use allpass::{AllpassCascade, CASCADE_CELLS, PHASER_STAGES};
pub use effect::Effect;
pub use fixed::Q16;
pub use lfo::{LFO_TIMER_MAX, Lfo, period_samples_for_time, time_to_increment};
pub use math::{clip01, f32_to_q31, flush_denormal, linear_to_db, q31_to_f32, soft_clip, soft_limit};
pub use param::GainRamp;
pub use param_info::{ParamDescriptor, ParamId, ParameterInfo};
pub use saturation::SaturationTable;
pub use tanh_table::TANH_TABLE;
