//! Tanphase Effects - the phaser and its host adapter
//!
//! This crate assembles the tanphase-core primitives into the finished
//! effect:
//!
//! - [`Phaser`] - eight-stage feedback phaser with a tanh-shaped LFO sweep
//! - [`ModulationShaper`] - LFO and depth to all-pass coefficient
//! - [`PhaserParams`] - lock-free `time`/`depth` store shared with a control thread
//! - [`ModFx`] - load / process / parameter / resume callbacks over interleaved buffers
//!
//! ## Example
//!
//! ```rust
//! use tanphase_core::{Effect, ParameterInfo};
//! use tanphase_effects::Phaser;
//!
//! let mut phaser = Phaser::new(48000.0);
//! phaser.set_param(0, 40.0); // time, percent
//!
//! let mut buffer = vec![0.25f32; 256];
//! phaser.process_block_inplace(&mut buffer);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod host;
pub mod params;
pub mod phaser;
pub mod shaper;

pub use host::{ModFx, ModFxParam};
pub use params::PhaserParams;
pub use phaser::Phaser;
pub use shaper::ModulationShaper;
