//! Sordino Core - one-pole low-pass DSP engine
//!
//! This crate holds the part of the sordino effect that does real signal
//! processing, designed for real-time use with zero allocation in the audio
//! path.
//!
//! # Core Abstractions
//!
//! ## Coefficient Design
//!
//! - [`design()`] - Bilinear-transform coefficient for a cutoff frequency
//! - [`CoefficientDesigner`] - Caching front end for per-block design
//! - [`FilterCoefficient`] - The single recurrence coefficient `alpha`
//!
//! ## Processing
//!
//! - [`BlockProcessor`] - Narrow prepare / set-coefficient / process capability
//! - [`FilterChain`] - Per-channel state, in-place block processing
//! - [`MonoChain`] - Position-addressed stages for one channel
//! - [`OnePole`] - The recurrence `y[n] = alpha·x[n] + (1−alpha)·y[n−1]`
//!
//! ## Parameters
//!
//! - [`ParamDescriptor`] - Range, scale, unit and stable ID for host automation
//!
//! # no_std Support
//!
//! Disable the default `std` feature to build for embedded targets. `alloc`
//! is still required for the per-channel state vector.
//!
//! ```toml
//! [dependencies]
//! sordino-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use sordino_core::{BlockProcessor, CoefficientDesigner, FilterChain, ProcessSpec};
//!
//! let mut designer = CoefficientDesigner::new();
//! let mut chain = FilterChain::new();
//! chain.prepare(ProcessSpec::stereo(48000.0, 256)).unwrap();
//!
//! let mut left = vec![0.5_f32; 256];
//! let mut right = vec![-0.5_f32; 256];
//!
//! // Once per block: design, push, process.
//! let coeff = designer.design(48000.0, 1200.0).unwrap();
//! chain.set_coefficient(coeff).unwrap();
//! chain.process(&mut [&mut left[..], &mut right[..]]).unwrap();
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod chain;
pub mod design;
pub mod error;
pub mod math;
pub mod one_pole;
pub mod param_info;
pub mod processor;

pub use chain::{ChainPosition, FilterChain, MonoChain};
pub use design::{CoefficientDesigner, FilterCoefficient, design};
pub use error::FilterError;
pub use math::{flush_denormal, linear_to_db, peak, rms};
pub use one_pole::OnePole;
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParamScale, ParamUnit};
pub use processor::{BlockProcessor, ProcessSpec};
