//! Host adapter for the sordino low-pass effect.
//!
//! This crate sits between a plugin host and `sordino-core`. It owns the
//! automatable parameters and drives the core once per audio block.
//!
//! # Architecture
//!
//! | Host concept | Sordino |
//! |--------------|---------|
//! | Parameter tree | [`FilterParams`] (lock-free, one `AtomicU64`) |
//! | Parameter ID | `ParamDescriptor::id` / `string_id` |
//! | Normalized automation | [`FilterParams::set_normalized`] |
//! | `prepareToPlay` | [`LowPassProcessor::prepare`] |
//! | `processBlock` | [`LowPassProcessor::process_block`] |
//! | Bus layout check | [`ChannelLayout::from_channel_count`] |
//!
//! The main thread (host automation, UI) writes through a cloned
//! [`FilterParams`]; the audio thread reads one [`FilterSettings`] snapshot
//! per block. No locks, no allocation after `prepare`.
//!
//! # Example
//!
//! ```rust
//! use sordino_plugin::{ChannelLayout, FilterParams, LowPassProcessor};
//!
//! let params = FilterParams::new();
//! let mut processor = LowPassProcessor::new(params.clone());
//! processor.prepare(48000.0, 256, ChannelLayout::Stereo).unwrap();
//!
//! // Automation arrives on another thread.
//! params.set_cutoff(2500.0);
//!
//! let mut left = vec![0.5_f32; 256];
//! let mut right = vec![0.5_f32; 256];
//! processor.process_block(&mut [&mut left[..], &mut right[..]]).unwrap();
//! ```

pub mod params;
pub mod processor;

pub use params::{CUTOFF_ID, FilterParams, FilterSettings, RESONANCE_ID};
pub use processor::{ChannelLayout, LowPassProcessor};

use sordino_core::FilterError;
use thiserror::Error;

/// Static identity of the effect as reported to hosts.
#[derive(Debug, Clone, Copy)]
pub struct PluginInfo;

impl PluginInfo {
    /// Display name.
    pub const NAME: &'static str = "Sordino";
    /// Reverse-DNS identifier.
    pub const ID: &'static str = "com.sordino.lowpass";
    /// Vendor string.
    pub const VENDOR: &'static str = "Sordino";
    /// Crate version.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");
    /// The effect ignores incoming MIDI.
    pub const ACCEPTS_MIDI: bool = false;
    /// The effect never emits MIDI.
    pub const PRODUCES_MIDI: bool = false;
    /// Audio effect, not a MIDI effect.
    pub const IS_MIDI_EFFECT: bool = false;
}

/// Errors reported by the host adapter.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Rejected by the DSP core.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// Only mono and stereo buses are supported.
    #[error("unsupported channel layout: {0} channels (expected 1 or 2)")]
    UnsupportedLayout(usize),

    /// `process_block` before `prepare`.
    #[error("processor is not active")]
    NotActive,
}

/// Result alias for host adapter operations.
pub type Result<T> = std::result::Result<T, PluginError>;
