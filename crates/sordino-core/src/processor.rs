//! The block-processing capability the host adapter drives.
//!
//! [`BlockProcessor`] is deliberately narrow: prepare once per stream, then
//! per block push a coefficient and process the host buffer in place. Any
//! host layer (plugin wrapper, offline renderer, test harness) can drive an
//! implementor without knowing its internals.
//!
//! ## Design Decisions
//!
//! - **In-place only**: the host buffer is both input and output, one
//!   `&mut [f32]` per channel.
//! - **Checked errors**: shape and ordering violations are reported as
//!   [`FilterError`] values before any state is touched.
//! - **No allocations** in `set_coefficient` or `process`. Allocation is
//!   confined to `prepare`.

use crate::design::FilterCoefficient;
use crate::error::FilterError;

/// Stream configuration handed to [`BlockProcessor::prepare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessSpec {
    /// Sample rate in Hz.
    pub sample_rate: f64,
    /// Largest block the host will deliver.
    pub maximum_block_size: usize,
    /// Number of audio channels.
    pub num_channels: usize,
}

impl ProcessSpec {
    /// Stereo spec at the given rate and block size.
    pub fn stereo(sample_rate: f64, maximum_block_size: usize) -> Self {
        Self {
            sample_rate,
            maximum_block_size,
            num_channels: 2,
        }
    }

    /// Check that every field is usable.
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(FilterError::invalid("sample_rate", self.sample_rate));
        }
        if self.maximum_block_size == 0 {
            return Err(FilterError::invalid("maximum_block_size", 0.0));
        }
        if self.num_channels == 0 {
            return Err(FilterError::invalid("num_channels", 0.0));
        }
        Ok(())
    }
}

/// Block-at-a-time filter processor.
///
/// Call order on the audio thread is `set_coefficient` then `process`, once
/// per block, after a successful `prepare`.
///
/// # Example
///
/// ```rust
/// use sordino_core::{BlockProcessor, FilterChain, ProcessSpec, design};
///
/// let mut chain = FilterChain::new();
/// chain.prepare(ProcessSpec::stereo(48000.0, 4)).unwrap();
/// chain.set_coefficient(design(48000.0, 1000.0).unwrap()).unwrap();
///
/// let mut left = [1.0_f32; 4];
/// let mut right = [0.0_f32; 4];
/// chain.process(&mut [&mut left[..], &mut right[..]]).unwrap();
/// assert!(left[0] > 0.0 && left[0] < 1.0);
/// assert_eq!(right, [0.0; 4]);
/// ```
pub trait BlockProcessor {
    /// Allocate and zero per-channel state for a new stream.
    fn prepare(&mut self, spec: ProcessSpec) -> Result<(), FilterError>;

    /// Replace the coefficient used from the next processed sample onward.
    fn set_coefficient(&mut self, coeff: FilterCoefficient) -> Result<(), FilterError>;

    /// Filter every channel of `block` in place.
    fn process(&mut self, block: &mut [&mut [f32]]) -> Result<(), FilterError>;

    /// Zero all filter state, keeping coefficients.
    fn reset(&mut self);

    /// Hook for releasing stream resources. Default does nothing.
    fn release_resources(&mut self) {}

    /// Processing latency in samples. Default 0.
    fn latency_samples(&self) -> usize {
        0
    }
}
