//! Per-channel filter chain.
//!
//! [`FilterChain`] owns one [`MonoChain`] per audio channel. Each mono chain
//! is a fixed array of stages addressed by [`ChainPosition`]; today there is
//! a single one-pole low-pass stage. Channels never share state;
//! [`FilterChain::set_channel_coefficient`] retunes one channel alone.
//!
//! # Lifecycle
//!
//! ```text
//! Unprepared --prepare--> Prepared --process / set_coefficient / reset--> Prepared
//!                             ^                                              |
//!                             +------------------- prepare ------------------+
//! ```
//!
//! `prepare` always zeroes channel state and resets coefficients to
//! [`FilterCoefficient::PASSTHROUGH`]; the host must push a coefficient
//! designed for the new sample rate before the first block.
//!
//! Coefficient swaps are not smoothed. A large cutoff jump between blocks
//! changes the recurrence abruptly at the block boundary.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::design::FilterCoefficient;
use crate::error::FilterError;
use crate::one_pole::OnePole;
use crate::processor::{BlockProcessor, ProcessSpec};

/// Stage slots inside a [`MonoChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainPosition {
    /// One-pole low-pass.
    LowPass,
}

impl ChainPosition {
    /// Number of stage slots.
    pub const COUNT: usize = 1;

    /// Array index of this slot.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ChainPosition::LowPass => 0,
        }
    }
}

/// Ordered stages for a single channel.
#[derive(Debug, Clone, Default)]
pub struct MonoChain {
    stages: [OnePole; ChainPosition::COUNT],
}

impl MonoChain {
    /// Create a chain with zeroed stages and pass-through coefficients.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage at `position`.
    #[inline]
    pub fn get(&self, position: ChainPosition) -> &OnePole {
        &self.stages[position.index()]
    }

    /// Mutable stage at `position`.
    #[inline]
    pub fn get_mut(&mut self, position: ChainPosition) -> &mut OnePole {
        &mut self.stages[position.index()]
    }

    /// Set the coefficient of every stage.
    pub fn set_coefficient(&mut self, coeff: FilterCoefficient) {
        for stage in &mut self.stages {
            stage.set_coefficient(coeff);
        }
    }

    /// Run the buffer through each stage in order, in place.
    #[inline]
    pub fn process_inplace(&mut self, buffer: &mut [f32]) {
        for stage in &mut self.stages {
            stage.process_inplace(buffer);
        }
    }

    /// Zero every stage's state.
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }
}

/// Multi-channel one-pole low-pass with independent per-channel state.
///
/// See the [module docs](self) for the lifecycle. All methods that take a
/// block validate its shape first and leave state untouched on error.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    channels: Vec<MonoChain>,
    spec: Option<ProcessSpec>,
}

impl FilterChain {
    /// Create an unprepared chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`prepare`](BlockProcessor::prepare) has succeeded.
    pub fn is_prepared(&self) -> bool {
        self.spec.is_some()
    }

    /// Spec from the last successful `prepare`.
    pub fn spec(&self) -> Option<ProcessSpec> {
        self.spec
    }

    /// Number of prepared channels (0 before `prepare`).
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Mono chain for `channel`, if prepared and in range.
    pub fn channel(&self, channel: usize) -> Option<&MonoChain> {
        self.channels.get(channel)
    }

    /// Set the coefficient for one channel only.
    pub fn set_channel_coefficient(
        &mut self,
        channel: usize,
        coeff: FilterCoefficient,
    ) -> Result<(), FilterError> {
        if self.spec.is_none() {
            return Err(FilterError::NotPrepared);
        }
        let channels = self.channels.len();
        let chain = self
            .channels
            .get_mut(channel)
            .ok_or(FilterError::ChannelOutOfRange { channel, channels })?;
        chain.set_coefficient(coeff);
        Ok(())
    }

    /// Current coefficient of `channel`'s low-pass stage.
    pub fn channel_coefficient(&self, channel: usize) -> Option<FilterCoefficient> {
        self.channels
            .get(channel)
            .map(|c| c.get(ChainPosition::LowPass).coefficient())
    }

    /// Filter state (last output) of `channel`'s low-pass stage.
    pub fn channel_state(&self, channel: usize) -> Option<f32> {
        self.channels
            .get(channel)
            .map(|c| c.get(ChainPosition::LowPass).state())
    }

    fn check_block(&self, block: &[&mut [f32]]) -> Result<(), FilterError> {
        let spec = self.spec.ok_or(FilterError::NotPrepared)?;
        if block.len() != self.channels.len() {
            return Err(FilterError::ChannelCountMismatch {
                expected: self.channels.len(),
                actual: block.len(),
            });
        }
        let len = block.first().map_or(0, |ch| ch.len());
        if block.iter().any(|ch| ch.len() != len) {
            return Err(FilterError::ChannelLengthMismatch);
        }
        if len > spec.maximum_block_size {
            return Err(FilterError::BlockTooLarge {
                max: spec.maximum_block_size,
                actual: len,
            });
        }
        Ok(())
    }
}

impl BlockProcessor for FilterChain {
    fn prepare(&mut self, spec: ProcessSpec) -> Result<(), FilterError> {
        spec.validate()?;
        self.channels = vec![MonoChain::new(); spec.num_channels];
        self.spec = Some(spec);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate = spec.sample_rate,
            max_block = spec.maximum_block_size,
            channels = spec.num_channels,
            "filter chain prepared"
        );
        Ok(())
    }

    fn set_coefficient(&mut self, coeff: FilterCoefficient) -> Result<(), FilterError> {
        if self.spec.is_none() {
            return Err(FilterError::NotPrepared);
        }
        for chain in &mut self.channels {
            chain.set_coefficient(coeff);
        }
        Ok(())
    }

    fn process(&mut self, block: &mut [&mut [f32]]) -> Result<(), FilterError> {
        self.check_block(block)?;
        for (chain, buffer) in self.channels.iter_mut().zip(block.iter_mut()) {
            chain.process_inplace(buffer);
        }
        Ok(())
    }

    fn reset(&mut self) {
        for chain in &mut self.channels {
            chain.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::design;

    fn prepared(channels: usize, max_block: usize) -> FilterChain {
        let mut chain = FilterChain::new();
        chain
            .prepare(ProcessSpec {
                sample_rate: 48000.0,
                maximum_block_size: max_block,
                num_channels: channels,
            })
            .unwrap();
        chain
    }

    #[test]
    fn unprepared_chain_rejects_everything() {
        let mut chain = FilterChain::new();
        assert!(!chain.is_prepared());
        let mut buf = [1.0_f32; 8];
        assert_eq!(
            chain.process(&mut [&mut buf[..]]),
            Err(FilterError::NotPrepared)
        );
        assert_eq!(buf, [1.0; 8]);
        assert_eq!(
            chain.set_coefficient(FilterCoefficient::PASSTHROUGH),
            Err(FilterError::NotPrepared)
        );
        assert_eq!(
            chain.set_channel_coefficient(0, FilterCoefficient::PASSTHROUGH),
            Err(FilterError::NotPrepared)
        );
    }

    #[test]
    fn prepare_rejects_bad_spec_and_stays_unprepared() {
        let mut chain = FilterChain::new();
        let spec = ProcessSpec {
            sample_rate: 48000.0,
            maximum_block_size: 64,
            num_channels: 0,
        };
        assert!(chain.prepare(spec).is_err());
        assert!(!chain.is_prepared());
    }

    #[test]
    fn prepare_zeroes_existing_state() {
        let mut chain = prepared(1, 16);
        chain
            .set_coefficient(design(48000.0, 1000.0).unwrap())
            .unwrap();
        let mut buf = [1.0_f32; 16];
        chain.process(&mut [&mut buf[..]]).unwrap();
        assert!(chain.channel_state(0).unwrap() > 0.0);

        chain.prepare(ProcessSpec::stereo(44100.0, 16)).unwrap();
        assert_eq!(chain.num_channels(), 2);
        assert_eq!(chain.channel_state(0), Some(0.0));
        assert_eq!(
            chain.channel_coefficient(0),
            Some(FilterCoefficient::PASSTHROUGH)
        );
    }

    #[test]
    fn channel_count_mismatch_is_rejected_without_mutation() {
        let mut chain = prepared(2, 16);
        chain
            .set_coefficient(design(48000.0, 500.0).unwrap())
            .unwrap();
        let mut buf = [1.0_f32; 4];
        assert_eq!(
            chain.process(&mut [&mut buf[..]]),
            Err(FilterError::ChannelCountMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(buf, [1.0; 4]);
        assert_eq!(chain.channel_state(0), Some(0.0));
    }

    #[test]
    fn oversized_and_ragged_blocks_are_rejected() {
        let mut chain = prepared(2, 4);
        let mut l = [1.0_f32; 8];
        let mut r = [1.0_f32; 8];
        assert_eq!(
            chain.process(&mut [&mut l[..], &mut r[..]]),
            Err(FilterError::BlockTooLarge { max: 4, actual: 8 })
        );

        let mut l = [1.0_f32; 4];
        let mut r = [1.0_f32; 3];
        assert_eq!(
            chain.process(&mut [&mut l[..], &mut r[..]]),
            Err(FilterError::ChannelLengthMismatch)
        );
        assert_eq!(l, [1.0; 4]);
    }

    #[test]
    fn empty_block_is_a_no_op() {
        let mut chain = prepared(2, 4);
        let mut l: [f32; 0] = [];
        let mut r: [f32; 0] = [];
        assert!(chain.process(&mut [&mut l[..], &mut r[..]]).is_ok());
    }

    #[test]
    fn per_channel_coefficient() {
        let mut chain = prepared(2, 4);
        let slow = design(48000.0, 100.0).unwrap();
        chain
            .set_coefficient(FilterCoefficient::PASSTHROUGH)
            .unwrap();
        chain.set_channel_coefficient(1, slow).unwrap();
        assert_eq!(
            chain.set_channel_coefficient(2, slow),
            Err(FilterError::ChannelOutOfRange {
                channel: 2,
                channels: 2
            })
        );

        let mut l = [1.0_f32; 4];
        let mut r = [1.0_f32; 4];
        chain.process(&mut [&mut l[..], &mut r[..]]).unwrap();
        assert_eq!(l, [1.0; 4]);
        assert!(r[3] < 0.1);
    }

    #[test]
    fn reset_keeps_coefficient() {
        let mut chain = prepared(1, 4);
        let coeff = design(48000.0, 2000.0).unwrap();
        chain.set_coefficient(coeff).unwrap();
        let mut buf = [1.0_f32; 4];
        chain.process(&mut [&mut buf[..]]).unwrap();
        chain.reset();
        assert_eq!(chain.channel_state(0), Some(0.0));
        assert_eq!(chain.channel_coefficient(0), Some(coeff));
    }

    #[test]
    fn mono_chain_position_lookup() {
        let mut mono = MonoChain::new();
        let coeff = FilterCoefficient::from_alpha(0.5).unwrap();
        mono.get_mut(ChainPosition::LowPass).set_coefficient(coeff);
        assert_eq!(mono.get(ChainPosition::LowPass).coefficient(), coeff);
        assert_eq!(ChainPosition::LowPass.index(), 0);
    }
}
