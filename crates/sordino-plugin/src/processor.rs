//! Audio-thread processor for the sordino low-pass.
//!
//! Handles the real-time callback: snapshots the shared parameters, designs
//! the coefficient for the current cutoff, pushes it into the filter chain,
//! and filters the host buffer in place.

use sordino_core::{
    BlockProcessor, CoefficientDesigner, FilterChain, FilterCoefficient, ProcessSpec,
};
use tracing::{debug, warn};

use crate::params::FilterParams;
use crate::{PluginError, Result};

/// Supported bus layouts. Input and output layouts always match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// One channel.
    Mono,
    /// Two channels, left then right.
    Stereo,
}

impl ChannelLayout {
    /// Map a host channel count onto a supported layout.
    pub fn from_channel_count(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::Mono),
            2 => Ok(Self::Stereo),
            n => Err(PluginError::UnsupportedLayout(n)),
        }
    }

    /// Number of channels in this layout.
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }
}

/// Audio-thread processor wrapping a [`FilterChain`].
///
/// Created once per plugin instance and re-prepared whenever the host changes
/// sample rate, block size, or layout.
#[derive(Debug)]
pub struct LowPassProcessor {
    params: FilterParams,
    designer: CoefficientDesigner,
    chain: FilterChain,
    layout: Option<ChannelLayout>,
    sample_rate: f64,
    /// Last cutoff the designer rejected, so each bad value is logged once.
    rejected_cutoff: Option<f32>,
}

impl LowPassProcessor {
    /// Create an inactive processor reading from `params`.
    pub fn new(params: FilterParams) -> Self {
        Self {
            params,
            designer: CoefficientDesigner::new(),
            chain: FilterChain::new(),
            layout: None,
            sample_rate: 0.0,
            rejected_cutoff: None,
        }
    }

    /// Shared parameters this processor reads.
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Prepare for a new stream. Zeroes filter state and designs the
    /// coefficient for the current cutoff.
    pub fn prepare(
        &mut self,
        sample_rate: f64,
        max_block_size: usize,
        layout: ChannelLayout,
    ) -> Result<()> {
        self.chain.prepare(ProcessSpec {
            sample_rate,
            maximum_block_size: max_block_size,
            num_channels: layout.channel_count(),
        })?;
        self.sample_rate = sample_rate;
        self.layout = Some(layout);
        self.designer.invalidate();
        self.rejected_cutoff = None;
        self.update_coefficient()?;

        debug!(sample_rate, max_block_size, ?layout, "low-pass processor prepared");
        Ok(())
    }

    /// Whether `prepare` has succeeded.
    pub fn is_active(&self) -> bool {
        self.layout.is_some()
    }

    /// Layout from the last successful `prepare`.
    pub fn layout(&self) -> Option<ChannelLayout> {
        self.layout
    }

    /// Filter one host block in place, one slice per channel.
    ///
    /// A cutoff the designer rejects (above Nyquist at low sample rates)
    /// keeps the previous coefficient for this block.
    pub fn process_block(&mut self, block: &mut [&mut [f32]]) -> Result<()> {
        if self.layout.is_none() {
            return Err(PluginError::NotActive);
        }
        self.update_coefficient()?;
        self.chain.process(block)?;
        Ok(())
    }

    /// Zero filter state, keeping the current coefficient.
    pub fn reset(&mut self) {
        self.chain.reset();
    }

    /// Stream stopped. Keeps the processor prepared.
    pub fn release_resources(&mut self) {
        self.chain.release_resources();
    }

    /// Processing latency in samples.
    pub fn latency_samples(&self) -> usize {
        self.chain.latency_samples()
    }

    /// Tail length after input stops.
    pub fn tail_seconds(&self) -> f64 {
        0.0
    }

    /// Coefficient the chain is currently running with.
    pub fn coefficient(&self) -> Option<FilterCoefficient> {
        self.chain.channel_coefficient(0)
    }

    fn update_coefficient(&mut self) -> Result<()> {
        let settings = self.params.snapshot();
        match self.designer.design(self.sample_rate, settings.cutoff_hz) {
            Ok(coeff) => {
                self.rejected_cutoff = None;
                self.chain.set_coefficient(coeff)?;
            }
            Err(err) => {
                if self.rejected_cutoff != Some(settings.cutoff_hz) {
                    warn!(
                        cutoff_hz = settings.cutoff_hz,
                        sample_rate = self.sample_rate,
                        %err,
                        "cutoff rejected, keeping previous coefficient"
                    );
                    self.rejected_cutoff = Some(settings.cutoff_hz);
                }
            }
        }
        Ok(())
    }
}
