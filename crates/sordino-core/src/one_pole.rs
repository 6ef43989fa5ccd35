//! One-pole low-pass stage.
//!
//! A single-pole IIR lowpass with the difference equation:
//!
//! ```text
//! y[n] = alpha * x[n] + (1 - alpha) * y[n-1]
//! ```
//!
//! `alpha` comes from [`design`](crate::design()). 6 dB/octave rolloff, zero
//! latency, two multiplies per sample.
//!
//! # Usage
//!
//! ```rust
//! use sordino_core::{OnePole, design};
//!
//! let mut lp = OnePole::new(design(48000.0, 4000.0).unwrap());
//! let filtered = lp.process(1.0);
//! assert!(filtered < 1.0);
//! ```

use crate::design::FilterCoefficient;
use crate::math::flush_denormal;

/// One-pole (6 dB/oct) lowpass stage.
///
/// # Invariants
///
/// - `state` is the previous output sample
/// - `state` is flushed to zero when below 1e-20 (denormal protection)
#[derive(Debug, Clone, Default)]
pub struct OnePole {
    state: f32,
    coeff: FilterCoefficient,
}

impl OnePole {
    /// Create a stage with zero state.
    pub fn new(coeff: FilterCoefficient) -> Self {
        Self { state: 0.0, coeff }
    }

    /// Swap the coefficient. Takes effect on the next sample; state is kept.
    #[inline]
    pub fn set_coefficient(&mut self, coeff: FilterCoefficient) {
        self.coeff = coeff;
    }

    /// Current coefficient.
    #[inline]
    pub fn coefficient(&self) -> FilterCoefficient {
        self.coeff
    }

    /// Process one sample.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        self.state =
            flush_denormal(self.coeff.alpha() * input + self.coeff.feedback() * self.state);
        self.state
    }

    /// Process a buffer in place.
    #[inline]
    pub fn process_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Last output sample.
    #[inline]
    pub fn state(&self) -> f32 {
        self.state
    }

    /// Reset filter state to zero.
    pub fn reset(&mut self) {
        self.state = 0.0;
    }
}
