//! One-pole low-pass coefficient design via the bilinear transform.
//!
//! The analog prototype `H(s) = wc / (s + wc)` is mapped to the digital
//! domain with the bilinear-transform frequency warp:
//!
//! ```text
//! wd    = 2π · fc
//! T     = 1 / fs
//! wa    = (2/T) · tan(wd·T/2)
//! g     = wa · T/2            (= tan(π·fc/fs))
//! alpha = g / (1 + g)
//! ```
//!
//! The resulting filter is the recurrence
//!
//! ```text
//! y[n] = alpha · x[n] + (1 − alpha) · y[n−1]
//! ```
//!
//! which [`OnePole`](crate::OnePole) implements. `alpha` lies in `(0, 1]`:
//! it approaches 0 as the cutoff goes to DC and reaches 1 (a pass-through)
//! at Nyquist, where `tan` sits on its pole.
//!
//! The recurrence has no zero at Nyquist, unlike the full bilinear one-pole,
//! so the gain at the design cutoff is roughly −7 dB rather than −3 dB.
//!
//! # Usage
//!
//! ```rust
//! use sordino_core::design;
//!
//! let coeff = design(44100.0, 1000.0).unwrap();
//! assert!((coeff.alpha() - 0.066_605_8).abs() < 1e-6);
//! ```

use crate::error::FilterError;

/// Recurrence coefficient of a one-pole low-pass.
///
/// # Invariants
///
/// - `0 < alpha <= 1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterCoefficient {
    alpha: f32,
}

impl FilterCoefficient {
    /// Coefficient that passes input straight through (`alpha = 1`).
    pub const PASSTHROUGH: Self = Self { alpha: 1.0 };

    /// Wrap a raw `alpha`, rejecting values outside `(0, 1]`.
    pub fn from_alpha(alpha: f32) -> Result<Self, FilterError> {
        if alpha.is_finite() && alpha > 0.0 && alpha <= 1.0 {
            Ok(Self { alpha })
        } else {
            Err(FilterError::invalid("alpha", f64::from(alpha)))
        }
    }

    /// Input weight `alpha`.
    #[inline]
    pub fn alpha(self) -> f32 {
        self.alpha
    }

    /// Feedback weight `1 - alpha` applied to the previous output.
    #[inline]
    pub fn feedback(self) -> f32 {
        1.0 - self.alpha
    }
}

impl Default for FilterCoefficient {
    fn default() -> Self {
        Self::PASSTHROUGH
    }
}

/// Design the coefficient for a one-pole low-pass at `cutoff_hz`.
///
/// Arithmetic runs in `f64` and the result is narrowed to `f32`.
///
/// # Errors
///
/// [`FilterError::InvalidParameter`] if `sample_rate` is not a finite positive
/// number, or `cutoff_hz` is not finite or lies outside `(0, sample_rate / 2]`.
pub fn design(sample_rate: f64, cutoff_hz: f32) -> Result<FilterCoefficient, FilterError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(FilterError::invalid("sample_rate", sample_rate));
    }
    let cutoff = f64::from(cutoff_hz);
    if !cutoff.is_finite() || cutoff <= 0.0 || cutoff > sample_rate * 0.5 {
        return Err(FilterError::invalid("cutoff_hz", cutoff));
    }

    let wd = core::f64::consts::TAU * cutoff;
    let t = 1.0 / sample_rate;
    let wa = (2.0 / t) * libm::tan(wd * t / 2.0);
    let g = wa * t / 2.0;

    // At Nyquist wd·T/2 rounds to either side of π/2: tan is then huge or
    // huge-and-negative. Both mean the filter is fully open.
    let alpha = if g.is_finite() && g >= 0.0 {
        g / (1.0 + g)
    } else {
        1.0
    };

    Ok(FilterCoefficient {
        alpha: (alpha as f32).clamp(f32::MIN_POSITIVE, 1.0),
    })
}

/// Caching front end for [`design()`].
///
/// The audio thread calls [`design`](Self::design) once per block. When the
/// sample rate and cutoff match the previous call the cached coefficient is
/// returned without evaluating `tan`.
#[derive(Debug, Clone, Default)]
pub struct CoefficientDesigner {
    last: Option<(f64, f32, FilterCoefficient)>,
}

impl CoefficientDesigner {
    /// Create a designer with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Design (or recall) the coefficient for `cutoff_hz` at `sample_rate`.
    ///
    /// A rejected input leaves the cache untouched.
    pub fn design(
        &mut self,
        sample_rate: f64,
        cutoff_hz: f32,
    ) -> Result<FilterCoefficient, FilterError> {
        if let Some((sr, fc, coeff)) = self.last
            && sr == sample_rate
            && fc == cutoff_hz
        {
            return Ok(coeff);
        }

        let coeff = design(sample_rate, cutoff_hz)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(sample_rate, cutoff_hz, alpha = coeff.alpha(), "designed coefficient");
        self.last = Some((sample_rate, cutoff_hz, coeff));
        Ok(coeff)
    }

    /// Most recently designed coefficient, if any.
    pub fn last(&self) -> Option<FilterCoefficient> {
        self.last.map(|(_, _, coeff)| coeff)
    }

    /// Forget the cached coefficient.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
