//! Parameter metadata for host automation.
//!
//! A [`ParamDescriptor`] carries everything a host or UI needs to present a
//! parameter: display names, unit, range, default, step, a stable
//! [`ParamId`], and the [`ParamScale`] used to map between plain values and
//! the normalized `[0, 1]` space hosts automate in.
//!
//! # Example
//!
//! ```rust
//! use sordino_core::{ParamDescriptor, ParamId, ParamScale};
//!
//! let cutoff = ParamDescriptor::frequency_hz("Cutoff", "Cutoff", 20.0, 20000.0, 1000.0)
//!     .with_id(ParamId(100), "lp_cutoff")
//!     .with_scale(ParamScale::Power(4.0));
//!
//! assert_eq!(cutoff.clamp(50000.0), 20000.0);
//! assert!((cutoff.denormalize(cutoff.normalize(1000.0)) - 1000.0).abs() < 0.01);
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Scaling curve for parameter normalization.
///
/// # Normalization Formulas
///
/// - **Linear**: `normalized = (value - min) / (max - min)`
/// - **Logarithmic**: `normalized = ln(value/min) / ln(max/min)`
/// - **Power(exp)**: `normalized = ((value - min) / (max - min)).powf(1.0 / exp)`
///
/// A range skew factor `k` corresponds to `Power(1.0 / k)`:
/// skew 0.25 is `Power(4.0)`, which spends most of the control travel on the
/// low end of the range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Linear mapping (default).
    #[default]
    Linear,
    /// Logarithmic mapping. Requires `min > 0.0`.
    Logarithmic,
    /// Power curve mapping with the given exponent.
    Power(f32),
}

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter:
/// hosts record automation against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for plugin host communication.
///
/// ```rust
/// use sordino_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::HIDDEN);
/// assert!(flags.contains(ParamFlags::AUTOMATABLE));
/// assert!(!flags.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter.
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps.
    pub const STEPPED: Self = Self(1 << 1);
    /// Parameter should be hidden from generic host UI.
    pub const HIDDEN: Self = Self(1 << 2);
    /// Parameter is exposed but has no effect on the audio.
    pub const INERT: Self = Self(1 << 3);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display.
    pub name: &'static str,
    /// Short name, max 8 characters.
    pub short_name: &'static str,
    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,
    /// Minimum allowed value.
    pub min: f32,
    /// Maximum allowed value.
    pub max: f32,
    /// Default value.
    pub default: f32,
    /// Snapping interval. `0.0` means continuous.
    pub step: f32,
    /// Stable numeric ID for host automation.
    pub id: ParamId,
    /// Human-readable stable ID (e.g. `"lp_cutoff"`).
    pub string_id: &'static str,
    /// Normalization curve.
    pub scale: ParamScale,
    /// Capability flags.
    pub flags: ParamFlags,
    /// Parameter group for host tree display. Empty means top level.
    pub group: &'static str,
}

impl ParamDescriptor {
    /// Frequency parameter in Hz, logarithmic by default, step 1 Hz.
    pub fn frequency_hz(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Logarithmic,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// Dimensionless ratio parameter (Q, resonance), linear, step 0.01.
    pub fn ratio(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Ratio,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            scale: ParamScale::Linear,
            flags: ParamFlags::AUTOMATABLE,
            group: "",
        }
    }

    /// Sets the stable parameter ID and string ID.
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Sets the normalization scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the snapping interval.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Sets the parameter flags.
    pub const fn with_flags(mut self, flags: ParamFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the parameter group.
    pub const fn with_group(mut self, group: &'static str) -> Self {
        self.group = group;
        self
    }

    /// Clamps a value to this parameter's valid range. NaN maps to the default.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.default.clamp(self.min, self.max)
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Snap a value to the nearest step from `min`, then clamp.
    ///
    /// ```rust
    /// use sordino_core::ParamDescriptor;
    ///
    /// let q = ParamDescriptor::ratio("Q", "Q", 0.1, 10.0, 0.1).with_step(0.05);
    /// assert!((q.quantize(0.32) - 0.3).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn quantize(&self, value: f32) -> f32 {
        let value = self.clamp(value);
        if self.step <= 0.0 {
            return value;
        }
        let steps = libm::roundf((value - self.min) / self.step);
        self.clamp(self.min + steps * self.step)
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        let value = self.clamp(value);
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
            ParamScale::Power(exp) => {
                let linear = (value - self.min) / range;
                libm::powf(linear, 1.0 / exp)
            }
        }
    }

    /// Converts a normalized value (0.0 to 1.0) to the plain range.
    ///
    /// Input is clamped to `[0, 1]` first.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        let normalized = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
            ParamScale::Power(exp) => {
                let curved = libm::powf(normalized, exp);
                self.min + curved * (self.max - self.min)
            }
        }
    }

    /// Format a value with this parameter's unit.
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Hertz if value >= 1000.0 => format!("{:.2} kHz", value / 1000.0),
            ParamUnit::Hertz => format!("{value:.0} Hz"),
            ParamUnit::Ratio => format!("{value:.2}"),
            unit => format!("{value:.2}{}", unit.suffix()),
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels (dB).
    Decibels,
    /// Hertz (Hz).
    Hertz,
    /// Percentage (%).
    Percent,
    /// Dimensionless ratio (Q, resonance).
    Ratio,
    /// No unit.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Hertz => " Hz",
            ParamUnit::Percent => "%",
            ParamUnit::Ratio | ParamUnit::None => "",
        }
    }
}
