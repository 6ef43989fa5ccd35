//! Lock-free parameter storage shared between host threads and the audio thread.
//!
//! [`FilterParams`] lives for the lifetime of the plugin instance. The main
//! thread writes values in response to host automation or UI interaction; the
//! audio processor reads them once per block. Both values are f32 bit-cast and
//! packed into a single `AtomicU64` (cutoff in the low word, resonance in the
//! high word) so a block never sees a cutoff from one update paired with a
//! resonance from another.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use sordino_core::{ParamDescriptor, ParamFlags, ParamId, ParamScale};

/// Stable ID of the cutoff parameter.
pub const CUTOFF_ID: ParamId = ParamId(100);
/// Stable ID of the resonance parameter.
pub const RESONANCE_ID: ParamId = ParamId(101);

const CUTOFF_INDEX: usize = 0;
const RESONANCE_INDEX: usize = 1;
const PARAM_COUNT: usize = 2;

/// Consistent view of every parameter, taken once per block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSettings {
    /// Low-pass cutoff in Hz.
    pub cutoff_hz: f32,
    /// Resonance. Exposed to hosts, not used by the one-pole stage.
    pub resonance: f32,
}

impl FilterSettings {
    fn pack(self) -> u64 {
        u64::from(self.cutoff_hz.to_bits()) | (u64::from(self.resonance.to_bits()) << 32)
    }

    fn unpack(bits: u64) -> Self {
        Self {
            cutoff_hz: f32::from_bits(bits as u32),
            resonance: f32::from_bits((bits >> 32) as u32),
        }
    }
}

fn descriptors() -> [ParamDescriptor; PARAM_COUNT] {
    [
        ParamDescriptor::frequency_hz("LowPass Freq", "Freq", 20.0, 20000.0, 1000.0)
            .with_id(CUTOFF_ID, "lp_cutoff")
            .with_scale(ParamScale::Power(4.0)),
        ParamDescriptor::ratio("Resonance", "Res", 0.1, 10.0, 0.1)
            .with_id(RESONANCE_ID, "lp_resonance")
            .with_step(0.05)
            .with_flags(ParamFlags::AUTOMATABLE.union(ParamFlags::INERT)),
    ]
}

struct FilterParamsData {
    descriptors: [ParamDescriptor; PARAM_COUNT],
    packed: AtomicU64,
}

/// Shared parameter state accessible from all plugin threads.
///
/// Cloning is cheap and every clone observes the same values.
#[derive(Clone)]
pub struct FilterParams {
    inner: Arc<FilterParamsData>,
}

impl std::fmt::Debug for FilterParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterParams")
            .field("settings", &self.snapshot())
            .finish()
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterParams {
    /// Create the parameter set with every value at its default.
    pub fn new() -> Self {
        let descriptors = descriptors();
        let defaults = FilterSettings {
            cutoff_hz: descriptors[CUTOFF_INDEX].default,
            resonance: descriptors[RESONANCE_INDEX].default,
        };
        Self {
            inner: Arc::new(FilterParamsData {
                descriptors,
                packed: AtomicU64::new(defaults.pack()),
            }),
        }
    }

    /// Number of parameters.
    pub fn param_count(&self) -> usize {
        PARAM_COUNT
    }

    /// All parameter descriptors, in index order.
    pub fn descriptors(&self) -> &[ParamDescriptor] {
        &self.inner.descriptors
    }

    /// Get parameter descriptor by index.
    pub fn descriptor(&self, index: usize) -> Option<&ParamDescriptor> {
        self.inner.descriptors.get(index)
    }

    /// Find parameter index by stable `ParamId`.
    pub fn index_by_id(&self, id: ParamId) -> Option<usize> {
        self.inner.descriptors.iter().position(|d| d.id == id)
    }

    /// Find parameter index by string ID (`"lp_cutoff"`).
    pub fn index_by_string_id(&self, string_id: &str) -> Option<usize> {
        self.inner
            .descriptors
            .iter()
            .position(|d| d.string_id == string_id)
    }

    /// Read every parameter in one atomic load.
    #[inline]
    pub fn snapshot(&self) -> FilterSettings {
        FilterSettings::unpack(self.inner.packed.load(Ordering::Acquire))
    }

    /// Read the current value of a parameter (lock-free).
    pub fn get_value(&self, index: usize) -> Option<f32> {
        let settings = self.snapshot();
        match index {
            CUTOFF_INDEX => Some(settings.cutoff_hz),
            RESONANCE_INDEX => Some(settings.resonance),
            _ => None,
        }
    }

    /// Write a parameter value (lock-free). Clamps and snaps to the
    /// descriptor's range and step. Out-of-range indices are ignored.
    pub fn set_value(&self, index: usize, value: f32) {
        let Some(desc) = self.inner.descriptors.get(index) else {
            return;
        };
        let value = desc.quantize(value);
        // Single writer in practice; the CAS loop keeps concurrent writers
        // to different parameters from losing each other's update.
        let _ = self
            .inner
            .packed
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |bits| {
                let mut settings = FilterSettings::unpack(bits);
                match index {
                    CUTOFF_INDEX => settings.cutoff_hz = value,
                    _ => settings.resonance = value,
                }
                Some(settings.pack())
            });
    }

    /// Current value of a parameter in normalized `[0, 1]` space.
    pub fn get_normalized(&self, index: usize) -> Option<f32> {
        let desc = self.inner.descriptors.get(index)?;
        self.get_value(index).map(|v| desc.normalize(v))
    }

    /// Set a parameter from normalized `[0, 1]` host automation.
    pub fn set_normalized(&self, index: usize, normalized: f32) {
        if let Some(desc) = self.inner.descriptors.get(index) {
            self.set_value(index, desc.denormalize(normalized));
        }
    }

    /// Set the cutoff in Hz.
    pub fn set_cutoff(&self, cutoff_hz: f32) {
        self.set_value(CUTOFF_INDEX, cutoff_hz);
    }

    /// Set the resonance.
    pub fn set_resonance(&self, resonance: f32) {
        self.set_value(RESONANCE_INDEX, resonance);
    }

    /// Restore every parameter to its default.
    pub fn reset_to_defaults(&self) {
        let defaults = FilterSettings {
            cutoff_hz: self.inner.descriptors[CUTOFF_INDEX].default,
            resonance: self.inner.descriptors[RESONANCE_INDEX].default,
        };
        self.inner.packed.store(defaults.pack(), Ordering::Release);
    }
}
