//! Small numeric helpers used by the filter and by level meters.
//!
//! All functions are allocation-free and `no_std`.

use libm::logf;

/// Convert linear amplitude to decibels.
///
/// Input is floored at `1e-10` (−200 dB) so silence yields a finite value.
///
/// ```rust
/// use sordino_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(x) = 20 * ln(x) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Flush values below 1e-20 to zero.
///
/// Recursive filters decaying toward silence otherwise spend a long time in
/// the subnormal range, which is very slow on most CPUs.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Root-mean-square level of a buffer. Returns 0.0 for an empty buffer.
pub fn rms(buffer: &[f32]) -> f32 {
    if buffer.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = buffer.iter().map(|&s| s * s).sum();
    libm::sqrtf(sum_sq / buffer.len() as f32)
}

/// Absolute peak level of a buffer.
pub fn peak(buffer: &[f32]) -> f32 {
    buffer.iter().fold(0.0_f32, |acc, &s| acc.max(s.abs()))
}
