//! Property-based tests for sordino-core.
//!
//! Coefficient range and monotonicity across the audible band, filter
//! stability for random input, and channel isolation, using proptest for
//! randomized input generation.

use proptest::prelude::*;
use sordino_core::{BlockProcessor, FilterChain, ProcessSpec, design};

const SAMPLE_RATES: [f64; 4] = [22050.0, 44100.0, 48000.0, 96000.0];

fn chain_with_cutoff(channels: usize, sample_rate: f64, cutoff: f32) -> FilterChain {
    let mut chain = FilterChain::new();
    chain
        .prepare(ProcessSpec {
            sample_rate,
            maximum_block_size: 64,
            num_channels: channels,
        })
        .unwrap();
    chain.set_coefficient(design(sample_rate, cutoff).unwrap()).unwrap();
    chain
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Below Nyquist alpha is strictly inside (0, 1).
    #[test]
    fn alpha_in_open_unit_interval(
        sr_idx in 0usize..4,
        fraction in 0.0001f64..0.49,
    ) {
        let sr = SAMPLE_RATES[sr_idx];
        let cutoff = (sr * fraction) as f32;
        let coeff = design(sr, cutoff).unwrap();
        prop_assert!(coeff.alpha() > 0.0 && coeff.alpha() < 1.0,
            "alpha {} for cutoff {} at {}", coeff.alpha(), cutoff, sr);
        prop_assert!((coeff.alpha() + coeff.feedback() - 1.0).abs() < 1e-6);
    }

    /// Raising the cutoff never lowers alpha.
    #[test]
    fn alpha_monotonic_in_cutoff(
        low in 20.0f32..20000.0f32,
        delta in 1.0f32..2000.0f32,
    ) {
        let high = (low + delta).min(24000.0);
        let a = design(48000.0, low).unwrap();
        let b = design(48000.0, high).unwrap();
        prop_assert!(b.alpha() >= a.alpha(),
            "alpha({}) = {} > alpha({}) = {}", low, a.alpha(), high, b.alpha());
    }

    /// Anything above Nyquist is rejected.
    #[test]
    fn above_nyquist_rejected(excess in 1.0f32..100000.0f32) {
        prop_assert!(design(48000.0, 24000.0 + excess).is_err());
    }

    /// Output stays finite and bounded by the input peak for any cutoff.
    #[test]
    fn chain_output_bounded(
        cutoff in 20.0f32..24000.0f32,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut chain = chain_with_cutoff(1, 48000.0, cutoff);
        let mut block = input.to_vec();
        chain.process(&mut [&mut block[..]]).unwrap();
        for &out in &block {
            prop_assert!(out.is_finite());
            prop_assert!(out.abs() <= 1.0 + 1e-6, "output {} exceeds input peak", out);
        }
    }

    /// What happens on the left channel never changes the right channel.
    #[test]
    fn channels_isolated(
        cutoff in 20.0f32..20000.0f32,
        left in prop::array::uniform32(-1.0f32..=1.0f32),
        right in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut stereo = chain_with_cutoff(2, 48000.0, cutoff);
        let mut mono = chain_with_cutoff(1, 48000.0, cutoff);

        let mut l = left.to_vec();
        let mut r = right.to_vec();
        stereo.process(&mut [&mut l[..], &mut r[..]]).unwrap();

        let mut reference = right.to_vec();
        mono.process(&mut [&mut reference[..]]).unwrap();
        prop_assert_eq!(r, reference);
    }

    /// A rejected block leaves every channel's state exactly as it was.
    #[test]
    fn oversized_block_leaves_state(
        cutoff in 20.0f32..20000.0f32,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut chain = chain_with_cutoff(1, 48000.0, cutoff);
        let mut block = input.to_vec();
        chain.process(&mut [&mut block[..]]).unwrap();
        let before = chain.channel_state(0);

        let mut too_big = vec![0.5f32; 65];
        prop_assert!(chain.process(&mut [&mut too_big[..]]).is_err());
        prop_assert_eq!(chain.channel_state(0), before);
        prop_assert!(too_big.iter().all(|&s| s == 0.5));
    }
}
