//! Coefficient inspection command.

use clap::Args;
use sordino_core::{design, linear_to_db};

#[derive(Args)]
pub struct DesignArgs {
    /// Cutoff frequency in Hz
    #[arg(short, long)]
    cutoff: f32,

    /// Sample rate in Hz
    #[arg(short, long, default_value = "48000")]
    sample_rate: f64,
}

pub fn run(args: DesignArgs) -> anyhow::Result<()> {
    let coeff = design(args.sample_rate, args.cutoff)?;
    let alpha = coeff.alpha();
    let feedback = coeff.feedback();

    println!("Cutoff:      {} Hz @ {} Hz", args.cutoff, args.sample_rate);
    println!("alpha:       {alpha:.9}");
    println!("feedback:    {feedback:.9}");
    println!("Recurrence:  y[n] = {alpha:.6}·x[n] + {feedback:.6}·y[n-1]");
    println!(
        "Gain at cutoff: {:.2} dB",
        linear_to_db(magnitude(alpha, feedback, args.cutoff, args.sample_rate))
    );

    Ok(())
}

/// |H(e^jw)| of the one-pole at `freq_hz`.
fn magnitude(alpha: f32, feedback: f32, freq_hz: f32, sample_rate: f64) -> f32 {
    let w = std::f64::consts::TAU * f64::from(freq_hz) / sample_rate;
    let b = f64::from(feedback);
    let denom = (1.0 - 2.0 * b * w.cos() + b * b).sqrt();
    (f64::from(alpha) / denom) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_is_unity_at_dc() {
        let coeff = design(48000.0, 1000.0).unwrap();
        let m = magnitude(coeff.alpha(), coeff.feedback(), 0.0, 48000.0);
        assert!((m - 1.0).abs() < 1e-5);
    }

    #[test]
    fn magnitude_at_cutoff() {
        let coeff = design(48000.0, 1000.0).unwrap();
        let db = linear_to_db(magnitude(coeff.alpha(), coeff.feedback(), 1000.0, 48000.0));
        assert!((db + 7.2).abs() < 0.1, "got {db}");
    }
}
