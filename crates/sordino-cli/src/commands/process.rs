//! File-based low-pass rendering command.

use crate::config::RenderConfig;
use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use sordino_core::{design, linear_to_db, peak, rms};
use sordino_io::{WavSpec, read_wav, write_wav};
use sordino_plugin::{ChannelLayout, FilterParams, LowPassProcessor};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Cutoff frequency in Hz [default: 1000]
    #[arg(short, long)]
    cutoff: Option<f32>,

    /// Resonance (exposed for parity, no audible effect) [default: 0.1]
    #[arg(short, long)]
    resonance: Option<f32>,

    /// Render settings file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Processing block size [default: 512]
    #[arg(long)]
    block_size: Option<usize>,

    /// Output bit depth (16, 24, or 32) [default: 32]
    #[arg(long)]
    bit_depth: Option<u16>,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let base = match &args.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    let config = base.with_overrides(args.cutoff, args.resonance, args.block_size, args.bit_depth)?;
    debug!(?config, "render settings");

    println!("Reading {}...", args.input.display());
    let (mut channels, spec) = read_wav(&args.input)?;
    let layout = ChannelLayout::from_channel_count(channels.len())?;
    let frames = channels.first().map_or(0, Vec::len);
    let sample_rate = f64::from(spec.sample_rate);

    println!(
        "  {} frames x {} ch, {} Hz, {:.2}s",
        frames,
        channels.len(),
        spec.sample_rate,
        frames as f64 / sample_rate
    );

    // The processor would fall back to pass-through; refuse up front instead.
    design(sample_rate, config.filter.cutoff_hz).with_context(|| {
        format!(
            "cutoff {} Hz is above Nyquist for {} Hz audio",
            config.filter.cutoff_hz, spec.sample_rate
        )
    })?;

    let params = FilterParams::new();
    params.set_cutoff(config.filter.cutoff_hz);
    params.set_resonance(config.filter.resonance);
    let settings = params.snapshot();

    let mut processor = LowPassProcessor::new(params);
    processor.prepare(sample_rate, config.block_size, layout)?;

    println!(
        "Filtering at {} Hz (block size {})...",
        settings.cutoff_hz, config.block_size
    );

    let input_stats = stats(&channels);

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut start = 0;
    while start < frames {
        let end = (start + config.block_size).min(frames);
        let mut block: Vec<&mut [f32]> = channels
            .iter_mut()
            .map(|channel| &mut channel[start..end])
            .collect();
        processor.process_block(&mut block)?;
        pb.set_position(end as u64);
        start = end;
    }

    pb.finish_with_message("done");

    let output_stats = stats(&channels);

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_stats.0),
        linear_to_db(input_stats.1)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output_stats.0),
        linear_to_db(output_stats.1)
    );

    let out_spec = WavSpec {
        bits_per_sample: config.bit_depth,
        ..spec
    };

    println!("\nWriting {}...", args.output.display());
    write_wav(&args.output, &channels, out_spec)?;
    info!(
        output = %args.output.display(),
        cutoff_hz = settings.cutoff_hz,
        "render complete"
    );
    println!("Done!");

    Ok(())
}

/// RMS and peak across every channel.
fn stats(channels: &[Vec<f32>]) -> (f32, f32) {
    let all = channels.concat();
    (rms(&all), peak(&all))
}
