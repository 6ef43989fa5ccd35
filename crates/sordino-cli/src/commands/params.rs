//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings

use clap::Args;
use sordino_core::{ParamFlags, ParamScale};
use sordino_plugin::{FilterParams, PluginInfo};

#[derive(Args)]
pub struct ParamsArgs {
    /// Show normalized-scale details
    #[arg(long)]
    detailed: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let params = FilterParams::new();

    println!("{} {} parameters", PluginInfo::NAME, PluginInfo::VERSION);
    println!();
    println!(
        "  {:4}  {:14}  {:14}  {:10}  {:20}  {}",
        "ID", "Key", "Name", "Default", "Range", "Step"
    );
    println!(
        "  {:4}  {:14}  {:14}  {:10}  {:20}  {}",
        "--", "---", "----", "-------", "-----", "----"
    );

    for desc in params.descriptors() {
        let range = format!(
            "{} .. {}",
            desc.format_value(desc.min),
            desc.format_value(desc.max)
        );
        println!(
            "  {:4}  {:14}  {:14}  {:10}  {:20}  {}",
            desc.id.0,
            desc.string_id,
            desc.name,
            desc.format_value(desc.default),
            range,
            desc.step
        );
    }

    if args.detailed {
        println!();
        for desc in params.descriptors() {
            let scale = match desc.scale {
                ParamScale::Linear => "linear".to_string(),
                ParamScale::Logarithmic => "logarithmic".to_string(),
                ParamScale::Power(exp) => format!("power {exp}"),
            };
            let note = if desc.flags.contains(ParamFlags::INERT) {
                " (no effect on audio)"
            } else {
                ""
            };
            println!(
                "  {}: {scale} scale, default at {:.3} normalized{note}",
                desc.string_id,
                desc.normalize(desc.default)
            );
        }
    }

    Ok(())
}
