//! Sordino CLI - render WAV files through the one-pole low-pass.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sordino")]
#[command(author, version, about = "One-pole low-pass filter for WAV files", long_about = None)]
struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter an audio file
    Process(commands::process::ProcessArgs),

    /// Show the coefficient for a cutoff and sample rate
    Design(commands::design::DesignArgs),

    /// List the filter's parameters
    Params(commands::params::ParamsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Process(args) => commands::process::run(args),
        Commands::Design(args) => commands::design::run(args),
        Commands::Params(args) => commands::params::run(args),
    }
}
