//! CLI for the logo transform.
//!
//! Run with: cargo run -p logo-transform --bin process-logo -- logo.jpg logo-transparent.png

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Make a logo's white background transparent and paint the rest white
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Source image (PNG or JPEG)
    input: PathBuf,

    /// Destination image; PNG keeps the transparency
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "logo_transform=info".into()),
        )
        .init();

    let args = Args::parse();
    logo_transform::process_logo(&args.input, &args.output)?;

    Ok(())
}
