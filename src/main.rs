//! CLI entry point for feedgen

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "feedgen")]
#[command(version)]
#[command(about = "Generate RSS and Atom feeds from markdown posts", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Config file (defaults to feed.yml in the base directory, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "feedgen=debug,info"
    } else {
        "feedgen=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Couldn't determine the current directory")?,
    };

    let feedgen = feedgen::Feedgen::new(&base_dir, cli.config.as_deref())?;
    tracing::debug!("Using config {:?}", feedgen.config);

    feedgen.generate()?;
    println!("Generated feeds in {:?}", feedgen.output_dir);

    Ok(())
}
