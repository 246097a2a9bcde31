use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod io;

use commands::stamp;

#[derive(Parser)]
#[command(
    name = "version-stamp",
    version,
    about = "Writes the build version into version.txt and include/version.h"
)]
struct Cli {
    #[command(flatten)]
    stamp: stamp::StampArgs,
}

fn main() -> Result<()> {
    // stdout carries the version announcement; diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    stamp::run(cli.stamp)
}
