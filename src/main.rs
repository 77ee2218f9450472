//! Album Smith - a concept-album generator.
//!
//! Queries a public music-metadata API for named artists, infers genre
//! tags from the results, and procedurally assembles a fictional concept
//! album (title + ordered tracklist) themed around the selected artists,
//! genres, and a free-text theme. Albums can be exported to JSON, CSV, or
//! plain text, and every generation is appended to an on-disk history.

pub mod assemble;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod lookup;
pub mod model;
pub mod presets;
pub mod titles;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("album_smith=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
