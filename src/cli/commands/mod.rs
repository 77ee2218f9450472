//! CLI command definitions and dispatch.
//!
//! Each subcommand group is implemented in its own submodule:
//! - `generate`: album generation and preset listing
//! - `lookup`: artist profile lookup and cache inspection
//! - `history`: previous-album listing and re-export

mod generate;
mod history;
mod lookup;

use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::lookup::{DeezerClient, LookupCache};
use crate::model::{Album, GenreTag};

pub use generate::{cmd_generate, cmd_presets};
pub use history::{cmd_export, cmd_history};
pub use lookup::{cmd_cache, cmd_config, cmd_lookup};

/// Album Smith CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a concept album from artists, genres, and a theme
    Generate {
        /// Comma-separated artist names, e.g. "Freeze Corleone, Koba LaD"
        #[arg(short, long)]
        artists: String,
        /// Genre to include (repeatable), e.g. --genre drill --genre trap
        #[arg(short, long = "genre")]
        genres: Vec<String>,
        /// Album theme
        #[arg(short, long)]
        theme: Option<String>,
        /// Number of tracks
        #[arg(short = 'n', long)]
        tracks: Option<u32>,
        /// Start from a named preset (see the `presets` command)
        #[arg(short, long)]
        preset: Option<String>,
        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
        /// Export the album after generation: json, csv, or text
        #[arg(short, long)]
        export: Option<String>,
        /// Export file path (default: derived from the album title)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip the history log for this album
        #[arg(long)]
        no_history: bool,
    },
    /// Look up one artist's metadata profile
    Lookup {
        /// Artist name
        artist: String,
        /// Bypass the cache and fetch fresh data
        #[arg(long)]
        refresh: bool,
    },
    /// List previously generated albums
    History {
        /// How many entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
    /// Re-export an album from the history log
    Export {
        /// History entry number as shown by `history` (1 = most recent)
        entry: usize,
        /// Target format: json, csv, or text
        #[arg(short, long)]
        format: String,
        /// Export file path (default: derived from the album title)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in genre/theme presets
    Presets,
    /// Show or clear the artist lookup cache
    Cache {
        /// Remove every cached entry
        #[arg(long)]
        clear: bool,
    },
    /// Show the effective configuration and file locations
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate {
            artists,
            genres,
            theme,
            tracks,
            preset,
            seed,
            export,
            output,
            no_history,
        } => {
            let rt = Runtime::new()?;
            cmd_generate(
                &rt,
                artists,
                genres,
                theme.as_deref(),
                *tracks,
                preset.as_deref(),
                *seed,
                export.as_deref(),
                output.as_ref(),
                *no_history,
            )?;
        }
        Commands::Lookup { artist, refresh } => {
            let rt = Runtime::new()?;
            cmd_lookup(&rt, artist, *refresh)?;
        }
        Commands::History { limit } => cmd_history(*limit)?,
        Commands::Export {
            entry,
            format,
            output,
        } => cmd_export(*entry, format, output.as_ref())?,
        Commands::Presets => cmd_presets()?,
        Commands::Cache { clear } => cmd_cache(*clear)?,
        Commands::Config { init } => cmd_config(*init)?,
    }
    Ok(())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Open the persistent lookup cache over the configured provider.
pub(crate) fn open_cache(config: &Config) -> LookupCache<DeezerClient> {
    let client = match &config.lookup.base_url {
        Some(url) => DeezerClient::with_base_url(url.clone()),
        None => DeezerClient::new(),
    };
    LookupCache::with_persistence(client, config.cache_path())
}

/// Split a comma-separated artist entry into trimmed, non-empty names.
pub(crate) fn split_artists(entry: &str) -> Vec<String> {
    entry
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse genre names into tags, exiting with a usable message on failure.
pub(crate) fn parse_genres(names: &[String]) -> BTreeSet<GenreTag> {
    let mut tags = BTreeSet::new();
    for name in names {
        match name.parse::<GenreTag>() {
            Ok(tag) => {
                tags.insert(tag);
            }
            Err(_) => {
                eprintln!("Error: unknown genre {name:?}.");
                eprintln!("Valid genres:");
                for tag in GenreTag::ALL {
                    eprintln!("  {tag}");
                }
                std::process::exit(1);
            }
        }
    }
    tags
}

/// Render an album to stdout the way the text export lays it out.
pub(crate) fn render_album(album: &Album) {
    let genres: Vec<String> = album.genres.iter().map(|g| g.to_string()).collect();

    println!("{}", album.title);
    println!("{}", "=".repeat(70));
    println!();
    println!("Theme   : {}", album.theme);
    println!("Genres  : {}", genres.join(", "));
    println!("Artists : {}", album.artists.join(", "));
    println!();
    println!("{}", album.narration);
    println!();
    println!("TRACKLIST");
    println!("{}", "-".repeat(70));
    println!();

    for track in &album.tracks {
        println!("{:2}. {}", track.position, track.title);
        println!(
            "    {} | {} BPM | {} | {}",
            track.duration_display(),
            track.tempo_bpm,
            track.mood,
            track.genre,
        );
    }

    println!();
    println!(
        "Stats: {} min | {} BPM average | {} tracks",
        album.total_duration_secs() / 60,
        album.average_tempo(),
        album.tracks.len(),
    );
}
