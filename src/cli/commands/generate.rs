//! Album generation and preset listing commands.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Runtime;

use crate::assemble::{AlbumAssembler, AlbumRequest};
use crate::error::Result;
use crate::export::{self, ExportFormat};
use crate::history::HistoryLog;
use crate::presets;
use crate::{config, model::GenreTag};

use super::{open_cache, parse_genres, render_album, split_artists};

/// Generate a concept album and optionally export it
#[allow(clippy::too_many_arguments)]
pub fn cmd_generate(
    rt: &Runtime,
    artists: &str,
    genres: &[String],
    theme: Option<&str>,
    tracks: Option<u32>,
    preset: Option<&str>,
    seed: Option<u64>,
    export: Option<&str>,
    output: Option<&PathBuf>,
    no_history: bool,
) -> Result<()> {
    let config = config::load();

    // Resolve the export format up front so a typo fails before any fetch
    let export_format = match export {
        Some(name) => match name.parse::<ExportFormat>() {
            Ok(format) => Some(format),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let preset = match preset {
        Some(name) => match presets::find(name) {
            Some(p) => Some(p),
            None => {
                eprintln!("Error: unknown preset {name:?}. Available presets:");
                for p in presets::PRESETS {
                    eprintln!("  {} - {}", p.name, p.description);
                }
                std::process::exit(1);
            }
        },
        None => None,
    };

    // Explicit flags win over preset values, preset wins over config defaults
    let mut genre_set = parse_genres(genres);
    if genre_set.is_empty()
        && let Some(p) = preset
    {
        genre_set.extend(p.genres.iter().copied());
    }
    let theme = theme
        .map(str::to_string)
        .or_else(|| preset.map(|p| p.theme.to_string()))
        .unwrap_or_else(|| config.generation.default_theme.clone());
    let track_count = tracks.unwrap_or(config.generation.default_track_count);

    let request = AlbumRequest {
        artists: split_artists(artists),
        genres: genre_set,
        theme,
        track_count,
    };

    rt.block_on(async {
        let mut assembler = AlbumAssembler::with_parts(
            open_cache(&config),
            config.classifier(),
            config.title_generator(),
        );

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        println!("Analyzing {} artist(s)...", request.artists.len());

        let album = match assembler.assemble(&mut rng, &request).await {
            Ok(album) => album,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        };

        // Per-artist resolution status; unresolved artists degraded to unknown
        for artist in &request.artists {
            if assembler.cache().contains(artist) {
                println!("  ✓ {artist}");
            } else {
                println!("  ✗ {artist} (no data, using generic profile)");
            }
        }
        println!();

        render_album(&album);

        if !no_history {
            let log = HistoryLog::new(config.history_path());
            if let Err(e) = log.append(&album) {
                eprintln!("Warning: could not update history: {e}");
            }
        }

        if let Some(format) = export_format {
            let path = output
                .cloned()
                .unwrap_or_else(|| PathBuf::from(export::default_file_name(&album, format)));
            match export::export_album(&album, format, &path) {
                Ok(()) => println!("\n✓ Exported: {}", path.display()),
                Err(e) => {
                    eprintln!("\n✗ Export failed: {e}");
                    if !no_history {
                        eprintln!("  The album is in the history log; retry with `export`.");
                    }
                    std::process::exit(1);
                }
            }
        }
    });
    Ok(())
}

/// List the built-in presets
pub fn cmd_presets() -> Result<()> {
    println!("Available presets:\n");
    for preset in presets::PRESETS {
        let genres: Vec<&str> = preset.genres.iter().map(GenreTag::as_str).collect();
        println!("  {}", preset.name);
        println!("    {}", preset.description);
        println!("    genres: {} | theme: {}", genres.join(", "), preset.theme);
        println!();
    }
    Ok(())
}
