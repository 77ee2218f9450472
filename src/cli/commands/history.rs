//! History listing and re-export commands.

use std::path::PathBuf;

use crate::config;
use crate::error::Result;
use crate::export::{self, ExportFormat};
use crate::history::HistoryLog;

/// List previously generated albums, newest first
pub fn cmd_history(limit: usize) -> Result<()> {
    let config = config::load();
    let log = HistoryLog::new(config.history_path());

    let albums = log.recent(limit)?;
    if albums.is_empty() {
        println!("No albums generated yet.");
        return Ok(());
    }

    for (i, album) in albums.iter().enumerate() {
        println!(
            "{:2}. {}  [{} tracks]  {}",
            i + 1,
            album.title,
            album.tracks.len(),
            album.created_at,
        );
    }
    Ok(())
}

/// Re-export one album from the history log
pub fn cmd_export(entry: usize, format: &str, output: Option<&PathBuf>) -> Result<()> {
    let format = match format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if entry == 0 {
        eprintln!("Error: history entries are numbered from 1 (most recent).");
        std::process::exit(1);
    }

    let config = config::load();
    let log = HistoryLog::new(config.history_path());

    let albums = log.recent(entry)?;
    let Some(album) = albums.get(entry - 1) else {
        eprintln!(
            "Error: no history entry {entry} (history holds {} album(s)).",
            log.load()?.len()
        );
        std::process::exit(1);
    };

    let path = output
        .cloned()
        .unwrap_or_else(|| PathBuf::from(export::default_file_name(album, format)));

    export::export_album(album, format, &path)?;
    println!("✓ Exported {:?} to {}", album.title, path.display());
    Ok(())
}
