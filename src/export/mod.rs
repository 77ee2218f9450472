//! Album export to flat file formats.
//!
//! Write-only: an [`Album`] can be serialized to JSON, CSV, or plain
//! text, but exports are never read back. A failed export leaves the
//! in-memory album untouched, so the user can retry.
//!
//! All three formats list the same track titles in the same order.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::model::Album;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Structured data: pretty-printed JSON of the full album.
    Json,
    /// Tabular: one CSV row per track, with a header row.
    Csv,
    /// Human-readable text sheet.
    Text,
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Text => "txt",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(format!("unknown format {other:?} (expected json, csv, or text)")),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Export failures. Filesystem problems carry the target path so the
/// user can see exactly what could not be written.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize album: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error during export: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize an album and write it to `path`.
pub fn export_album(album: &Album, format: ExportFormat, path: &Path) -> Result<(), ExportError> {
    let mut buffer = Vec::new();
    write_album(album, format, &mut buffer)?;

    std::fs::write(path, &buffer).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), %format, "Exported album");
    Ok(())
}

/// Serialize an album into a writer.
pub fn write_album<W: Write>(
    album: &Album,
    format: ExportFormat,
    writer: &mut W,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => write_json(album, writer),
        ExportFormat::Csv => write_csv(album, writer),
        ExportFormat::Text => write_text(album, writer),
    }
}

/// Default export file name derived from the album title.
pub fn default_file_name(album: &Album, format: ExportFormat) -> String {
    format!("{}.{}", sanitize_file_stem(&album.title), format.extension())
}

fn write_json<W: Write>(album: &Album, writer: &mut W) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(album)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

fn write_csv<W: Write>(album: &Album, writer: &mut W) -> Result<(), ExportError> {
    writeln!(writer, "position,title,genre,duration_secs,tempo_bpm,mood,theme")?;
    for track in &album.tracks {
        writeln!(
            writer,
            "{},{},{},{},{},{},{}",
            track.position,
            csv_field(&track.title),
            track.genre,
            track.duration_secs,
            track.tempo_bpm,
            csv_field(&track.mood),
            csv_field(&track.theme),
        )?;
    }
    Ok(())
}

fn write_text<W: Write>(album: &Album, writer: &mut W) -> Result<(), ExportError> {
    let genres: Vec<String> = album.genres.iter().map(|g| g.to_string()).collect();

    writeln!(writer, "{}", album.title)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer)?;
    writeln!(writer, "Theme   : {}", album.theme)?;
    writeln!(writer, "Genres  : {}", genres.join(", "))?;
    writeln!(writer, "Artists : {}", album.artists.join(", "))?;
    writeln!(writer, "Created : {}", album.created_at)?;
    writeln!(writer)?;
    writeln!(writer, "{}", album.narration)?;
    writeln!(writer)?;
    writeln!(writer, "TRACKLIST")?;
    writeln!(writer, "{}", "-".repeat(60))?;
    writeln!(writer)?;

    for track in &album.tracks {
        writeln!(writer, "{:2}. {}", track.position, track.title)?;
        writeln!(
            writer,
            "    {}  |  {} BPM  |  {}  |  {}",
            track.duration_display(),
            track.tempo_bpm,
            track.mood,
            track.genre,
        )?;
        writeln!(writer, "    theme: {}", track.theme)?;
        writeln!(writer)?;
    }

    writeln!(
        writer,
        "Total: {} min  |  {} BPM average  |  {} tracks",
        album.total_duration_secs() / 60,
        album.average_tempo(),
        album.tracks.len(),
    )?;
    Ok(())
}

/// Quote a CSV field if it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Make an album title safe to use as a file stem.
fn sanitize_file_stem(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            ' ' => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim_matches(['_', '-', '.']);
    if trimmed.is_empty() {
        "album".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GenreTag, Track};

    fn sample_album() -> Album {
        let mk = |pos: u32, title: &str| Track {
            position: pos,
            title: title.to_string(),
            genre: GenreTag::Drill,
            duration_secs: 180 + pos * 10,
            tempo_bpm: 140,
            mood: "cold".to_string(),
            theme: "night".to_string(),
        };
        Album {
            title: "Echo // Nuit".to_string(),
            theme: "Nuit".to_string(),
            genres: vec![GenreTag::Drill],
            artists: vec!["Freeze Corleone".to_string()],
            narration: "A narrative album.".to_string(),
            tracks: vec![mk(1, "Shadow Nuit"), mk(2, "Cold, the \"Echo\""), mk(3, "Vertige & Soul")],
            created_at: "2026-02-01T12:00:00+00:00".to_string(),
        }
    }

    /// Minimal CSV line splitter for test verification only.
    fn split_csv_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                c => current.push(c),
            }
        }
        fields.push(current);
        fields
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("TXT".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("yaml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_json_roundtrips_album() {
        let album = sample_album();
        let mut buffer = Vec::new();
        write_album(&album, ExportFormat::Json, &mut buffer).unwrap();

        let parsed: Album = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.title, album.title);
        assert_eq!(parsed.tracks.len(), 3);
    }

    #[test]
    fn test_csv_quotes_awkward_fields() {
        let album = sample_album();
        let mut buffer = Vec::new();
        write_album(&album, ExportFormat::Csv, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 tracks
        assert!(lines[0].starts_with("position,title"));
        // The comma-and-quote title survives the split intact
        let fields = split_csv_line(lines[2]);
        assert_eq!(fields[1], "Cold, the \"Echo\"");
    }

    #[test]
    fn test_text_contains_header_and_tracks() {
        let album = sample_album();
        let mut buffer = Vec::new();
        write_album(&album, ExportFormat::Text, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Echo // Nuit"));
        assert!(text.contains("Theme   : Nuit"));
        assert!(text.contains(" 1. Shadow Nuit"));
        assert!(text.contains("3 tracks"));
    }

    /// All three formats agree on track titles and order.
    #[test]
    fn test_formats_agree_on_titles() {
        let album = sample_album();
        let expected: Vec<String> = album.tracks.iter().map(|t| t.title.clone()).collect();

        // JSON
        let mut buffer = Vec::new();
        write_album(&album, ExportFormat::Json, &mut buffer).unwrap();
        let parsed: Album = serde_json::from_slice(&buffer).unwrap();
        let json_titles: Vec<String> = parsed.tracks.into_iter().map(|t| t.title).collect();

        // CSV
        let mut buffer = Vec::new();
        write_album(&album, ExportFormat::Csv, &mut buffer).unwrap();
        let csv_text = String::from_utf8(buffer).unwrap();
        let csv_titles: Vec<String> = csv_text
            .lines()
            .skip(1)
            .map(|l| split_csv_line(l)[1].clone())
            .collect();

        // Text: track lines are "{position:2}. {title}"
        let mut buffer = Vec::new();
        write_album(&album, ExportFormat::Text, &mut buffer).unwrap();
        let txt = String::from_utf8(buffer).unwrap();
        let text_titles: Vec<String> = txt
            .lines()
            .filter_map(|l| {
                let trimmed = l.trim_start();
                let (num, rest) = trimmed.split_once(". ")?;
                num.parse::<u32>().ok()?;
                Some(rest.to_string())
            })
            .collect();

        assert_eq!(json_titles, expected);
        assert_eq!(csv_titles, expected);
        assert_eq!(text_titles, expected);
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("album.json");

        export_album(&sample_album(), ExportFormat::Json, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Echo // Nuit"));
    }

    #[test]
    fn test_export_to_bad_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("album.json");

        let result = export_album(&sample_album(), ExportFormat::Json, &path);

        assert!(matches!(result, Err(ExportError::Write { .. })));
    }

    #[test]
    fn test_default_file_name_sanitized() {
        let album = sample_album();
        assert_eq!(
            default_file_name(&album, ExportFormat::Csv),
            "Echo_--_Nuit.csv"
        );
    }
}
