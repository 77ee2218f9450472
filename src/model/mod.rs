//! Core data models for album generation.
//!
//! Defines the primary entities: [`GenreTag`], [`Track`], and [`Album`].
//! All types are serde-derived so the same structs flow through the
//! lookup cache, the history log, and the JSON exporter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed internal genre vocabulary.
///
/// Raw genre strings from the metadata provider are mapped onto this set by
/// the classifier; anything that doesn't match falls back to [`GenreTag::Unknown`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum GenreTag {
    Rap,
    Trap,
    Drill,
    BoomBap,
    Pop,
    Rnb,
    Electro,
    Techno,
    House,
    Ambient,
    Lofi,
    Jazz,
    NeoJazz,
    Rock,
    Indie,
    Metal,
    Cinematic,
    /// Fallback when no raw genre string matched the vocabulary.
    Unknown,
}

impl GenreTag {
    /// Every tag in vocabulary order (ties in genre scoring break this way).
    pub const ALL: [GenreTag; 18] = [
        GenreTag::Rap,
        GenreTag::Trap,
        GenreTag::Drill,
        GenreTag::BoomBap,
        GenreTag::Pop,
        GenreTag::Rnb,
        GenreTag::Electro,
        GenreTag::Techno,
        GenreTag::House,
        GenreTag::Ambient,
        GenreTag::Lofi,
        GenreTag::Jazz,
        GenreTag::NeoJazz,
        GenreTag::Rock,
        GenreTag::Indie,
        GenreTag::Metal,
        GenreTag::Cinematic,
        GenreTag::Unknown,
    ];

    /// Display name, also the canonical alias understood by the classifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenreTag::Rap => "rap",
            GenreTag::Trap => "trap",
            GenreTag::Drill => "drill",
            GenreTag::BoomBap => "boom bap",
            GenreTag::Pop => "pop",
            GenreTag::Rnb => "r&b",
            GenreTag::Electro => "electro",
            GenreTag::Techno => "techno",
            GenreTag::House => "house",
            GenreTag::Ambient => "ambient",
            GenreTag::Lofi => "lofi",
            GenreTag::Jazz => "jazz",
            GenreTag::NeoJazz => "neo-jazz",
            GenreTag::Rock => "rock",
            GenreTag::Indie => "indie",
            GenreTag::Metal => "metal",
            GenreTag::Cinematic => "cinematic",
            GenreTag::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GenreTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenreTag {
    type Err = UnknownGenre;

    /// Parse a tag from its display name. Accepts a few spelling variants
    /// so CLI input like `boom-bap` or `rnb` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_lowercase();
        let tag = match norm.as_str() {
            "rap" => GenreTag::Rap,
            "trap" => GenreTag::Trap,
            "drill" => GenreTag::Drill,
            "boom bap" | "boom-bap" | "boombap" => GenreTag::BoomBap,
            "pop" => GenreTag::Pop,
            "r&b" | "rnb" => GenreTag::Rnb,
            "electro" => GenreTag::Electro,
            "techno" => GenreTag::Techno,
            "house" => GenreTag::House,
            "ambient" => GenreTag::Ambient,
            "lofi" | "lo-fi" => GenreTag::Lofi,
            "jazz" => GenreTag::Jazz,
            "neo-jazz" | "neo jazz" | "neojazz" => GenreTag::NeoJazz,
            "rock" => GenreTag::Rock,
            "indie" => GenreTag::Indie,
            "metal" => GenreTag::Metal,
            "cinematic" => GenreTag::Cinematic,
            "unknown" => GenreTag::Unknown,
            _ => return Err(UnknownGenre(s.to_string())),
        };
        Ok(tag)
    }
}

/// Error returned when parsing an unrecognized genre name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown genre: {0}")]
pub struct UnknownGenre(pub String);

/// A single generated track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Position on the album, 1-based, unique and contiguous.
    pub position: u32,
    /// Generated title.
    pub title: String,
    /// Genre this track was generated under.
    pub genre: GenreTag,
    /// Duration in seconds.
    pub duration_secs: u32,
    /// Tempo in BPM, drawn from the genre's tempo range.
    pub tempo_bpm: u32,
    /// Mood word from the genre's mood pool.
    pub mood: String,
    /// Per-track theme word.
    pub theme: String,
}

impl Track {
    /// Duration formatted as `m:ss` for display and text export.
    pub fn duration_display(&self) -> String {
        format!("{}:{:02}", self.duration_secs / 60, self.duration_secs % 60)
    }
}

/// A fully assembled concept album. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// Generated album title; always contains the theme string.
    pub title: String,
    /// The user-supplied theme.
    pub theme: String,
    /// Genres the tracklist draws from, in vocabulary order.
    pub genres: Vec<GenreTag>,
    /// Artist names the album was themed around, as entered.
    pub artists: Vec<String>,
    /// One-line narrative framing for the album.
    pub narration: String,
    /// Ordered tracklist, positions 1..=N.
    pub tracks: Vec<Track>,
    /// RFC 3339 creation timestamp; also the history log key.
    pub created_at: String,
}

impl Album {
    /// Total runtime in seconds.
    pub fn total_duration_secs(&self) -> u32 {
        self.tracks.iter().map(|t| t.duration_secs).sum()
    }

    /// Mean tempo across the tracklist, 0 for an empty tracklist.
    pub fn average_tempo(&self) -> u32 {
        if self.tracks.is_empty() {
            return 0;
        }
        self.tracks.iter().map(|t| t.tempo_bpm).sum::<u32>() / self.tracks.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_display_roundtrip() {
        for tag in GenreTag::ALL {
            let parsed: GenreTag = tag.as_str().parse().unwrap();
            assert_eq!(parsed, tag, "display name should parse back to itself");
        }
    }

    #[test]
    fn test_genre_parse_variants() {
        assert_eq!("Boom-Bap".parse::<GenreTag>().unwrap(), GenreTag::BoomBap);
        assert_eq!("rnb".parse::<GenreTag>().unwrap(), GenreTag::Rnb);
        assert_eq!(" Drill ".parse::<GenreTag>().unwrap(), GenreTag::Drill);
        assert!("polka".parse::<GenreTag>().is_err());
    }

    #[test]
    fn test_genre_serde_kebab_case() {
        let json = serde_json::to_string(&GenreTag::NeoJazz).unwrap();
        assert_eq!(json, "\"neo-jazz\"");
        let back: GenreTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GenreTag::NeoJazz);
    }

    #[test]
    fn test_track_duration_display() {
        let track = Track {
            position: 1,
            title: "Echo Night".to_string(),
            genre: GenreTag::Drill,
            duration_secs: 185,
            tempo_bpm: 140,
            mood: "cold".to_string(),
            theme: "night".to_string(),
        };
        assert_eq!(track.duration_display(), "3:05");
    }

    #[test]
    fn test_album_stats() {
        let mk = |pos, dur, bpm| Track {
            position: pos,
            title: format!("Track {pos}"),
            genre: GenreTag::Unknown,
            duration_secs: dur,
            tempo_bpm: bpm,
            mood: String::new(),
            theme: String::new(),
        };
        let album = Album {
            title: "Night Cycle".to_string(),
            theme: "night".to_string(),
            genres: vec![GenreTag::Drill],
            artists: vec!["Test".to_string()],
            narration: String::new(),
            tracks: vec![mk(1, 180, 120), mk(2, 240, 140)],
            created_at: "2026-01-01T00:00:00Z".to_string(),
        };
        assert_eq!(album.total_duration_secs(), 420);
        assert_eq!(album.average_tempo(), 130);
    }
}
