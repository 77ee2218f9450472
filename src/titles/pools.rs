//! Word pools and per-genre style data for title generation.
//!
//! All generation inputs are data with built-in defaults, overridable from
//! the config file, so the generator itself stays pure and unit-testable.
//! Patterns are template strings with `{a}`, `{b}`, `{theme}`, `{Theme}`
//! and `{word}` placeholders, substituted at generation time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::GenreTag;

/// Tempo range and mood words for one genre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreStyle {
    /// Lowest plausible tempo in BPM.
    pub tempo_min: u32,
    /// Highest plausible tempo in BPM.
    pub tempo_max: u32,
    /// Mood words characteristic of the genre.
    pub moods: Vec<String>,
}

impl GenreStyle {
    fn new(tempo_min: u32, tempo_max: u32, moods: &[&str]) -> Self {
        Self {
            tempo_min,
            tempo_max,
            moods: moods.iter().map(|m| m.to_string()).collect(),
        }
    }
}

/// Every word and template pool the title generator draws from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitlePools {
    /// Evocative filler words mixed into track titles.
    pub keywords: Vec<String>,
    /// Per-track theme words, cycled without repeats until exhausted.
    pub track_themes: Vec<String>,
    /// Words reserved for album titles.
    pub album_words: Vec<String>,
    /// Track title templates. `{a}`/`{b}` are words, `{theme}` the track
    /// theme, `{Theme}` its capitalized form.
    pub track_patterns: Vec<String>,
    /// Album title templates. Every one embeds `{theme}` verbatim so the
    /// album title always contains the user's theme.
    pub album_patterns: Vec<String>,
    /// Tempo/mood data per genre tag.
    pub styles: BTreeMap<GenreTag, GenreStyle>,
}

impl TitlePools {
    /// Style for a tag, falling back to the Unknown entry.
    ///
    /// The fallback only triggers if a config override removed entries;
    /// the defaults cover the whole vocabulary.
    pub fn style(&self, tag: GenreTag) -> GenreStyle {
        self.styles
            .get(&tag)
            .or_else(|| self.styles.get(&GenreTag::Unknown))
            .cloned()
            .unwrap_or_else(|| GenreStyle::new(80, 130, &["wandering"]))
    }
}

impl Default for TitlePools {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();

        let mut styles = BTreeMap::new();
        styles.insert(GenreTag::Rap, GenreStyle::new(80, 110, &["raw", "introspective", "unflinching"]));
        styles.insert(GenreTag::Trap, GenreStyle::new(120, 150, &["tense", "minimal", "dark"]));
        styles.insert(GenreTag::Drill, GenreStyle::new(130, 150, &["cold", "menacing", "urban"]));
        styles.insert(GenreTag::BoomBap, GenreStyle::new(85, 100, &["authentic", "old-school", "lyrical"]));
        styles.insert(GenreTag::Pop, GenreStyle::new(90, 120, &["emotional", "luminous", "open"]));
        styles.insert(GenreTag::Rnb, GenreStyle::new(70, 100, &["sensual", "intimate", "soft"]));
        styles.insert(GenreTag::Electro, GenreStyle::new(115, 140, &["futuristic", "energetic", "hypnotic"]));
        styles.insert(GenreTag::Techno, GenreStyle::new(125, 145, &["industrial", "trance", "dark"]));
        styles.insert(GenreTag::House, GenreStyle::new(118, 130, &["groove", "festive", "solar"]));
        styles.insert(GenreTag::Ambient, GenreStyle::new(50, 80, &["floating", "meditative", "minimal"]));
        styles.insert(GenreTag::Lofi, GenreStyle::new(60, 90, &["nostalgic", "calm", "intimate"]));
        styles.insert(GenreTag::Jazz, GenreStyle::new(90, 140, &["free", "nocturnal", "warm"]));
        styles.insert(GenreTag::NeoJazz, GenreStyle::new(95, 125, &["fluid", "modern", "atmospheric"]));
        styles.insert(GenreTag::Rock, GenreStyle::new(100, 140, &["rebellious", "organic", "raw"]));
        styles.insert(GenreTag::Indie, GenreStyle::new(95, 130, &["introspective", "melodic", "free"]));
        styles.insert(GenreTag::Metal, GenreStyle::new(120, 180, &["violent", "epic", "dark"]));
        styles.insert(GenreTag::Cinematic, GenreStyle::new(60, 100, &["epic", "immersive", "dramatic"]));
        styles.insert(GenreTag::Unknown, GenreStyle::new(80, 130, &["enigmatic", "wandering", "veiled"]));

        Self {
            keywords: strings(&[
                "Shadow", "Light", "Echo", "Dream", "Night", "Fire", "Silence", "Road",
                "Sky", "Time", "Soul", "Wind",
            ]),
            track_themes: strings(&[
                "loneliness", "freedom", "rebellion", "hope", "melancholy", "search",
                "truth", "transformation", "wandering",
            ]),
            album_words: strings(&["Echo", "Cycle", "Vision", "Night", "Odyssey"]),
            track_patterns: strings(&[
                "{a} {theme}",
                "{a} // {b}",
                "{Theme} of {a}",
                "{a} in the {theme}",
                "{a} & {b}",
                "The {a} {theme}",
                "{a} without {b}",
                "{Theme}: {a}",
            ]),
            album_patterns: strings(&[
                "{word} {theme}",
                "{theme} // {word}",
                "{word} in the {theme}",
                "{theme}: {word}",
            ]),
            styles,
        }
    }
}
