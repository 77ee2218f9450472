//! Track and album title generation.
//!
//! Template-driven text assembly: a pattern is chosen from a pool, then
//! word and theme placeholders are substituted. Selection is driven by a
//! caller-supplied RNG so the CLI can seed from `--seed` (or OS entropy)
//! and tests get deterministic output.
//!
//! Titles are independent per position and deliberately NOT deduplicated:
//! repeated titles across an album are allowed.

pub mod pools;

use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeSet;

use crate::model::{GenreTag, Track};
pub use pools::{GenreStyle, TitlePools};

/// Duration bounds for generated tracks, in seconds.
const TRACK_DURATION_SECS: std::ops::RangeInclusive<u32> = 150..=300;

/// Generates track lists and album titles from configured pools.
pub struct TitleGenerator {
    pools: TitlePools,
}

impl TitleGenerator {
    /// Generator with the built-in pools.
    pub fn new() -> Self {
        Self {
            pools: TitlePools::default(),
        }
    }

    /// Generator with custom pools (config overrides).
    pub fn with_pools(pools: TitlePools) -> Self {
        Self { pools }
    }

    /// Generate `count` tracks at positions 1..=count, each tagged with a
    /// genre drawn from `genres`.
    ///
    /// Per-track themes cycle through the theme pool without repeating
    /// until the pool is exhausted, then start over. `tempo_shift` raises
    /// every genre's tempo range (artists with short tracks read as
    /// faster-paced).
    pub fn generate_tracks(
        &self,
        rng: &mut impl Rng,
        genres: &BTreeSet<GenreTag>,
        count: u32,
        tempo_shift: u32,
    ) -> Vec<Track> {
        let genre_list: Vec<GenreTag> = if genres.is_empty() {
            vec![GenreTag::Unknown]
        } else {
            genres.iter().copied().collect()
        };

        // Moods of every selected genre enrich the shared keyword pool
        let mut word_pool: Vec<String> = self.pools.keywords.clone();
        for tag in &genre_list {
            for mood in self.pools.style(*tag).moods {
                word_pool.push(capitalize(&mood));
            }
        }

        let mut theme_pool: Vec<String> = Vec::new();
        let mut tracks = Vec::with_capacity(count as usize);

        for position in 1..=count {
            if theme_pool.is_empty() {
                theme_pool = self.pools.track_themes.clone();
            }
            let theme = if theme_pool.is_empty() {
                "untitled".to_string()
            } else {
                theme_pool.swap_remove(rng.random_range(0..theme_pool.len()))
            };

            let genre = *genre_list
                .choose(rng)
                .unwrap_or(&GenreTag::Unknown);
            let style = self.pools.style(genre);

            tracks.push(Track {
                position,
                title: self.track_title(rng, &word_pool, &theme),
                genre,
                duration_secs: rng.random_range(TRACK_DURATION_SECS),
                tempo_bpm: rng
                    .random_range(style.tempo_min + tempo_shift..=style.tempo_max + tempo_shift),
                mood: style
                    .moods
                    .choose(rng)
                    .cloned()
                    .unwrap_or_else(|| "wandering".to_string()),
                theme,
            });
        }

        tracks
    }

    /// Derive an album title from the user theme and the dominant genre.
    ///
    /// Always embeds `theme` verbatim; the word slot mixes the album word
    /// pool with the dominant genre's moods.
    pub fn album_title(&self, rng: &mut impl Rng, theme: &str, dominant: GenreTag) -> String {
        let mut words: Vec<String> = self.pools.album_words.clone();
        for mood in self.pools.style(dominant).moods {
            words.push(capitalize(&mood));
        }

        let word = words
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "Echo".to_string());

        let pattern = self
            .pools
            .album_patterns
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "{word} {theme}".to_string());

        pattern.replace("{word}", &word).replace("{theme}", theme)
    }

    /// Build one track title from the word pool and a theme word.
    fn track_title(&self, rng: &mut impl Rng, word_pool: &[String], theme: &str) -> String {
        let (a, b) = pick_two(rng, word_pool);

        let pattern = self
            .pools
            .track_patterns
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| "{a} {theme}".to_string());

        pattern
            .replace("{Theme}", &capitalize(theme))
            .replace("{theme}", theme)
            .replace("{a}", &a)
            .replace("{b}", &b)
    }
}

impl Default for TitleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick two distinct words where possible.
fn pick_two(rng: &mut impl Rng, pool: &[String]) -> (String, String) {
    match pool.len() {
        0 => ("Echo".to_string(), "Dream".to_string()),
        1 => (pool[0].clone(), pool[0].clone()),
        len => {
            let first = rng.random_range(0..len);
            let mut second = rng.random_range(0..len - 1);
            if second >= first {
                second += 1;
            }
            (pool[first].clone(), pool[second].clone())
        }
    }
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
