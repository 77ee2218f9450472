//! Album assembly - orchestrates lookup, classification, and title
//! generation into a complete [`Album`].
//!
//! The assembler favors availability over completeness: a failed artist
//! lookup is logged and replaced by a generic Unknown-genre contribution,
//! so assembly always succeeds once the request itself is valid. Only
//! caller input can make it fail.

use std::collections::BTreeSet;

use rand::Rng;

use crate::classify::GenreClassifier;
use crate::lookup::{ArtistLookupApi, LookupCache};
use crate::model::{Album, GenreTag};
use crate::titles::TitleGenerator;

/// A user's generation request.
#[derive(Debug, Clone)]
pub struct AlbumRequest {
    /// Artist names as entered; blank entries are ignored.
    pub artists: Vec<String>,
    /// Genres picked directly by the user.
    pub genres: BTreeSet<GenreTag>,
    /// Free-text theme for the album.
    pub theme: String,
    /// Number of tracks to generate.
    pub track_count: u32,
}

/// Request validation errors. Surfaced directly to the user; assembly
/// does not proceed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("at least one artist name is required")]
    EmptyArtists,

    #[error("track count must be at least 1")]
    ZeroTracks,

    #[error("a theme is required")]
    EmptyTheme,
}

/// Assembles albums from user requests.
pub struct AlbumAssembler<C> {
    cache: LookupCache<C>,
    classifier: GenreClassifier,
    titles: TitleGenerator,
}

impl<C: ArtistLookupApi> AlbumAssembler<C> {
    /// Create an assembler over a lookup cache with default tables.
    pub fn new(cache: LookupCache<C>) -> Self {
        Self {
            cache,
            classifier: GenreClassifier::new(),
            titles: TitleGenerator::new(),
        }
    }

    /// Create an assembler with custom classifier and title pools.
    pub fn with_parts(
        cache: LookupCache<C>,
        classifier: GenreClassifier,
        titles: TitleGenerator,
    ) -> Self {
        Self {
            cache,
            classifier,
            titles,
        }
    }

    /// The underlying lookup cache. After assembly, an artist with no
    /// cache entry is one whose lookup failed.
    pub fn cache(&self) -> &LookupCache<C> {
        &self.cache
    }

    /// Assemble one album.
    ///
    /// Resolves every artist through the cache, unions their classified
    /// genres with the requested ones, and generates the tracklist. Fails
    /// only on invalid input; lookup failures degrade to an Unknown-genre
    /// contribution with a warning.
    pub async fn assemble(
        &mut self,
        rng: &mut impl Rng,
        request: &AlbumRequest,
    ) -> Result<Album, InputError> {
        let artists = validate(request)?;

        // One genre contribution per artist; failures contribute {Unknown}
        let mut contributions: Vec<BTreeSet<GenreTag>> = Vec::with_capacity(artists.len());
        let mut avg_track_secs: Vec<u32> = Vec::new();
        for artist in &artists {
            match self.cache.get(artist).await {
                Ok(profile) => {
                    let tags = self.classifier.classify(&profile.genres);
                    tracing::debug!(artist = %artist, ?tags, "Classified artist genres");
                    contributions.push(tags);
                    avg_track_secs.extend(profile.avg_track_secs);
                }
                Err(e) => {
                    tracing::warn!(artist = %artist, error = %e, "Lookup failed, degrading to unknown genre");
                    contributions.push(BTreeSet::from([GenreTag::Unknown]));
                }
            }
        }

        let mut union: BTreeSet<GenreTag> = request.genres.clone();
        for tags in &contributions {
            union.extend(tags.iter().copied());
        }
        if union.is_empty() {
            union.insert(GenreTag::Unknown);
        }

        let dominant = dominant_genre(&union, &contributions, &request.genres);
        let theme = request.theme.trim();

        let title = self.titles.album_title(rng, theme, dominant);
        let tracks = self.titles.generate_tracks(
            rng,
            &union,
            request.track_count,
            tempo_shift(&avg_track_secs),
        );

        Ok(Album {
            title,
            theme: theme.to_string(),
            genres: union.into_iter().collect(),
            artists,
            narration: format!(
                "A narrative album exploring the theme '{theme}' across shifting musical and emotional aesthetics."
            ),
            tracks,
            created_at: chrono::Utc::now().to_rfc3339(),
        })
    }
}

/// Check the request and return the cleaned artist list.
fn validate(request: &AlbumRequest) -> Result<Vec<String>, InputError> {
    let artists: Vec<String> = request
        .artists
        .iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect();

    if artists.is_empty() {
        return Err(InputError::EmptyArtists);
    }
    if request.track_count == 0 {
        return Err(InputError::ZeroTracks);
    }
    if request.theme.trim().is_empty() {
        return Err(InputError::EmptyTheme);
    }

    Ok(artists)
}

/// Artists whose top tracks run short read as faster-paced: shift every
/// tempo range up when the mean top-track duration is under 150 seconds.
fn tempo_shift(avg_track_secs: &[u32]) -> u32 {
    if avg_track_secs.is_empty() {
        return 0;
    }
    let mean = avg_track_secs.iter().sum::<u32>() / avg_track_secs.len() as u32;
    if mean < 150 { 10 } else { 0 }
}

/// The tag backed by the most artists; requested tags count once.
/// Ties break by vocabulary order.
fn dominant_genre(
    union: &BTreeSet<GenreTag>,
    contributions: &[BTreeSet<GenreTag>],
    requested: &BTreeSet<GenreTag>,
) -> GenreTag {
    let mut best = GenreTag::Unknown;
    let mut best_count = 0usize;

    for tag in GenreTag::ALL {
        if !union.contains(&tag) {
            continue;
        }
        let count = contributions.iter().filter(|c| c.contains(&tag)).count()
            + usize::from(requested.contains(&tag));
        if count > best_count {
            best = tag;
            best_count = count;
        }
    }

    best
}
