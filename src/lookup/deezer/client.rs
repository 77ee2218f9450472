//! Deezer HTTP client
//!
//! Handles communication with the Deezer web service.
//! See: https://developers.deezer.com/api
//!
//! The public search endpoints need no API key. Deezer reports some errors
//! with a 200 status and an `error` object in the body, so successful
//! statuses still get an error-shape check before DTO parsing.

use std::time::Duration;

use super::{adapter, dto};
use crate::lookup::domain::{ArtistProfile, LookupError};

/// Deezer API client
pub struct DeezerClient {
    http_client: reqwest::Client,
    base_url: String,
}

/// User agent string identifying the application
const USER_AGENT: &str = concat!(
    "AlbumSmith/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/album-smith)"
);

/// How many distinct albums to query for genre tags per artist.
/// Top tracks cluster on few albums; more lookups add latency, not signal.
const MAX_ALBUM_LOOKUPS: usize = 5;

impl DeezerClient {
    /// Create a new client against the public API
    pub fn new() -> Self {
        Self::with_base_url("https://api.deezer.com")
    }

    /// Create a client with a custom base URL (config override, tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a free-text artist name to a full profile.
    ///
    /// Flow: search for the artist (first hit wins), fetch their top tracks,
    /// then collect genre tags from the albums those tracks appear on.
    /// Fails on network errors, non-2xx responses, or an empty result set;
    /// individual album lookups are allowed to fail without sinking the
    /// whole profile.
    pub async fn fetch_profile(&self, name: &str) -> Result<ArtistProfile, LookupError> {
        let hit = self.search_artist(name).await?;
        let top = self.fetch_top_tracks(hit.id).await?;

        let mut genre_names = Vec::new();
        for album_id in adapter::album_ids(&top).into_iter().take(MAX_ALBUM_LOOKUPS) {
            match self.fetch_album(album_id).await {
                Ok(album) => {
                    if let Some(genres) = album.genres {
                        genre_names.extend(genres.data.into_iter().map(|g| g.name));
                    }
                }
                Err(e) => {
                    tracing::debug!(album_id, error = %e, "Album genre lookup failed, skipping");
                }
            }
        }

        Ok(adapter::to_profile(hit, &top, genre_names))
    }

    /// Search for an artist by name and return the best match
    async fn search_artist(&self, name: &str) -> Result<dto::ArtistHit, LookupError> {
        let url = format!(
            "{}/search/artist?q={}",
            self.base_url,
            urlencoding::encode(name)
        );
        let response: dto::ArtistSearchResponse = self.get_json(&url).await?;

        response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NoMatches(name.to_string()))
    }

    /// Fetch an artist's top tracks
    async fn fetch_top_tracks(&self, artist_id: u64) -> Result<dto::TopTracksResponse, LookupError> {
        let url = format!("{}/artist/{}/top?limit=10", self.base_url, artist_id);
        self.get_json(&url).await
    }

    /// Fetch one album (for its genre list)
    async fn fetch_album(&self, album_id: u64) -> Result<dto::AlbumResponse, LookupError> {
        let url = format!("{}/album/{}", self.base_url, album_id);
        self.get_json(&url).await
    }

    /// Send a GET request and parse the JSON response
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited);
        }

        if !status.is_success() {
            return Err(LookupError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        // Deezer reports quota and data errors inside a 200 body
        if let Ok(err) = serde_json::from_str::<dto::ApiErrorResponse>(&body) {
            if err.error.code == Some(4) {
                return Err(LookupError::RateLimited);
            }
            return Err(LookupError::ApiError(err.error.message));
        }

        serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))
    }
}

impl Default for DeezerClient {
    fn default() -> Self {
        Self::new()
    }
}
