//! Internal domain models for artist metadata lookup.
//!
//! These types are OUR types - they don't change when the provider API
//! changes. All API responses get converted into these via the adapter.

use serde::{Deserialize, Serialize};

/// Metadata for one artist, as resolved from the provider.
///
/// Immutable once built; owned by the lookup cache after a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistProfile {
    /// Canonical artist name as reported by the provider.
    pub name: String,
    /// Raw genre strings in provider order, deduplicated. These are NOT
    /// vocabulary tags; the classifier maps them.
    pub genres: Vec<String>,
    /// Public page for the artist, if the provider supplied one.
    pub link: Option<String>,
    /// Fan/follower count, if known.
    pub fans: Option<u64>,
    /// Mean duration of the artist's top tracks in seconds, if any had one.
    pub avg_track_secs: Option<u32>,
}

/// Errors that can occur during artist lookup
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No artist found matching {0:?}")]
    NoMatches(String),

    #[error("Rate limited - try again later")]
    RateLimited,
}
