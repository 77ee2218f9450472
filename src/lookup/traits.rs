//! Trait definitions for the artist lookup client.
//!
//! This trait enables dependency injection and mocking for tests.
//! Production code uses [`DeezerClient`](super::DeezerClient); tests
//! substitute mock implementations so the cache and assembler can be
//! exercised without the network.

use async_trait::async_trait;

use super::domain::{ArtistProfile, LookupError};

/// Trait for resolving a free-text artist name to a profile.
#[async_trait]
pub trait ArtistLookupApi: Send + Sync {
    /// Look up one artist. Implementations fail on network errors,
    /// non-success responses, or an empty result set.
    async fn fetch_profile(&self, name: &str) -> Result<ArtistProfile, LookupError>;
}

#[async_trait]
impl ArtistLookupApi for super::deezer::DeezerClient {
    async fn fetch_profile(&self, name: &str) -> Result<ArtistProfile, LookupError> {
        self.fetch_profile(name).await
    }
}
