//! Artist lookup cache.
//!
//! Memoizes successful lookups by normalized artist name (trimmed,
//! lowercased) so repeated generations never re-query the provider.
//! Failures are never cached - every call for a missing artist retries.
//!
//! The cache can optionally persist to a JSON file: loaded once at
//! construction, rewritten after each insert, last-write-wins. A file that
//! fails to load or save only costs the memoization, never the lookup.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::domain::{ArtistProfile, LookupError};
use super::traits::ArtistLookupApi;

/// One cached lookup result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The resolved profile.
    pub profile: ArtistProfile,
    /// RFC 3339 timestamp of the fetch that produced this entry.
    pub fetched_at: String,
}

/// Memoizing front for an [`ArtistLookupApi`] client.
pub struct LookupCache<C> {
    client: C,
    entries: BTreeMap<String, CacheEntry>,
    path: Option<PathBuf>,
}

impl<C: ArtistLookupApi> LookupCache<C> {
    /// Create an in-memory cache.
    pub fn new(client: C) -> Self {
        Self {
            client,
            entries: BTreeMap::new(),
            path: None,
        }
    }

    /// Create a cache backed by a JSON file.
    ///
    /// Existing entries are loaded immediately; an unreadable or corrupt
    /// file starts the cache empty with a warning.
    pub fn with_persistence(client: C, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Ignoring corrupt lookup cache");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read lookup cache");
                BTreeMap::new()
            }
        };

        Self {
            client,
            entries,
            path: Some(path),
        }
    }

    /// Get the profile for an artist, fetching on first request.
    ///
    /// Subsequent calls for the same normalized name return the stored
    /// value without touching the client.
    pub async fn get(&mut self, name: &str) -> Result<ArtistProfile, LookupError> {
        let key = normalize_key(name);
        if let Some(entry) = self.entries.get(&key) {
            tracing::debug!(artist = %name, "Lookup cache hit");
            return Ok(entry.profile.clone());
        }

        self.fetch_and_store(name, key).await
    }

    /// Force a fresh fetch, overwriting any stored entry on success.
    pub async fn refresh(&mut self, name: &str) -> Result<ArtistProfile, LookupError> {
        let key = normalize_key(name);
        self.fetch_and_store(name, key).await
    }

    async fn fetch_and_store(
        &mut self,
        name: &str,
        key: String,
    ) -> Result<ArtistProfile, LookupError> {
        let profile = self.client.fetch_profile(name.trim()).await?;
        tracing::info!(artist = %name, genres = profile.genres.len(), "Fetched artist profile");

        self.entries.insert(
            key,
            CacheEntry {
                profile: profile.clone(),
                fetched_at: chrono::Utc::now().to_rfc3339(),
            },
        );
        self.persist();

        Ok(profile)
    }

    /// The wrapped client (mock inspection in tests).
    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Whether the cache holds an entry for this name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_key(name))
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over cached entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &CacheEntry)> {
        self.entries.iter()
    }

    /// Drop all entries (and the backing file's contents on next persist).
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// Write the cache to its backing file, if any.
    ///
    /// Write failures are logged and swallowed: persistence is an
    /// optimization, not a correctness requirement.
    fn persist(&self) {
        let Some(ref path) = self.path else {
            return;
        };

        let result = (|| -> std::io::Result<()> {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let contents = serde_json::to_string_pretty(&self.entries)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            // Write atomically (write to temp, then rename)
            let temp_path = path.with_extension("json.tmp");
            std::fs::write(&temp_path, &contents)?;
            std::fs::rename(&temp_path, path)?;
            Ok(())
        })();

        if let Err(e) = result {
            tracing::warn!(path = %path.display(), error = %e, "Failed to persist lookup cache");
        }
    }
}

/// Cache-key normalization: case-insensitive, whitespace-trimmed.
fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::traits::mocks::MockLookup;

    #[tokio::test]
    async fn test_second_get_hits_cache() {
        let mock = MockLookup::empty().with_profile("Queen", &["Rock"]);
        let mut cache = LookupCache::new(mock);

        let first = cache.get("Queen").await.unwrap();
        let second = cache.get("Queen").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_key_normalization() {
        let mock = MockLookup::empty().with_profile("Freeze Corleone", &["Drill"]);
        let mut cache = LookupCache::new(mock);

        cache.get("  Freeze Corleone  ").await.unwrap();
        cache.get("FREEZE CORLEONE").await.unwrap();

        assert_eq!(cache.client.call_count(), 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("freeze corleone"));
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let mock = MockLookup::failing();
        let mut cache = LookupCache::new(mock);

        assert!(cache.get("Anyone").await.is_err());
        assert!(cache.get("Anyone").await.is_err());

        // Both calls hit the client: negative results never memoize
        assert_eq!(cache.client.call_count(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_refresh_overwrites() {
        let mock = MockLookup::empty().with_profile("Queen", &["Rock"]);
        let mut cache = LookupCache::new(mock);

        cache.get("Queen").await.unwrap();
        cache.refresh("Queen").await.unwrap();

        assert_eq!(cache.client.call_count(), 2);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_persistence_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artists.json");

        {
            let mock = MockLookup::empty().with_profile("Queen", &["Rock", "Pop"]);
            let mut cache = LookupCache::with_persistence(mock, &path);
            cache.get("Queen").await.unwrap();
        }

        // A fresh cache over the same file serves the entry without fetching
        let mock = MockLookup::empty();
        let mut cache = LookupCache::with_persistence(mock, &path);
        let profile = cache.get("Queen").await.unwrap();

        assert_eq!(profile.genres, vec!["Rock", "Pop"]);
        assert_eq!(cache.client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_corrupt_cache_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("artists.json");
        std::fs::write(&path, "not json at all {{{").unwrap();

        let mock = MockLookup::empty().with_profile("Queen", &["Rock"]);
        let mut cache = LookupCache::with_persistence(mock, &path);

        assert!(cache.is_empty());
        cache.get("Queen").await.unwrap();
        assert_eq!(cache.client.call_count(), 1);
    }
}
