//! Artist metadata lookup - fetches artist profiles from the Deezer API.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types that represent our business logic
//! - **API DTOs** (`deezer/dto.rs`) - Exact API response shapes
//! - **Adapter** - Converts DTOs to domain models
//! - **Client** - HTTP client for the Deezer web service
//! - **Cache** - Memoizes successful lookups by normalized artist name
//!
//! This decoupling means:
//! 1. API changes don't ripple through our codebase
//! 2. We can test API contracts independently
//! 3. The assembler can run against mock clients in tests
//!
//! # Usage
//!
//! ```ignore
//! use album_smith::lookup::{DeezerClient, LookupCache};
//!
//! let mut cache = LookupCache::new(DeezerClient::new());
//! let profile = cache.get("Freeze Corleone").await?;
//! println!("genres: {:?}", profile.genres);
//! ```

pub mod cache;
pub mod deezer;
pub mod domain;
pub mod traits;

pub use cache::{CacheEntry, LookupCache};
pub use deezer::DeezerClient;
pub use domain::{ArtistProfile, LookupError};
pub use traits::ArtistLookupApi;
