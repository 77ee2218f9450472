//! Deezer API Data Transfer Objects
//!
//! These types match EXACTLY what the Deezer API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the deezer module - convert to domain types.
//!
//! API Reference: https://developers.deezer.com/api
//!
//! We use three endpoints:
//! - `/search/artist?q=` to resolve a free-text name to an artist id
//! - `/artist/{id}/top?limit=10` for the artist's top tracks
//! - `/album/{id}` for the genres attached to an album

use serde::{Deserialize, Serialize};

/// Response of `/search/artist`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSearchResponse {
    /// Matching artists, best match first
    #[serde(default)]
    pub data: Vec<ArtistHit>,
    /// Total result count across pages
    pub total: Option<u64>,
}

/// One artist in a search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistHit {
    /// Deezer artist ID
    pub id: u64,
    /// Artist name as registered on Deezer
    pub name: String,
    /// Public artist page URL
    pub link: Option<String>,
    /// Medium-size picture URL
    pub picture_medium: Option<String>,
    /// Fan count
    pub nb_fan: Option<u64>,
}

/// Response of `/artist/{id}/top`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TopTracksResponse {
    /// Top tracks, most popular first
    #[serde(default)]
    pub data: Vec<TopTrack>,
}

/// One track in a top-tracks listing
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopTrack {
    /// Deezer track ID
    pub id: Option<u64>,
    /// Track title
    pub title: Option<String>,
    /// Duration in seconds
    pub duration: Option<u32>,
    /// The album this track belongs to
    pub album: Option<AlbumRef>,
}

/// Minimal album reference embedded in a track
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumRef {
    /// Deezer album ID
    pub id: u64,
    /// Album title
    pub title: Option<String>,
}

/// Response of `/album/{id}` (only the fields we read)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlbumResponse {
    /// Deezer album ID
    pub id: u64,
    /// Album title
    pub title: Option<String>,
    /// Genres attached to the album
    pub genres: Option<GenreList>,
}

/// Genre list wrapper (`genres.data` in the album payload)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenreList {
    #[serde(default)]
    pub data: Vec<Genre>,
}

/// A single genre entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Genre {
    /// Deezer genre ID
    pub id: Option<i64>,
    /// Genre display name, e.g. "Rap/Hip Hop"
    pub name: String,
}

/// Error payload. Deezer wraps errors in an `error` object, sometimes with
/// a 200 status code.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Body of an error payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiErrorBody {
    /// Exception class name, e.g. "DataException"
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    /// Human-readable message
    pub message: String,
    /// Numeric error code
    pub code: Option<i64>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_artist_search() {
        let json = r#"{
            "data": [{
                "id": 13539203,
                "name": "Freeze Corleone",
                "link": "https://www.deezer.com/artist/13539203",
                "picture_medium": "https://api.deezer.com/artist/13539203/image",
                "nb_fan": 1204531,
                "type": "artist"
            }],
            "total": 1
        }"#;

        let response: ArtistSearchResponse =
            serde_json::from_str(json).expect("Should parse artist search");

        assert_eq!(response.total, Some(1));
        let hit = &response.data[0];
        assert_eq!(hit.id, 13539203);
        assert_eq!(hit.name, "Freeze Corleone");
        assert_eq!(hit.nb_fan, Some(1204531));
    }

    #[test]
    fn test_parse_empty_search() {
        let json = r#"{"data": [], "total": 0}"#;

        let response: ArtistSearchResponse =
            serde_json::from_str(json).expect("Should parse empty search");

        assert!(response.data.is_empty());
        assert_eq!(response.total, Some(0));
    }

    #[test]
    fn test_parse_top_tracks() {
        let json = r#"{
            "data": [
                {
                    "id": 1053756222,
                    "title": "Freeze Rael",
                    "duration": 222,
                    "album": {"id": 170829372, "title": "LMF", "type": "album"}
                },
                {
                    "id": 1053756232,
                    "title": "Scellé part.2",
                    "duration": 201,
                    "album": {"id": 170829372, "title": "LMF"}
                }
            ]
        }"#;

        let response: TopTracksResponse =
            serde_json::from_str(json).expect("Should parse top tracks");

        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].duration, Some(222));
        assert_eq!(response.data[0].album.as_ref().unwrap().id, 170829372);
    }

    #[test]
    fn test_parse_album_with_genres() {
        let json = r#"{
            "id": 170829372,
            "title": "LMF",
            "genres": {
                "data": [
                    {"id": 116, "name": "Rap/Hip Hop", "type": "genre"},
                    {"id": 1163, "name": "Drill", "type": "genre"}
                ]
            }
        }"#;

        let album: AlbumResponse = serde_json::from_str(json).expect("Should parse album");

        let genres = album.genres.unwrap();
        assert_eq!(genres.data.len(), 2);
        assert_eq!(genres.data[0].name, "Rap/Hip Hop");
        assert_eq!(genres.data[1].name, "Drill");
    }

    #[test]
    fn test_parse_album_without_genres() {
        let json = r#"{"id": 1, "title": "Untagged"}"#;

        let album: AlbumResponse =
            serde_json::from_str(json).expect("Should parse album without genres");

        assert!(album.genres.is_none());
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{
            "error": {
                "type": "DataException",
                "message": "no data",
                "code": 800
            }
        }"#;

        let error: ApiErrorResponse = serde_json::from_str(json).expect("Should parse error");
        assert_eq!(error.error.message, "no data");
        assert_eq!(error.error.code, Some(800));
    }
}
