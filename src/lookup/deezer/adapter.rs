//! Adapter layer: Convert Deezer DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.
//! If Deezer changes their response format, only this file and dto.rs
//! need to change.

use super::dto;
use crate::lookup::domain::ArtistProfile;

/// Build an [`ArtistProfile`] from the pieces the client fetched.
///
/// `genre_names` is the concatenation of every album's genre list, in fetch
/// order; duplicates are removed here while preserving first-seen order.
pub fn to_profile(
    hit: dto::ArtistHit,
    top: &dto::TopTracksResponse,
    genre_names: Vec<String>,
) -> ArtistProfile {
    ArtistProfile {
        name: hit.name,
        genres: dedup_preserving_order(genre_names),
        link: hit.link,
        fans: hit.nb_fan,
        avg_track_secs: average_duration(top),
    }
}

/// Collect the distinct album ids referenced by the top tracks, in order.
pub fn album_ids(top: &dto::TopTracksResponse) -> Vec<u64> {
    dedup_preserving_order(
        top.data
            .iter()
            .filter_map(|t| t.album.as_ref().map(|a| a.id))
            .collect(),
    )
}

/// Mean duration of the tracks that report one, rounded down.
fn average_duration(top: &dto::TopTracksResponse) -> Option<u32> {
    let durations: Vec<u32> = top.data.iter().filter_map(|t| t.duration).collect();
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<u32>() / durations.len() as u32)
}

fn dedup_preserving_order<T: Clone + Eq + std::hash::Hash>(items: Vec<T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|i| seen.insert(i.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_hit(name: &str) -> dto::ArtistHit {
        dto::ArtistHit {
            id: 42,
            name: name.to_string(),
            link: Some(format!("https://www.deezer.com/artist/{}", 42)),
            picture_medium: None,
            nb_fan: Some(1000),
        }
    }

    fn make_track(duration: Option<u32>, album_id: Option<u64>) -> dto::TopTrack {
        dto::TopTrack {
            id: Some(1),
            title: Some("t".to_string()),
            duration,
            album: album_id.map(|id| dto::AlbumRef { id, title: None }),
        }
    }

    #[test]
    fn test_profile_from_parts() {
        let top = dto::TopTracksResponse {
            data: vec![make_track(Some(200), Some(1)), make_track(Some(100), Some(2))],
        };

        let profile = to_profile(
            make_hit("Queen"),
            &top,
            vec!["Rock".to_string(), "Pop".to_string(), "Rock".to_string()],
        );

        assert_eq!(profile.name, "Queen");
        assert_eq!(profile.genres, vec!["Rock", "Pop"]);
        assert_eq!(profile.fans, Some(1000));
        assert_eq!(profile.avg_track_secs, Some(150));
    }

    #[test]
    fn test_no_durations_means_no_average() {
        let top = dto::TopTracksResponse {
            data: vec![make_track(None, Some(1))],
        };

        let profile = to_profile(make_hit("X"), &top, vec![]);

        assert!(profile.avg_track_secs.is_none());
        assert!(profile.genres.is_empty());
    }

    #[test]
    fn test_album_ids_deduplicated_in_order() {
        let top = dto::TopTracksResponse {
            data: vec![
                make_track(None, Some(7)),
                make_track(None, Some(3)),
                make_track(None, Some(7)),
                make_track(None, None),
            ],
        };

        assert_eq!(album_ids(&top), vec![7, 3]);
    }
}
