//! Genre classification - maps raw provider genre strings onto the fixed
//! internal vocabulary.
//!
//! Pure and deterministic: an alias table is matched case-insensitively
//! against each raw string, unmatched strings are dropped silently, and an
//! empty result falls back to `{Unknown}`. The table is data, not control
//! flow - built-in defaults plus optional extras from the config file.
//!
//! Matching is word-sequence containment rather than raw substring search:
//! the alias "rap" matches "French Rap" and "Rap/Hip Hop" but not "Trap".
//! Every vocabulary display name is itself an alias, which makes
//! classification idempotent over its own output.

use std::collections::BTreeSet;

use crate::model::GenreTag;

/// Built-in alias table: provider genre names and vocabulary display names.
const DEFAULT_ALIASES: &[(&str, GenreTag)] = &[
    // Provider-side names (Deezer)
    ("rap/hip hop", GenreTag::Rap),
    ("hip hop", GenreTag::Rap),
    ("french rap", GenreTag::Rap),
    ("dance", GenreTag::House),
    ("electronic", GenreTag::Electro),
    ("alternative", GenreTag::Indie),
    ("films/games", GenreTag::Cinematic),
    ("soundtrack", GenreTag::Cinematic),
    ("soul & funk", GenreTag::Rnb),
    ("chill out/trip-hop/lounge", GenreTag::Lofi),
    // Vocabulary display names map to themselves
    ("rap", GenreTag::Rap),
    ("trap", GenreTag::Trap),
    ("drill", GenreTag::Drill),
    ("boom bap", GenreTag::BoomBap),
    ("pop", GenreTag::Pop),
    ("r&b", GenreTag::Rnb),
    ("rnb", GenreTag::Rnb),
    ("electro", GenreTag::Electro),
    ("techno", GenreTag::Techno),
    ("house", GenreTag::House),
    ("ambient", GenreTag::Ambient),
    ("lofi", GenreTag::Lofi),
    ("lo-fi", GenreTag::Lofi),
    ("jazz", GenreTag::Jazz),
    ("neo-jazz", GenreTag::NeoJazz),
    ("rock", GenreTag::Rock),
    ("indie", GenreTag::Indie),
    ("metal", GenreTag::Metal),
    ("cinematic", GenreTag::Cinematic),
];

/// Maps raw genre strings to [`GenreTag`] values.
pub struct GenreClassifier {
    aliases: Vec<(Vec<String>, GenreTag)>,
}

impl GenreClassifier {
    /// Classifier with the built-in alias table.
    pub fn new() -> Self {
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|(alias, tag)| (words(alias), *tag))
            .collect();
        Self { aliases }
    }

    /// Classifier extended with additional `alias -> tag` pairs, e.g. from
    /// the config file. Extras are checked after the built-ins.
    pub fn with_aliases<'a>(extra: impl IntoIterator<Item = (&'a str, GenreTag)>) -> Self {
        let mut classifier = Self::new();
        for (alias, tag) in extra {
            classifier.aliases.push((words(alias), tag));
        }
        classifier
    }

    /// Map raw genre strings onto the vocabulary.
    ///
    /// Each raw string may contribute several tags (e.g. "Neo-Jazz" matches
    /// both `neo-jazz` and `jazz`). Strings matching nothing are dropped;
    /// if nothing matches at all the result is `{Unknown}`.
    pub fn classify<S: AsRef<str>>(&self, raw: &[S]) -> BTreeSet<GenreTag> {
        let mut tags = BTreeSet::new();

        for raw_genre in raw {
            let raw_words = words(raw_genre.as_ref());
            for (alias_words, tag) in &self.aliases {
                if contains_sequence(&raw_words, alias_words) {
                    tags.insert(*tag);
                }
            }
        }

        if tags.is_empty() {
            tags.insert(GenreTag::Unknown);
        }
        tags
    }
}

impl Default for GenreClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased alphanumeric words of a genre string.
fn words(s: &str) -> Vec<String> {
    s.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '&')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `needle` occurs in `haystack` as a contiguous word sequence.
fn contains_sequence(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_unknown() {
        let classifier = GenreClassifier::new();
        let tags = classifier.classify::<&str>(&[]);
        assert_eq!(tags, BTreeSet::from([GenreTag::Unknown]));
    }

    #[test]
    fn test_unmatched_strings_dropped_to_unknown() {
        let classifier = GenreClassifier::new();
        let tags = classifier.classify(&["Zydeco", "Klezmer"]);
        assert_eq!(tags, BTreeSet::from([GenreTag::Unknown]));
    }

    #[test]
    fn test_provider_aliases() {
        let classifier = GenreClassifier::new();

        let tags = classifier.classify(&["Rap/Hip Hop", "Dance", "Alternative"]);

        assert_eq!(
            tags,
            BTreeSet::from([GenreTag::Rap, GenreTag::House, GenreTag::Indie])
        );
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = GenreClassifier::new();
        let tags = classifier.classify(&["DRILL", "french rap"]);
        assert_eq!(tags, BTreeSet::from([GenreTag::Drill, GenreTag::Rap]));
    }

    #[test]
    fn test_word_boundaries_rap_does_not_match_trap() {
        let classifier = GenreClassifier::new();
        let tags = classifier.classify(&["Trap"]);
        assert_eq!(tags, BTreeSet::from([GenreTag::Trap]));
    }

    #[test]
    fn test_substring_tolerant_within_longer_strings() {
        let classifier = GenreClassifier::new();
        let tags = classifier.classify(&["UK Drill 2024", "Detroit techno revival"]);
        assert_eq!(tags, BTreeSet::from([GenreTag::Drill, GenreTag::Techno]));
    }

    #[test]
    fn test_unknown_dropped_once_something_matches() {
        let classifier = GenreClassifier::new();
        let tags = classifier.classify(&["Gibberish", "Jazz"]);
        assert!(tags.contains(&GenreTag::Jazz));
        assert!(!tags.contains(&GenreTag::Unknown));
    }

    /// Classifying the display names of a prior result yields the same set.
    #[test]
    fn test_idempotent_over_own_output() {
        let classifier = GenreClassifier::new();
        let inputs: Vec<Vec<&str>> = vec![
            vec![],
            vec!["Rap/Hip Hop", "Drill"],
            vec!["Neo-Jazz"],
            vec!["Electronic", "Dance", "Techno"],
            vec!["nothing recognizable"],
        ];

        for input in inputs {
            let first = classifier.classify(&input);
            let as_strings: Vec<&str> = first.iter().map(|t| t.as_str()).collect();
            let second = classifier.classify(&as_strings);
            assert_eq!(first, second, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_extra_aliases_from_config() {
        let classifier = GenreClassifier::with_aliases([("shoegaze", GenreTag::Indie)]);
        let tags = classifier.classify(&["Shoegaze"]);
        assert_eq!(tags, BTreeSet::from([GenreTag::Indie]));
    }
}
