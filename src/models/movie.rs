//! Catalog movie record.

use crate::utils::de::{emoji_or_default, null_as_default};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Glyph shown when the catalog entry has no emoji.
pub const DEFAULT_EMOJI: &str = "🎬";

/// A movie as published by the remote catalog.
///
/// `title` is the identity key everywhere in the crate; two records with the
/// same title are treated as the same movie. Missing or `null` fields take
/// their defaults instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// Movie title.
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Release year.
    #[serde(deserialize_with = "null_as_default")]
    pub year: i32,
    /// Genres in display order.
    #[serde(rename = "genre", deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    /// Director name.
    #[serde(deserialize_with = "null_as_default")]
    pub director: String,
    /// Rating on the source scale (0.0 - 10.0).
    #[serde(deserialize_with = "null_as_default")]
    pub rating: f64,
    /// Decorative emoji.
    #[serde(deserialize_with = "emoji_or_default")]
    pub emoji: String,
}

impl Default for Movie {
    fn default() -> Self {
        Self {
            title: String::new(),
            year: 0,
            genres: Vec::new(),
            director: String::new(),
            rating: 0.0,
            emoji: DEFAULT_EMOJI.to_string(),
        }
    }
}

impl Movie {
    /// Genres joined for display, e.g. "Action, Drama".
    pub fn genres_display(&self) -> String {
        if self.genres.is_empty() {
            "Unknown".to_string()
        } else {
            self.genres.join(", ")
        }
    }

    /// Derived key that tells same-titled movies from different years apart.
    ///
    /// Only used for output; equality checks still go through the title.
    pub fn stable_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.title.as_bytes());
        hasher.update(b"\0");
        hasher.update(self.year.to_string().as_bytes());
        let digest = hasher.finalize();
        digest.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_remote_record() {
        let json = r#"{
            "title": "Inception",
            "year": 2010,
            "genre": ["Action", "Sci-Fi"],
            "director": "Christopher Nolan",
            "rating": 8.8,
            "emoji": "🌀"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.genres, vec!["Action", "Sci-Fi"]);
        assert_eq!(movie.director, "Christopher Nolan");
        assert_eq!(movie.emoji, "🌀");
    }

    #[test]
    fn test_missing_emoji_uses_default() {
        let json = r#"{"title": "Heat", "year": 1995, "genre": [], "director": "Michael Mann", "rating": 8.3}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.emoji, DEFAULT_EMOJI);
        assert_eq!(movie.genres_display(), "Unknown");
    }

    #[test]
    fn test_null_fields_use_defaults() {
        let json = r#"{"title": "Alien", "year": null, "genre": null, "director": null, "rating": null, "emoji": null}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Alien");
        assert_eq!(movie.year, 0);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.director, "");
        assert_eq!(movie.rating, 0.0);
        assert_eq!(movie.emoji, DEFAULT_EMOJI);
    }

    #[test]
    fn test_stable_key_depends_on_year() {
        let a = Movie {
            title: "Dune".to_string(),
            year: 1984,
            ..Default::default()
        };
        let b = Movie {
            year: 2021,
            ..a.clone()
        };
        assert_ne!(a.stable_key(), b.stable_key());
        assert_eq!(a.stable_key(), a.clone().stable_key());
        assert_eq!(a.stable_key().len(), 64);
    }
}
