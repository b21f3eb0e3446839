//! User profile data model.

use super::movie::{Movie, DEFAULT_EMOJI};
use crate::utils::de::{emoji_or_default, null_as_default};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A movie that was favourited or viewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteEntry {
    pub title: String,
    pub year: i32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    #[serde(default = "default_emoji", deserialize_with = "emoji_or_default")]
    pub emoji: String,
    /// When the entry was added or viewed.
    pub timestamp: DateTime<Local>,
    /// `true` for a favourites entry, `false` for a history entry.
    pub is_favourite: bool,
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

impl FavouriteEntry {
    /// Snapshot a catalog movie at `timestamp`.
    pub fn from_movie(movie: &Movie, is_favourite: bool, timestamp: DateTime<Local>) -> Self {
        Self {
            title: movie.title.clone(),
            year: movie.year,
            genres: movie.genres.clone(),
            emoji: movie.emoji.clone(),
            timestamp,
            is_favourite,
        }
    }

    /// Genres joined for display.
    pub fn genres_display(&self) -> String {
        self.genres.join(", ")
    }

    /// Short local date and time, e.g. "2024-03-01 18:42".
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// The user's profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub user_name: String,
    /// Most recently added first.
    pub favourites: Vec<FavouriteEntry>,
    /// Most recently viewed first, one entry per title.
    pub viewing_history: Vec<FavouriteEntry>,
}
