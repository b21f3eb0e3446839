//! Favourites and viewing-history rules.
//!
//! Both lists are keyed by title and ordered most-recent-first. Entries are
//! never edited in place. Callers persist the profile after mutating it.

use crate::models::movie::Movie;
use crate::models::profile::{FavouriteEntry, UserProfile};
use chrono::Local;

/// Counts shown on the settings screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileStats {
    pub favourites: usize,
    pub viewed: usize,
}

/// Whether `title` is in the favourites list.
pub fn is_favourite(profile: &UserProfile, title: &str) -> bool {
    profile.favourites.iter().any(|f| f.title == title)
}

/// Star a movie. Returns `false` if it was already a favourite.
pub fn add_to_favourites(profile: &mut UserProfile, movie: &Movie) -> bool {
    if is_favourite(profile, &movie.title) {
        return false;
    }
    let entry = FavouriteEntry::from_movie(movie, true, Local::now());
    profile.favourites.insert(0, entry);
    true
}

/// Unstar a movie. Absent titles are ignored; returns whether one was removed.
pub fn remove_from_favourites(profile: &mut UserProfile, title: &str) -> bool {
    match profile.favourites.iter().position(|f| f.title == title) {
        Some(idx) => {
            profile.favourites.remove(idx);
            true
        }
        None => false,
    }
}

/// Flip the favourite state of a movie. Returns the new state.
pub fn toggle_favourite(profile: &mut UserProfile, movie: &Movie) -> bool {
    if remove_from_favourites(profile, &movie.title) {
        false
    } else {
        add_to_favourites(profile, movie)
    }
}

/// Record a view. A title already in the history is left where it is.
///
/// Returns whether a new entry was added.
pub fn add_to_history(profile: &mut UserProfile, movie: &Movie) -> bool {
    if profile.viewing_history.iter().any(|h| h.title == movie.title) {
        return false;
    }
    let entry = FavouriteEntry::from_movie(movie, false, Local::now());
    profile.viewing_history.insert(0, entry);
    true
}

/// Set the display name. Surrounding whitespace is dropped; a blank name
/// is rejected and leaves the profile unchanged.
pub fn set_user_name(profile: &mut UserProfile, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        return false;
    }
    profile.user_name = name.to_string();
    true
}

pub fn stats(profile: &UserProfile) -> ProfileStats {
    ProfileStats {
        favourites: profile.favourites.len(),
        viewed: profile.viewing_history.len(),
    }
}
