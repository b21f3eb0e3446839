//! Integration tests for profile and settings persistence.
//!
//! Tests cover:
//! - Profile save/load round trip
//! - Defaults for missing and corrupt documents
//! - Document shape on disk
//! - Serialized load-mutate-save updates

use chrono::{Local, TimeZone};
use movie_explorer::core::library;
use movie_explorer::core::profile_store::ProfileStore;
use movie_explorer::core::store::{JsonStore, PROFILE_SLOT, SETTINGS_SLOT};
use movie_explorer::models::movie::Movie;
use movie_explorer::models::profile::{FavouriteEntry, UserProfile};
use movie_explorer::models::settings::{AppSettings, FontSize, SortBy};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

// ========== TEST FIXTURES ==========

fn sample_profile() -> UserProfile {
    let ts = Local.with_ymd_and_hms(2024, 3, 1, 18, 42, 7).unwrap();
    let entry = |title: &str, year: i32, fav: bool| FavouriteEntry {
        title: title.to_string(),
        year,
        genres: vec!["Drama".to_string(), "Crime".to_string()],
        emoji: "🎞️".to_string(),
        timestamp: ts,
        is_favourite: fav,
    };

    UserProfile {
        user_name: "Sam".to_string(),
        favourites: vec![entry("Heat", 1995, true)],
        viewing_history: vec![entry("Heat", 1995, false), entry("Se7en", 1995, false)],
    }
}

fn movie(title: &str) -> Movie {
    Movie {
        title: title.to_string(),
        year: 2000,
        ..Default::default()
    }
}

// ========== PROFILE TESTS ==========

#[test]
fn test_profile_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));
    let profile = sample_profile();

    assert!(store.save_profile(&profile));
    let loaded = store.load_profile();

    assert_eq!(loaded, profile);
}

#[test]
fn test_missing_profile_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));

    assert_eq!(store.load_profile(), UserProfile::default());
}

#[test]
fn test_corrupt_profile_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(PROFILE_SLOT), "{\"userName\": ").unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));

    assert_eq!(store.load_profile(), UserProfile::default());
}

#[test]
fn test_profile_document_shape() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));
    store.save_profile(&sample_profile());

    let raw = fs::read_to_string(temp_dir.path().join(PROFILE_SLOT)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["userName"], "Sam");
    assert_eq!(value["favourites"][0]["isFavourite"], true);
    assert_eq!(value["viewingHistory"][1]["title"], "Se7en");
    assert!(value["viewingHistory"][0]["timestamp"].is_string());
    assert!(value["favourites"][0]["genres"].is_array());
}

#[test]
fn test_save_profile_into_unwritable_location() {
    let temp_dir = TempDir::new().unwrap();
    // A regular file where the data directory should be
    let blocker = temp_dir.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();
    let store = ProfileStore::new(JsonStore::new(&blocker));

    assert!(!store.save_profile(&sample_profile()));
    assert!(store.try_save_profile(&sample_profile()).is_err());
    assert_eq!(store.load_profile(), UserProfile::default());
}

#[test]
fn test_update_profile_persists() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));

    let (added, saved) = store
        .update_profile(|p| library::add_to_favourites(p, &movie("Heat")))
        .unwrap();

    assert!(added);
    assert_eq!(store.load_profile(), saved);
}

#[test]
fn test_concurrent_updates_are_not_lost() {
    let temp_dir = TempDir::new().unwrap();
    let store = Arc::new(ProfileStore::new(JsonStore::new(temp_dir.path())));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                store
                    .update_profile(|p| library::add_to_history(p, &movie(&format!("Movie {}", i))))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.load_profile().viewing_history.len(), 8);
}

#[test]
fn test_update_profile_reports_write_failure() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();
    let store = ProfileStore::new(JsonStore::new(&blocker));

    let result = store.update_profile(|p| library::add_to_favourites(p, &movie("Heat")));

    assert!(result.is_err());
    assert!(store.load_profile().favourites.is_empty());
}

// ========== SETTINGS TESTS ==========

#[test]
fn test_missing_settings_use_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));

    let settings = store.load_settings();

    assert!(!settings.is_dark_mode);
    assert_eq!(settings.font_size, FontSize::Medium);
    assert_eq!(settings.sort_by, SortBy::Title);
}

#[test]
fn test_corrupt_settings_use_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(SETTINGS_SLOT), "{\"isDarkMode\": tru").unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));

    assert_eq!(store.load_settings(), AppSettings::default());
}

#[test]
fn test_unknown_setting_value_keeps_other_fields() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(SETTINGS_SLOT),
        r#"{"isDarkMode": true, "fontSize": "Enormous", "sortBy": "Year"}"#,
    )
    .unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));

    let settings = store.load_settings();

    assert!(settings.is_dark_mode);
    assert_eq!(settings.font_size, FontSize::Medium);
    assert_eq!(settings.sort_by, SortBy::Year);
}

#[test]
fn test_settings_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));
    let settings = AppSettings {
        is_dark_mode: true,
        font_size: FontSize::Small,
        sort_by: SortBy::Year,
    };

    assert!(store.save_settings(&settings));
    assert_eq!(store.load_settings(), settings);
}

#[test]
fn test_settings_and_profile_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(PROFILE_SLOT), "garbage").unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));

    let updated = store.update_settings(|s| s.is_dark_mode = true).unwrap();

    assert!(updated.is_dark_mode);
    assert!(store.load_settings().is_dark_mode);
    assert_eq!(store.load_profile(), UserProfile::default());
}

#[test]
fn test_settings_write_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("data");
    fs::write(&blocker, "not a directory").unwrap();
    let store = ProfileStore::new(JsonStore::new(&blocker));

    assert!(store.update_settings(|s| s.font_size = FontSize::Large).is_err());
    assert!(store.try_save_settings(&AppSettings::default()).is_err());
    assert!(!store.save_settings(&AppSettings::default()));
}

#[test]
fn test_try_save_settings_writes_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(JsonStore::new(temp_dir.path()));
    let settings = AppSettings {
        sort_by: SortBy::Rating,
        ..Default::default()
    };

    store.try_save_settings(&settings).unwrap();

    assert_eq!(store.load_settings(), settings);
}
