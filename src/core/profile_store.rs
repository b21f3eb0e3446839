//! User profile and settings persistence.
//!
//! Two independent documents, each defaulting when missing or corrupt.
//! `update_profile`/`update_settings` hold a per-document lock across the
//! load-mutate-save sequence so overlapping callers cannot lose updates.

use crate::core::store::{JsonStore, PROFILE_SLOT, SETTINGS_SLOT};
use crate::models::profile::UserProfile;
use crate::models::settings::AppSettings;
use crate::Result;
use std::sync::{Mutex, MutexGuard};

/// Persistence for [`UserProfile`] and [`AppSettings`].
#[derive(Debug)]
pub struct ProfileStore {
    store: JsonStore,
    profile_lock: Mutex<()>,
    settings_lock: Mutex<()>,
}

fn acquire(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    // Guards `()`; a poisoned lock is still usable.
    lock.lock().unwrap_or_else(|e| e.into_inner())
}

impl ProfileStore {
    pub fn new(store: JsonStore) -> Self {
        Self {
            store,
            profile_lock: Mutex::new(()),
            settings_lock: Mutex::new(()),
        }
    }

    /// Load the profile, or an empty one.
    pub fn load_profile(&self) -> UserProfile {
        self.store.load(PROFILE_SLOT)
    }

    /// Save the profile. Best-effort; returns whether it was written.
    pub fn save_profile(&self, profile: &UserProfile) -> bool {
        let _guard = acquire(&self.profile_lock);
        self.store.save(PROFILE_SLOT, profile)
    }

    /// Save the profile, returning the error on failure.
    pub fn try_save_profile(&self, profile: &UserProfile) -> Result<()> {
        let _guard = acquire(&self.profile_lock);
        self.store.try_save(PROFILE_SLOT, profile)
    }

    /// Load, mutate and save the profile as one step.
    ///
    /// Returns the closure's result and the updated profile, or the write
    /// error if the profile did not reach disk.
    pub fn update_profile<R>(
        &self,
        f: impl FnOnce(&mut UserProfile) -> R,
    ) -> Result<(R, UserProfile)> {
        let _guard = acquire(&self.profile_lock);
        let mut profile: UserProfile = self.store.load(PROFILE_SLOT);
        let result = f(&mut profile);
        if let Err(e) = self.store.try_save(PROFILE_SLOT, &profile) {
            tracing::warn!("Failed to save {}: {}", PROFILE_SLOT, e);
            return Err(e);
        }
        Ok((result, profile))
    }

    /// Load the settings, or the defaults.
    pub fn load_settings(&self) -> AppSettings {
        self.store.load(SETTINGS_SLOT)
    }

    /// Save the settings. Best-effort; returns whether they were written.
    pub fn save_settings(&self, settings: &AppSettings) -> bool {
        let _guard = acquire(&self.settings_lock);
        self.store.save(SETTINGS_SLOT, settings)
    }

    /// Save the settings, returning the error on failure.
    pub fn try_save_settings(&self, settings: &AppSettings) -> Result<()> {
        let _guard = acquire(&self.settings_lock);
        self.store.try_save(SETTINGS_SLOT, settings)
    }

    /// Load, mutate and save the settings as one step.
    pub fn update_settings(&self, f: impl FnOnce(&mut AppSettings)) -> Result<AppSettings> {
        let _guard = acquire(&self.settings_lock);
        let mut settings: AppSettings = self.store.load(SETTINGS_SLOT);
        f(&mut settings);
        if let Err(e) = self.store.try_save(SETTINGS_SLOT, &settings) {
            tracing::warn!("Failed to save {}: {}", SETTINGS_SLOT, e);
            return Err(e);
        }
        Ok(settings)
    }
}
