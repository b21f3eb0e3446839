//! Core business logic modules.

pub mod catalog_cache;
pub mod library;
pub mod profile_store;
pub mod query;
pub mod store;
