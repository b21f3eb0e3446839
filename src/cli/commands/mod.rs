//! CLI command implementations.

pub mod cache;
pub mod favourites;
pub mod movies;
pub mod settings;
pub mod show;
