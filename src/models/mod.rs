//! Data models.

pub mod config;
pub mod movie;
pub mod profile;
pub mod settings;
