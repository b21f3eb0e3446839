//! Movie Explorer Library
//!
//! Fetches and caches a movie catalog, filters and sorts it, and keeps the
//! user's favourites, viewing history and settings on disk.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
