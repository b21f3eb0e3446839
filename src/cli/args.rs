//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Movie Explorer - browse movies, keep favourites, track what you watched
#[derive(Parser, Debug)]
#[command(name = "movie-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the data directory (cache, profile, settings)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog, optionally filtered and sorted
    Movies {
        /// Case-insensitive title search
        #[arg(short, long)]
        search: Option<String>,

        /// Only movies with this genre (exact name)
        #[arg(short, long)]
        genre: Option<String>,

        /// Sort: title, year-desc, year-asc, rating-desc, rating-asc
        /// (default: from settings)
        #[arg(long)]
        sort: Option<String>,

        /// Also match the search against genres and director
        #[arg(long)]
        extended: bool,

        /// Output format: table, simple, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// List the genres available in the catalog
    Genres,

    /// Show a movie's details and record it in the viewing history
    Show {
        /// Movie title
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Manage favourites
    Favourites {
        #[command(subcommand)]
        action: FavouritesAction,
    },

    /// Show the viewing history
    History,

    /// Show or change settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show or change the user profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage the local catalog cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum FavouritesAction {
    /// List favourites
    List,

    /// Add a movie to favourites
    Add {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Remove a movie from favourites
    Remove {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Add the movie if missing, remove it otherwise
    Toggle {
        #[arg(value_name = "TITLE")]
        title: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print current settings
    Show,

    /// Change one or more settings
    Set {
        /// Dark mode on or off
        #[arg(long)]
        dark_mode: Option<bool>,

        /// Font size: Small, Medium, Large
        #[arg(long)]
        font_size: Option<String>,

        /// Default sort: Title, Year, Rating
        #[arg(long)]
        sort_by: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print the profile summary
    Show,

    /// Set the display name
    Name {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Delete the cached catalog; the next load downloads it again
    Clear,

    /// Show whether a cached catalog exists
    Status,
}
