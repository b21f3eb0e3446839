//! Movie Explorer CLI
//!
//! Browse a movie catalog, keep favourites and track viewing history.

use clap::Parser;
use movie_explorer::cli::{
    args::{CacheAction, Cli, Commands, FavouritesAction, ProfileAction, SettingsAction},
    commands::{cache, favourites, movies, settings, show},
    context::AppContext,
};
use movie_explorer::models::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let mut config = config::load_config();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    // Services are built once and handed to each command
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Movies {
            search,
            genre,
            sort,
            extended,
            format,
        } => {
            movies::list_movies(&ctx, search, genre, sort, extended, format).await?;
        }

        Commands::Genres => {
            movies::list_genres(&ctx).await?;
        }

        Commands::Show { title } => {
            show::show_movie(&ctx, &title).await?;
        }

        Commands::Favourites { action } => match action {
            FavouritesAction::List => favourites::list_favourites(&ctx)?,
            FavouritesAction::Add { title } => favourites::add_favourite(&ctx, &title).await?,
            FavouritesAction::Remove { title } => favourites::remove_favourite(&ctx, &title)?,
            FavouritesAction::Toggle { title } => {
                favourites::toggle_favourite(&ctx, &title).await?
            }
        },

        Commands::History => {
            favourites::list_history(&ctx)?;
        }

        Commands::Settings { action } => match action {
            SettingsAction::Show => settings::show_settings(&ctx)?,
            SettingsAction::Set {
                dark_mode,
                font_size,
                sort_by,
            } => settings::set_settings(&ctx, dark_mode, font_size, sort_by)?,
        },

        Commands::Profile { action } => match action {
            ProfileAction::Show => settings::show_profile(&ctx)?,
            ProfileAction::Name { name } => settings::set_user_name(&ctx, &name)?,
        },

        Commands::Cache { action } => match action {
            CacheAction::Clear => cache::clear_cache(&ctx)?,
            CacheAction::Status => cache::cache_status(&ctx)?,
        },
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = if verbose {
        "movie_explorer=debug"
    } else {
        "movie_explorer=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
