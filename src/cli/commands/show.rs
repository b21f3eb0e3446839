//! Movie detail command.

use crate::cli::context::{warn_not_saved, AppContext};
use crate::core::{library, query};
use anyhow::Result;
use colored::Colorize;

/// Show a movie and record the view.
pub async fn show_movie(ctx: &AppContext, title: &str) -> Result<()> {
    let catalog = ctx.load_movies().await;
    let movie = query::find_by_title(&catalog, title)
        .ok_or_else(|| crate::Error::MovieNotFound(title.to_string()))?;

    let profile = match ctx
        .profiles
        .update_profile(|p| library::add_to_history(p, movie))
    {
        Ok((added, profile)) => {
            if added {
                tracing::debug!("Added '{}' to viewing history", movie.title);
            }
            profile
        }
        Err(e) => {
            warn_not_saved("Viewing history", &e);
            ctx.profiles.load_profile()
        }
    };

    println!("{}  {}", movie.emoji, movie.title.bold().cyan());
    println!();
    println!("  {} {}", "Year:".bold(), movie.year);
    println!("  {} {:.1}", "Rating:".bold(), movie.rating);
    println!("  {} {}", "Director:".bold(), movie.director);
    println!("  {} {}", "Genres:".bold(), movie.genres_display());
    println!();

    if library::is_favourite(&profile, &movie.title) {
        println!("{}", "♥ In your favourites".red());
    } else {
        println!(
            "Add to favourites with: movie-explorer favourites add \"{}\"",
            movie.title
        );
    }

    Ok(())
}
