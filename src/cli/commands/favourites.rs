//! Favourites and history commands.

use crate::cli::context::{warn_not_saved, AppContext};
use crate::core::{library, query};
use crate::models::profile::FavouriteEntry;
use anyhow::Result;
use colored::Colorize;

/// List favourites, most recent first.
pub fn list_favourites(ctx: &AppContext) -> Result<()> {
    let profile = ctx.profiles.load_profile();
    print_entries("❤️  Favourites", &profile.favourites, "No favourites yet.");
    Ok(())
}

/// List viewing history, most recent first.
pub fn list_history(ctx: &AppContext) -> Result<()> {
    let profile = ctx.profiles.load_profile();
    print_entries(
        "🕘 Viewing History",
        &profile.viewing_history,
        "Nothing viewed yet.",
    );
    Ok(())
}

/// Add a catalog movie to favourites.
pub async fn add_favourite(ctx: &AppContext, title: &str) -> Result<()> {
    let catalog = ctx.load_movies().await;
    let movie = query::find_by_title(&catalog, title)
        .ok_or_else(|| crate::Error::MovieNotFound(title.to_string()))?;

    match ctx
        .profiles
        .update_profile(|p| library::add_to_favourites(p, movie))
    {
        Ok((true, _)) => println!("{} {}", "Added to favourites:".green(), movie.title),
        Ok((false, _)) => println!("{} is already a favourite", movie.title),
        Err(e) => warn_not_saved("Favourites", &e),
    }
    Ok(())
}

/// Remove a title from favourites. Does not need the catalog.
pub fn remove_favourite(ctx: &AppContext, title: &str) -> Result<()> {
    match ctx
        .profiles
        .update_profile(|p| library::remove_from_favourites(p, title))
    {
        Ok((true, _)) => println!("{} {}", "Removed from favourites:".yellow(), title),
        Ok((false, _)) => println!("{} was not a favourite", title),
        Err(e) => warn_not_saved("Favourites", &e),
    }
    Ok(())
}

/// Flip a movie's favourite state.
pub async fn toggle_favourite(ctx: &AppContext, title: &str) -> Result<()> {
    let catalog = ctx.load_movies().await;
    let movie = query::find_by_title(&catalog, title)
        .ok_or_else(|| crate::Error::MovieNotFound(title.to_string()))?;

    match ctx
        .profiles
        .update_profile(|p| library::toggle_favourite(p, movie))
    {
        Ok((true, _)) => println!("{} {}", "Added to favourites:".green(), movie.title),
        Ok((false, _)) => println!("{} {}", "Removed from favourites:".yellow(), movie.title),
        Err(e) => warn_not_saved("Favourites", &e),
    }
    Ok(())
}

fn print_entries(heading: &str, entries: &[FavouriteEntry], empty: &str) {
    println!("{}", heading.bold().cyan());
    println!();

    if entries.is_empty() {
        println!("{}", empty.yellow());
        return;
    }

    for entry in entries {
        println!(
            "  {} {} ({}) {} {}",
            entry.emoji,
            entry.title.bold(),
            entry.year,
            entry.genres_display().dimmed(),
            entry.timestamp_display().dimmed()
        );
    }
}
