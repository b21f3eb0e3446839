//! Settings and profile commands.

use crate::cli::context::{warn_not_saved, AppContext};
use crate::core::library;
use crate::models::settings::{FontSize, SortBy};
use anyhow::Result;
use colored::Colorize;

/// Print current settings.
pub fn show_settings(ctx: &AppContext) -> Result<()> {
    let settings = ctx.profiles.load_settings();

    println!("{}", "⚙️  Settings".bold().cyan());
    println!();
    println!(
        "  {} {}",
        "Dark mode:".bold(),
        if settings.is_dark_mode { "on" } else { "off" }
    );
    println!("  {} {}", "Font size:".bold(), settings.font_size);
    println!("  {} {}", "Sort by:".bold(), settings.sort_by);
    Ok(())
}

/// Change one or more settings.
pub fn set_settings(
    ctx: &AppContext,
    dark_mode: Option<bool>,
    font_size: Option<String>,
    sort_by: Option<String>,
) -> Result<()> {
    // Validate everything before touching the document.
    let font_size = font_size.as_deref().map(str::parse::<FontSize>).transpose()?;
    let sort_by = sort_by.as_deref().map(str::parse::<SortBy>).transpose()?;

    if dark_mode.is_none() && font_size.is_none() && sort_by.is_none() {
        println!("Nothing to change. See --help for the available settings.");
        return Ok(());
    }

    let saved = ctx.profiles.update_settings(|s| {
        if let Some(dark) = dark_mode {
            s.is_dark_mode = dark;
        }
        if let Some(size) = font_size {
            s.font_size = size;
        }
        if let Some(sort) = sort_by {
            s.sort_by = sort;
        }
    });

    match saved {
        Ok(_) => {
            println!("{}", "Settings saved".green());
            show_settings(ctx)
        }
        Err(e) => {
            warn_not_saved("Settings", &e);
            Ok(())
        }
    }
}

/// Print the profile summary.
pub fn show_profile(ctx: &AppContext) -> Result<()> {
    let profile = ctx.profiles.load_profile();
    let stats = library::stats(&profile);

    let name = if profile.user_name.is_empty() {
        whoami::username()
    } else {
        profile.user_name.clone()
    };

    println!("{}", format!("Welcome, {}! 🎬", name).bold().cyan());
    println!();
    println!("  {} {}", "Favourite Movies:".bold(), stats.favourites);
    println!("  {} {}", "Movies Viewed:".bold(), stats.viewed);

    if profile.user_name.is_empty() {
        println!();
        println!("Set your name with: movie-explorer profile name <NAME>");
    }
    Ok(())
}

/// Set the display name.
pub fn set_user_name(ctx: &AppContext, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Name cannot be empty");
    }

    match ctx
        .profiles
        .update_profile(|p| library::set_user_name(p, name))
    {
        Ok((_, profile)) => println!("{} {}", "Name set to".green(), profile.user_name),
        Err(e) => warn_not_saved("Name", &e),
    }
    Ok(())
}
