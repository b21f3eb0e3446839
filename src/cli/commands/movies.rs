//! Catalog listing commands.

use crate::cli::context::AppContext;
use crate::core::library;
use crate::core::query::{self, CatalogQuery, GenreFilter, SearchScope, SortKey};
use crate::models::movie::Movie;
use anyhow::Result;
use colored::Colorize;

/// Execute the movies command.
pub async fn list_movies(
    ctx: &AppContext,
    search: Option<String>,
    genre: Option<String>,
    sort: Option<String>,
    extended: bool,
    format: String,
) -> Result<()> {
    let catalog = ctx.load_movies().await;

    let sort = match sort {
        Some(s) => SortKey::parse(&s),
        None => ctx.profiles.load_settings().sort_by.into(),
    };

    let query = CatalogQuery {
        search: search.unwrap_or_default(),
        genre: genre.as_deref().map(GenreFilter::parse).unwrap_or_default(),
        sort,
        scope: if extended {
            SearchScope::Extended
        } else {
            SearchScope::Title
        },
    };

    let results = query.run(&catalog);
    tracing::debug!(
        "Query {:?} matched {} of {} movies",
        query,
        results.len(),
        catalog.len()
    );

    let profile = ctx.profiles.load_profile();
    let is_fav = |m: &Movie| library::is_favourite(&profile, &m.title);

    match format.as_str() {
        "json" => print_json(&results, is_fav)?,
        "simple" => print_simple(&results, is_fav),
        _ => print_table(&results, sort, is_fav),
    }

    Ok(())
}

/// Execute the genres command.
pub async fn list_genres(ctx: &AppContext) -> Result<()> {
    let catalog = ctx.load_movies().await;
    for genre in query::genre_options(&catalog) {
        println!("{}", genre);
    }
    Ok(())
}

/// Print results as JSON.
fn print_json(results: &[Movie], is_fav: impl Fn(&Movie) -> bool) -> Result<()> {
    #[derive(serde::Serialize)]
    struct MovieJson<'a> {
        key: String,
        #[serde(flatten)]
        movie: &'a Movie,
        favourite: bool,
    }

    let output: Vec<MovieJson> = results
        .iter()
        .map(|m| MovieJson {
            key: m.stable_key(),
            movie: m,
            favourite: is_fav(m),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print results in simple format.
fn print_simple(results: &[Movie], is_fav: impl Fn(&Movie) -> bool) {
    if results.is_empty() {
        println!("No movies found.");
        return;
    }

    for movie in results {
        println!(
            "{} {} ({}) - {:.1}{}",
            movie.emoji,
            movie.title,
            movie.year,
            movie.rating,
            if is_fav(movie) { " *" } else { "" }
        );
    }
}

/// Print results as table.
fn print_table(results: &[Movie], sort: SortKey, is_fav: impl Fn(&Movie) -> bool) {
    if results.is_empty() {
        println!("{}", "No movies found.".yellow());
        return;
    }

    println!(
        "{}",
        format!("{} movies, sorted by {}:", results.len(), sort.label())
            .bold()
            .cyan()
    );
    println!();
    println!(
        " {:>4} | {:>4} | {:>6} | {:<40} | {}",
        "#", "Year", "Rating", "Title", "Genres"
    );
    println!("{}", "-".repeat(90));

    for (i, movie) in results.iter().enumerate() {
        let title = if movie.title.chars().count() > 38 {
            format!("{}...", movie.title.chars().take(35).collect::<String>())
        } else {
            movie.title.clone()
        };
        let marker = if is_fav(movie) {
            "♥".red().to_string()
        } else {
            " ".to_string()
        };

        println!(
            "{}{:>4} | {:>4} | {:>6.1} | {:<40} | {}",
            marker,
            i + 1,
            movie.year,
            movie.rating,
            title,
            movie.genres_display()
        );
    }
}
