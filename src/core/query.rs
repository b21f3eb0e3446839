//! Catalog filtering and sorting.
//!
//! Pure functions over an in-memory catalog. The pipeline is always:
//! search term, then genre filter, then sort. Inputs are never modified.

use crate::models::movie::Movie;
use crate::models::settings::SortBy;
use std::collections::BTreeSet;

/// Genre option meaning "no genre filter".
pub const ALL_GENRES: &str = "All Genres";

/// Catalog ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Alphabetical by title.
    #[default]
    Title,
    /// Newest first.
    YearDesc,
    /// Oldest first.
    YearAsc,
    /// Highest rated first.
    RatingDesc,
    /// Lowest rated first.
    RatingAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Title,
        SortKey::YearDesc,
        SortKey::YearAsc,
        SortKey::RatingDesc,
        SortKey::RatingAsc,
    ];

    /// Parse a display label or a short name. Unknown input sorts by title.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "year (newest)" | "year-desc" | "year" | "newest" => SortKey::YearDesc,
            "year (oldest)" | "year-asc" | "oldest" => SortKey::YearAsc,
            "rating (high)" | "rating-desc" | "rating" => SortKey::RatingDesc,
            "rating (low)" | "rating-asc" => SortKey::RatingAsc,
            _ => SortKey::Title,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title A-Z",
            SortKey::YearDesc => "Year (Newest)",
            SortKey::YearAsc => "Year (Oldest)",
            SortKey::RatingDesc => "Rating (High)",
            SortKey::RatingAsc => "Rating (Low)",
        }
    }
}

impl From<SortBy> for SortKey {
    fn from(sort_by: SortBy) -> Self {
        match sort_by {
            SortBy::Title => SortKey::Title,
            SortBy::Year => SortKey::YearDesc,
            SortBy::Rating => SortKey::RatingDesc,
        }
    }
}

/// Genre restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenreFilter {
    #[default]
    All,
    /// Exact, case-sensitive genre name.
    Only(String),
}

impl GenreFilter {
    /// Build from a picker value; empty or [`ALL_GENRES`] means no filter.
    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Only(s.to_string())
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => movie.genres.iter().any(|g| g == genre),
        }
    }
}

/// Which fields the search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    /// Title only.
    #[default]
    Title,
    /// Extension: title, any genre, or director.
    Extended,
}

/// A full catalog query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: String,
    pub genre: GenreFilter,
    pub sort: SortKey,
    pub scope: SearchScope,
}

impl CatalogQuery {
    /// Run the query against `catalog`.
    pub fn run(&self, catalog: &[Movie]) -> Vec<Movie> {
        let needle = self.search.trim().to_lowercase();

        let mut movies: Vec<Movie> = catalog
            .iter()
            .filter(|m| needle.is_empty() || matches_search(m, &needle, self.scope))
            .filter(|m| self.genre.matches(m))
            .cloned()
            .collect();

        sort_movies(&mut movies, self.sort);
        movies
    }
}

/// Filter by title substring and genre, then sort.
pub fn query(
    catalog: &[Movie],
    search_term: &str,
    genre: &GenreFilter,
    sort: SortKey,
) -> Vec<Movie> {
    CatalogQuery {
        search: search_term.to_string(),
        genre: genre.clone(),
        sort,
        scope: SearchScope::Title,
    }
    .run(catalog)
}

fn matches_search(movie: &Movie, needle: &str, scope: SearchScope) -> bool {
    if movie.title.to_lowercase().contains(needle) {
        return true;
    }
    match scope {
        SearchScope::Title => false,
        SearchScope::Extended => {
            movie.director.to_lowercase().contains(needle)
                || movie.genres.iter().any(|g| g.to_lowercase().contains(needle))
        }
    }
}

/// Stable sort in place.
pub fn sort_movies(movies: &mut [Movie], sort: SortKey) {
    match sort {
        SortKey::Title => {
            movies.sort_by_cached_key(|m| (m.title.to_lowercase(), m.title.clone()))
        }
        SortKey::YearDesc => movies.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::YearAsc => movies.sort_by(|a, b| a.year.cmp(&b.year)),
        SortKey::RatingDesc => movies.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::RatingAsc => movies.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
    }
}

/// Genre picker values: [`ALL_GENRES`] followed by every distinct genre in
/// ascending order.
pub fn genre_options(catalog: &[Movie]) -> Vec<String> {
    let genres: BTreeSet<&str> = catalog
        .iter()
        .flat_map(|m| m.genres.iter().map(String::as_str))
        .collect();

    std::iter::once(ALL_GENRES.to_string())
        .chain(genres.into_iter().map(str::to_string))
        .collect()
}

/// Find a movie by title. An exact match wins over a case-insensitive one.
pub fn find_by_title<'a>(catalog: &'a [Movie], title: &str) -> Option<&'a Movie> {
    catalog.iter().find(|m| m.title == title).or_else(|| {
        let wanted = title.to_lowercase();
        catalog.iter().find(|m| m.title.to_lowercase() == wanted)
    })
}
