//! ui::output
//!
//! Display formatting for movie records.

use crate::core::Movie;

/// Watched-status marker for display.
fn status(watched: bool) -> &'static str {
    if watched {
        "[watched]"
    } else {
        "[not watched]"
    }
}

/// Format a movie for the full listing, including the year when present.
///
/// # Example
///
/// ```
/// use filmlog::core::Catalog;
/// use filmlog::ui::output::format_movie;
///
/// let catalog = Catalog::default().add("The Matrix", 1999);
/// assert_eq!(
///     format_movie(&catalog.movies()[0]),
///     "1. The Matrix (1999) - [not watched]"
/// );
/// ```
pub fn format_movie(movie: &Movie) -> String {
    match movie.year {
        Some(year) => format!("{}. {} ({}) - {}", movie.id, movie.title, year, status(movie.watched)),
        None => format_movie_brief(movie),
    }
}

/// Format a movie without the year, for id-selection and search listings.
pub fn format_movie_brief(movie: &Movie) -> String {
    format!("{}. {} - {}", movie.id, movie.title, status(movie.watched))
}
