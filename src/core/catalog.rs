//! core::catalog
//!
//! The ordered movie catalog and its pure operations.
//!
//! # Design
//!
//! All operations are copy-on-write: they borrow the catalog and return a
//! new catalog (or a derived result), leaving the input untouched. The
//! shell threads the current value explicitly, replacing it with whatever
//! an operation returns.
//!
//! Ids are recomputed from the current records on every insert rather than
//! kept in a running counter, so a catalog reloaded after external edits
//! restarts the sequence from whatever ids survive.
//!
//! # Example
//!
//! ```
//! use filmlog::core::Catalog;
//!
//! let catalog = Catalog::default();
//! let catalog = catalog.add("The Matrix", 1999);
//! let catalog = catalog.add("Inception", 2010);
//!
//! assert_eq!(catalog.len(), 2);
//! assert_eq!(catalog.movies()[1].id, 2);
//!
//! let watched = catalog.mark_watched(1);
//! assert!(watched.movies()[0].watched);
//! assert!(!catalog.movies()[0].watched);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::types::Movie;

/// The ordered collection of all movie records known to the system.
///
/// Insertion order is preserved and is the iteration/display order.
/// Serializes transparently as a JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Create a catalog from an existing sequence of records.
    ///
    /// Order is kept as given. No id validation is performed; callers
    /// loading external data rely on lookups degrading gracefully instead.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All records in catalog order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Number of records in the catalog.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the catalog has no records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Whether any record has the given id.
    ///
    /// Used by the shell to pre-check existence for a friendlier message;
    /// [`Catalog::mark_watched`] is safe without the check.
    pub fn contains_id(&self, id: u64) -> bool {
        self.movies.iter().any(|movie| movie.id == id)
    }

    /// The id the next inserted record will receive.
    ///
    /// Computed as `max(existing ids, default 0) + 1` from the current
    /// records, so the sequence is strictly increasing within one process
    /// run but can restart after external edits to storage.
    pub fn next_id(&self) -> u64 {
        self.movies.iter().map(|movie| movie.id).max().unwrap_or(0) + 1
    }

    /// Append a new unwatched record, returning the extended catalog.
    ///
    /// The caller validates `title` non-empty before calling; this
    /// operation does no validation itself.
    pub fn add(&self, title: impl Into<String>, year: i32) -> Catalog {
        let mut movies = self.movies.clone();
        movies.push(Movie {
            id: self.next_id(),
            title: title.into(),
            year: Some(year),
            watched: false,
        });
        Catalog { movies }
    }

    /// Return a catalog with the first record matching `id` marked watched.
    ///
    /// An unknown id is not an error: the returned catalog is equal to the
    /// input. Ids are expected unique, so at most one record changes.
    pub fn mark_watched(&self, id: u64) -> Catalog {
        let mut movies = self.movies.clone();
        if let Some(movie) = movies.iter_mut().find(|movie| movie.id == id) {
            movie.watched = true;
        }
        Catalog { movies }
    }

    /// All records released in `year`, in original order.
    ///
    /// Records without a year never match. Returns an empty vector when
    /// nothing matches.
    pub fn find_by_year(&self, year: i32) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|movie| movie.year == Some(year))
            .collect()
    }
}
