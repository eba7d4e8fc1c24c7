//! core::types
//!
//! The movie record type.
//!
//! # Schema
//!
//! Records are stored as JSON objects with keys `id`, `title`, `year`, and
//! `watched`. Storage written by other tools may legitimately omit `year`
//! or `watched`; both are tolerated on load. `id` and `title` are required,
//! a list containing records without them does not parse.

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// # Example
///
/// ```
/// use filmlog::core::Movie;
///
/// let movie: Movie = serde_json::from_str(
///     r#"{"id": 1, "title": "The Matrix", "year": 1999, "watched": false}"#,
/// ).unwrap();
/// assert_eq!(movie.year, Some(1999));
///
/// // year and watched may be absent in externally written storage
/// let partial: Movie = serde_json::from_str(r#"{"id": 2, "title": "Stalker"}"#).unwrap();
/// assert_eq!(partial.year, None);
/// assert!(!partial.watched);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique positive identifier, assigned on insert as `max(ids) + 1`.
    pub id: u64,

    /// Movie title. Non-empty by shell-side validation; the core does not
    /// enforce it.
    pub title: String,

    /// Release year. A record without a year never matches a year lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Watched flag. Absent in storage reads as false.
    #[serde(default)]
    pub watched: bool,
}
