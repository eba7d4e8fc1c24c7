//! Filmlog - an interactive CLI catalog manager for movies
//!
//! Filmlog keeps a single user's movie collection in a JSON file and drives
//! it through a numbered menu: list the catalog, add a movie, mark one as
//! watched, and search by release year.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Interactive shell (menu loop, input validation, messaging)
//! - [`core`] - Domain types and pure catalog operations
//! - [`store`] - Whole-file JSON persistence
//! - [`ui`] - User interaction utilities (prompts and display formatting)
//!
//! # Correctness Invariants
//!
//! Filmlog maintains the following invariants:
//!
//! 1. Catalog operations are pure: the input catalog is never mutated,
//!    each operation returns a new catalog or a derived result
//! 2. Record ids are unique and assigned as `max(existing ids) + 1`
//! 3. Loading never fails: absent or malformed storage yields an empty
//!    catalog
//! 4. The catalog is saved after every mutation and once more at exit

pub mod cli;
pub mod core;
pub mod store;
pub mod ui;
