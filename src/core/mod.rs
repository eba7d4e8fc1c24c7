//! core
//!
//! Core domain types and operations for Filmlog.
//!
//! # Modules
//!
//! - [`types`] - The movie record type
//! - [`catalog`] - The ordered catalog and its pure operations
//!
//! # Design Principles
//!
//! - Operations are pure: they borrow the catalog and return a new value
//! - The core never validates user input and never touches storage; both
//!   are the shell's job
//! - Missing data degrades to empty or unchanged results, never to errors

pub mod catalog;
pub mod types;

pub use catalog::Catalog;
pub use types::Movie;
