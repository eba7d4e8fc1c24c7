//! store
//!
//! Whole-file JSON persistence for the catalog.
//!
//! # Format
//!
//! A UTF-8 text file containing a pretty-printed JSON array of movie
//! records (2-space indentation, non-ASCII written literally). The file is
//! read in full at startup and overwritten in full after every mutation —
//! no partial or append writes, no atomicity guarantee against a crash
//! mid-write, and no locking against a second process.
//!
//! # Error Model
//!
//! Loading never fails: a missing, unreadable, or malformed file and any
//! content that is not a list of records all yield an empty catalog. Write
//! failures are real errors and propagate to the shell.
//!
//! # Example
//!
//! ```no_run
//! use filmlog::core::Catalog;
//! use filmlog::store::Store;
//!
//! let store = Store::new("movies.json");
//! let catalog = store.load();
//! let catalog = catalog.add("The Matrix", 1999);
//! store.save(&catalog)?;
//! # Ok::<(), filmlog::store::StoreError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::Catalog;

/// Errors from storage operations.
///
/// There is deliberately no read variant: load degrades to an empty
/// catalog instead of erroring.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog could not be serialized to JSON.
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The storage file could not be written.
    #[error("failed to write catalog file '{path}': {source}")]
    Write {
        /// The storage path that failed.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// Catalog storage backed by a single JSON file.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store for the given file path. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The storage file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full catalog from storage.
    ///
    /// Returns an empty catalog when the file is absent, unreadable, or
    /// does not parse as a list of records. A well-formed list loads
    /// as-is, including records with missing optional fields.
    pub fn load(&self) -> Catalog {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return Catalog::default(),
        };

        serde_json::from_str(&contents).unwrap_or_default()
    }

    /// Serialize the full catalog and overwrite the storage file.
    pub fn save(&self, catalog: &Catalog) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(catalog)?;

        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
