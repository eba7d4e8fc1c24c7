//! cli
//!
//! Interactive shell for Filmlog.
//!
//! # Responsibilities
//!
//! - Own all user-facing text, input parsing, and validation
//! - Thread the catalog value through the pure core operations
//! - Decide when to persist (after each mutation and at exit)
//!
//! # Architecture
//!
//! The shell is thin: it validates primitive inputs (non-empty title,
//! integer year, integer id) and delegates to [`crate::core::Catalog`].
//! The core contract stays safe without the shell's pre-checks — an
//! unknown id in `mark_watched` is a no-op — the shell only adds
//! friendlier messages on top.

pub mod session;

pub use session::Session;

use std::io;

use anyhow::Result;

use crate::store::Store;

/// Default storage location: `movies.json` in the working directory.
pub const STORAGE_PATH: &str = "movies.json";

/// Run the interactive shell against the default storage location.
///
/// This is the main entry point called from `main.rs`. The catalog is
/// loaded once here; everything after that happens inside the session
/// loop until the user exits or stdin closes.
pub fn run() -> Result<()> {
    let store = Store::new(STORAGE_PATH);
    let catalog = store.load();

    let mut session = Session::new(store, catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}
