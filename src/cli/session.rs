//! cli::session
//!
//! The interactive menu loop.
//!
//! # Design
//!
//! One catalog value is threaded through the loop: each mutating action
//! replaces it with the value returned by the pure core operation and then
//! saves. Validation failures report an error and fall back to the menu
//! without mutating state or touching storage.
//!
//! The loop is generic over its reader and writer so tests can drive a
//! whole session from in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::Catalog;
use crate::store::Store;
use crate::ui::output;
use crate::ui::prompts;

/// Interactive shell state: the open store and the current catalog value.
pub struct Session {
    store: Store,
    catalog: Catalog,
}

impl Session {
    /// Create a session over a loaded catalog.
    pub fn new(store: Store, catalog: Catalog) -> Self {
        Self { store, catalog }
    }

    /// The current catalog value.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu loop until the user chooses to exit or input ends.
    ///
    /// End of input behaves like option `0`: the catalog is saved and the
    /// loop exits cleanly, so piped input terminates without an error.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        loop {
            self.print_menu(out)?;

            let choice = match prompts::read_line("Choose an action: ", input, out)? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.list(out)?,
                "2" => self.add(input, out)?,
                "3" => self.mark_watched(input, out)?,
                "4" => self.find_by_year(input, out)?,
                "0" => {
                    writeln!(out, "Goodbye")?;
                    break;
                }
                _ => writeln!(out, "Error: choose an option between 0 and 4")?,
            }
        }

        self.store.save(&self.catalog)?;
        Ok(())
    }

    fn print_menu(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "MOVIE CATALOG")?;
        writeln!(out)?;
        writeln!(out, "1. List all movies")?;
        writeln!(out, "2. Add a movie")?;
        writeln!(out, "3. Mark a movie as watched")?;
        writeln!(out, "4. Find movies by year")?;
        writeln!(out, "0. Exit")?;
        Ok(())
    }

    fn list(&self, out: &mut impl Write) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(out, "\nThe catalog is empty.")?;
            return Ok(());
        }

        writeln!(out, "\nTotal movies: {}", self.catalog.len())?;
        for movie in self.catalog.movies() {
            writeln!(out, "{}", output::format_movie(movie))?;
        }
        Ok(())
    }

    fn add(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        writeln!(out, "\nAdd a movie")?;

        let title = match prompts::read_line("Title: ", input, out)? {
            Some(title) => title,
            None => return Ok(()),
        };
        if title.is_empty() {
            writeln!(out, "Error: a title is required")?;
            return Ok(());
        }

        let year = match prompts::read_line("Release year: ", input, out)? {
            Some(year) => year,
            None => return Ok(()),
        };
        let year: i32 = match year.parse() {
            Ok(year) => year,
            Err(_) => {
                writeln!(out, "Error: enter a number for the year")?;
                return Ok(());
            }
        };

        self.catalog = self.catalog.add(&title, year);
        self.store.save(&self.catalog)?;

        writeln!(out, "Movie '{}' added!", title)?;
        Ok(())
    }

    fn mark_watched(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        if self.catalog.is_empty() {
            writeln!(out, "\nThe catalog is empty.")?;
            return Ok(());
        }

        writeln!(out, "\nAvailable movies:")?;
        for movie in self.catalog.movies() {
            writeln!(out, "{}", output::format_movie_brief(movie))?;
        }

        let id = match prompts::read_line("\nEnter the id of the movie to mark: ", input, out)? {
            Some(id) => id,
            None => return Ok(()),
        };
        let id: u64 = match id.parse() {
            Ok(id) => id,
            Err(_) => {
                writeln!(out, "Error: enter a number for the id")?;
                return Ok(());
            }
        };

        // Pre-check for a friendlier message; mark_watched itself is a
        // no-op on an unknown id.
        if !self.catalog.contains_id(id) {
            writeln!(out, "No movie with id {} found", id)?;
            return Ok(());
        }

        self.catalog = self.catalog.mark_watched(id);
        self.store.save(&self.catalog)?;

        writeln!(out, "Movie marked as watched!")?;
        Ok(())
    }

    fn find_by_year(&self, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
        let year = match prompts::read_line("\nEnter a year to search for: ", input, out)? {
            Some(year) => year,
            None => return Ok(()),
        };
        let year: i32 = match year.parse() {
            Ok(year) => year,
            Err(_) => {
                writeln!(out, "Error: enter a number for the year")?;
                return Ok(());
            }
        };

        let found = self.catalog.find_by_year(year);
        if found.is_empty() {
            writeln!(out, "No movies found for {}", year)?;
            return Ok(());
        }

        writeln!(out, "\nFound {} movies for {}:", found.len(), year)?;
        for movie in found {
            writeln!(out, "{}", output::format_movie_brief(movie))?;
        }
        Ok(())
    }
}
