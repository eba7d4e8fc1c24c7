//! Property-based tests for the catalog operations.
//!
//! These tests use proptest to verify the catalog's algebraic contracts
//! hold across randomly generated inputs.

use proptest::prelude::*;
use tempfile::TempDir;

use filmlog::core::{Catalog, Movie};
use filmlog::store::Store;

/// Strategy for movie titles (printable ASCII, non-empty).
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,24}"
}

/// Strategy for catalogs with unique, not necessarily contiguous ids.
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::btree_set(1u64..10_000, 0..16).prop_flat_map(|ids| {
        let ids: Vec<u64> = ids.into_iter().collect();
        let fields = prop::collection::vec(
            (arb_title(), prop::option::of(1900i32..2100), any::<bool>()),
            ids.len(),
        );

        fields.prop_map(move |fields| {
            let movies = ids
                .iter()
                .copied()
                .zip(fields)
                .map(|(id, (title, year, watched))| Movie {
                    id,
                    title,
                    year,
                    watched,
                })
                .collect();
            Catalog::from_movies(movies)
        })
    })
}

proptest! {
    /// Adding grows the catalog by one, assigns `max(ids) + 1`, and does
    /// not alias or modify the input catalog.
    #[test]
    fn add_appends_with_monotonic_id(
        catalog in arb_catalog(),
        title in arb_title(),
        year in 1900i32..2100,
    ) {
        let before = catalog.clone();
        let added = catalog.add(&title, year);

        prop_assert_eq!(added.len(), before.len() + 1);

        let expected_id = before.movies().iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let new = added.movies().last().unwrap();
        prop_assert_eq!(new.id, expected_id);
        prop_assert_eq!(new.title.as_str(), title.as_str());
        prop_assert_eq!(new.year, Some(year));
        prop_assert!(!new.watched);

        prop_assert_eq!(&added.movies()[..before.len()], before.movies());
        prop_assert_eq!(catalog, before);
    }

    /// Marking an id that is not in the catalog returns an equal catalog.
    #[test]
    fn mark_watched_unknown_id_is_identity(
        catalog in arb_catalog(),
        id in 10_000u64..20_000,
    ) {
        prop_assert_eq!(catalog.mark_watched(id), catalog);
    }

    /// Marking flips exactly the targeted record and nothing else.
    #[test]
    fn mark_watched_touches_only_target(
        catalog in arb_catalog(),
        selector in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!catalog.is_empty());
        let target = catalog.movies()[selector.index(catalog.len())].id;

        let marked = catalog.mark_watched(target);
        prop_assert_eq!(marked.len(), catalog.len());

        for (before, after) in catalog.movies().iter().zip(marked.movies()) {
            if before.id == target {
                prop_assert!(after.watched);
                prop_assert_eq!(after.title.as_str(), before.title.as_str());
                prop_assert_eq!(after.year, before.year);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// Year search is exactly an order-preserving filter; records without
    /// a year never match.
    #[test]
    fn find_by_year_is_an_ordered_filter(
        catalog in arb_catalog(),
        year in 1900i32..2100,
    ) {
        let found = catalog.find_by_year(year);
        let expected: Vec<&Movie> = catalog
            .movies()
            .iter()
            .filter(|m| m.year == Some(year))
            .collect();
        prop_assert_eq!(found, expected);
    }

    /// Any catalog survives a save/load round-trip with equal values.
    #[test]
    fn storage_roundtrip_preserves_values(catalog in arb_catalog()) {
        let temp = TempDir::new().unwrap();
        let store = Store::new(temp.path().join("movies.json"));

        store.save(&catalog).unwrap();
        prop_assert_eq!(store.load(), catalog);
    }
}
