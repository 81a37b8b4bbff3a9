// ABOUTME: Favorites tab hydration: fetch favorite recipes missing from the plan's recipe map
// ABOUTME: Failures are logged and leave the map untouched
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::collections::BTreeSet;

use tracing::{debug, warn};
use vitalflow_core::models::Recipe;

use super::FavoriteSet;
use crate::client::RecipeBackend;
use crate::plans::{index_bulk, RecipeMap};

/// Favorite ids with no entry in `map`, in sorted order
#[must_use]
pub fn missing_favorite_ids(favorites: &FavoriteSet, map: &RecipeMap) -> Vec<String> {
    favorites
        .iter()
        .filter(|id| !map.contains_key(*id))
        .map(str::to_owned)
        .collect()
}

/// Bulk-fetch the favorites missing from `map` and insert them; returns how many were added
///
/// Entries already in the map are never replaced, so hydrating before or after a plan
/// load gives the same map.
pub async fn hydrate_favorites<B>(backend: &B, favorites: &FavoriteSet, map: &mut RecipeMap) -> usize
where
    B: RecipeBackend + ?Sized,
{
    let missing = missing_favorite_ids(favorites, map);
    if missing.is_empty() {
        return 0;
    }

    let documents = match backend.bulk_recipes(&missing).await {
        Ok(documents) => documents,
        Err(e) => {
            warn!(error = %e, missing = missing.len(), "Cannot load favorite recipes");
            return 0;
        }
    };

    let mut added = 0;
    for (id, recipe) in index_bulk(&documents) {
        if !map.contains_key(&id) {
            map.insert(id, recipe);
            added += 1;
        }
    }
    debug!(requested = missing.len(), added, "Hydrated favorite recipes");
    added
}

/// Recipes of the favorites tab, one per id, in map order
#[must_use]
pub fn favorite_recipes<'a>(map: &'a RecipeMap, favorites: &FavoriteSet) -> Vec<&'a Recipe> {
    let mut seen = BTreeSet::new();
    map.values()
        .filter(|recipe| {
            recipe
                .id()
                .is_some_and(|id| favorites.contains(&id) && seen.insert(id))
        })
        .collect()
}
