// ABOUTME: Favorite recipes: the ordered id set, the pluggable store trait and its backends
// ABOUTME: File, in-memory and server-backed stores share load/save/toggle semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Favorites
//!
//! A [`FavoriteSet`] is the set of recipe ids the user marked as favorite. Stores
//! implement [`FavoritesStore`]; `load` never fails and yields an empty set when the
//! backing data is missing or unreadable.

/// JSON file store
pub mod file;
/// Favorites tab hydration from the recipe map
pub mod hydrate;
/// In-memory store
pub mod memory;
/// Server-backed store
pub mod remote;

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub use file::FileFavoritesStore;
pub use hydrate::{favorite_recipes, hydrate_favorites, missing_favorite_ids};
pub use memory::InMemoryFavoritesStore;
pub use remote::RemoteFavoritesStore;

/// Ordered set of favorite recipe ids
///
/// Serializes as a sorted JSON array so saving the same set always writes the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(BTreeSet<String>);

impl FavoriteSet {
    /// Empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is a favorite
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Add `id` when absent, remove it when present; returns whether it is now a favorite
    ///
    /// The id is trimmed like [`FavoriteSet::insert`] does; a blank id changes nothing.
    pub fn toggle(&mut self, id: &str) -> bool {
        let id = id.trim();
        if id.is_empty() {
            return false;
        }
        if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_owned());
            true
        }
    }

    /// Add an id; blank ids are ignored
    pub fn insert(&mut self, id: &str) -> bool {
        let id = id.trim();
        !id.is_empty() && self.0.insert(id.to_owned())
    }

    /// Remove an id
    pub fn remove(&mut self, id: &str) -> bool {
        self.0.remove(id)
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no favorites
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Ids present here but not in `other`
    pub fn difference<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a str> {
        self.0.difference(&other.0).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(&id.into());
        }
        set
    }
}

/// Trimmed recipe id as stored in a [`FavoriteSet`]
///
/// # Errors
///
/// Returns `InvalidInput` for a blank id
pub fn favorite_id(recipe_id: &str) -> AppResult<&str> {
    let id = recipe_id.trim();
    if id.is_empty() {
        return Err(AppError::invalid_input("Recipe id is required"));
    }
    Ok(id)
}

/// Persistence for the favorites set
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Current favorites; absent or corrupt data yields the empty set
    async fn load(&self) -> FavoriteSet;

    /// Replace the persisted favorites
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    async fn save(&self, favorites: &FavoriteSet) -> AppResult<()>;

    /// Flip one id and persist the result immediately
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank id, or an error if saving fails
    async fn toggle(&self, recipe_id: &str) -> AppResult<FavoriteSet> {
        let id = favorite_id(recipe_id)?;
        let mut favorites = self.load().await;
        favorites.toggle(id);
        self.save(&favorites).await?;
        Ok(favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_symmetric() {
        let mut set: FavoriteSet = ["b", "a"].into_iter().collect();
        assert!(set.toggle("c"));
        assert!(!set.toggle("a"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_blank_ids_are_ignored() {
        let mut set: FavoriteSet = ["", "  ", "r1"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(!set.toggle("   "));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_toggle_trims_ids() {
        let mut set: FavoriteSet = ["r1"].into_iter().collect();
        assert!(!set.toggle(" r1 "));
        assert!(set.is_empty());
        assert!(set.toggle("\tr2 "));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["r2"]);
        assert!(favorite_id("  ").is_err());
    }
}
