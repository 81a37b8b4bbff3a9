// ABOUTME: In-memory favorites store for tests and sessions without persistence
// ABOUTME: Guards the set with a tokio RwLock so clones share the same favorites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{favorite_id, FavoriteSet, FavoritesStore};
use crate::errors::AppResult;

/// Favorites held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavoritesStore {
    favorites: Arc<RwLock<FavoriteSet>>,
}

impl InMemoryFavoritesStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `favorites`
    #[must_use]
    pub fn with_favorites(favorites: FavoriteSet) -> Self {
        Self {
            favorites: Arc::new(RwLock::new(favorites)),
        }
    }
}

#[async_trait]
impl FavoritesStore for InMemoryFavoritesStore {
    async fn load(&self) -> FavoriteSet {
        self.favorites.read().await.clone()
    }

    async fn save(&self, favorites: &FavoriteSet) -> AppResult<()> {
        *self.favorites.write().await = favorites.clone();
        Ok(())
    }

    async fn toggle(&self, recipe_id: &str) -> AppResult<FavoriteSet> {
        let id = favorite_id(recipe_id)?;
        // Single write guard so concurrent toggles cannot lose updates
        let mut guard = self.favorites.write().await;
        guard.toggle(id);
        Ok(guard.clone())
    }
}
