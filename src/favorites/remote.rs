// ABOUTME: Favorites store backed by the user's server-side favorites
// ABOUTME: Saves by diffing against the server set; toggles with a single add or remove call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use async_trait::async_trait;
use tracing::{info, warn};

use super::{favorite_id, FavoriteSet, FavoritesStore};
use crate::client::ApiClient;
use crate::errors::AppResult;

/// Favorites stored by the backend for the authenticated user
#[derive(Debug, Clone)]
pub struct RemoteFavoritesStore {
    client: ApiClient,
}

impl RemoteFavoritesStore {
    /// Store using `client`, which should carry a bearer token
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FavoritesStore for RemoteFavoritesStore {
    async fn load(&self) -> FavoriteSet {
        match self.client.server_favorites().await {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!(error = %e, "Cannot load server favorites, using an empty set");
                FavoriteSet::new()
            }
        }
    }

    async fn save(&self, favorites: &FavoriteSet) -> AppResult<()> {
        let server = self.client.server_favorites().await?;
        for id in favorites.difference(&server) {
            self.client.add_favorite(id).await?;
        }
        for id in server.difference(favorites) {
            self.client.remove_favorite(id).await?;
        }
        info!(count = favorites.len(), "Synchronized server favorites");
        Ok(())
    }

    async fn toggle(&self, recipe_id: &str) -> AppResult<FavoriteSet> {
        let id = favorite_id(recipe_id)?;
        let mut favorites = self.client.server_favorites().await?;
        if favorites.toggle(id) {
            self.client.add_favorite(id).await?;
        } else {
            self.client.remove_favorite(id).await?;
        }
        Ok(favorites)
    }
}
