// ABOUTME: Server-side favorites endpoints for the current user
// ABOUTME: Lists favorite ids and adds or removes one recipe at a time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use reqwest::Method;
use serde_json::{json, Value};
use vitalflow_core::json;

use super::{envelope, require_ok, segment, ApiClient};
use crate::constants::endpoints;
use crate::errors::AppResult;
use crate::favorites::FavoriteSet;

impl ApiClient {
    /// Favorite ids stored on the server (`GET /api/recipes/favorites/me`)
    ///
    /// Entries may be bare ids or populated recipe documents.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or an error if the backend fails
    pub async fn server_favorites(&self) -> AppResult<FavoriteSet> {
        self.require_token()?;
        let body = require_ok(self.get(endpoints::MY_FAVORITES, &[]).await?)?;
        Ok(envelope::list(&body, envelope::LIST)
            .iter()
            .filter_map(json::id_string)
            .collect())
    }

    /// Mark a recipe as favorite (`POST /api/recipes/{id}/favorite`)
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or an error if the backend refuses the change
    pub async fn add_favorite(&self, recipe_id: &str) -> AppResult<Value> {
        self.require_token()?;
        let path = format!("{}/{}/favorite", endpoints::RECIPES, segment(recipe_id));
        require_ok(self.send_json(Method::POST, &path, &json!({})).await?)
    }

    /// Remove a recipe from favorites (`DELETE /api/recipes/{id}/favorite`)
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or an error if the backend refuses the change
    pub async fn remove_favorite(&self, recipe_id: &str) -> AppResult<Value> {
        self.require_token()?;
        let path = format!("{}/{}/favorite", endpoints::RECIPES, segment(recipe_id));
        require_ok(self.delete(&path).await?)
    }
}
