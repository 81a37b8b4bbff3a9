// ABOUTME: Recipe endpoints: bulk lookup, catalog pages, the author's recipes and CRUD
// ABOUTME: Single documents come back normalized; create and edit send a RecipeDraft payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use reqwest::Method;
use serde_json::Value;
use vitalflow_core::models::Recipe;

use super::{envelope, require_ok, segment, ApiClient};
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};
use crate::recipes::{normalize, CatalogFilters, CatalogResponse, RecipeDraft};

fn decode_recipe(body: &Value) -> Option<Recipe> {
    envelope::document(body, envelope::RECIPE)
        .as_ref()
        .and_then(normalize)
}

impl ApiClient {
    /// Raw recipe documents for `ids` (`GET /api/recipes/bulk?ids=a,b`)
    ///
    /// No request is made for an empty id list.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers with an error
    pub async fn bulk_recipes(&self, ids: &[String]) -> AppResult<Vec<Value>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let path = format!(
            "{}?ids={}",
            endpoints::RECIPES_BULK,
            urlencoding::encode(&ids.join(","))
        );
        let body = self.get(&path, &[]).await?;
        Ok(envelope::list(&body, envelope::LIST))
    }

    /// One catalog page (`GET /api/recipes?page&limit&...`)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or the body is not a catalog page
    pub async fn catalog(&self, filters: &CatalogFilters, page: u32) -> AppResult<CatalogResponse> {
        let body = self
            .get(endpoints::RECIPES, &filters.query_pairs(page))
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Recipes authored by the current user (`GET /api/recipes/me`)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers with an error
    pub async fn my_recipes(&self) -> AppResult<Vec<Recipe>> {
        let body = self.get(endpoints::MY_RECIPES, &[]).await?;
        Ok(envelope::list(&body, envelope::LIST)
            .iter()
            .filter_map(normalize)
            .collect())
    }

    /// One recipe (`GET /api/recipes/{id}`)
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when the body carries no recipe document
    pub async fn recipe(&self, id: &str) -> AppResult<Recipe> {
        let path = format!("{}/{}", endpoints::RECIPES, segment(id));
        let body = self.get(&path, &[]).await?;
        decode_recipe(&body).ok_or_else(|| AppError::not_found("Recipe").with_resource_id(id))
    }

    /// Create or edit a recipe depending on whether the draft has an id
    ///
    /// Creating sends `POST /api/recipes`, editing sends `PATCH /api/recipes/{id}`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an invalid draft, or the backend's error
    pub async fn save_recipe(&self, draft: &RecipeDraft) -> AppResult<Recipe> {
        let payload = draft.to_payload()?;
        let body = match &draft.id {
            Some(id) => {
                let path = format!("{}/{}", endpoints::RECIPES, segment(id));
                self.send_json(Method::PATCH, &path, &payload).await?
            }
            None => {
                self.send_json(Method::POST, endpoints::RECIPES, &payload)
                    .await?
            }
        };
        let body = require_ok(body)?;
        decode_recipe(&body)
            .ok_or_else(|| AppError::internal("Backend response did not include the saved recipe"))
    }

    /// Delete a recipe (`DELETE /api/recipes/{id}`)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion
    pub async fn delete_recipe(&self, id: &str) -> AppResult<()> {
        let path = format!("{}/{}", endpoints::RECIPES, segment(id));
        require_ok(self.delete(&path).await?)?;
        Ok(())
    }
}
