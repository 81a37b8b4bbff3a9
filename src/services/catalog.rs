// ABOUTME: Loads one recipe catalog page, hiding recipes already in the current plan
// ABOUTME: Tags each recipe with the user's favorite flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::collections::BTreeSet;

use tracing::warn;

use crate::client::{PlanBackend, RecipeBackend};
use crate::favorites::FavoriteSet;
use crate::recipes::{build_page, excluded_recipe_ids, CatalogFilters, CatalogPage};

/// Load a catalog page; failures yield an empty page
pub async fn load_catalog_page<B>(
    backend: &B,
    filters: &CatalogFilters,
    page: u32,
    favorites: &FavoriteSet,
) -> CatalogPage
where
    B: PlanBackend + RecipeBackend + ?Sized,
{
    let excluded = match backend.my_plans().await {
        Ok(plans) => plans.first().map(excluded_recipe_ids).unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "Cannot load plan for catalog exclusion");
            BTreeSet::new()
        }
    };

    match backend.catalog(filters, page).await {
        Ok(response) => build_page(response, page, &excluded, favorites),
        Err(e) => {
            warn!(error = %e, page, "Cannot load recipe catalog");
            CatalogPage {
                recipes: Vec::new(),
                total: 0,
                page: page.max(1),
            }
        }
    }
}
