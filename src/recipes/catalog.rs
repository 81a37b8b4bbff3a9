// ABOUTME: Recipe catalog filters, plan-based exclusion and favorite tagging
// ABOUTME: Builds catalog query strings and turns a catalog response into a CatalogPage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vitalflow_core::constants::defaults;
use vitalflow_core::json::de;
use vitalflow_core::models::{Plan, Recipe};

use super::normalize::normalize;
use crate::favorites::FavoriteSet;

/// Catalog search filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilters {
    /// Free text search
    #[serde(default)]
    pub q: String,
    /// Category ("Ensaladas")
    #[serde(default)]
    pub category: String,
    /// Diet ("vegana")
    #[serde(default)]
    pub diet: String,
    /// Upper bound on kcal per serving
    #[serde(default)]
    pub max_kcal: Option<u32>,
    /// Only locally sourced recipes
    #[serde(default)]
    pub local: bool,
    /// Backend sort key
    #[serde(default)]
    pub sort: String,
}

impl CatalogFilters {
    /// Query parameters for one catalog page; empty filters are omitted
    #[must_use]
    pub fn query_pairs(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", page.max(1).to_string()),
            ("limit", defaults::CATALOG_PAGE_SIZE.to_string()),
        ];
        for (key, value) in [
            ("q", &self.q),
            ("category", &self.category),
            ("diet", &self.diet),
        ] {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_owned()));
            }
        }
        if let Some(max_kcal) = self.max_kcal.filter(|kcal| *kcal > 0) {
            pairs.push(("maxKcal", max_kcal.to_string()));
        }
        if self.local {
            pairs.push(("local", "true".to_owned()));
        }
        if !self.sort.trim().is_empty() {
            pairs.push(("sort", self.sort.trim().to_owned()));
        }
        pairs
    }

    /// Number of active filters; sorting is not a filter
    #[must_use]
    pub fn active_count(&self) -> usize {
        [
            !self.q.trim().is_empty(),
            !self.category.trim().is_empty(),
            !self.diet.trim().is_empty(),
            self.max_kcal.is_some_and(|kcal| kcal > 0),
            self.local,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Reset every filter
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Raw catalog response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    /// Recipe documents of the page
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub data: Vec<Value>,
    /// Total matches across all pages
    #[serde(default, deserialize_with = "de::lenient_opt")]
    pub total: Option<u64>,
    /// Page number echoed by the backend
    #[serde(default, deserialize_with = "de::lenient_u32_opt")]
    pub page: Option<u32>,
}

/// A catalog recipe tagged with the user's favorite flag
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Normalized recipe
    pub recipe: Recipe,
    /// Whether the recipe is in the user's favorites
    pub is_favorite: bool,
}

/// One page of the catalog after exclusion
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    /// Recipes shown
    pub recipes: Vec<CatalogEntry>,
    /// Total matches, falling back to the number of recipes shown
    pub total: u64,
    /// Current page
    pub page: u32,
}

/// Recipe ids referenced by the plan's meal slots
///
/// Recipes already in the plan are hidden from the catalog.
#[must_use]
pub fn excluded_recipe_ids(plan: &Plan) -> BTreeSet<String> {
    plan.meals().filter_map(|(_, meal)| meal.recipe_id()).collect()
}

/// Normalize, exclude and tag a catalog response
#[must_use]
pub fn build_page(
    response: CatalogResponse,
    requested_page: u32,
    excluded: &BTreeSet<String>,
    favorites: &FavoriteSet,
) -> CatalogPage {
    let recipes: Vec<CatalogEntry> = response
        .data
        .iter()
        .filter_map(normalize)
        .filter(|recipe| !recipe.id().is_some_and(|id| excluded.contains(&id)))
        .map(|recipe| {
            let is_favorite = recipe.id().is_some_and(|id| favorites.contains(&id));
            CatalogEntry {
                recipe,
                is_favorite,
            }
        })
        .collect();

    CatalogPage {
        total: response.total.unwrap_or(recipes.len() as u64),
        page: response.page.filter(|p| *p > 0).unwrap_or(requested_page),
        recipes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skip_empty_filters() {
        let filters = CatalogFilters {
            q: " avena ".to_owned(),
            local: true,
            ..CatalogFilters::default()
        };
        assert_eq!(
            filters.query_pairs(2),
            vec![
                ("page", "2".to_owned()),
                ("limit", "30".to_owned()),
                ("q", "avena".to_owned()),
                ("local", "true".to_owned()),
            ]
        );
    }

    #[test]
    fn test_active_count_ignores_sort() {
        let mut filters = CatalogFilters {
            diet: "vegana".to_owned(),
            max_kcal: Some(500),
            sort: "kcal".to_owned(),
            ..CatalogFilters::default()
        };
        assert_eq!(filters.active_count(), 2);
        filters.clear();
        assert_eq!(filters.active_count(), 0);
    }
}
