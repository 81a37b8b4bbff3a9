// ABOUTME: Integration tests for the recipe catalog
// ABOUTME: Query building, plan exclusion, favorite tagging and the catalog loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;

use common::{sample_plan, FakeBackend};
use serde_json::json;
use vitalflow::favorites::FavoriteSet;
use vitalflow::recipes::{build_page, excluded_recipe_ids, CatalogFilters, CatalogResponse};
use vitalflow::services::load_catalog_page;

fn response(value: serde_json::Value) -> CatalogResponse {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_full_query_string_order() {
    let filters = CatalogFilters {
        q: "tacos".to_owned(),
        category: "Cenas".to_owned(),
        diet: "vegana".to_owned(),
        max_kcal: Some(600),
        local: true,
        sort: "-createdAt".to_owned(),
    };
    let keys: Vec<_> = filters.query_pairs(0).iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec!["page", "limit", "q", "category", "diet", "maxKcal", "local", "sort"]
    );
    assert_eq!(filters.query_pairs(0)[0].1, "1");
    assert_eq!(filters.active_count(), 5);
}

#[test]
fn test_zero_max_kcal_is_not_a_filter() {
    let filters = CatalogFilters {
        max_kcal: Some(0),
        ..CatalogFilters::default()
    };
    assert_eq!(filters.active_count(), 0);
    assert_eq!(filters.query_pairs(1).len(), 2);
}

#[test]
fn test_plan_recipes_are_excluded_and_favorites_tagged() {
    let excluded = excluded_recipe_ids(&sample_plan());
    assert!(excluded.contains("r-avena"));
    assert!(!excluded.contains("r-extra"));

    let favorites: FavoriteSet = ["r-2"].into_iter().collect();
    let page = build_page(
        response(json!({
            "data": [{"_id": "r-avena"}, {"_id": "r-2", "title": "Dos"}, {"title": "sin id"}, "basura"],
            "total": 41,
            "page": 2
        })),
        2,
        &excluded,
        &favorites,
    );

    assert_eq!(page.recipes.len(), 2);
    assert!(page.recipes[0].is_favorite);
    assert!(!page.recipes[1].is_favorite);
    assert_eq!(page.total, 41);
    assert_eq!(page.page, 2);
}

#[test]
fn test_total_and_page_fallbacks() {
    let page = build_page(
        response(json!({"data": [{"_id": "a"}, {"_id": "b"}]})),
        3,
        &BTreeSet::new(),
        &FavoriteSet::new(),
    );
    assert_eq!(page.total, 2);
    assert_eq!(page.page, 3);
}

#[tokio::test]
async fn test_loader_uses_current_plan_for_exclusion() {
    let backend = FakeBackend::with(
        vec![sample_plan()],
        vec![json!({"_id": "r-sopa"}), json!({"_id": "r-nueva"})],
    );
    let page = load_catalog_page(&backend, &CatalogFilters::default(), 1, &FavoriteSet::new()).await;
    let ids: Vec<_> = page.recipes.iter().filter_map(|e| e.recipe.id()).collect();
    assert_eq!(ids, vec!["r-nueva"]);
}

#[tokio::test]
async fn test_loader_without_plan_excludes_nothing() {
    let backend = FakeBackend {
        fail_plans: true,
        recipes: vec![json!({"_id": "r-sopa"})],
        ..FakeBackend::default()
    };
    let page = load_catalog_page(&backend, &CatalogFilters::default(), 1, &FavoriteSet::new()).await;
    assert_eq!(page.recipes.len(), 1);
}
