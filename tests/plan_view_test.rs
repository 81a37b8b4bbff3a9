// ABOUTME: Integration tests for plan view models and the nutritionist review list
// ABOUTME: Meal card resolution order, display defaults, filters and status labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{plan, sample_bulk, sample_plan};
use serde_json::json;
use vitalflow::constants::display;
use vitalflow::favorites::FavoriteSet;
use vitalflow::models::{MealSlot, PlanSource, PlanStatus};
use vitalflow::plans::{
    default_selection, plan_days, reconcile, resolve_meal_recipe, MealCard, MealFilter,
    RecipeMap, ReviewFilter,
};
use vitalflow::recipes::normalize;

fn meal(value: serde_json::Value) -> MealSlot {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Meal cards
// ============================================================================

#[test]
fn test_cards_for_sample_plan() {
    let plan = sample_plan();
    let map = reconcile(&plan, &sample_bulk());
    let favorites: FavoriteSet = ["r-avena"].into_iter().collect();

    let days = plan_days(&plan, &map, &favorites, &MealFilter::default());
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].dia, "Lunes");

    let desayuno = &days[0].meals[0];
    assert_eq!(desayuno.title, "Avena con fruta");
    assert_eq!(desayuno.kcal, Some(350.0));
    assert!(desayuno.is_favorite);

    let comida = &days[0].meals[1];
    assert_eq!(comida.title, "Sopa de la casa");
    assert_eq!(comida.description, "Caldosa");
    assert!(!comida.is_favorite);

    let colacion = &days[0].meals[2];
    assert_eq!(colacion.title, "Manzana con crema de cacahuate");
    assert_eq!(colacion.description, display::DEFAULT_MEAL_DESCRIPTION);
    assert!(colacion.recipe.is_none());
    assert!(colacion.recipe_id.is_none());

    let cena = &days[1].meals[0];
    assert_eq!(cena.title, "Tacos de frijol");
    assert_eq!(cena.recipe.as_ref().map(|r| r.ingredients().len()), Some(2));
}

#[test]
fn test_title_match_fallback() {
    let mut map = RecipeMap::new();
    let recipe = normalize(&json!({"_id": "r1", "title": "Pozole verde", "description": "Del mapa"})).unwrap();
    map.insert("r1".to_owned(), recipe);

    let slot = meal(json!({"nombre": "Comida", "receta": {"title": "Pozole verde"}}));
    let resolved = resolve_meal_recipe(&slot, &map).unwrap();
    assert_eq!(resolved.description().as_deref(), Some("Del mapa"));

    let card = MealCard::build(&slot, &map, &["r1"].into_iter().collect());
    assert_eq!(card.recipe_id.as_deref(), Some("r1"));
    assert!(card.is_favorite);
}

#[test]
fn test_unmatched_snippet_is_normalized_on_the_fly() {
    let map = RecipeMap::new();
    let slot = meal(json!({"receta": {"title": "Nueva", "pasos": "Uno\nDos"}}));
    let resolved = resolve_meal_recipe(&slot, &map).unwrap();
    assert_eq!(resolved.instructions(), ["Uno", "Dos"]);
}

#[test]
fn test_missing_everything_uses_defaults() {
    let map = RecipeMap::new();
    let card = MealCard::build(&meal(json!({})), &map, &FavoriteSet::new());
    assert_eq!(card.title, display::DEFAULT_MEAL_TITLE);
    assert_eq!(card.kcal, None);
    assert_eq!(card.meal_name, None);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_meal_filter_over_plan() {
    let plan = sample_plan();
    let map = reconcile(&plan, &sample_bulk());
    let filter = MealFilter {
        meal: "COMIDA".to_owned(),
        search: String::new(),
    };

    let days = plan_days(&plan, &map, &FavoriteSet::new(), &filter);
    let titles: Vec<_> = days
        .iter()
        .flat_map(|d| d.meals.iter().map(|m| m.title.clone()))
        .collect();
    assert_eq!(titles, vec!["Sopa de la casa"]);
}

#[test]
fn test_search_matches_planner_title() {
    let filter = MealFilter {
        meal: "all".to_owned(),
        search: "  manzana ".to_owned(),
    };
    assert!(filter.matches(&meal(json!({"recetaTitle": "Manzana con crema"}))));
    assert!(!filter.matches(&meal(json!({"nombre": "Manzana"}))));
}

// ============================================================================
// Labels and review
// ============================================================================

#[test]
fn test_status_and_source_labels() {
    assert_eq!(sample_plan().status_label(), "Aprobado");
    assert_eq!(sample_plan().source_label(), PlanSource::Ai.label());
    assert_eq!(plan(json!({})).status_label(), "Borrador");
    assert_eq!(plan(json!({"status": "pending"})).status, Some(PlanStatus::PendingReview));
    assert_eq!(plan(json!({"source": "ia"})).source, Some(PlanSource::Ai));
}

#[test]
fn test_review_flow() {
    let plans = vec![
        plan(json!({"_id": "a", "status": "active", "userId": {"name": "Luis", "email": "luis@vf.mx"}, "meta": {"dieta": "keto"}})),
        plan(json!({"_id": "b", "status": "rejected"})),
        plan(json!({"_id": "c", "status": "pending_review", "userId": {"name": "Marta"}})),
    ];

    assert_eq!(default_selection(&plans).and_then(|p| p.id.as_deref()), Some("c"));
    let keto = ReviewFilter::new(None, Some("KETO")).apply(&plans);
    assert_eq!(keto.len(), 1);
    assert_eq!(keto[0].id.as_deref(), Some("a"));
    assert_eq!(ReviewFilter::new(Some("rejected"), None).apply(&plans).len(), 1);

    let no_pending = &plans[..2];
    assert_eq!(default_selection(no_pending).and_then(|p| p.id.as_deref()), Some("a"));
}
