// ABOUTME: Meal plan domain: recipe reconciliation, plan view models and nutritionist review
// ABOUTME: Turns a backend plan plus bulk recipes into cards the front end can render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

/// Recipe map construction from bulk documents and embedded snippets
pub mod reconcile;
/// Nutritionist review list filters
pub mod review;
/// Meal cards, day sections and filters
pub mod view;

pub use reconcile::{collect_recipe_ids, embedded_key, index_bulk, merge_snippet, reconcile, RecipeMap};
pub use review::{approval_body, default_selection, ReviewFilter};
pub use view::{plan_days, resolve_meal_recipe, DayView, MealCard, MealFilter};
