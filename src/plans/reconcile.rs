// ABOUTME: Plan reconciler merging bulk-fetched recipes with recipe snippets embedded in a plan
// ABOUTME: Collects referenced ids, indexes bulk documents and overlays embedded snippets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Plan reconciliation
//!
//! A plan references recipes by id, embeds partial recipe snippets, or both. The
//! reconciler produces one [`RecipeMap`] where bulk-fetched documents are the base and
//! embedded snippets override them field by field.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};
use tracing::debug;
use vitalflow_core::constants::{display, fields};
use vitalflow_core::json;
use vitalflow_core::models::{Plan, Recipe};

use crate::recipes::{normalize, normalize_document};

/// Recipe id (or synthesized key) to canonical recipe
pub type RecipeMap = BTreeMap<String, Recipe>;

/// Every recipe id the plan refers to, from meal slots and suggested recipes
#[must_use]
pub fn collect_recipe_ids(plan: &Plan) -> BTreeSet<String> {
    let from_meals = plan.meals().filter_map(|(_, meal)| meal.recipe_id());
    let from_suggestions = plan
        .suggested_recipes
        .iter()
        .filter_map(|entry| json::id_string_with(entry, fields::SUGGESTED_RECIPE_ID));
    from_meals.chain(from_suggestions).collect()
}

/// Normalize bulk documents and index them by id; documents without an id are skipped
#[must_use]
pub fn index_bulk(bulk: &[Value]) -> RecipeMap {
    bulk.iter()
        .filter_map(normalize)
        .filter_map(|recipe| recipe.id().map(|id| (id, recipe)))
        .collect()
}

/// Build the recipe map for a plan
///
/// An empty `bulk` (for example after a failed fetch) still yields entries for every
/// embedded snippet.
#[must_use]
pub fn reconcile(plan: &Plan, bulk: &[Value]) -> RecipeMap {
    let mut map = index_bulk(bulk);
    let base_count = map.len();

    for (day, meal) in plan.meals() {
        let Some(snippet) = meal.embedded() else {
            continue;
        };
        let key = meal.effective_recipe_id().unwrap_or_else(|| {
            embedded_key(plan.id.as_deref(), day.dia.as_deref(), meal.label())
        });
        let merged = merge_snippet(map.get(&key), snippet);
        map.insert(key, merged);
    }

    debug!(
        plan_id = plan.id.as_deref().unwrap_or_default(),
        bulk = base_count,
        entries = map.len(),
        "Reconciled plan recipes"
    );
    map
}

/// Overlay an embedded snippet on a base recipe and re-normalize
///
/// When the snippet carries its own ingredient list or instructions, every field of
/// that family is dropped from the base first, so a legacy-named override is not
/// shadowed by the base's canonical field. Blank family fields in the snippet count
/// as absent.
#[must_use]
pub fn merge_snippet(base: Option<&Recipe>, snippet: &Map<String, Value>) -> Recipe {
    let mut document = base.map(|recipe| recipe.document().clone()).unwrap_or_default();

    for family in [fields::INGREDIENT_LISTS, fields::INSTRUCTION_SOURCES] {
        let overrides = family
            .iter()
            .any(|key| snippet.get(*key).is_some_and(|value| !json::is_blank(value)));
        if overrides {
            for key in family {
                document.remove(*key);
            }
        }
    }

    for (key, value) in snippet {
        let is_family_key = fields::INGREDIENT_LISTS.contains(&key.as_str())
            || fields::INSTRUCTION_SOURCES.contains(&key.as_str());
        if is_family_key && json::is_blank(value) {
            continue;
        }
        document.insert(key.clone(), value.clone());
    }

    normalize_document(document)
}

/// Key for a snippet with no resolvable id: `embedded:<planId>:<day>:<mealNameOrTitle>`
#[must_use]
pub fn embedded_key(plan_id: Option<&str>, dia: Option<&str>, label: Option<&str>) -> String {
    format!(
        "{}:{}:{}:{}",
        display::EMBEDDED_KEY_PREFIX,
        plan_id.unwrap_or_default(),
        dia.unwrap_or_default(),
        label.unwrap_or_default()
    )
}
