// ABOUTME: Recipe normalizer turning any recipe-shaped JSON into a canonical Recipe
// ABOUTME: Picks ingredient and instruction sources and converts them through the shape enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Recipe normalization
//!
//! The normalizer never fails on malformed fields. Whatever cannot be read becomes an
//! empty list, and every field it does not understand passes through unchanged.
//! Normalizing an already normalized recipe yields the same recipe.

use serde_json::{Map, Value};
use vitalflow_core::constants::fields;
use vitalflow_core::json;
use vitalflow_core::models::{Ingredient, Recipe};

use super::shapes::{InstructionSource, RawIngredient};

/// Normalize a raw recipe value
///
/// Returns `None` for `null` and for anything that is not a JSON object.
#[must_use]
pub fn normalize(raw: &Value) -> Option<Recipe> {
    raw.as_object().map(|document| normalize_document(document.clone()))
}

/// Normalize an owned recipe document
#[must_use]
pub fn normalize_document(document: Map<String, Value>) -> Recipe {
    let ingredients = canonical_ingredients(&document);
    let instructions = canonical_instructions(&document);
    Recipe::from_parts(document, ingredients, instructions)
}

/// Canonical ingredients from the first list that yields any usable entry
///
/// A half-migrated record carrying `ingredients: []` beside a legacy list keeps the
/// legacy entries instead of rendering with no ingredients.
#[must_use]
pub fn canonical_ingredients(document: &Map<String, Value>) -> Vec<Ingredient> {
    fields::INGREDIENT_LISTS
        .iter()
        .filter_map(|key| document.get(*key))
        .filter_map(|value| match value {
            Value::Array(items) => Some(items),
            _ => None,
        })
        .map(|items| {
            items
                .iter()
                .filter_map(|item| RawIngredient::classify(item).into_ingredient())
                .collect::<Vec<_>>()
        })
        .find(|ingredients| !ingredients.is_empty())
        .unwrap_or_default()
}

/// Canonical steps from the highest priority source that yields any step
///
/// A source that is present but produces nothing (an empty string, a bare number)
/// does not shadow lower priority sources, so legacy steps survive a blank canonical field.
#[must_use]
pub fn canonical_instructions(document: &Map<String, Value>) -> Vec<String> {
    fields::INSTRUCTION_SOURCES
        .iter()
        .filter_map(|key| document.get(*key))
        .filter(|value| !json::is_blank(value))
        .map(|source| InstructionSource::classify(source).into_steps())
        .find(|steps| !steps.is_empty())
        .unwrap_or_default()
}
