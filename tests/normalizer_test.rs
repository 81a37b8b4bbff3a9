// ABOUTME: Integration tests for the recipe normalizer
// ABOUTME: Covers legacy ingredient and instruction shapes, pass-through fields and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use vitalflow::models::{Ingredient, Recipe};
use vitalflow::recipes::normalize;

fn normalized(raw: &Value) -> Recipe {
    normalize(raw).expect("object input normalizes")
}

fn names(recipe: &Recipe) -> Vec<&str> {
    recipe.ingredients().iter().map(|i| i.name.as_str()).collect()
}

// ============================================================================
// Ingredients
// ============================================================================

#[test]
fn test_mixed_ingredient_array() {
    let recipe = normalized(&json!({
        "ingredients": [
            "  Espinaca ",
            {"nombre": "Queso panela", "cantidad": 100, "unidad": "g", "localIngredient": true},
            {"title": "Sal", "amountText": "al gusto"},
            {},
            "",
            42,
            null
        ]
    }));

    assert_eq!(
        recipe.ingredients(),
        [
            Ingredient {
                name: "Espinaca".to_owned(),
                amount: String::new(),
                unit: String::new(),
                local: false,
            },
            Ingredient {
                name: "Queso panela".to_owned(),
                amount: "100".to_owned(),
                unit: "g".to_owned(),
                local: true,
            },
            Ingredient {
                name: "Sal".to_owned(),
                amount: "al gusto".to_owned(),
                unit: String::new(),
                local: false,
            },
        ]
    );
}

#[test]
fn test_legacy_ingredient_lists() {
    assert_eq!(names(&normalized(&json!({"ingredientsList": ["maíz"]}))), vec!["maíz"]);
    assert_eq!(names(&normalized(&json!({"ingredientsArray": ["chía"]}))), vec!["chía"]);
    assert!(normalized(&json!({"ingredients": "no es lista"})).ingredients().is_empty());
}

#[test]
fn test_fractional_amount_keeps_decimals() {
    let recipe = normalized(&json!({"ingredients": [{"name": "aceite", "qty": 1.5, "u": "cda"}]}));
    assert_eq!(recipe.ingredients()[0].amount, "1.5");
    assert_eq!(recipe.ingredients()[0].unit, "cda");
}

// ============================================================================
// Instructions
// ============================================================================

#[test]
fn test_newline_split_instructions() {
    let recipe = normalized(&json!({"instructions": "Lavar\r\n\n   Picar   \nMezclar\n"}));
    assert_eq!(recipe.instructions(), ["Lavar", "Picar", "Mezclar"]);
}

#[test]
fn test_step_objects_and_wrapped_steps() {
    let recipe = normalized(&json!({
        "pasos": {"steps": [{"text": "Uno"}, {"description": "Dos"}, {"otro": 3}, "", "Cuatro"]}
    }));
    assert_eq!(recipe.instructions().len(), 4);
    assert_eq!(recipe.instructions()[0], "Uno");
    assert_eq!(recipe.instructions()[1], "Dos");
    assert_eq!(recipe.instructions()[2], r#"{"otro":3}"#);
    assert_eq!(recipe.instructions()[3], "Cuatro");
}

#[test]
fn test_opaque_object_becomes_json_text() {
    let recipe = normalized(&json!({"method": {"modo": "horno"}}));
    assert_eq!(recipe.instructions(), [r#"{"modo":"horno"}"#]);
}

#[test]
fn test_instruction_source_priority() {
    let recipe = normalized(&json!({
        "method": "último",
        "pasos_de_preparacion": "quinto",
        "pasos": "tercero",
        "steps": []
    }));
    assert_eq!(recipe.instructions(), ["tercero"]);
}

#[test]
fn test_scalar_instructions_yield_nothing() {
    assert!(normalized(&json!({"instructions": true})).instructions().is_empty());
}

// ============================================================================
// Pass-through and idempotence
// ============================================================================

#[test]
fn test_unknown_fields_pass_through() {
    let recipe = normalized(&json!({
        "_id": {"$oid": "abc123"},
        "title": "Chilaquiles",
        "kcal": "480",
        "prepTimeMin": 25,
        "diets": ["vegetariana", 3, "sin gluten"],
        "imageUrl": "https://cdn/img.jpg",
        "favoriteCount": 12
    }));

    assert_eq!(recipe.id().as_deref(), Some("abc123"));
    assert_eq!(recipe.title().as_deref(), Some("Chilaquiles"));
    assert_eq!(recipe.kcal(), Some(480.0));
    assert_eq!(recipe.duration_min(), Some(25));
    assert_eq!(recipe.favorites_count(), 12);
    assert_eq!(recipe.get("imageUrl"), Some(&json!("https://cdn/img.jpg")));
    assert!(recipe.diets().contains(&"vegetariana".to_owned()));
}

#[test]
fn test_normalization_is_idempotent() {
    let samples = [
        json!({"ingredientes": ["a", {"nombre": "b", "cantidad": 2.0}], "pasos": "x\ny"}),
        json!({"ingredients": [], "ingredientsList": [" c "], "steps": [{"step": "s"}], "method": "m"}),
        json!({"instruction": {"steps": ["p", 5]}, "title": "T", "local": 1}),
        json!({"instructions": "", "pasos_de_preparacion": ["q"]}),
        json!({"instructions": [{"text": "   "}, {"text": "Hervir"}]}),
        json!({"ingredients": [], "ingredientes": ["sal"]}),
        json!({}),
    ];
    for raw in samples {
        let once = normalized(&raw);
        let twice = normalized(&once.to_value());
        assert_eq!(once, twice, "normalizing twice changed {raw}");
    }
}

#[test]
fn test_blank_step_objects_are_dropped() {
    let recipe = normalized(&json!({
        "instructions": [{"text": "   "}, {"step": "\t"}, {"text": "Hervir"}]
    }));
    assert_eq!(recipe.instructions(), ["Hervir".to_owned()]);
}

#[test]
fn test_null_and_non_objects() {
    assert!(normalize(&Value::Null).is_none());
    assert!(normalize(&json!(17)).is_none());
}
