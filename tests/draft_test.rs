// ABOUTME: Integration tests for recipe authoring drafts
// ABOUTME: Prefill from existing recipes, chip and ingredient editing and the request payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::json;
use vitalflow::errors::ErrorCode;
use vitalflow::recipes::{normalize, ChipList, DraftQuantity, RecipeDraft};

#[test]
fn test_new_recipe_payload() {
    let mut draft = RecipeDraft::new();
    draft.title = "  Ensalada de nopal ".to_owned();
    draft.kcal = "210".to_owned();
    draft.servings = "2".to_owned();
    draft.add_ingredient("Nopal", "3", "pzas").unwrap();
    draft.add_ingredient("Sal", "al gusto", "").unwrap();
    draft.steps = vec!["Picar".to_owned(), "  ".to_owned(), " Mezclar ".to_owned()];
    assert!(draft.add_chip(ChipList::Diets, " vegana "));
    assert!(!draft.add_chip(ChipList::Diets, "vegana"));
    assert!(!draft.add_chip(ChipList::Tags, "   "));

    let payload = draft.to_payload().unwrap();
    assert_eq!(payload["title"], "Ensalada de nopal");
    assert_eq!(payload["kcal"], 210);
    assert_eq!(payload["servings"], 2);
    assert!(payload.get("durationMin").is_none());
    assert_eq!(payload["diets"], json!(["vegana"]));
    assert_eq!(
        payload["ingredients"],
        json!([
            {"name": "Nopal", "quantity": 3, "unit": "pzas"},
            {"name": "Sal", "quantity": "al gusto", "unit": ""}
        ])
    );
    assert_eq!(payload["instructions"], "Picar\nMezclar");
    assert_eq!(payload["steps"], json!(["Picar", "Mezclar"]));
    assert_eq!(payload["source"], "human");
    assert_eq!(payload["status"], "draft");
    assert!(payload.get("imageUrl").is_none());
    assert!(!draft.is_edit());
}

#[test]
fn test_invalid_drafts_are_rejected() {
    let draft = RecipeDraft::new();
    assert_eq!(draft.to_payload().unwrap_err().code, ErrorCode::InvalidInput);

    let mut draft = RecipeDraft::new();
    draft.title = "Caldo".to_owned();
    draft.kcal = "muchas".to_owned();
    assert_eq!(draft.to_payload().unwrap_err().code, ErrorCode::InvalidInput);

    assert!(RecipeDraft::new().add_ingredient(" ", "1", "g").is_err());
}

#[test]
fn test_prefill_from_existing_recipe() {
    let recipe = normalize(&json!({
        "_id": "r1",
        "title": "Molletes",
        "prepTimeMin": 15,
        "durationMin": 30,
        "status": "approved",
        "diets": ["vegetariana"],
        "ingredients": [{"name": "bolillo", "amount": 2, "unit": "pzas"}],
        "instructions": "Untar frijoles\nGratinar"
    }))
    .unwrap();

    let draft = RecipeDraft::from_recipe(&recipe);
    assert!(draft.is_edit());
    assert_eq!(draft.id.as_deref(), Some("r1"));
    assert_eq!(draft.duration_min, "15");
    assert_eq!(draft.ingredients[0].quantity, DraftQuantity::Text("2".to_owned()));
    assert_eq!(draft.steps, vec!["Untar frijoles", "Gratinar"]);

    let payload = draft.to_payload().unwrap();
    assert_eq!(payload["status"], "approved");
    assert_eq!(payload["durationMin"], 15);
}

#[test]
fn test_prefill_prefers_steps_array() {
    let recipe = normalize(&json!({"title": "X", "steps": ["a", "b"], "instructions": "c"})).unwrap();
    assert_eq!(RecipeDraft::from_recipe(&recipe).steps, vec!["a", "b"]);
}

#[test]
fn test_chip_and_ingredient_removal() {
    let mut draft = RecipeDraft::new();
    draft.add_chip(ChipList::Categories, "Desayunos");
    draft.remove_chip(ChipList::Categories, "Desayunos");
    assert!(draft.categories.is_empty());

    draft.add_ingredient("Huevo", "2", "").unwrap();
    draft.remove_ingredient(5);
    assert_eq!(draft.ingredients.len(), 1);
    draft.remove_ingredient(0);
    assert!(draft.ingredients.is_empty());

    draft.add_step();
    assert_eq!(draft.steps.len(), 2);
    draft.remove_step(0);
    assert_eq!(draft.steps.len(), 1);
}
