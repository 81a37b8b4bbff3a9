// ABOUTME: Recipe authoring draft for nutritionists creating or editing recipes
// ABOUTME: Chip lists, ingredient entry, step cleanup and the create/edit request payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Number, Value};
use vitalflow_core::json;
use vitalflow_core::models::Recipe;

use crate::errors::{AppError, AppResult};

/// Quantity typed by the author: a number when it parses as one, otherwise free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DraftQuantity {
    /// Numeric quantity
    Number(f64),
    /// Free text ("1/2", "al gusto"), possibly empty
    Text(String),
}

impl DraftQuantity {
    /// Parse user input
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(number) if !trimmed.is_empty() && number.is_finite() => Self::Number(number),
            _ => Self::Text(trimmed.to_owned()),
        }
    }

    fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or_else(|| Self::Text(n.to_string()), Self::Number),
            other => Self::Text(json::display_string(other)),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Self::Number(n) => number_value(*n),
            Self::Text(s) => Value::String(s.clone()),
        }
    }
}

/// Ingredient as entered in the authoring form
#[derive(Debug, Clone, PartialEq)]
pub struct DraftIngredient {
    /// Ingredient name
    pub name: String,
    /// Quantity
    pub quantity: DraftQuantity,
    /// Unit of measure
    pub unit: String,
}

/// Which chip list to edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipList {
    /// Diet labels
    Diets,
    /// Category labels
    Categories,
    /// Free-form tags
    Tags,
}

/// Recipe being created or edited
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    /// Id of the recipe being edited; `None` when creating
    pub id: Option<String>,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Kcal as typed
    pub kcal: String,
    /// Duration in minutes as typed
    pub duration_min: String,
    /// Servings as typed
    pub servings: String,
    /// Diet chips
    pub diets: Vec<String>,
    /// Category chips
    pub categories: Vec<String>,
    /// Tag chips
    pub tags: Vec<String>,
    /// Ingredients
    pub ingredients: Vec<DraftIngredient>,
    /// Preparation steps, possibly with blank entries still being edited
    pub steps: Vec<String>,
    /// Status of the edited recipe
    pub status: Option<String>,
}

impl RecipeDraft {
    /// Empty draft for a new recipe
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: vec![String::new()],
            ..Self::default()
        }
    }

    /// Draft prefilled from an existing recipe
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let document = recipe.document();
        let text = |key: &str| {
            document
                .get(key)
                .filter(|v| !v.is_null())
                .map(json::display_string)
                .unwrap_or_default()
        };

        let duration_min = document
            .get("prepTimeMin")
            .filter(|v| !v.is_null() && v.as_str() != Some(""))
            .or_else(|| document.get("durationMin"))
            .filter(|v| !v.is_null())
            .map(json::display_string)
            .unwrap_or_default();

        let ingredients = match document.get("ingredients") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_object)
                .map(draft_ingredient)
                .collect(),
            _ => Vec::new(),
        };

        let steps = draft_steps(document);

        Self {
            id: recipe.id(),
            title: text("title"),
            description: text("description"),
            kcal: text("kcal"),
            duration_min,
            servings: text("servings"),
            diets: json::string_list(document.get("diets")),
            categories: json::string_list(document.get("categories")),
            tags: json::string_list(document.get("tags")),
            ingredients,
            steps: if steps.is_empty() { vec![String::new()] } else { steps },
            status: json::non_empty_string(document.get("status")),
        }
    }

    /// Whether saving updates an existing recipe
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    fn chips_mut(&mut self, list: ChipList) -> &mut Vec<String> {
        match list {
            ChipList::Diets => &mut self.diets,
            ChipList::Categories => &mut self.categories,
            ChipList::Tags => &mut self.tags,
        }
    }

    /// Add a trimmed chip; returns false for blank or duplicate values
    pub fn add_chip(&mut self, list: ChipList, value: &str) -> bool {
        let value = value.trim();
        let chips = self.chips_mut(list);
        if value.is_empty() || chips.iter().any(|chip| chip == value) {
            return false;
        }
        chips.push(value.to_owned());
        true
    }

    /// Remove a chip
    pub fn remove_chip(&mut self, list: ChipList, value: &str) {
        self.chips_mut(list).retain(|chip| chip != value);
    }

    /// Add an ingredient
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the name is blank
    pub fn add_ingredient(&mut self, name: &str, amount: &str, unit: &str) -> AppResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Ingredient name is required"));
        }
        self.ingredients.push(DraftIngredient {
            name: name.to_owned(),
            quantity: DraftQuantity::parse(amount),
            unit: unit.trim().to_owned(),
        });
        Ok(())
    }

    /// Remove the ingredient at `index`, ignoring out of range indexes
    pub fn remove_ingredient(&mut self, index: usize) {
        if index < self.ingredients.len() {
            self.ingredients.remove(index);
        }
    }

    /// Append an empty step
    pub fn add_step(&mut self) {
        self.steps.push(String::new());
    }

    /// Remove a step; the last remaining step is cleared instead
    pub fn remove_step(&mut self, index: usize) {
        if self.steps.len() <= 1 {
            self.steps = vec![String::new()];
        } else if index < self.steps.len() {
            self.steps.remove(index);
        }
    }

    /// Trimmed, non-blank steps
    #[must_use]
    pub fn clean_steps(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| step.trim())
            .filter(|step| !step.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Request body for create and edit
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the title is blank or a numeric field does not parse
    pub fn to_payload(&self) -> AppResult<Value> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::invalid_input("Recipe title is required"));
        }
        let steps = self.clean_steps();

        let mut body = Map::new();
        body.insert("title".to_owned(), json!(title));
        body.insert("description".to_owned(), json!(self.description.trim()));
        for (key, raw) in [
            ("kcal", &self.kcal),
            ("durationMin", &self.duration_min),
            ("servings", &self.servings),
        ] {
            if let Some(number) = parse_number(key, raw)? {
                body.insert(key.to_owned(), number);
            }
        }
        body.insert("diets".to_owned(), json!(self.diets));
        body.insert("categories".to_owned(), json!(self.categories));
        body.insert("tags".to_owned(), json!(self.tags));
        body.insert(
            "ingredients".to_owned(),
            Value::Array(
                self.ingredients
                    .iter()
                    .map(|ingredient| {
                        json!({
                            "name": ingredient.name,
                            "quantity": ingredient.quantity.to_value(),
                            "unit": ingredient.unit,
                        })
                    })
                    .collect(),
            ),
        );
        body.insert("instructions".to_owned(), json!(steps.join("\n")));
        body.insert("steps".to_owned(), json!(steps));
        body.insert("source".to_owned(), json!("human"));
        body.insert(
            "status".to_owned(),
            json!(self.status.as_deref().unwrap_or("draft")),
        );
        Ok(Value::Object(body))
    }
}

fn draft_ingredient(record: &Map<String, Value>) -> DraftIngredient {
    let present = |key: &str| {
        record
            .get(key)
            .filter(|v| !v.is_null() && v.as_str() != Some(""))
    };
    DraftIngredient {
        name: json::non_empty_string(record.get("name")).unwrap_or_default(),
        quantity: present("quantity")
            .or_else(|| present("amount"))
            .map_or_else(|| DraftQuantity::Text(String::new()), DraftQuantity::from_value),
        unit: json::non_empty_string(record.get("unit")).unwrap_or_default(),
    }
}

fn draft_steps(document: &Map<String, Value>) -> Vec<String> {
    if let Some(Value::Array(steps)) = document.get("steps") {
        if !steps.is_empty() {
            return steps.iter().map(json::display_string).collect();
        }
    }
    match document.get("instructions") {
        Some(Value::String(text)) => text
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_number(key: &str, raw: &str) -> AppResult<Option<Value>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(|n| Some(number_value(n)))
        .ok_or_else(|| AppError::invalid_input(format!("{key} must be a number, got '{raw}'")))
}

/// Integral values are sent as integers so the backend stores `350`, not `350.0`
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}
