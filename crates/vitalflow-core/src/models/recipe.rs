// ABOUTME: Canonical recipe model built on top of the raw backend document
// ABOUTME: Recipe, Ingredient and RecipeStatus with typed accessors over passthrough fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::constants::fields;
use crate::json;

/// Ingredient in canonical form
///
/// Every field is already trimmed text; `amount` and `unit` are empty when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Quantity as display text ("2", "1/2", "al gusto")
    pub amount: String,
    /// Unit of measure ("g", "taza")
    pub unit: String,
    /// Whether the ingredient is locally sourced
    pub local: bool,
}

impl Ingredient {
    /// Ingredient known only by name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when name, amount and unit are all empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.amount.is_empty() && self.unit.is_empty()
    }
}

/// Editorial status of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeStatus {
    /// Being written, not visible to users
    Draft,
    /// Waiting for review
    Pending,
    /// Published
    Approved,
    /// Rejected by a reviewer
    Rejected,
    /// Any status this client does not know about
    Other,
}

impl RecipeStatus {
    /// Parse a status string, mapping unknown values to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "draft" => Self::Draft,
            "pending" | "pending_review" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Other,
        }
    }

    /// Wire value of the status
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Other => "other",
        }
    }
}

/// A recipe in canonical form
///
/// The original document is kept so that fields the client does not model (image,
/// author, timestamps) pass through untouched. `ingredients` and `instructions` are
/// always canonical, and the document mirrors them so serializing a `Recipe` yields the
/// same shape the normalizer accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    document: Map<String, Value>,
    ingredients: Vec<Ingredient>,
    instructions: Vec<String>,
}

impl Recipe {
    /// Assemble a recipe from a raw document and its canonical lists
    ///
    /// The canonical lists overwrite `ingredients` and `instructions` in the document.
    #[must_use]
    pub fn from_parts(
        mut document: Map<String, Value>,
        ingredients: Vec<Ingredient>,
        instructions: Vec<String>,
    ) -> Self {
        document.insert(
            "ingredients".to_owned(),
            Value::Array(ingredients.iter().map(ingredient_value).collect()),
        );
        document.insert(
            "instructions".to_owned(),
            Value::Array(instructions.iter().cloned().map(Value::String).collect()),
        );
        Self {
            document,
            ingredients,
            instructions,
        }
    }

    /// Canonical ingredient list
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    /// Canonical instruction steps
    #[must_use]
    pub fn instructions(&self) -> &[String] {
        &self.instructions
    }

    /// Full document including passthrough fields
    #[must_use]
    pub const fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Raw field lookup
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Identifier from `_id`, then `id`
    #[must_use]
    pub fn id(&self) -> Option<String> {
        fields::RECIPE_ID
            .iter()
            .filter_map(|key| self.document.get(*key))
            .find_map(json::id_string)
    }

    /// Recipe title
    #[must_use]
    pub fn title(&self) -> Option<String> {
        json::non_empty_string(self.document.get("title"))
    }

    /// Short description
    #[must_use]
    pub fn description(&self) -> Option<String> {
        json::non_empty_string(self.document.get("description"))
    }

    /// Energy per serving in kilocalories
    #[must_use]
    pub fn kcal(&self) -> Option<f64> {
        self.document.get("kcal").and_then(json::lenient_f64)
    }

    /// Total duration, falling back to preparation time
    #[must_use]
    pub fn duration_min(&self) -> Option<u32> {
        self.document
            .get("durationMin")
            .and_then(json::lenient_u32)
            .or_else(|| self.prep_time_min())
    }

    /// Preparation time in minutes
    #[must_use]
    pub fn prep_time_min(&self) -> Option<u32> {
        self.document.get("prepTimeMin").and_then(json::lenient_u32)
    }

    /// Number of servings
    #[must_use]
    pub fn servings(&self) -> Option<u32> {
        self.document.get("servings").and_then(json::lenient_u32)
    }

    /// Diet labels in document order
    #[must_use]
    pub fn diets(&self) -> Vec<String> {
        json::string_list(self.document.get("diets"))
    }

    /// Category labels in document order
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        json::string_list(self.document.get("categories"))
    }

    /// Free-form tags in document order
    #[must_use]
    pub fn tags(&self) -> Vec<String> {
        json::string_list(self.document.get("tags"))
    }

    /// Editorial status, `None` when the document has none
    #[must_use]
    pub fn status(&self) -> Option<RecipeStatus> {
        match self.document.get("status") {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(RecipeStatus::from_str_lossy(s)),
            _ => None,
        }
    }

    /// Community favorite counter
    ///
    /// Numeric `favoriteCount` or `favoritesCount` win; the legacy `likes` field is read
    /// leniently and missing counters are zero.
    #[must_use]
    pub fn favorites_count(&self) -> u32 {
        let Some((legacy, counters)) = fields::FAVORITE_COUNT.split_last() else {
            return 0;
        };
        counters
            .iter()
            .filter_map(|key| self.document.get(*key))
            .find(|value| value.is_number())
            .or_else(|| self.document.get(*legacy))
            .and_then(json::lenient_u32)
            .unwrap_or(0)
    }

    /// Whether the recipe is flagged as locally sourced
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.document.get("local").is_some_and(json::is_truthy)
    }

    /// Document as a JSON value
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.document.clone())
    }
}

fn ingredient_value(ingredient: &Ingredient) -> Value {
    serde_json::json!({
        "name": ingredient.name,
        "amount": ingredient.amount,
        "unit": ingredient.unit,
        "local": ingredient.local,
    })
}

impl Serialize for Recipe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.document.serialize(serializer)
    }
}
