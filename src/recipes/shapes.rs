// ABOUTME: Shape classification for the recipe fields that changed across backend versions
// ABOUTME: IngredientField alias tables, RawIngredient and InstructionSource enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Recipe field shapes
//!
//! Each enum names one legal shape of a legacy field. Classification happens once, and
//! the conversion to canonical form is an exhaustive match over the shapes.

use serde_json::{Map, Value};
use vitalflow_core::constants::fields;
use vitalflow_core::json;
use vitalflow_core::models::Ingredient;

/// Canonical ingredient field and the keys it was stored under over time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    /// Ingredient name
    Name,
    /// Quantity
    Amount,
    /// Unit of measure
    Unit,
    /// Locally sourced flag
    Local,
}

impl IngredientField {
    /// Keys holding this field, in lookup order
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Name => &["name", "nombre", "title"],
            Self::Amount => &["amount", "cantidad", "qty", "quantity", "amountText"],
            Self::Unit => &["unit", "unidad", "u"],
            Self::Local => &["local", "isLocal", "localIngredient"],
        }
    }

    /// First truthy value of this field in a record, rendered as trimmed text
    #[must_use]
    pub fn text(self, record: &Map<String, Value>) -> String {
        json::first_truthy(record, self.aliases())
            .map(|value| json::display_string(value).trim().to_owned())
            .unwrap_or_default()
    }

    /// Whether any alias of this field is truthy
    #[must_use]
    pub fn flag(self, record: &Map<String, Value>) -> bool {
        json::first_truthy(record, self.aliases()).is_some()
    }
}

/// One entry of a raw ingredient list
#[derive(Debug, Clone, Copy)]
pub enum RawIngredient<'a> {
    /// Plain text ("2 huevos")
    Text(&'a str),
    /// Structured record with aliased fields
    Record(&'a Map<String, Value>),
    /// Null, numbers, nested arrays
    Unusable,
}

impl<'a> RawIngredient<'a> {
    /// Classify a raw list entry
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(record) => Self::Record(record),
            _ => Self::Unusable,
        }
    }

    /// Canonical ingredient, `None` when nothing usable remains
    #[must_use]
    pub fn into_ingredient(self) -> Option<Ingredient> {
        let ingredient = match self {
            Self::Text(text) => Ingredient::named(text.trim()),
            Self::Record(record) => Ingredient {
                name: IngredientField::Name.text(record),
                amount: IngredientField::Amount.text(record),
                unit: IngredientField::Unit.text(record),
                local: IngredientField::Local.flag(record),
            },
            Self::Unusable => return None,
        };
        (!ingredient.is_empty()).then_some(ingredient)
    }
}

/// Shape of the value chosen as a recipe's instruction source
#[derive(Debug, Clone, Copy)]
pub enum InstructionSource<'a> {
    /// Free text with one step per line
    Text(&'a str),
    /// List of steps as strings or step objects
    List(&'a [Value]),
    /// Object wrapping a `steps` list
    Wrapped(&'a [Value]),
    /// Any other object
    Opaque(&'a Map<String, Value>),
    /// Numbers, booleans, null
    Scalar,
}

impl<'a> InstructionSource<'a> {
    /// Classify an instruction source value
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::List(items),
            Value::Object(map) => match map.get("steps") {
                Some(Value::Array(items)) => Self::Wrapped(items),
                _ => Self::Opaque(map),
            },
            _ => Self::Scalar,
        }
    }

    /// Canonical step list
    #[must_use]
    pub fn into_steps(self) -> Vec<String> {
        match self {
            Self::Text(text) => split_lines(text),
            Self::List(items) | Self::Wrapped(items) => items.iter().filter_map(step_text).collect(),
            Self::Opaque(map) => vec![Value::Object(map.clone()).to_string()],
            Self::Scalar => Vec::new(),
        }
    }
}

/// Split free text on `\n` or `\r\n`, trimming and dropping blank lines
fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Text of one step entry
fn step_text(item: &Value) -> Option<String> {
    match item {
        Value::String(text) => (!text.trim().is_empty()).then(|| text.clone()),
        Value::Object(step) => match json::first_truthy(step, fields::STEP_TEXT) {
            Some(value) => {
                let text = json::display_string(value);
                (!text.trim().is_empty()).then_some(text)
            }
            None => Some(item.to_string()),
        },
        other if json::is_truthy(other) => Some(other.to_string()),
        _ => None,
    }
}
