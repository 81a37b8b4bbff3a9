// ABOUTME: View models for the current meal plan: meal cards, day sections and filters
// ABOUTME: Resolves each meal slot to a recipe by id, by title, or by normalizing its snippet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::borrow::Cow;

use vitalflow_core::constants::display;
use vitalflow_core::models::{MealSlot, Plan, Recipe};

use super::reconcile::RecipeMap;
use crate::favorites::FavoriteSet;
use crate::recipes::normalize_document;

/// Find the recipe a meal slot shows
///
/// Lookup order: the slot's recipe id in the map; then, for slots embedding a snippet,
/// the first map entry whose title equals the snippet title (or the slot's
/// `recetaTitle`); then the snippet itself, normalized on the fly.
#[must_use]
pub fn resolve_meal_recipe<'a>(meal: &MealSlot, map: &'a RecipeMap) -> Option<Cow<'a, Recipe>> {
    if let Some(recipe) = meal.recipe_id().and_then(|id| map.get(&id)) {
        return Some(Cow::Borrowed(recipe));
    }

    let snippet = meal.embedded()?;
    let title = meal.embedded_title().or_else(|| meal.receta_title.clone());
    if let Some(title) = title {
        if let Some(recipe) = map
            .values()
            .find(|recipe| recipe.title().as_deref() == Some(title.as_str()))
        {
            return Some(Cow::Borrowed(recipe));
        }
    }
    Some(Cow::Owned(normalize_document(snippet.clone())))
}

/// A meal slot ready to display
#[derive(Debug, Clone, PartialEq)]
pub struct MealCard<'a> {
    /// Recipe id used for favorites
    pub recipe_id: Option<String>,
    /// Title shown on the card
    pub title: String,
    /// Description shown on the card
    pub description: String,
    /// Energy of the meal
    pub kcal: Option<f64>,
    /// Meal name ("Desayuno")
    pub meal_name: Option<String>,
    /// Whether the recipe is a favorite
    pub is_favorite: bool,
    /// Full recipe for the detail view
    pub recipe: Option<Cow<'a, Recipe>>,
}

impl<'a> MealCard<'a> {
    /// Build the card for one meal slot
    #[must_use]
    pub fn build(meal: &MealSlot, map: &'a RecipeMap, favorites: &FavoriteSet) -> Self {
        let recipe = resolve_meal_recipe(meal, map);
        let recipe_id = recipe
            .as_deref()
            .and_then(Recipe::id)
            .or_else(|| meal.recipe_id());

        let title = meal
            .receta_title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| recipe.as_deref().and_then(Recipe::title))
            .unwrap_or_else(|| display::DEFAULT_MEAL_TITLE.to_owned());

        let description = recipe
            .as_deref()
            .and_then(Recipe::description)
            .unwrap_or_else(|| display::DEFAULT_MEAL_DESCRIPTION.to_owned());

        let kcal = meal
            .calorias_aprox
            .or_else(|| recipe.as_deref().and_then(Recipe::kcal));

        let is_favorite = recipe_id.as_ref().is_some_and(|id| favorites.contains(id));

        Self {
            recipe_id,
            title,
            description,
            kcal,
            meal_name: meal.nombre.clone(),
            is_favorite,
            recipe,
        }
    }
}

/// Meal-name and title filter for the plan view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealFilter {
    /// `all` or a meal name fragment ("desayuno")
    pub meal: String,
    /// Title search text
    pub search: String,
}

impl Default for MealFilter {
    fn default() -> Self {
        Self {
            meal: "all".to_owned(),
            search: String::new(),
        }
    }
}

impl MealFilter {
    /// Whether a meal slot passes both filters
    #[must_use]
    pub fn matches(&self, meal: &MealSlot) -> bool {
        let wanted = self.meal.trim();
        let passes_meal = wanted.is_empty()
            || wanted.eq_ignore_ascii_case("all")
            || meal
                .nombre
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(&wanted.to_lowercase());
        if !passes_meal {
            return false;
        }

        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        meal.receta_title
            .clone()
            .filter(|t| !t.is_empty())
            .or_else(|| meal.embedded_title())
            .unwrap_or_default()
            .to_lowercase()
            .contains(&query)
    }
}

/// One day of the plan with its visible meal cards
#[derive(Debug, Clone, PartialEq)]
pub struct DayView<'a> {
    /// Day label
    pub dia: String,
    /// Cards that pass the filter
    pub meals: Vec<MealCard<'a>>,
}

/// Build the day sections of a plan
#[must_use]
pub fn plan_days<'a>(
    plan: &Plan,
    map: &'a RecipeMap,
    favorites: &FavoriteSet,
    filter: &MealFilter,
) -> Vec<DayView<'a>> {
    plan.dias
        .iter()
        .map(|day| DayView {
            dia: day.dia.clone().unwrap_or_default(),
            meals: day
                .comidas
                .iter()
                .filter(|meal| filter.matches(meal))
                .map(|meal| MealCard::build(meal, map, favorites))
                .collect(),
        })
        .collect()
}
