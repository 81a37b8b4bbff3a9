// ABOUTME: Recipe commands for vitalflow-cli: catalog browsing, detail, authoring and deletion
// ABOUTME: Builds RecipeDraft values from command-line flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use anyhow::Result;
use tracing::info;
use vitalflow::recipes::{CatalogFilters, ChipList, RecipeDraft};
use vitalflow::services::load_catalog_page;

use super::CliContext;
use crate::helpers::display;

/// Authoring fields collected from flags; `None` and empty lists leave the draft as is
#[derive(Default)]
pub struct DraftInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub kcal: Option<String>,
    pub duration_min: Option<String>,
    pub servings: Option<String>,
    pub diets: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl DraftInput {
    fn apply(self, draft: &mut RecipeDraft) -> Result<()> {
        for (target, value) in [
            (&mut draft.title, self.title),
            (&mut draft.description, self.description),
            (&mut draft.kcal, self.kcal),
            (&mut draft.duration_min, self.duration_min),
            (&mut draft.servings, self.servings),
        ] {
            if let Some(value) = value {
                *target = value;
            }
        }
        for (list, values) in [
            (ChipList::Diets, self.diets),
            (ChipList::Categories, self.categories),
            (ChipList::Tags, self.tags),
        ] {
            for value in values {
                draft.add_chip(list, &value);
            }
        }
        if !self.ingredients.is_empty() {
            draft.ingredients.clear();
            for spec in &self.ingredients {
                let mut parts = spec.splitn(3, ':');
                let name = parts.next().unwrap_or_default();
                let amount = parts.next().unwrap_or_default();
                let unit = parts.next().unwrap_or_default();
                draft.add_ingredient(name, amount, unit)?;
            }
        }
        if !self.steps.is_empty() {
            draft.steps = self.steps;
        }
        Ok(())
    }
}

/// Browse one catalog page
pub async fn list(ctx: &CliContext, filters: &CatalogFilters, page: u32) -> Result<()> {
    let favorites = ctx.favorites.load().await;
    let page = load_catalog_page(&ctx.client, filters, page, &favorites).await;
    display::print_catalog_page(&page, filters.active_count());
    Ok(())
}

/// Show one recipe
pub async fn show(ctx: &CliContext, recipe_id: &str) -> Result<()> {
    let recipe = ctx.client.recipe(recipe_id).await?;
    let favorites = ctx.favorites.load().await;
    display::print_recipe(&recipe, favorites.contains(recipe_id));
    Ok(())
}

/// List the current user's recipes
pub async fn mine(ctx: &CliContext) -> Result<()> {
    let recipes = ctx.client.my_recipes().await?;
    if recipes.is_empty() {
        println!("No has creado recetas todavía.");
    }
    for recipe in &recipes {
        display::print_recipe_row(recipe, false);
    }
    Ok(())
}

/// Create a recipe
pub async fn create(ctx: &CliContext, input: DraftInput) -> Result<()> {
    let mut draft = RecipeDraft::new();
    input.apply(&mut draft)?;
    let saved = ctx.client.save_recipe(&draft).await?;
    info!(recipe_id = saved.id().unwrap_or_default(), "Recipe created");
    display::print_recipe(&saved, false);
    Ok(())
}

/// Edit a recipe
pub async fn edit(ctx: &CliContext, recipe_id: &str, input: DraftInput) -> Result<()> {
    let current = ctx.client.recipe(recipe_id).await?;
    let mut draft = RecipeDraft::from_recipe(&current);
    if draft.id.is_none() {
        draft.id = Some(recipe_id.to_owned());
    }
    input.apply(&mut draft)?;
    let saved = ctx.client.save_recipe(&draft).await?;
    display::print_recipe(&saved, false);
    Ok(())
}

/// Delete a recipe
pub async fn delete(ctx: &CliContext, recipe_id: &str) -> Result<()> {
    ctx.client.delete_recipe(recipe_id).await?;
    println!("Receta {recipe_id} eliminada");
    Ok(())
}
