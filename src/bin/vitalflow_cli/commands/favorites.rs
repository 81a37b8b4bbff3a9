// ABOUTME: Favorite commands for vitalflow-cli: list, toggle and hydrate
// ABOUTME: Favorites are shown from the current plan's recipe map plus a bulk fetch of the rest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use anyhow::Result;
use vitalflow::favorites::{
    favorite_id, favorite_recipes, hydrate_favorites, missing_favorite_ids,
};
use vitalflow::services::load_current_plan;

use super::CliContext;
use crate::helpers::display;

/// List favorite recipes
pub async fn list(ctx: &CliContext) -> Result<()> {
    let favorites = ctx.favorites.load().await;
    if favorites.is_empty() {
        println!("Aún no tienes recetas favoritas.");
        return Ok(());
    }
    let mut view = load_current_plan(&ctx.client).await;
    hydrate_favorites(&ctx.client, &favorites, &mut view.recipes).await;

    let recipes = favorite_recipes(&view.recipes, &favorites);
    for recipe in &recipes {
        display::print_recipe_row(recipe, true);
    }
    let unresolved = favorites.len().saturating_sub(recipes.len());
    if unresolved > 0 {
        println!("({unresolved} favoritas no se pudieron cargar)");
    }
    Ok(())
}

/// Toggle a favorite
pub async fn toggle(ctx: &CliContext, recipe_id: &str) -> Result<()> {
    let recipe_id = favorite_id(recipe_id)?;
    let favorites = ctx.favorites.toggle(recipe_id).await?;
    if favorites.contains(recipe_id) {
        println!("★ {recipe_id} agregada a favoritas ({} en total)", favorites.len());
    } else {
        println!("☆ {recipe_id} quitada de favoritas ({} en total)", favorites.len());
    }
    Ok(())
}

/// Report favorites missing from the plan and fetch them
pub async fn hydrate(ctx: &CliContext) -> Result<()> {
    let favorites = ctx.favorites.load().await;
    let mut view = load_current_plan(&ctx.client).await;
    let missing = missing_favorite_ids(&favorites, &view.recipes);
    let added = hydrate_favorites(&ctx.client, &favorites, &mut view.recipes).await;
    println!(
        "{} favoritas, {} fuera del plan, {added} cargadas",
        favorites.len(),
        missing.len()
    );
    Ok(())
}
