// ABOUTME: Plan commands for vitalflow-cli: show, generate, review and approve
// ABOUTME: Renders the reconciled plan as day sections of meal cards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use anyhow::{anyhow, Result};
use tracing::info;
use vitalflow::constants::messages;
use vitalflow::errors::user_message;
use vitalflow::plans::{default_selection, plan_days, MealFilter, ReviewFilter};
use vitalflow::services::{generate_and_reload, load_current_plan, PlanView};

use super::CliContext;
use crate::helpers::display;

/// Show the current plan
pub async fn show(ctx: &CliContext, meal: String, search: String) -> Result<()> {
    let view = load_current_plan(&ctx.client).await;
    render(ctx, &view, &MealFilter { meal, search }).await;
    Ok(())
}

/// Generate a new plan, then show it
pub async fn generate(ctx: &CliContext) -> Result<()> {
    info!("Requesting a new plan");
    let view = generate_and_reload(&ctx.client)
        .await
        .map_err(|e| anyhow!(user_message(&e, messages::GENERATE_PLAN_FAILED)))?;
    render(ctx, &view, &MealFilter::default()).await;
    Ok(())
}

async fn render(ctx: &CliContext, view: &PlanView, filter: &MealFilter) {
    let Some(plan) = view.plan.as_ref() else {
        println!("Aún no tienes un plan. Genera uno con `vitalflow-cli plan generate`.");
        return;
    };
    let favorites = ctx.favorites.load().await;
    display::print_plan_header(plan);
    for day in plan_days(plan, &view.recipes, &favorites, filter) {
        display::print_day(&day);
    }
}

/// List plans for review
pub async fn review(ctx: &CliContext, status: &str, search: Option<&str>) -> Result<()> {
    let plans = ctx.client.review_plans().await?;
    let filter = ReviewFilter::new(Some(status), search);
    let visible = filter.apply(&plans);
    let selected = default_selection(&plans).and_then(|plan| plan.id.clone());

    println!("{} de {} planes", visible.len(), plans.len());
    for plan in visible {
        let is_selected = selected.is_some() && plan.id == selected;
        display::print_review_row(plan, is_selected);
    }
    Ok(())
}

/// Approve a plan
pub async fn approve(ctx: &CliContext, plan_id: &str, notes: Option<&str>) -> Result<()> {
    ctx.client.approve_plan(plan_id, notes).await?;
    println!("Plan {plan_id} aprobado");
    Ok(())
}
