// ABOUTME: Loads the user's current plan and reconciles its recipes in one bulk request
// ABOUTME: Backend failures degrade to an empty view instead of an error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use tracing::{info, warn};
use vitalflow_core::models::Plan;

use crate::client::{PlanBackend, RecipeBackend};
use crate::errors::AppResult;
use crate::plans::{collect_recipe_ids, reconcile, RecipeMap};

/// The current plan and the recipes its meals show
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanView {
    /// Most recent plan, if the user has one
    pub plan: Option<Plan>,
    /// Recipes referenced or embedded by the plan
    pub recipes: RecipeMap,
}

/// Load the most recent plan and build its recipe map
///
/// The backend lists plans newest first, so the first entry is taken as current. When
/// the bulk recipe request fails the map still holds every embedded snippet.
pub async fn load_current_plan<B>(backend: &B) -> PlanView
where
    B: PlanBackend + RecipeBackend + ?Sized,
{
    let plans = match backend.my_plans().await {
        Ok(plans) => plans,
        Err(e) => {
            warn!(error = %e, "Cannot load plans");
            return PlanView::default();
        }
    };
    let Some(plan) = plans.into_iter().next() else {
        info!("User has no plan yet");
        return PlanView::default();
    };

    let ids: Vec<String> = collect_recipe_ids(&plan).into_iter().collect();
    let bulk = if ids.is_empty() {
        Vec::new()
    } else {
        backend.bulk_recipes(&ids).await.unwrap_or_else(|e| {
            warn!(error = %e, ids = ids.len(), "Bulk recipe fetch failed, using embedded recipes only");
            Vec::new()
        })
    };

    let recipes = reconcile(&plan, &bulk);
    PlanView {
        plan: Some(plan),
        recipes,
    }
}

/// Ask the backend for a new plan, then reload the current one
///
/// # Errors
///
/// Returns the generation error so the caller can show the backend's message
pub async fn generate_and_reload<B>(backend: &B) -> AppResult<PlanView>
where
    B: PlanBackend + RecipeBackend + ?Sized,
{
    backend.generate_plan().await?;
    info!("Generated a new plan");
    Ok(load_current_plan(backend).await)
}
