// ABOUTME: Core data models for the VitalFlow client
// ABOUTME: Re-exports Recipe, Plan, MealSlot, Challenge, UserProfile and their supporting enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! # Data Models
//!
//! Documents exchanged with the VitalFlow backend. The backend is schema-less and has
//! shipped several field layouts over time, so the models accept missing or oddly typed
//! fields instead of failing the whole response.
//!
//! - `Recipe`: canonical recipe with the original document kept for passthrough fields
//! - `Plan`: weekly meal plan with days and meal slots
//! - `Challenge` / `Participation`: community challenges and a user's progress
//! - `UserProfile` / `NutritionistRequest`: the user's profile and nutritionist application

mod challenge;
mod plan;
mod recipe;
mod user;

pub use challenge::{Challenge, ChallengeRef, Participation};
pub use plan::{
    MealSlot, Plan, PlanDay, PlanMeta, PlanOwner, PlanSource, PlanStatus, RecipeRef,
};
pub use recipe::{Ingredient, Recipe, RecipeStatus};
pub use user::{push_tag, Gender, Goal, NutritionistRequest, RequestStatus, UserProfile};
