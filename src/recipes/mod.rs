// ABOUTME: Recipe handling: normalization of legacy shapes, catalog browsing and authoring
// ABOUTME: Re-exports the normalizer entry points, catalog filters and the recipe draft
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! # Recipes
//!
//! - **normalize**: turns any recipe-shaped JSON into a canonical [`Recipe`]
//! - **shapes**: the legal shapes of legacy ingredient and instruction fields
//! - **catalog**: catalog filters, exclusion of plan recipes, favorite tagging
//! - **draft**: nutritionist recipe authoring
//!
//! [`Recipe`]: vitalflow_core::models::Recipe

/// Catalog filters and pages
pub mod catalog;
/// Recipe authoring
pub mod draft;
/// Recipe normalizer
pub mod normalize;
/// Legacy field shapes
pub mod shapes;

pub use catalog::{
    build_page, excluded_recipe_ids, CatalogEntry, CatalogFilters, CatalogPage, CatalogResponse,
};
pub use draft::{ChipList, DraftIngredient, DraftQuantity, RecipeDraft};
pub use normalize::{normalize, normalize_document};
pub use shapes::{IngredientField, InstructionSource, RawIngredient};
