// ABOUTME: Main library entry point for the VitalFlow nutrition client
// ABOUTME: Recipe normalization, meal plan reconciliation, favorites and the REST client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

#![deny(unsafe_code)]

//! # VitalFlow client
//!
//! Client-side data layer for the VitalFlow nutrition service. It talks to the
//! VitalFlow REST backend and turns its loosely shaped recipe and plan documents into
//! typed view models.
//!
//! ## Architecture
//!
//! - **Recipes**: normalizer for every recipe shape the backend has produced, catalog
//!   filters and recipe authoring
//! - **Plans**: reconciliation of bulk-fetched recipes with snippets embedded in a plan,
//!   meal cards and the nutritionist review list
//! - **Favorites**: ordered id set behind a pluggable store (file, memory, server)
//! - **Challenges**: community challenge progress
//! - **Profile**: profile and onboarding payloads, nutritionist application form
//! - **Client**: `reqwest` based REST client and the backend traits services use
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vitalflow::client::ApiClient;
//! use vitalflow::config::ClientConfig;
//! use vitalflow::services::load_current_plan;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ClientConfig::from_env()?;
//! let client = ApiClient::new(&config)?;
//! let view = load_current_plan(&client).await;
//! println!("{} recipes in the current plan", view.recipes.len());
//! # Ok(())
//! # }
//! ```

/// Community challenges
pub mod challenges;

/// REST client for the VitalFlow backend
pub mod client;

/// Environment-based configuration
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Unified error handling
pub mod errors;

/// Favorite recipes and their stores
pub mod favorites;

/// Structured logging setup
pub mod logging;

/// Meal plan reconciliation, views and review
pub mod plans;

/// Profile editing, onboarding and the nutritionist application
pub mod profile;

/// Recipe normalization, catalog and authoring
pub mod recipes;

/// Loaders composing the client with the domain logic
pub mod services;

pub use vitalflow_core::models;
