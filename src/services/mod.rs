// ABOUTME: Service layer composing the API client with the pure plan, recipe and favorites logic
// ABOUTME: Loaders degrade to empty results on backend failures and log a warning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! Service layer
//!
//! Services depend on the backend traits from [`crate::client`], never on the concrete
//! HTTP client, so the same flows run against fakes in tests.

/// Catalog page loading with plan exclusion and favorite tagging
pub mod catalog;

/// Current plan loading, reconciliation and plan generation
pub mod plan_loader;

pub use catalog::load_catalog_page;
pub use plan_loader::{generate_and_reload, load_current_plan, PlanView};
