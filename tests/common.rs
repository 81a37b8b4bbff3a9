// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Quiet logging setup, JSON fixtures and a fake backend for service tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `vitalflow`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, Once};

use async_trait::async_trait;
use serde_json::{json, Value};
use vitalflow::client::{PlanBackend, RecipeBackend};
use vitalflow::errors::{AppError, AppResult};
use vitalflow::models::Plan;
use vitalflow::recipes::{CatalogFilters, CatalogResponse};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Parse a plan fixture
pub fn plan(value: Value) -> Plan {
    serde_json::from_value(value).expect("plan fixture")
}

/// Plan with one referenced recipe, one embedded override and one bare slot
pub fn sample_plan() -> Plan {
    plan(json!({
        "_id": "plan-1",
        "status": "approved",
        "source": "ai",
        "dias": [
            {
                "dia": "Lunes",
                "comidas": [
                    {"nombre": "Desayuno", "recetaId": "r-avena", "calorias_aprox": 350},
                    {"nombre": "Comida", "recetaId": "r-sopa", "receta": {"title": "Sopa de la casa"}},
                    {"nombre": "Colación", "recetaTitle": "Manzana con crema de cacahuate"}
                ]
            },
            {
                "dia": "Martes",
                "comidas": [
                    {"nombre": "Cena", "receta": {"title": "Tacos de frijol", "ingredientes": ["tortilla", "frijol"]}}
                ]
            }
        ],
        "suggestedRecipes": ["r-extra", {"recipeId": "r-sugerida"}]
    }))
}

/// Bulk documents for [`sample_plan`]
pub fn sample_bulk() -> Vec<Value> {
    vec![
        json!({"_id": "r-avena", "title": "Avena con fruta", "ingredients": ["avena", "plátano"], "instructions": "Cocer la avena\nAgregar fruta", "kcal": 320}),
        json!({"_id": "r-sopa", "title": "Sopa de lentejas", "description": "Caldosa", "ingredients": [{"name": "lenteja", "amount": 1, "unit": "taza"}], "steps": ["Hervir", "Servir"]}),
        json!({"_id": "r-extra", "title": "Ensalada verde"}),
    ]
}

/// In-memory backend with programmable failures
#[derive(Default)]
pub struct FakeBackend {
    pub plans: Vec<Plan>,
    pub recipes: Vec<Value>,
    pub fail_plans: bool,
    pub fail_bulk: bool,
    pub fail_generate: bool,
    pub bulk_calls: AtomicUsize,
    pub requested_ids: Mutex<Vec<Vec<String>>>,
}

impl FakeBackend {
    pub fn with(plans: Vec<Plan>, recipes: Vec<Value>) -> Self {
        Self {
            plans,
            recipes,
            ..Self::default()
        }
    }

    pub fn bulk_calls(&self) -> usize {
        self.bulk_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlanBackend for FakeBackend {
    async fn my_plans(&self) -> AppResult<Vec<Plan>> {
        if self.fail_plans {
            return Err(AppError::unavailable("plans down"));
        }
        Ok(self.plans.clone())
    }

    async fn generate_plan(&self) -> AppResult<Value> {
        if self.fail_generate {
            return Err(AppError::backend(429, "Solo puedes generar un plan por semana"));
        }
        Ok(json!({"ok": true}))
    }
}

#[async_trait]
impl RecipeBackend for FakeBackend {
    async fn bulk_recipes(&self, ids: &[String]) -> AppResult<Vec<Value>> {
        self.bulk_calls.fetch_add(1, Ordering::SeqCst);
        self.requested_ids.lock().unwrap().push(ids.to_vec());
        if self.fail_bulk {
            return Err(AppError::backend(500, "bulk failed"));
        }
        Ok(self
            .recipes
            .iter()
            .filter(|doc| {
                doc.get("_id")
                    .and_then(Value::as_str)
                    .is_some_and(|id| ids.iter().any(|wanted| wanted == id))
            })
            .cloned()
            .collect())
    }

    async fn catalog(&self, _filters: &CatalogFilters, page: u32) -> AppResult<CatalogResponse> {
        Ok(serde_json::from_value(json!({"data": self.recipes, "page": page})).unwrap())
    }
}
