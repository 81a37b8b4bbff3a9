// ABOUTME: HTTP client for the VitalFlow REST backend with bearer auth and error mapping
// ABOUTME: Shared request plumbing, response envelope helpers and the backend traits used by services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! # VitalFlow API client
//!
//! [`ApiClient`] wraps a `reqwest::Client` configured from [`ClientConfig`]. Endpoint
//! groups live in submodules as `impl ApiClient` blocks. Non-success responses become
//! an [`AppError`] carrying the backend's `msg` text.
//!
//! Services depend on the [`PlanBackend`] and [`RecipeBackend`] traits rather than on
//! the concrete client so they can run against fakes.

/// Challenge endpoints
pub mod challenges;
/// Server-side favorites endpoints
pub mod favorites;
/// Plan endpoints
pub mod plans;
/// Profile, onboarding and nutritionist application endpoints
pub mod profile;
/// Recipe endpoints
pub mod recipes;

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder};
use serde_json::Value;
use tracing::{debug, warn};
use vitalflow_core::models::Plan;

use crate::config::ClientConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::recipes::{CatalogFilters, CatalogResponse};

/// Keys under which the backend wraps a single document or a list
pub(crate) mod envelope {
    use serde_json::Value;

    /// Recipe and challenge lists
    pub const LIST: &[&str] = &["data", "recipes"];
    /// Plan lists
    pub const PLANS: &[&str] = &["data", "plans"];
    /// Single recipe
    pub const RECIPE: &[&str] = &["data", "recipe"];
    /// Single challenge
    pub const CHALLENGE: &[&str] = &["data", "challenge"];
    /// User profile
    pub const USER: &[&str] = &["user", "data", "updatedUser"];
    /// Nutritionist application
    pub const REQUEST: &[&str] = &["request", "data"];

    /// First array under `keys`; a bare array body is accepted as-is
    pub fn list(body: &Value, keys: &[&str]) -> Vec<Value> {
        if let Value::Array(items) = body {
            return items.clone();
        }
        keys.iter()
            .find_map(|key| body.get(*key).and_then(Value::as_array))
            .cloned()
            .unwrap_or_default()
    }

    /// First object under `keys`
    pub fn document(body: &Value, keys: &[&str]) -> Option<Value> {
        keys.iter()
            .find_map(|key| body.get(*key).filter(|v| v.is_object()))
            .cloned()
    }

    /// Error text from a backend body (`msg`, `message` or `error`)
    pub fn message(body: &Value) -> Option<String> {
        ["msg", "message", "error"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .filter(|msg| !msg.is_empty())
            .map(str::to_owned)
    }
}

/// Client for the VitalFlow backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http.timeout())
            .connect_timeout(config.http.connect_timeout())
            .user_agent(format!(
                "{}/{}",
                service_names::VITALFLOW_CLIENT,
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| AppError::config(format!("Cannot build HTTP client: {e}")).with_source(e))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_owned(),
            token: config.token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    /// Backend base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry a bearer token
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Fail fast on endpoints that only answer authenticated users
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when no bearer token is configured
    pub fn require_token(&self) -> AppResult<()> {
        if self.token.is_none() {
            return Err(AppError::auth_required());
        }
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the JSON body
    ///
    /// An empty body decodes to `null` and a non-JSON body to a JSON string.
    async fn execute(&self, method: Method, path: &str, builder: RequestBuilder) -> AppResult<Value> {
        debug!(%method, path, "Calling backend");
        let response = builder.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "Backend unreachable");
            AppError::unavailable(format!("{method} {path} failed: {e}")).with_source(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::unavailable(format!("Cannot read response of {path}: {e}")).with_source(e)
        })?;
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&text) {
                Ok(body) => body,
                Err(_) => Value::String(text),
            }
        };

        if !status.is_success() {
            let message = envelope::message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_owned()
            });
            warn!(%method, path, status = status.as_u16(), %message, "Backend returned an error");
            return Err(AppError::backend(status.as_u16(), message).with_details(body));
        }
        Ok(body)
    }

    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> AppResult<Value> {
        let builder = self.request(Method::GET, path).query(query);
        self.execute(Method::GET, path, builder).await
    }

    pub(crate) async fn send_json(&self, method: Method, path: &str, body: &Value) -> AppResult<Value> {
        let builder = self.request(method.clone(), path).json(body);
        self.execute(method, path, builder).await
    }

    pub(crate) async fn send_multipart(&self, method: Method, path: &str, form: Form) -> AppResult<Value> {
        let builder = self.request(method.clone(), path).multipart(form);
        self.execute(method, path, builder).await
    }

    pub(crate) async fn delete(&self, path: &str) -> AppResult<Value> {
        let builder = self.request(Method::DELETE, path);
        self.execute(Method::DELETE, path, builder).await
    }
}

/// Reject 2xx bodies that carry `ok: false`
pub(crate) fn require_ok(body: Value) -> AppResult<Value> {
    if body.get("ok").and_then(Value::as_bool) == Some(false) {
        let message = envelope::message(&body).unwrap_or_else(|| "Request was not accepted".to_owned());
        return Err(AppError::new(ErrorCode::ExternalServiceError, message).with_details(body));
    }
    Ok(body)
}

/// Encode an id for use as a path segment
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id.trim()).into_owned()
}

/// Plan operations used by the plan loader
#[async_trait]
pub trait PlanBackend: Send + Sync {
    /// Plans of the current user, newest first as returned by the backend
    async fn my_plans(&self) -> AppResult<Vec<Plan>>;

    /// Ask the backend to generate a new plan
    async fn generate_plan(&self) -> AppResult<Value>;
}

/// Recipe operations used by the reconciler, catalog and favorites hydration
#[async_trait]
pub trait RecipeBackend: Send + Sync {
    /// Raw recipe documents for `ids` in one request
    async fn bulk_recipes(&self, ids: &[String]) -> AppResult<Vec<Value>>;

    /// One page of the recipe catalog
    async fn catalog(&self, filters: &CatalogFilters, page: u32) -> AppResult<CatalogResponse>;
}

#[async_trait]
impl PlanBackend for ApiClient {
    async fn my_plans(&self) -> AppResult<Vec<Plan>> {
        Self::my_plans(self).await
    }

    async fn generate_plan(&self) -> AppResult<Value> {
        Self::generate_plan(self).await
    }
}

#[async_trait]
impl RecipeBackend for ApiClient {
    async fn bulk_recipes(&self, ids: &[String]) -> AppResult<Vec<Value>> {
        Self::bulk_recipes(self, ids).await
    }

    async fn catalog(&self, filters: &CatalogFilters, page: u32) -> AppResult<CatalogResponse> {
        Self::catalog(self, filters, page).await
    }
}
