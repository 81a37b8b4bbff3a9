// ABOUTME: Plan endpoints: the user's plans, AI plan generation and the nutritionist review flow
// ABOUTME: Decodes plan lists leniently, skipping documents that are not plan objects
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use reqwest::Method;
use serde_json::{json, Value};
use tracing::warn;
use vitalflow_core::models::Plan;

use super::{envelope, segment, ApiClient};
use crate::constants::endpoints;
use crate::errors::AppResult;
use crate::plans::approval_body;

fn decode_plans(body: &Value) -> Vec<Plan> {
    envelope::list(body, envelope::PLANS)
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Plan>(value) {
            Ok(plan) => Some(plan),
            Err(e) => {
                warn!(error = %e, "Skipping malformed plan");
                None
            }
        })
        .collect()
}

impl ApiClient {
    /// Plans of the current user (`GET /api/plans/me`)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers with an error
    pub async fn my_plans(&self) -> AppResult<Vec<Plan>> {
        let body = self.get(endpoints::MY_PLANS, &[]).await?;
        Ok(decode_plans(&body))
    }

    /// Request a new AI generated plan (`POST /api/plans/generate`)
    ///
    /// # Errors
    ///
    /// Returns the backend's error, e.g. when the weekly generation limit is reached
    pub async fn generate_plan(&self) -> AppResult<Value> {
        self.send_json(Method::POST, endpoints::GENERATE_PLAN, &json!({}))
            .await
    }

    /// Plans visible to the reviewing nutritionist (`GET /plans`)
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or an error if the backend fails
    pub async fn review_plans(&self) -> AppResult<Vec<Plan>> {
        self.require_token()?;
        let body = self.get(endpoints::REVIEW_PLANS, &[]).await?;
        Ok(decode_plans(&body))
    }

    /// Approve a plan with optional reviewer notes (`PATCH /plans/{id}/approve`)
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or an error if the backend rejects the approval
    pub async fn approve_plan(&self, plan_id: &str, notes: Option<&str>) -> AppResult<Value> {
        self.require_token()?;
        let path = format!("{}/{}/approve", endpoints::REVIEW_PLANS, segment(plan_id));
        self.send_json(Method::PATCH, &path, &approval_body(notes))
            .await
    }
}
