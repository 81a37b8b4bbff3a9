// ABOUTME: Challenge endpoints: catalog CRUD, joining and leaving, daily marks and the user's lists
// ABOUTME: Participation lists come back under `active` and `completed` envelopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::warn;
use vitalflow_core::constants::defaults;
use vitalflow_core::models::{Challenge, Participation};

use super::{envelope, segment, ApiClient};
use crate::constants::endpoints;
use crate::errors::{AppError, AppResult};

fn decode_list<T: DeserializeOwned>(body: &Value, keys: &[&str]) -> Vec<T> {
    envelope::list(body, keys)
        .into_iter()
        .filter_map(|value| {
            serde_json::from_value(value)
                .map_err(|e| warn!(error = %e, "Skipping malformed challenge document"))
                .ok()
        })
        .collect()
}

fn decode_challenge(body: &Value) -> AppResult<Challenge> {
    let document = envelope::document(body, envelope::CHALLENGE)
        .or_else(|| body.is_object().then(|| body.clone()))
        .ok_or_else(|| AppError::not_found("Challenge"))?;
    Ok(serde_json::from_value(document)?)
}

fn challenge_path(id: &str, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("{}/{}/{action}", endpoints::CHALLENGES, segment(id)),
        None => format!("{}/{}", endpoints::CHALLENGES, segment(id)),
    }
}

impl ApiClient {
    /// One page of challenges (`GET /api/challenges?page&limit`)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers with an error
    pub async fn challenges(&self, page: u32) -> AppResult<Vec<Challenge>> {
        let query = [
            ("page", page.max(1).to_string()),
            ("limit", defaults::CHALLENGE_PAGE_SIZE.to_string()),
        ];
        let body = self.get(endpoints::CHALLENGES, &query).await?;
        Ok(decode_list(&body, &["data", "challenges"]))
    }

    /// One challenge (`GET /api/challenges/{id}`)
    ///
    /// # Errors
    ///
    /// Returns an error if the challenge does not exist
    pub async fn challenge(&self, id: &str) -> AppResult<Challenge> {
        let body = self.get(&challenge_path(id, None), &[]).await?;
        decode_challenge(&body).map_err(|e| e.with_resource_id(id))
    }

    /// Create a challenge (`POST /api/challenges`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank title, or the backend's error
    pub async fn create_challenge(&self, challenge: &Challenge) -> AppResult<Challenge> {
        if challenge.title.trim().is_empty() {
            return Err(AppError::invalid_input("Challenge title is required"));
        }
        let body = self
            .send_json(Method::POST, endpoints::CHALLENGES, &serde_json::to_value(challenge)?)
            .await?;
        decode_challenge(&body)
    }

    /// Replace a challenge (`PUT /api/challenges/{id}`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the challenge has no id, or the backend's error
    pub async fn update_challenge(&self, challenge: &Challenge) -> AppResult<Challenge> {
        let id = challenge
            .id
            .as_deref()
            .ok_or_else(|| AppError::invalid_input("Challenge id is required to update"))?;
        let body = self
            .send_json(Method::PUT, &challenge_path(id, None), &serde_json::to_value(challenge)?)
            .await?;
        decode_challenge(&body)
    }

    /// Delete a challenge (`DELETE /api/challenges/{id}`)
    ///
    /// # Errors
    ///
    /// Returns the backend's error
    pub async fn delete_challenge(&self, id: &str) -> AppResult<()> {
        self.delete(&challenge_path(id, None)).await?;
        Ok(())
    }

    /// Join a challenge (`POST /api/challenges/{id}/join`)
    ///
    /// # Errors
    ///
    /// Returns the backend's error, e.g. when already participating
    pub async fn join_challenge(&self, id: &str) -> AppResult<Value> {
        self.send_json(Method::POST, &challenge_path(id, Some("join")), &json!({}))
            .await
    }

    /// Leave a challenge (`POST /api/challenges/{id}/leave`)
    ///
    /// # Errors
    ///
    /// Returns the backend's error
    pub async fn leave_challenge(&self, id: &str) -> AppResult<Value> {
        self.send_json(Method::POST, &challenge_path(id, Some("leave")), &json!({}))
            .await
    }

    /// Mark today as done (`POST /api/challenges/{id}/mark`)
    ///
    /// # Errors
    ///
    /// Returns the backend's error; a day already marked comes back as a 24 hour cooldown message
    pub async fn mark_challenge_day(&self, id: &str) -> AppResult<Value> {
        self.send_json(Method::POST, &challenge_path(id, Some("mark")), &json!({}))
            .await
    }

    /// Challenges the user is taking part in (`GET /api/challenges/me/active`)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers with an error
    pub async fn my_active_challenges(&self) -> AppResult<Vec<Participation>> {
        let body = self.get(endpoints::MY_ACTIVE_CHALLENGES, &[]).await?;
        Ok(decode_list(&body, &["active", "data"]))
    }

    /// Challenges the user finished (`GET /api/challenges/me/completed`)
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or answers with an error
    pub async fn my_completed_challenges(&self) -> AppResult<Vec<Participation>> {
        let body = self.get(endpoints::MY_COMPLETED_CHALLENGES, &[]).await?;
        Ok(decode_list(&body, &["completed", "data"]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_paths() {
        assert_eq!(challenge_path("c1", None), "/api/challenges/c1");
        assert_eq!(challenge_path("c1", Some("mark")), "/api/challenges/c1/mark");
    }

    #[test]
    fn test_decode_challenge_accepts_bare_document() {
        let challenge = decode_challenge(&json!({"_id": "c1", "title": "Agua"}));
        assert_eq!(challenge.ok().and_then(|c| c.id), Some("c1".to_owned()));
    }
}
