// ABOUTME: User profile, onboarding and nutritionist application endpoints
// ABOUTME: JSON and multipart PATCHes of the user document plus the application submit and lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{info, warn};
use vitalflow_core::json;
use vitalflow_core::models::{NutritionistRequest, UserProfile};

use super::{envelope, ApiClient};
use crate::constants::{endpoints, messages};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::profile::{
    merge_onboarded, multipart_fields, onboarding_payload, profile_payload, Attachment,
    NutritionistApplication,
};

fn user_document(body: &Value) -> Option<Map<String, Value>> {
    match envelope::document(body, envelope::USER) {
        Some(Value::Object(document)) => Some(document),
        _ => None,
    }
}

fn file_part(attachment: &Attachment) -> AppResult<Part> {
    Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.mime)
        .map_err(|e| {
            AppError::invalid_input(format!("Invalid type for {}", attachment.file_name))
                .with_source(e)
        })
}

impl ApiClient {
    /// Profile of the signed-in user (`GET /api/user/me`)
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `ResourceNotFound` when the body carries
    /// no user, or the backend's error
    pub async fn profile(&self) -> AppResult<UserProfile> {
        self.require_token()?;
        let body = self.get(endpoints::MY_PROFILE, &[]).await?;
        let document = user_document(&body).ok_or_else(|| AppError::not_found("User profile"))?;
        Ok(serde_json::from_value(Value::Object(document))?)
    }

    /// Save the profile page (`PATCH /api/user/me`)
    ///
    /// Returns the profile as stored, re-reading it when the response does not echo it.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the backend's error
    pub async fn update_profile(&self, profile: &UserProfile) -> AppResult<UserProfile> {
        self.require_token()?;
        let body = self
            .send_json(Method::PATCH, endpoints::MY_PROFILE, &profile_payload(profile))
            .await?;
        self.saved_profile(&body).await
    }

    /// Save the profile page with a new avatar (`PATCH /api/user/profile`, multipart)
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, `InvalidInput` for an unusable file type,
    /// or the backend's error
    pub async fn update_profile_with_avatar(
        &self,
        profile: &UserProfile,
        avatar: &Attachment,
    ) -> AppResult<UserProfile> {
        self.require_token()?;
        let mut form = Form::new();
        for (key, value) in multipart_fields(&profile_payload(profile)) {
            form = form.text(key, value);
        }
        form = form.part("avatar", file_part(avatar)?);
        let body = self
            .send_multipart(Method::PATCH, endpoints::PROFILE_WITH_AVATAR, form)
            .await?;
        self.saved_profile(&body).await
    }

    async fn saved_profile(&self, body: &Value) -> AppResult<UserProfile> {
        match user_document(body) {
            Some(document) => Ok(serde_json::from_value(Value::Object(document))?),
            None => self.profile().await,
        }
    }

    /// Submit the onboarding questionnaire (`PATCH /api/user/me`)
    ///
    /// The returned profile is the local one overlaid with whatever the backend echoed,
    /// and is always marked as onboarded.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the backend's error
    pub async fn complete_onboarding(&self, profile: &UserProfile) -> AppResult<UserProfile> {
        self.require_token()?;
        let body = self
            .send_json(Method::PATCH, endpoints::MY_PROFILE, &onboarding_payload(profile))
            .await?;
        info!("Onboarding completed");
        Ok(merge_onboarded(profile, user_document(&body)))
    }

    /// The user's nutritionist application, if any (`GET /api/nutriologo/request/me`)
    ///
    /// Only an `ok` body carrying a `request` document counts as an application.
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` without a token, or the backend's error
    pub async fn my_nutritionist_request(&self) -> AppResult<Option<NutritionistRequest>> {
        self.require_token()?;
        let body = self.get(endpoints::MY_NUTRITIONIST_REQUEST, &[]).await?;
        if !body.get("ok").is_some_and(json::is_truthy) {
            return Ok(None);
        }
        match body.get("request").filter(|request| request.is_object()) {
            Some(request) => Ok(Some(serde_json::from_value(request.clone())?)),
            None => Ok(None),
        }
    }

    /// Apply to become a nutritionist (`POST /api/nutriologo/request`, multipart)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when a required field or the certificate is missing,
    /// `AuthRequired` without a token, `ResourceAlreadyExists` while a previous
    /// application is pending, or the backend's error
    pub async fn submit_nutritionist_request(
        &self,
        application: &NutritionistApplication,
        certificate: &Attachment,
        cv: Option<&Attachment>,
    ) -> AppResult<NutritionistRequest> {
        application.validate()?;
        if certificate.is_empty() {
            return Err(AppError::invalid_input(messages::REQUEST_CERTIFICATE_REQUIRED));
        }
        self.require_token()?;

        match self.my_nutritionist_request().await {
            Ok(Some(existing)) if existing.is_pending() => {
                return Err(AppError::new(
                    ErrorCode::ResourceAlreadyExists,
                    messages::REQUEST_ALREADY_PENDING,
                ));
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Cannot check for a previous nutritionist request"),
        }

        let mut form = Form::new();
        for (key, value) in application.form_fields() {
            form = form.text(key, value);
        }
        form = form.part("certificate", file_part(certificate)?);
        if let Some(cv) = cv.filter(|cv| !cv.is_empty()) {
            form = form.part("cv", file_part(cv)?);
        }

        let body = self
            .send_multipart(Method::POST, endpoints::NUTRITIONIST_REQUEST, form)
            .await?;
        info!("Nutritionist request submitted");
        match envelope::document(&body, envelope::REQUEST) {
            Some(request) => Ok(serde_json::from_value(request)?),
            None => Ok(NutritionistRequest::submitted()),
        }
    }
}
