// ABOUTME: Profile editing, onboarding payloads and the nutritionist application form
// ABOUTME: Builds the JSON and multipart field sets the user endpoints expect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

//! # Profile
//!
//! The profile page and the onboarding questionnaire both `PATCH` the user document.
//! The profile page sends every editable field, with `null` for cleared numbers; the
//! questionnaire sends only what it asks plus `onboardingCompleted: true`. When an avatar
//! is attached the same fields travel as multipart text parts, arrays JSON-encoded.

use std::path::Path;

use serde_json::{json, Map, Value};
use vitalflow_core::json;
use vitalflow_core::models::{push_tag, UserProfile};

use crate::constants::messages;
use crate::errors::{AppError, AppResult};

/// Default attendance modality offered on a new application
pub const DEFAULT_MODALITY: &str = "Presencial";

fn tags(values: &[String]) -> Value {
    json!(values)
}

/// Body of a profile save from the profile page
#[must_use]
pub fn profile_payload(profile: &UserProfile) -> Value {
    json!({
        "name": profile.name.as_deref().unwrap_or_default(),
        "bio": profile.bio.as_deref().unwrap_or_default(),
        "birthDate": profile.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
        "gender": profile.gender,
        "heightCm": profile.height_cm,
        "weightKg": profile.weight_kg,
        "activityLevel": profile.activity_level.as_deref().unwrap_or("moderate"),
        "diets": tags(&profile.diets),
        "allergies": tags(&profile.allergies),
        "dislikes": tags(&profile.dislikes),
        "favouriteIngredients": tags(&profile.favourite_ingredients),
        "goal": profile.goal,
        "targetWeightKg": profile.target_weight_kg,
        "locale": profile.locale.as_deref().unwrap_or("es-MX"),
        "units": profile.units.as_deref().unwrap_or("metric"),
        "onboardingCompleted": profile.onboarding_completed,
    })
}

/// Body sent when the onboarding questionnaire is submitted
#[must_use]
pub fn onboarding_payload(profile: &UserProfile) -> Value {
    json!({
        "birthDate": profile.birth_date.map_or_else(String::new, |d| d.format("%Y-%m-%d").to_string()),
        "gender": profile.gender,
        "heightCm": profile.height_cm,
        "weightKg": profile.weight_kg,
        "activityLevel": profile.activity_level.as_deref().unwrap_or("moderate"),
        "goal": profile.goal,
        "targetWeightKg": profile.target_weight_kg,
        "diets": tags(&profile.diets),
        "allergies": tags(&profile.allergies),
        "dislikes": tags(&profile.dislikes),
        "favouriteIngredients": tags(&profile.favourite_ingredients),
        "onboardingCompleted": true,
    })
}

/// Multipart text fields for a JSON body: `null` is skipped, arrays are JSON-encoded
#[must_use]
pub fn multipart_fields(payload: &Value) -> Vec<(String, String)> {
    let Some(fields) = payload.as_object() else {
        return Vec::new();
    };
    fields
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            let text = match value {
                Value::Array(_) | Value::Object(_) => value.to_string(),
                other => json::display_string(other),
            };
            (key.clone(), text)
        })
        .collect()
}

/// File attached to a multipart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name reported to the backend
    pub file_name: String,
    /// MIME type
    pub mime: String,
    /// Contents
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Attachment from in-memory bytes, typed by the file extension
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_owned();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read a file from disk
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read
    pub async fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::storage(format!("Cannot read {}: {e}", path.display())).with_source(e)
        })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "archivo".to_owned(), |name| name.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }

    /// Whether the attachment carries no data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => "application/octet-stream",
    }
}

/// Application to become a nutritionist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutritionistApplication {
    /// Full legal name
    pub full_name: String,
    /// Contact phone
    pub phone: String,
    /// City of practice
    pub city: String,
    /// Free notes for the reviewer
    pub notes: String,
    /// Professional license number ("cédula profesional")
    pub professional_id: String,
    /// Degree title
    pub degree: String,
    /// University granting the degree
    pub university: String,
    /// Years of experience as typed
    pub years_experience: String,
    /// Specialties
    pub specialties: Vec<String>,
    /// Main workplace
    pub main_workplace: String,
    /// Attendance modality ("Presencial", "En línea")
    pub modalities: String,
    /// Website
    pub website: String,
    /// Instagram handle
    pub instagram: String,
}

impl Default for NutritionistApplication {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone: String::new(),
            city: String::new(),
            notes: String::new(),
            professional_id: String::new(),
            degree: String::new(),
            university: String::new(),
            years_experience: String::new(),
            specialties: Vec::new(),
            main_workplace: String::new(),
            modalities: DEFAULT_MODALITY.to_owned(),
            website: String::new(),
            instagram: String::new(),
        }
    }
}

impl NutritionistApplication {
    /// Add a specialty; returns false for blank or duplicate values
    pub fn add_specialty(&mut self, specialty: &str) -> bool {
        push_tag(&mut self.specialties, specialty)
    }

    /// Check the required contact and credential fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` with the message to show when a required field is blank
    pub fn validate(&self) -> AppResult<()> {
        let blank = |value: &str| value.trim().is_empty();
        if blank(&self.full_name) || blank(&self.phone) || blank(&self.city) {
            return Err(AppError::invalid_input(messages::REQUEST_CONTACT_REQUIRED));
        }
        if blank(&self.professional_id) || blank(&self.degree) || blank(&self.university) {
            return Err(AppError::invalid_input(messages::REQUEST_CREDENTIALS_REQUIRED));
        }
        Ok(())
    }

    /// Multipart text fields, specialties comma-joined
    #[must_use]
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let text = |value: &str| value.trim().to_owned();
        vec![
            ("fullName", text(&self.full_name)),
            ("phone", text(&self.phone)),
            ("city", text(&self.city)),
            ("notes", text(&self.notes)),
            ("professionalId", text(&self.professional_id)),
            ("degree", text(&self.degree)),
            ("university", text(&self.university)),
            ("yearsExperience", text(&self.years_experience)),
            ("specialties", self.specialties.join(",")),
            ("mainWorkplace", text(&self.main_workplace)),
            ("modalities", text(&self.modalities)),
            ("website", text(&self.website)),
            ("instagram", text(&self.instagram)),
        ]
    }
}

/// Merge the user returned by an onboarding save over the local profile
///
/// The questionnaire is complete once saved, whatever the backend echoes.
#[must_use]
pub fn merge_onboarded(local: &UserProfile, returned: Option<Map<String, Value>>) -> UserProfile {
    let mut merged = serde_json::to_value(local)
        .ok()
        .and_then(|value| value.as_object().cloned())
        .unwrap_or_default();
    merged.extend(returned.unwrap_or_default());
    let mut profile: UserProfile =
        serde_json::from_value(Value::Object(merged)).unwrap_or_else(|_| local.clone());
    profile.onboarding_completed = true;
    profile
}
