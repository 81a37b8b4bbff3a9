// ABOUTME: User profile and nutritionist application models
// ABOUTME: UserProfile with lenient tag lists and NutritionistRequest with its review status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::json::{self, de};

/// Gender as stored on the profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other
    Other,
    /// Not disclosed
    #[default]
    PreferNot,
}

/// Nutrition goal driving plan generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Lose weight
    PerderPeso,
    /// Keep the current weight
    #[default]
    Mantener,
    /// Gain muscle mass
    GanarMasa,
    /// Improve general health
    MejorarSalud,
}

impl Goal {
    /// Label shown to the user
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PerderPeso => "Perder peso",
            Self::Mantener => "Mantener",
            Self::GanarMasa => "Ganar masa muscular",
            Self::MejorarSalud => "Mejorar salud general",
        }
    }
}

/// Tag list sent either as an array or as one comma-separated string
fn tag_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let raw = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| json::is_truthy(item))
            .map(json::display_string)
            .collect(),
        Some(other) if json::is_truthy(&other) => json::display_string(&other)
            .split(',')
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    };
    let mut tags = Vec::new();
    for tag in raw {
        push_tag(&mut tags, &tag);
    }
    Ok(tags)
}

/// Birth date sent as a date or as a full timestamp
fn birth_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de::lenient_string_opt(deserializer)?.and_then(|raw| {
        raw.get(..10)
            .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
    }))
}

fn onboarding_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de::lenient_bool_opt(deserializer)?.unwrap_or(false))
}

/// Add a trimmed tag unless it is blank or already present ignoring case
///
/// Returns whether the tag was added.
pub fn push_tag(tags: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase()) {
        return false;
    }
    tags.push(tag.to_owned());
    true
}

/// Profile of the signed-in user (`/api/user/me`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User id
    #[serde(rename = "_id", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Account email
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Short biography
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Birth date
    #[serde(rename = "birthDate", default, deserialize_with = "birth_date", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Gender
    #[serde(default, deserialize_with = "de::lenient_default")]
    pub gender: Gender,
    /// Height in centimeters
    #[serde(rename = "heightCm", default, deserialize_with = "de::lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Current weight in kilograms
    #[serde(rename = "weightKg", default, deserialize_with = "de::lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Target weight in kilograms
    #[serde(rename = "targetWeightKg", default, deserialize_with = "de::lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub target_weight_kg: Option<f64>,
    /// Activity level label ("moderate")
    #[serde(rename = "activityLevel", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Nutrition goal
    #[serde(default, deserialize_with = "de::lenient_default")]
    pub goal: Goal,
    /// Diets followed
    #[serde(default, deserialize_with = "tag_list")]
    pub diets: Vec<String>,
    /// Allergies
    #[serde(default, deserialize_with = "tag_list")]
    pub allergies: Vec<String>,
    /// Disliked foods
    #[serde(default, deserialize_with = "tag_list")]
    pub dislikes: Vec<String>,
    /// Favourite ingredients
    #[serde(rename = "favouriteIngredients", default, deserialize_with = "tag_list")]
    pub favourite_ingredients: Vec<String>,
    /// Locale ("es-MX")
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Unit system ("metric")
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// Whether the onboarding questionnaire was completed
    #[serde(rename = "onboardingCompleted", default, deserialize_with = "onboarding_flag")]
    pub onboarding_completed: bool,
    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserProfile {
    /// First word of the display name, used in greetings
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.name.as_deref().and_then(|name| name.split_whitespace().next())
    }
}

/// Review status of a nutritionist application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Waiting for an administrator
    Pending,
    /// Accepted; the user is now a nutritionist
    Approved,
    /// Declined
    Rejected,
    /// The administrator asked for more information
    #[serde(alias = "needs-info")]
    NeedsInfo,
    /// Status this client does not know
    #[serde(other)]
    Unknown,
}

/// The user's application to become a nutritionist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionistRequest {
    /// Request id
    #[serde(rename = "_id", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Review status; absent is treated as pending
    #[serde(default = "pending", deserialize_with = "request_status")]
    pub status: RequestStatus,
    /// Notes left by the reviewing administrator
    #[serde(rename = "adminNotes", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const fn pending() -> RequestStatus {
    RequestStatus::Pending
}

fn request_status<'de, D>(deserializer: D) -> Result<RequestStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de::lenient_opt(deserializer)?.unwrap_or(RequestStatus::Pending))
}

impl NutritionistRequest {
    /// Freshly submitted request
    #[must_use]
    pub fn submitted() -> Self {
        Self {
            id: None,
            status: RequestStatus::Pending,
            admin_notes: None,
            extra: Map::new(),
        }
    }

    /// Whether the request still awaits review
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_tag_lists_accept_both_shapes() {
        let profile: UserProfile = serde_json::from_value(json!({
            "name": "Ana López",
            "diets": ["vegana", "", "Vegana", " keto "],
            "allergies": "nuez, , cacahuate",
            "favouriteIngredients": null,
            "heightCm": "165",
            "birthDate": "1994-03-02T00:00:00.000Z",
            "gender": "female",
            "goal": "otra_cosa",
            "onboardingCompleted": 1,
            "role": "user"
        }))
        .unwrap();

        assert_eq!(profile.diets, vec!["vegana", "keto"]);
        assert_eq!(profile.allergies, vec!["nuez", "cacahuate"]);
        assert!(profile.favourite_ingredients.is_empty());
        assert_eq!(profile.height_cm, Some(165.0));
        assert_eq!(profile.birth_date, NaiveDate::from_ymd_opt(1994, 3, 2));
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.goal, Goal::Mantener);
        assert_eq!(Goal::GanarMasa.label(), "Ganar masa muscular");
        assert!(profile.onboarding_completed);
        assert_eq!(profile.first_name(), Some("Ana"));
        assert_eq!(profile.extra.get("role"), Some(&json!("user")));
    }

    #[test]
    fn test_request_status_defaults_to_pending() {
        let request: NutritionistRequest = serde_json::from_value(json!({"_id": "n1"})).unwrap();
        assert!(request.is_pending());

        let request: NutritionistRequest =
            serde_json::from_value(json!({"status": "needs-info", "adminNotes": "Falta cédula"}))
                .unwrap();
        assert_eq!(request.status, RequestStatus::NeedsInfo);
        assert_eq!(request.admin_notes.as_deref(), Some("Falta cédula"));

        let request: NutritionistRequest =
            serde_json::from_value(json!({"status": "archived"})).unwrap();
        assert_eq!(request.status, RequestStatus::Unknown);
    }
}
