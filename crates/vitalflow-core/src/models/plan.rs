// ABOUTME: Weekly meal plan models as returned by the plans endpoints
// ABOUTME: Plan, PlanDay, MealSlot, RecipeRef, PlanOwner, PlanStatus and PlanSource
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::constants::fields;
use crate::json::{self, de};

/// Review status of a plan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanStatus {
    /// Waiting for a nutritionist (`pending_review`, older plans say `pending`)
    PendingReview,
    /// Approved by a nutritionist
    Approved,
    /// Rejected by a nutritionist
    Rejected,
    /// Approved and in use by the patient
    Active,
    /// Unknown status, kept verbatim
    Other(String),
}

impl PlanStatus {
    /// Wire value of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PendingReview => "pending_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Active => "active",
            Self::Other(s) => s,
        }
    }

    /// Label shown to users
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::PendingReview => "Pendiente de revisión",
            Self::Approved => "Aprobado",
            Self::Rejected => "Rechazado",
            Self::Active => "Activo con usuario",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PlanStatus {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "pending_review" | "pending" => Self::PendingReview,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            "active" => Self::Active,
            _ => Self::Other(s),
        }
    }
}

impl From<PlanStatus> for String {
    fn from(status: PlanStatus) -> Self {
        match status {
            PlanStatus::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

const NUTRIOLOGO_LABEL: &str = "Definido por tu nutriólogo";

/// Who produced a plan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlanSource {
    /// Generated by the AI planner (`ai`, Spanish clients send `ia`)
    Ai,
    /// Written by hand
    Human,
    /// Written by the user's nutritionist
    Nutriologo,
    /// Unknown source, kept verbatim
    Other(String),
}

impl PlanSource {
    /// Wire value of the source
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ai => "ai",
            Self::Human => "human",
            Self::Nutriologo => "nutriologo",
            Self::Other(s) => s,
        }
    }

    /// Label shown to users
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Ai => "Generado con IA de VitalFlow",
            Self::Human => "Manual",
            Self::Nutriologo => NUTRIOLOGO_LABEL,
            Self::Other(s) => s,
        }
    }
}

impl From<String> for PlanSource {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "ai" | "ia" => Self::Ai,
            "human" | "manual" => Self::Human,
            "nutriologo" | "nutriólogo" => Self::Nutriologo,
            _ => Self::Other(s),
        }
    }
}

impl From<PlanSource> for String {
    fn from(source: PlanSource) -> Self {
        match source {
            PlanSource::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

/// Owner of a plan: a bare user id, or the user document populated by the review endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanOwner {
    /// Unpopulated user id
    Id(String),
    /// Populated user profile
    Profile {
        /// User id
        #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        /// Display name
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        /// Contact email
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email: Option<String>,
    },
}

impl PlanOwner {
    /// User id, if known
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Profile { id, .. } => id.as_deref(),
        }
    }

    /// Display name, only available when populated
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Profile { name, .. } => name.as_deref(),
        }
    }

    /// Email, only available when populated
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Profile { email, .. } => email.as_deref(),
        }
    }
}

/// Plan metadata captured during onboarding
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanMeta {
    /// Patient goal ("bajar de peso")
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub objetivo: Option<String>,
    /// Diet type ("vegetariana")
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub dieta: Option<String>,
    /// Other metadata (allergies, recommended calories)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Reference from a meal slot to a recipe
///
/// Older plans store the id string, newer ones store the populated recipe document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecipeRef {
    /// Recipe id
    Id(String),
    /// Populated recipe document
    Document(Map<String, Value>),
}

impl RecipeRef {
    /// Resolve the referenced recipe id
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self {
            Self::Id(id) => Some(id.clone()),
            Self::Document(map) => fields::RECIPE_ID
                .iter()
                .filter_map(|key| map.get(*key))
                .find_map(json::id_string),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::Document(map)),
            other => json::id_string(&other).map(Self::Id),
        }
    }
}

fn recipe_ref_opt<'de, D>(deserializer: D) -> Result<Option<RecipeRef>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(RecipeRef::from_value))
}

fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(Value::Number(n)) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    })
}

/// One meal of a plan day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealSlot {
    /// Meal name ("Desayuno", "Colación")
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    /// Approximate energy of the meal
    #[serde(default, deserialize_with = "de::lenient_f64_opt", skip_serializing_if = "Option::is_none")]
    pub calorias_aprox: Option<f64>,
    /// Referenced recipe
    #[serde(
        rename = "recetaId",
        default,
        deserialize_with = "recipe_ref_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub receta_id: Option<RecipeRef>,
    /// Recipe title as written by the planner
    #[serde(
        rename = "recetaTitle",
        default,
        deserialize_with = "de::lenient_string_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub receta_title: Option<String>,
    /// Remaining fields, including any embedded recipe snippet
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MealSlot {
    /// Id of the referenced recipe, if any
    #[must_use]
    pub fn recipe_id(&self) -> Option<String> {
        self.receta_id.as_ref().and_then(RecipeRef::id)
    }

    /// Embedded recipe snippet under `receta` or one of its legacy aliases
    #[must_use]
    pub fn embedded(&self) -> Option<&Map<String, Value>> {
        json::first_truthy(&self.extra, fields::EMBEDDED_RECIPE).and_then(Value::as_object)
    }

    /// Recipe id, falling back to the embedded snippet's own `_id`/`id`
    #[must_use]
    pub fn effective_recipe_id(&self) -> Option<String> {
        self.recipe_id().or_else(|| {
            self.embedded().and_then(|snippet| {
                fields::RECIPE_ID
                    .iter()
                    .filter_map(|key| snippet.get(*key))
                    .find_map(json::id_string)
            })
        })
    }

    /// Title of the embedded snippet
    #[must_use]
    pub fn embedded_title(&self) -> Option<String> {
        self.embedded()
            .and_then(|snippet| json::non_empty_string(snippet.get("title")))
    }

    /// Meal name or planner title, used to label slots without a recipe
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.nombre
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.receta_title.as_deref())
    }
}

/// One day of a plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    /// Day label or number
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub dia: Option<String>,
    /// Meals of the day
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub comidas: Vec<MealSlot>,
}

/// A weekly meal plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan id
    #[serde(rename = "_id", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Owner of the plan
    #[serde(rename = "userId", default, deserialize_with = "de::lenient_opt", skip_serializing_if = "Option::is_none")]
    pub owner: Option<PlanOwner>,
    /// Review status
    #[serde(default, deserialize_with = "lenient_label", skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,
    /// Who produced the plan
    #[serde(default, deserialize_with = "lenient_label", skip_serializing_if = "Option::is_none")]
    pub source: Option<PlanSource>,
    /// Creation time
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_datetime", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Days of the plan
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub dias: Vec<PlanDay>,
    /// Recipes suggested alongside the plan, as ids or documents
    #[serde(rename = "suggestedRecipes", default, deserialize_with = "de::lenient_vec")]
    pub suggested_recipes: Vec<Value>,
    /// Name of the person the plan was made for
    #[serde(default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub nombre_persona: Option<String>,
    /// Notes left by the reviewing nutritionist
    #[serde(rename = "reviewerNotes", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub reviewer_notes: Option<String>,
    /// Onboarding metadata
    #[serde(default, deserialize_with = "de::lenient_default")]
    pub meta: PlanMeta,
    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(de::lenient_string_opt(deserializer)?.map(T::from))
}

impl Plan {
    /// Every meal slot paired with its day, in plan order
    pub fn meals(&self) -> impl Iterator<Item = (&PlanDay, &MealSlot)> {
        self.dias
            .iter()
            .flat_map(|day| day.comidas.iter().map(move |meal| (day, meal)))
    }

    /// Status label, `Borrador` when the plan has no status
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status.as_ref().map_or("Borrador", PlanStatus::label)
    }

    /// Source label, defaulting to the nutritionist wording
    #[must_use]
    pub fn source_label(&self) -> &str {
        self.source
            .as_ref()
            .map_or(NUTRIOLOGO_LABEL, PlanSource::label)
    }

    /// Whether the plan still waits for review
    #[must_use]
    pub fn is_pending_review(&self) -> bool {
        self.status == Some(PlanStatus::PendingReview)
    }
}
