// ABOUTME: Community challenge models and a user's participation progress
// ABOUTME: Challenge, ChallengeRef and Participation with lenient defaults for older documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::defaults;
use crate::json::de;

const fn default_duration_days() -> u32 {
    defaults::CHALLENGE_DURATION_DAYS
}

const fn default_reward_points() -> u32 {
    defaults::CHALLENGE_REWARD_POINTS
}

const fn default_true() -> bool {
    true
}

fn duration_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de::lenient_u32_opt(deserializer)?
        .filter(|days| *days > 0)
        .unwrap_or(defaults::CHALLENGE_DURATION_DAYS))
}

fn reward_points<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de::lenient_u32_opt(deserializer)?
        .filter(|points| *points > 0)
        .unwrap_or(defaults::CHALLENGE_REWARD_POINTS))
}

fn active_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(de::lenient_bool_opt(deserializer)?.unwrap_or(true))
}

/// A community challenge ("7 días sin azúcar")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    /// Challenge id
    #[serde(rename = "_id", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title
    #[serde(default)]
    pub title: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Number of days to complete
    #[serde(rename = "durationDays", default = "default_duration_days", deserialize_with = "duration_days")]
    pub duration_days: u32,
    /// Points awarded on completion
    #[serde(rename = "rewardPoints", default = "default_reward_points", deserialize_with = "reward_points")]
    pub reward_points: u32,
    /// Whether users can still join; only an explicit `false` deactivates
    #[serde(rename = "isActive", default = "default_true", deserialize_with = "active_flag")]
    pub is_active: bool,
    /// Tags
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub tags: Vec<String>,
    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Challenge {
    /// New active challenge with default duration and reward
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            duration_days: defaults::CHALLENGE_DURATION_DAYS,
            reward_points: defaults::CHALLENGE_REWARD_POINTS,
            is_active: true,
            tags: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Add a tag if it is non-empty and not present yet
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_owned());
        }
    }
}

/// Challenge side of a participation: the id, or the populated challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChallengeRef {
    /// Unpopulated challenge id
    Id(String),
    /// Populated challenge document
    Challenge(Box<Challenge>),
}

impl ChallengeRef {
    /// Challenge id
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Challenge(challenge) => challenge.id.as_deref(),
        }
    }

    /// Populated challenge, if the backend sent it
    #[must_use]
    pub fn challenge(&self) -> Option<&Challenge> {
        match self {
            Self::Id(_) => None,
            Self::Challenge(challenge) => Some(challenge),
        }
    }
}

/// A user's progress in one challenge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    /// Participation id
    #[serde(rename = "_id", default, deserialize_with = "de::lenient_string_opt", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The challenge taken
    #[serde(rename = "challengeId", default, deserialize_with = "de::lenient_opt", skip_serializing_if = "Option::is_none")]
    pub challenge: Option<ChallengeRef>,
    /// Days marked as completed
    #[serde(rename = "completedDays", default, deserialize_with = "de::lenient_u32_or_zero")]
    pub completed_days: u32,
    /// Current streak in days
    #[serde(default, deserialize_with = "de::lenient_u32_or_zero")]
    pub streak: u32,
    /// Points earned
    #[serde(rename = "totalPoints", default, deserialize_with = "de::lenient_u32_or_zero")]
    pub total_points: u32,
    /// Completion time, set once the challenge is finished
    #[serde(rename = "finishedAt", default, deserialize_with = "de::lenient_opt", skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    /// Fields this client does not model
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Participation {
    /// Id of the challenge taken
    #[must_use]
    pub fn challenge_id(&self) -> Option<&str> {
        self.challenge.as_ref().and_then(ChallengeRef::id)
    }

    /// Title of the challenge, when populated
    #[must_use]
    pub fn challenge_title(&self) -> Option<&str> {
        self.challenge
            .as_ref()
            .and_then(ChallengeRef::challenge)
            .map(|c| c.title.as_str())
            .filter(|title| !title.is_empty())
    }

    /// Duration of the challenge, when populated
    #[must_use]
    pub fn duration_days(&self) -> Option<u32> {
        self.challenge
            .as_ref()
            .and_then(ChallengeRef::challenge)
            .map(|c| c.duration_days)
    }

    /// Completion percentage, rounded; an unknown duration counts as one day
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        let duration = self.duration_days().unwrap_or(1).max(1);
        (f64::from(self.completed_days) / f64::from(duration) * 100.0).round() as u32
    }
}
