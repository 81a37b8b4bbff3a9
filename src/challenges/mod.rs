// ABOUTME: Challenge dashboard logic: progress summary, joined flags and daily mark outcomes
// ABOUTME: Classifies mark failures into the 24 hour cooldown and genuine errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use vitalflow_core::models::Participation;

use crate::constants::messages;
use crate::errors::{user_message, AppResult};

/// Totals shown at the top of the challenges page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChallengeSummary {
    /// Challenges finished
    pub completed: usize,
    /// Challenges in progress
    pub active: usize,
    /// Sum of current streaks over active challenges
    pub streak_days: u32,
    /// Points earned over completed challenges
    pub points: u32,
}

impl ChallengeSummary {
    /// Aggregate the user's active and completed participations
    #[must_use]
    pub fn from_lists(active: &[Participation], completed: &[Participation]) -> Self {
        Self {
            completed: completed.len(),
            active: active.len(),
            streak_days: active.iter().map(|p| p.streak).fold(0, u32::saturating_add),
            points: completed
                .iter()
                .map(|p| p.total_points)
                .fold(0, u32::saturating_add),
        }
    }
}

/// Ids of the challenges the user currently takes part in
#[must_use]
pub fn joined_challenge_ids(active: &[Participation]) -> BTreeSet<String> {
    active
        .iter()
        .filter_map(Participation::challenge_id)
        .map(str::to_owned)
        .collect()
}

/// Result of marking a challenge day
#[derive(Debug, Clone, PartialEq)]
pub enum MarkOutcome {
    /// Day recorded; carries the backend response
    Marked(Value),
    /// The day was already marked in the last 24 hours
    Cooldown(String),
    /// Any other failure, with the message to show
    Failed(String),
}

impl MarkOutcome {
    /// Classify the result of a mark request
    #[must_use]
    pub fn from_result(result: AppResult<Value>) -> Self {
        match result {
            Ok(body) => Self::Marked(body),
            Err(error) => {
                let message = user_message(&error, messages::MARK_DAY_FAILED);
                if is_cooldown_message(&message) {
                    Self::Cooldown(message)
                } else {
                    Self::Failed(message)
                }
            }
        }
    }

    /// Whether the day was recorded
    #[must_use]
    pub const fn is_marked(&self) -> bool {
        matches!(self, Self::Marked(_))
    }
}

/// Backend wording for "already marked today"
#[must_use]
pub fn is_cooldown_message(message: &str) -> bool {
    let message = message.to_lowercase();
    message.contains("24 horas") || message.contains("24h")
}
