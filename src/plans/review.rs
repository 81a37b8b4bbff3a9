// ABOUTME: Nutritionist plan review list with status and text filters
// ABOUTME: Picks the plan selected by default and builds the approval request body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use serde_json::{json, Value};
use vitalflow_core::models::{Plan, PlanStatus};

/// Filter over the review list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    /// Status to keep; `None` keeps every plan
    pub status: Option<PlanStatus>,
    /// Case-insensitive text matched against owner name, email, goal and diet
    pub search: String,
}

impl ReviewFilter {
    /// Build a filter from CLI-style input where `all` means no status filter
    #[must_use]
    pub fn new(status: Option<&str>, search: Option<&str>) -> Self {
        let status = status
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("all"))
            .map(|s| PlanStatus::from(s.to_owned()));
        Self {
            status,
            search: search.unwrap_or_default().to_owned(),
        }
    }

    /// Whether a plan passes the filter
    #[must_use]
    pub fn matches(&self, plan: &Plan) -> bool {
        if let Some(wanted) = &self.status {
            if plan.status.as_ref() != Some(wanted) {
                return false;
            }
        }

        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let owner = plan.owner.as_ref();
        [
            owner.and_then(|o| o.name()),
            owner.and_then(|o| o.email()),
            plan.meta.objetivo.as_deref(),
            plan.meta.dieta.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|text| text.to_lowercase().contains(&query))
    }

    /// Plans passing the filter, in backend order
    #[must_use]
    pub fn apply<'a>(&self, plans: &'a [Plan]) -> Vec<&'a Plan> {
        plans.iter().filter(|plan| self.matches(plan)).collect()
    }
}

/// First plan waiting for review, else the first plan
#[must_use]
pub fn default_selection(plans: &[Plan]) -> Option<&Plan> {
    plans
        .iter()
        .find(|plan| plan.is_pending_review())
        .or_else(|| plans.first())
}

/// Body of the approve request
#[must_use]
pub fn approval_body(notes: Option<&str>) -> Value {
    json!({ "notes": notes.map(str::trim).unwrap_or_default() })
}
