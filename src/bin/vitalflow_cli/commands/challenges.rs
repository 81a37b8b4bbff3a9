// ABOUTME: Challenge commands for vitalflow-cli: list, join, leave, mark and personal progress
// ABOUTME: Reports the 24 hour cooldown separately from other mark failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 VitalFlow

use std::collections::BTreeSet;

use anyhow::{anyhow, bail, Result};
use vitalflow::challenges::{joined_challenge_ids, ChallengeSummary, MarkOutcome};
use vitalflow::constants::messages;
use vitalflow::errors::user_message;

use super::CliContext;
use crate::helpers::display;

/// List challenges, flagging the ones already joined
pub async fn list(ctx: &CliContext, page: u32) -> Result<()> {
    let challenges = ctx.client.challenges(page).await?;
    let joined = if ctx.client.is_authenticated() {
        ctx.client
            .my_active_challenges()
            .await
            .map(|active| joined_challenge_ids(&active))
            .unwrap_or_default()
    } else {
        BTreeSet::new()
    };
    for challenge in &challenges {
        let is_joined = challenge.id.as_ref().is_some_and(|id| joined.contains(id));
        display::print_challenge(challenge, is_joined);
    }
    Ok(())
}

/// Join a challenge
pub async fn join(ctx: &CliContext, challenge_id: &str) -> Result<()> {
    ctx.client
        .join_challenge(challenge_id)
        .await
        .map_err(|e| anyhow!(user_message(&e, messages::JOIN_FAILED)))?;
    println!("Te uniste al reto {challenge_id}");
    Ok(())
}

/// Leave a challenge
pub async fn leave(ctx: &CliContext, challenge_id: &str) -> Result<()> {
    ctx.client.leave_challenge(challenge_id).await?;
    println!("Saliste del reto {challenge_id}");
    Ok(())
}

/// Mark today as done
pub async fn mark(ctx: &CliContext, challenge_id: &str) -> Result<()> {
    match MarkOutcome::from_result(ctx.client.mark_challenge_day(challenge_id).await) {
        MarkOutcome::Marked(_) => println!("¡Día registrado!"),
        MarkOutcome::Cooldown(message) => println!("⏳ {message}"),
        MarkOutcome::Failed(message) => bail!(message),
    }
    Ok(())
}

/// Show progress in active and completed challenges
pub async fn mine(ctx: &CliContext) -> Result<()> {
    let active = ctx.client.my_active_challenges().await?;
    let completed = ctx.client.my_completed_challenges().await?;
    display::print_challenge_summary(&ChallengeSummary::from_lists(&active, &completed));
    for participation in active.iter().chain(&completed) {
        display::print_participation(participation);
    }
    Ok(())
}
